//! Text width and wrapping utilities.
//!
//! Message text is shown verbatim: newlines start new lines and interior
//! whitespace is kept. Only lines wider than the available width are
//! wrapped.

use unicode_width::UnicodeWidthStr;

/// Number of spaces a tab expands to.
const TAB_WIDTH: usize = 4;

/// Get the visual width of a string in terminal cells.
///
/// Accounts for wide characters (CJK, emoji) that take 2 cells.
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Split `text` on newlines and wrap each line to `width` cells.
///
/// Lines that already fit are returned untouched. Empty lines are kept.
pub fn wrap_preserving(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for raw in text.split('\n') {
        let line = raw.trim_end_matches('\r').replace('\t', &" ".repeat(TAB_WIDTH));
        if visual_width(&line) <= width {
            out.push(line);
            continue;
        }
        let options = textwrap::Options::new(width).break_words(true);
        out.extend(
            textwrap::wrap(&line, options)
                .into_iter()
                .map(std::borrow::Cow::into_owned),
        );
    }

    out
}
