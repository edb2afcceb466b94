//! Transcript scroll state.
//!
//! The offset counts lines up from the newest line, so an offset of zero
//! always shows the latest message no matter how many lines it has.

/// Lines scrolled per mouse wheel tick.
pub const SCROLL_SPEED: usize = 3;

/// Scroll position of the transcript.
#[derive(Debug, Clone, Default)]
pub struct TranscriptState {
    /// Lines scrolled back from the bottom.
    offset: usize,
    /// Largest useful offset, updated on every render.
    max_offset: usize,
    /// Viewport height seen on the last render.
    viewport: usize,
}

impl TranscriptState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines scrolled back from the bottom.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether the newest line is in view.
    pub fn is_following(&self) -> bool {
        self.offset == 0
    }

    /// Scroll towards older messages.
    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = (self.offset + lines).min(self.max_offset);
    }

    /// Scroll towards newer messages.
    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page_size());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page_size());
    }

    /// Reveal the most recent message.
    pub fn jump_to_latest(&mut self) {
        self.offset = 0;
    }

    /// Record the content and viewport sizes from a render.
    ///
    /// Clamps the offset if the content shrank or the viewport grew.
    pub fn update_bounds(&mut self, total_lines: usize, viewport: usize) {
        self.viewport = viewport;
        self.max_offset = total_lines.saturating_sub(viewport);
        self.offset = self.offset.min(self.max_offset);
    }

    /// Index of the first visible line for `total_lines` of content.
    pub fn first_visible(&self, total_lines: usize, viewport: usize) -> usize {
        total_lines
            .saturating_sub(viewport)
            .saturating_sub(self.offset)
    }

    fn page_size(&self) -> usize {
        self.viewport.saturating_sub(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_following() {
        let state = TranscriptState::new();
        assert!(state.is_following());
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_scroll_up_clamps_to_top() {
        let mut state = TranscriptState::new();
        state.update_bounds(50, 10);

        state.scroll_up(SCROLL_SPEED);
        assert_eq!(state.offset(), 3);
        assert!(!state.is_following());

        state.scroll_up(100);
        assert_eq!(state.offset(), 40);
        assert_eq!(state.first_visible(50, 10), 0);
    }

    #[test]
    fn test_scroll_down_returns_to_following() {
        let mut state = TranscriptState::new();
        state.update_bounds(50, 10);
        state.scroll_up(5);

        state.scroll_down(2);
        assert_eq!(state.offset(), 3);
        state.scroll_down(10);
        assert!(state.is_following());
    }

    #[test]
    fn test_short_content_cannot_scroll() {
        let mut state = TranscriptState::new();
        state.update_bounds(4, 10);
        state.scroll_up(3);
        assert!(state.is_following());
        assert_eq!(state.first_visible(4, 10), 0);
    }

    #[test]
    fn test_paging_uses_viewport() {
        let mut state = TranscriptState::new();
        state.update_bounds(100, 11);

        state.page_up();
        assert_eq!(state.offset(), 10);
        state.page_up();
        assert_eq!(state.offset(), 20);
        state.page_down();
        assert_eq!(state.offset(), 10);
    }

    #[test]
    fn test_jump_to_latest() {
        let mut state = TranscriptState::new();
        state.update_bounds(100, 10);
        state.scroll_up(30);

        state.jump_to_latest();
        assert!(state.is_following());
        assert_eq!(state.first_visible(100, 10), 90);
    }

    #[test]
    fn test_bounds_update_clamps_offset() {
        let mut state = TranscriptState::new();
        state.update_bounds(100, 10);
        state.scroll_up(80);

        state.update_bounds(30, 10);
        assert_eq!(state.offset(), 20);
    }
}
