//! Conversation state: the message list, the id counter and the draft.
//!
//! The list is append-only. Ids come from a counter rather than the list
//! length, so they keep increasing even when answers arrive out of order.

use crate::message::{Message, MessageId, Sender};
use crate::service::AskError;
use tracing::warn;

/// Apology shown when the service cannot be reached or answers badly.
pub const DEFAULT_FALLBACK_MESSAGE: &str =
    "Desculpe, não consigo me conectar ao servidor. Tente novamente mais tarde.";

/// Ticket for a question that has been sent but not answered yet.
///
/// Not `Clone`: [`Conversation::settle`] consumes it, so every request
/// produces at most one assistant message.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingRequest {
    question: String,
    asked_by: MessageId,
}

impl PendingRequest {
    /// Text sent to the service.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Id of the user message this request answers.
    pub fn asked_by(&self) -> MessageId {
        self.asked_by
    }
}

/// In-memory conversation for one session.
#[derive(Debug)]
pub struct Conversation {
    messages: Vec<Message>,
    next_id: u64,
    draft: String,
    in_flight: usize,
    fallback_message: String,
}

impl Conversation {
    /// Create an empty conversation.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
            draft: String::new(),
            in_flight: 0,
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
        }
    }

    /// Seed the conversation with an assistant greeting.
    ///
    /// An empty greeting adds nothing.
    #[must_use]
    pub fn with_greeting(mut self, greeting: &str) -> Self {
        if !greeting.is_empty() {
            self.append(Sender::Assistant, greeting.to_string());
        }
        self
    }

    /// Replace the apology used for failed requests.
    #[must_use]
    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Most recently appended message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft text.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Number of requests issued and not yet settled.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn fallback_message(&self) -> &str {
        &self.fallback_message
    }

    /// Submit the current draft.
    ///
    /// Returns `None` and leaves everything untouched when the draft is
    /// empty or whitespace only. Otherwise appends the user message,
    /// clears the draft and returns the request to send.
    pub fn submit(&mut self) -> Option<PendingRequest> {
        if self.draft.trim().is_empty() {
            return None;
        }

        let question = std::mem::take(&mut self.draft);
        let asked_by = self.append(Sender::User, question.clone()).id();
        self.in_flight += 1;

        Some(PendingRequest { question, asked_by })
    }

    /// Record the outcome of a request as exactly one assistant message.
    pub fn settle(
        &mut self,
        request: PendingRequest,
        outcome: Result<String, AskError>,
    ) -> &Message {
        self.in_flight = self.in_flight.saturating_sub(1);

        let text = match outcome {
            Ok(answer) => answer,
            Err(e) => {
                warn!(asked_by = %request.asked_by, error = %e, "Request failed, showing fallback");
                self.fallback_message.clone()
            }
        };

        self.append(Sender::Assistant, text)
    }

    fn append(&mut self, sender: Sender, text: String) -> &Message {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        let index = self.messages.len();
        self.messages.push(Message::now(id, sender, text));
        &self.messages[index]
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(conv: &Conversation) -> Vec<(Sender, &str)> {
        conv.messages()
            .iter()
            .map(|m| (m.sender(), m.text()))
            .collect()
    }

    #[test]
    fn test_submit_empty_or_whitespace_is_noop() {
        let mut conv = Conversation::new();
        assert!(conv.submit().is_none());

        conv.set_draft("   ");
        assert!(conv.submit().is_none());
        assert!(conv.is_empty());
        assert_eq!(conv.draft(), "   ");
        assert_eq!(conv.in_flight(), 0);

        conv.set_draft("\n\t");
        assert!(conv.submit().is_none());
        assert!(conv.is_empty());
    }

    #[test]
    fn test_submit_appends_user_message_and_clears_draft() {
        let mut conv = Conversation::new();
        conv.set_draft("Oi");

        let request = conv.submit().unwrap();
        assert_eq!(request.question(), "Oi");
        assert_eq!(conv.draft(), "");
        assert_eq!(conv.in_flight(), 1);
        assert_eq!(texts(&conv), vec![(Sender::User, "Oi")]);
        assert_eq!(request.asked_by(), conv.last().unwrap().id());
    }

    #[test]
    fn test_question_is_not_trimmed() {
        let mut conv = Conversation::new();
        conv.set_draft("  quando abre a matrícula?  ");
        let request = conv.submit().unwrap();
        assert_eq!(request.question(), "  quando abre a matrícula?  ");
    }

    #[test]
    fn test_settle_success_appends_answer() {
        let mut conv = Conversation::new();
        conv.set_draft("Oi");
        let request = conv.submit().unwrap();

        let msg = conv.settle(request, Ok("Bom dia".into()));
        assert_eq!(msg.text(), "Bom dia");
        assert_eq!(conv.in_flight(), 0);
        assert_eq!(
            texts(&conv),
            vec![(Sender::User, "Oi"), (Sender::Assistant, "Bom dia")]
        );
    }

    #[test]
    fn test_settle_failure_appends_fallback() {
        let mut conv = Conversation::new();
        conv.set_draft("teste");
        let request = conv.submit().unwrap();

        conv.settle(request, Err(AskError::Status(502)));
        assert_eq!(
            texts(&conv),
            vec![
                (Sender::User, "teste"),
                (Sender::Assistant, DEFAULT_FALLBACK_MESSAGE)
            ]
        );
    }

    #[test]
    fn test_custom_fallback_message() {
        let mut conv = Conversation::new().with_fallback_message("Servidor fora do ar.");
        conv.set_draft("teste");
        let request = conv.submit().unwrap();
        let msg = conv.settle(request, Err(AskError::Other("boom".into())));
        assert_eq!(msg.text(), "Servidor fora do ar.");
    }

    #[test]
    fn test_ids_strictly_increase_with_out_of_order_settles() {
        let mut conv = Conversation::new();

        conv.set_draft("primeira");
        let first = conv.submit().unwrap();
        conv.set_draft("segunda");
        let second = conv.submit().unwrap();
        assert_eq!(conv.in_flight(), 2);

        // Second answer arrives first.
        conv.settle(second, Ok("resposta 2".into()));
        conv.settle(first, Err(AskError::Status(500)));

        let ids: Vec<u64> = conv.messages().iter().map(|m| m.id().0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(conv.messages()[2].text(), "resposta 2");
        assert_eq!(conv.messages()[3].text(), DEFAULT_FALLBACK_MESSAGE);
        assert_eq!(conv.in_flight(), 0);
    }

    #[test]
    fn test_greeting_takes_first_id() {
        let mut conv = Conversation::new().with_greeting("Olá! Meu nome é Ada.");
        assert_eq!(conv.len(), 1);
        assert_eq!(conv.messages()[0].id(), MessageId(1));
        assert_eq!(conv.messages()[0].sender(), Sender::Assistant);

        conv.set_draft("Oi");
        conv.submit().unwrap();
        assert_eq!(conv.last().unwrap().id(), MessageId(2));
    }

    #[test]
    fn test_empty_greeting_adds_nothing() {
        let conv = Conversation::new().with_greeting("");
        assert!(conv.is_empty());
    }
}
