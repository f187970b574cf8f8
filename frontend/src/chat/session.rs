use chrono::{DateTime, Local};

use crate::chat::responder::GREETING;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn class(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn time_label(&self) -> String {
        self.sent_at.format("%H:%M").to_string()
    }
}

/// Append-only transcript plus the typing indicator. Nothing is persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending_replies: usize,
    quick_replies_used: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            pending_replies: 0,
            quick_replies_used: false,
        };
        session.add_message(GREETING, Sender::Bot);
        session
    }
}

impl ChatSession {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }

    pub fn quick_replies_visible(&self) -> bool {
        !self.quick_replies_used
    }

    pub fn add_message(&mut self, text: impl Into<String>, sender: Sender) {
        self.messages.push(ChatMessage {
            text: text.into(),
            sender,
            sent_at: Local::now(),
        });
    }

    /// Records a user message and shows the typing indicator. Returns the
    /// trimmed text, or `None` when there is nothing to send.
    pub fn submit(&mut self, raw: &str) -> Option<String> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        self.add_message(text, Sender::User);
        self.pending_replies += 1;
        Some(text.to_string())
    }

    pub fn use_quick_reply(&mut self, message: &str) {
        self.quick_replies_used = true;
        self.add_message(message, Sender::User);
        self.pending_replies += 1;
    }

    /// Replaces one typing indicator with the bot's reply.
    pub fn deliver_reply(&mut self, text: &str) {
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.add_message(text, Sender::Bot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_the_greeting() {
        let session = ChatSession::default();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Bot);
        assert!(!session.is_typing());
        assert!(session.quick_replies_visible());
    }

    #[test]
    fn blank_input_is_not_sent() {
        let mut session = ChatSession::default();
        assert_eq!(session.submit("   "), None);
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_typing());
    }

    #[test]
    fn user_message_then_reply() {
        let mut session = ChatSession::default();
        assert_eq!(session.submit("  hi there "), Some("hi there".to_string()));
        assert!(session.is_typing());
        assert_eq!(session.messages().last().unwrap().text, "hi there");
        assert_eq!(session.messages().last().unwrap().sender, Sender::User);

        session.deliver_reply("Hello!");
        assert!(!session.is_typing());
        assert_eq!(session.messages().last().unwrap().sender, Sender::Bot);
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn overlapping_replies_keep_the_indicator_until_the_last() {
        let mut session = ChatSession::default();
        session.submit("one");
        session.submit("two");
        session.deliver_reply("first");
        assert!(session.is_typing());
        session.deliver_reply("second");
        assert!(!session.is_typing());
    }

    #[test]
    fn quick_replies_disappear_after_use() {
        let mut session = ChatSession::default();
        session.use_quick_reply("I need a quote for my app");
        assert!(!session.quick_replies_visible());
        assert!(session.is_typing());
    }

    #[test]
    fn time_label_is_hours_and_minutes() {
        let session = ChatSession::default();
        let label = session.messages()[0].time_label();
        assert_eq!(label.len(), 5);
        assert_eq!(&label[2..3], ":");
    }
}
