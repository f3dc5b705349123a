//! Conversation Messages
//!
//! The append-only message sequence shown in the chat panel.

/// Greeting the page opens with
pub const SEED_USER_TEXT: &str = "Hi!";
/// Bot reply to the seeded greeting
pub const SEED_BOT_TEXT: &str = "Hello! How can I help you today?";

/// Who wrote a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sender {
    /// Typed by the visitor
    User,
    /// Returned by the chat backend
    Bot,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Bot => write!(f, "bot"),
        }
    }
}

/// A single chat turn
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender,
        }
    }

    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    /// Create a bot message
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }
}

/// Ordered, append-only message history
///
/// Entries are never edited or removed. `revision` counts appends so views
/// can replay effects whenever the sequence changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
    revision: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two-message exchange shown on first render
    pub fn seeded() -> Self {
        let mut conv = Self::new();
        conv.push(Message::user(SEED_USER_TEXT));
        conv.push(Message::bot(SEED_BOT_TEXT));
        conv
    }

    /// Append a message
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.revision += 1;
    }

    /// Get all messages in display order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of appends since creation
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
