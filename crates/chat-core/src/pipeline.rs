//! Send Pipeline
//!
//! `Idle → Sending → Idle`. A submit with non-blank input appends the user
//! message and clears the buffer synchronously, then hands back a
//! [`PendingPrompt`] for the caller to deliver. Every delivery is settled with
//! [`ChatState::settle`], which appends the reply or logs the failure.
//!
//! There is no in-flight guard: each qualifying submit produces an
//! independent prompt and replies land in completion order.

use crate::backend::ChatBackend;
use crate::error::{ChatError, Result};
use crate::message::{Conversation, Message};

/// Key that submits the input while it is focused
pub const SUBMIT_KEY: &str = "Enter";

/// Logical phase of the pipeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendPhase {
    Idle,
    /// At least one request is outstanding
    Sending,
}

/// What the visitor did to submit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitTrigger {
    /// Activated the send control
    Click,
    /// Pressed the submit key in the input
    SubmitKey,
}

impl SubmitTrigger {
    /// Map a `KeyboardEvent.key` value to a trigger
    pub fn from_key(key: &str) -> Option<Self> {
        (key == SUBMIT_KEY).then_some(Self::SubmitKey)
    }

    /// Map a `keydown` event to a trigger.
    ///
    /// While an input method is composing (e.g. a Hangul syllable), Enter
    /// commits the composition and must not submit.
    pub fn from_keydown(key: &str, is_composing: bool) -> Option<Self> {
        if is_composing {
            return None;
        }
        Self::from_key(key)
    }
}

/// Uncommitted text in the message input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputBuffer(String);

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when nothing but whitespace has been typed
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Take the raw text, leaving the buffer empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.0)
    }
}

/// A prompt that has been committed to the conversation but not yet answered
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingPrompt {
    text: String,
}

impl PendingPrompt {
    /// Raw text as typed, untrimmed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Deliver the prompt to a backend
    pub async fn deliver(&self, backend: &dyn ChatBackend) -> Result<String> {
        tracing::debug!(backend = backend.name(), chars = self.text.chars().count(), "sending prompt");
        let reply = backend.generate(&self.text).await;
        if let Ok(ref ans) = reply {
            tracing::debug!(backend = backend.name(), chars = ans.chars().count(), "reply received");
        }
        reply
    }
}

/// Everything the chat panel owns
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    conversation: Conversation,
    input: InputBuffer,
    in_flight: usize,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    /// Fresh state with the seeded greeting and an empty input
    pub fn new() -> Self {
        Self::with_conversation(Conversation::seeded())
    }

    pub fn with_conversation(conversation: Conversation) -> Self {
        Self {
            conversation,
            input: InputBuffer::new(),
            in_flight: 0,
        }
    }

    pub const fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub const fn input(&self) -> &InputBuffer {
        &self.input
    }

    /// Replace the input text (bound to the input's `input` event)
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input.set(text);
    }

    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub const fn phase(&self) -> SendPhase {
        if self.in_flight == 0 {
            SendPhase::Idle
        } else {
            SendPhase::Sending
        }
    }

    /// Commit the current input.
    ///
    /// Returns `None` and changes nothing when the input is blank. Otherwise
    /// appends the untrimmed text as a user message, clears the input and
    /// returns the prompt to deliver. The trigger does not affect the outcome.
    pub fn submit(&mut self, trigger: SubmitTrigger) -> Option<PendingPrompt> {
        if self.input.is_blank() {
            tracing::trace!(?trigger, "ignoring blank submit");
            return None;
        }

        let text = self.input.take();
        self.conversation.push(Message::user(text.clone()));
        self.in_flight += 1;
        tracing::debug!(?trigger, in_flight = self.in_flight, "prompt committed");

        Some(PendingPrompt { text })
    }

    /// Record the outcome of one delivery.
    ///
    /// A reply is appended as a bot message. A failure is logged and leaves
    /// the conversation untouched. Returns whether a message was appended.
    pub fn settle(&mut self, outcome: Result<String>) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        match outcome {
            Ok(ans) => {
                self.conversation.push(Message::bot(ans));
                true
            }
            Err(err) => {
                log_failure(&err);
                false
            }
        }
    }
}

fn log_failure(err: &ChatError) {
    tracing::error!(
        kind = err.kind(),
        retryable = err.is_retryable(),
        "Error sending message to backend: {}",
        err
    );
}
