//! # chat-core
//!
//! Conversation model and send pipeline behind the Korean Fluency chat panel.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       ChatState                          │
//! │  ┌──────────────┐  ┌──────────────┐  ┌────────────────┐  │
//! │  │ InputBuffer  │──│ Send pipeline│──│  ChatBackend   │  │
//! │  │              │  │ submit/settle│  │  (Strategy)    │  │
//! │  └──────────────┘  └──────┬───────┘  └────────────────┘  │
//! │                    ┌──────┴───────┐                      │
//! │                    │ Conversation │                      │
//! │                    └──────────────┘                      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here touches the DOM or the network; the web crate binds
//! [`ChatState`] to a signal and `chat-runtime` provides the HTTP backend.

pub mod backend;
pub mod error;
pub mod message;
pub mod pipeline;
pub mod wire;

pub use backend::ChatBackend;
pub use error::{ChatError, Result};
pub use message::{Conversation, Message, Sender};
pub use pipeline::{ChatState, InputBuffer, PendingPrompt, SendPhase, SubmitTrigger};
pub use wire::{ChatGenRequest, ChatGenResponse};
