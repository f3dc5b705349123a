//! # chat-runtime
//!
//! Runtime backends for the chat page.
//!
//! ## Backends
//!
//! - **HTTP** (default): `POST {"prompt"}` to the `/chat_gen` endpoint and read
//!   `{"ans"}` back. Built on `reqwest`, so the same code runs natively and in
//!   the browser.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chat_runtime::{EndpointConfig, HttpChatBackend};
//!
//! let backend = HttpChatBackend::from_config(EndpointConfig::default());
//! let reply = pending.deliver(&backend).await;
//! ```

pub mod config;
#[cfg(feature = "http")]
pub mod http;

pub use config::{DEFAULT_ENDPOINT, ENDPOINT_ENV_VAR, EndpointConfig};
#[cfg(feature = "http")]
pub use http::HttpChatBackend;

// Re-export core types for convenience
pub use chat_core::{ChatBackend, ChatError, ChatState, Message, Result, Sender};
