//! Chat Backend Strategy
//!
//! The page talks to whatever answers prompts through [`ChatBackend`], so the
//! HTTP client can be swapped for an in-memory one in tests.
//!
//! ```rust,ignore
//! use chat_core::ChatBackend;
//!
//! let reply = backend.generate("How do I say thank you?").await?;
//! ```

use async_trait::async_trait;

use crate::error::Result;

/// Strategy trait for reply generators
///
/// Futures are not required to be `Send`: in the browser the HTTP client runs
/// on the single JS thread.
#[async_trait(?Send)]
pub trait ChatBackend {
    /// Human-readable backend name for logs
    fn name(&self) -> &str;

    /// Send one prompt and return the reply text
    async fn generate(&self, prompt: &str) -> Result<String>;
}
