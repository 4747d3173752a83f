//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ChatReply, DomainError, Prompt};
use std::path::Path;

/// Remote chat-completion service.
#[async_trait::async_trait]
pub trait ChatPort: Send + Sync {
    /// Submit one prompt as a single message and wait for the reply.
    ///
    /// No retries. Transport failures and replies missing the expected fields
    /// map to `DomainError::RemoteService`.
    async fn complete(&self, prompt: &Prompt) -> Result<ChatReply, DomainError>;
}

/// Document text extraction. Blocking; call from `spawn_blocking` in async code.
pub trait DocumentExtractor: Send + Sync {
    /// Extract all page text in page order, whitespace-normalized.
    fn extract(&self, path: &Path) -> Result<String, DomainError>;
}
