//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// API key file missing, unreadable or empty. Fatal at startup.
    #[error("Credential error: {0}")]
    Credential(String),

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// Network/API failure or a reply without the expected fields.
    #[error("Remote service error: {0}")]
    RemoteService(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl DomainError {
    /// True when the failure came from the remote chat service, so a caller may retry.
    pub fn is_remote(&self) -> bool {
        matches!(self, DomainError::RemoteService(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_remote_errors_are_remote() {
        assert!(DomainError::RemoteService("timeout".into()).is_remote());
        assert!(!DomainError::Extraction("bad xref".into()).is_remote());
        assert!(!DomainError::Credential("missing".into()).is_remote());
        assert!(!DomainError::InvalidRole("cto".into()).is_remote());
    }

    #[test]
    fn test_error_messages_carry_detail() {
        let err = DomainError::Credential("openai.key not found".into());
        assert_eq!(err.to_string(), "Credential error: openai.key not found");
    }
}
