//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: CLI or interactive UI drives the application use cases.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the front end until its work is done (one command, or until the user quits).
    async fn run(&self) -> Result<(), DomainError>;
}
