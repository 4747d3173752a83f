//! Application use cases. Orchestrate domain logic via ports.

pub mod assistant_service;
pub mod intake_service;

pub use assistant_service::{AssistantFactory, AssistantOptions, ResumeAssistant};
pub use intake_service::IntakeService;
