//! Core domain layer. No external I/O dependencies.
//!
//! Personas, requests, prompts and the text rules they share.

pub mod entities;
pub mod errors;
pub mod prompt;
pub mod text;

pub use entities::{ChatReply, Persona, ReviewRequest};
pub use errors::DomainError;
pub use prompt::{Prompt, RESUME_HEADING};
pub use text::normalize_whitespace;
