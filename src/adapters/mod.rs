//! Infrastructure adapters. Implement outbound ports and drive inbound ones.
//!
//! Chat API, PDF extraction, CLI, interactive UI. Map errors to DomainError.

pub mod ai;
pub mod cli;
pub mod pdf;
pub mod ui;
