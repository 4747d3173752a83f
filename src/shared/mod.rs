//! Cross-cutting concerns: configuration and credentials.

pub mod config;
pub mod credentials;

#[cfg(test)]
pub(crate) mod log_capture;
