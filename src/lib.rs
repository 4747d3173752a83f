//! resume-ai: LLM-assisted resume review, scoring and rewriting with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
