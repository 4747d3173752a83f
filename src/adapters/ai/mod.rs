//! AI adapter module. Implements ChatPort for LLM integration.
//!
//! Provides OpenAI-compatible adapter and mock adapter for testing.

pub mod mock_adapter;
pub mod openai_adapter;

pub use mock_adapter::MockChatAdapter;
pub use openai_adapter::OpenAiAdapter;
