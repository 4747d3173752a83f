//! Mock chat adapter for running without API calls.
//!
//! Replays scripted replies in order, falling back to a canned reply, and
//! records every prompt it receives.

use crate::domain::{ChatReply, DomainError, Prompt};
use crate::ports::ChatPort;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;

/// Mock chat adapter.
///
/// Returns predetermined replies without making API calls.
/// Simulates network latency with configurable delay.
pub struct MockChatAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    replies: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl MockChatAdapter {
    /// Create a new mock adapter with default delay (100ms) and canned replies.
    pub fn new() -> Self {
        Self::with_delay(100)
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            replies: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock adapter (no delay) that answers with `replies` in order.
    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            delay_ms: 0,
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every prompt received so far, oldest first.
    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }

    /// Number of `complete` calls so far.
    pub async fn calls(&self) -> usize {
        self.prompts.lock().await.len()
    }

    fn canned_reply(prompt: &Prompt) -> String {
        format!(
            "[MOCK] Simulated reply to a {}-character prompt. \
             Configure a real API key file to get model output.",
            prompt.len()
        )
    }
}

impl Default for MockChatAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ChatPort for MockChatAdapter {
    async fn complete(&self, prompt: &Prompt) -> Result<ChatReply, DomainError> {
        info!(prompt_len = prompt.len(), "[MOCK] Simulating chat completion");

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        self.prompts.lock().await.push(prompt.as_str().to_string());
        let text = self
            .replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Self::canned_reply(prompt));

        // Rough usage figure: whitespace-separated words in and out.
        let total_tokens = (prompt.as_str().split_whitespace().count()
            + text.split_whitespace().count()) as u32;

        Ok(ChatReply { text, total_tokens })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Persona;

    #[tokio::test]
    async fn test_replays_scripted_replies_then_canned() {
        let adapter = MockChatAdapter::with_replies(["first", "second"]);
        let prompt = Prompt::question(Persona::Applicant, "Hello");

        assert_eq!(adapter.complete(&prompt).await.unwrap().text, "first");
        assert_eq!(adapter.complete(&prompt).await.unwrap().text, "second");
        let third = adapter.complete(&prompt).await.unwrap();
        assert!(third.text.starts_with("[MOCK]"));
        assert_eq!(adapter.calls().await, 3);
    }

    #[tokio::test]
    async fn test_records_prompts_in_order() {
        let adapter = MockChatAdapter::with_delay(10);
        let a = Prompt::question(Persona::Applicant, "one");
        let b = Prompt::question(Persona::Recruiter, "two");
        adapter.complete(&a).await.unwrap();
        adapter.complete(&b).await.unwrap();

        let prompts = adapter.prompts().await;
        assert_eq!(prompts, vec![a.to_string(), b.to_string()]);
    }

    #[tokio::test]
    async fn test_reports_usage() {
        let adapter = MockChatAdapter::with_replies(["two words"]);
        let reply = adapter
            .complete(&Prompt::question(Persona::Applicant, "hi"))
            .await
            .unwrap();
        assert!(reply.total_tokens >= 2);
    }
}
