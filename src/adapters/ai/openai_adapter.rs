//! OpenAI-compatible adapter for chat completions.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama instances.
//! Implements `ChatPort`: one prompt in, generated text and token usage out.

use crate::domain::{ChatReply, DomainError, Prompt};
use crate::ports::ChatPort;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default chat-completion endpoint.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Role tag of the single message carrying the whole prompt.
pub const DEFAULT_MESSAGE_ROLE: &str = "assistant";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// OpenAI-compatible chat adapter.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Azure OpenAI
/// - Ollama (localhost)
/// - Any OpenAI-compatible API
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    role: String,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - API key read from the credential file
    /// * `model` - Model name (e.g., "gpt-3.5-turbo", "llama3.2")
    pub fn new(api_url: String, api_key: String, model: String) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DomainError::RemoteService(format!("HTTP client setup failed: {}", e)))?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
            role: DEFAULT_MESSAGE_ROLE.to_string(),
        })
    }

    /// Override the role tag sent with the prompt (e.g. "user").
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    fn request_body<'a>(&'a self, prompt: &'a Prompt) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: &self.role,
                content: prompt.as_str(),
            }],
        }
    }

    /// Map a decoded response body to the domain reply.
    fn into_reply(response: ChatResponse) -> Result<ChatReply, DomainError> {
        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| DomainError::RemoteService("No response choices returned".to_string()))?;
        let total_tokens = response
            .usage
            .map(|u| u.total_tokens)
            .ok_or_else(|| DomainError::RemoteService("Response has no usage block".to_string()))?;
        Ok(ChatReply { text, total_tokens })
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    total_tokens: u32,
}

#[async_trait::async_trait]
impl ChatPort for OpenAiAdapter {
    async fn complete(&self, prompt: &Prompt) -> Result<ChatReply, DomainError> {
        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "sending prompt to chat completion API"
        );

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| DomainError::RemoteService(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "AI API returned error");
            return Err(DomainError::RemoteService(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            DomainError::RemoteService(format!("Failed to parse API response: {}", e))
        })?;

        let reply = Self::into_reply(chat_response)?;
        debug!(
            reply_len = reply.text.len(),
            total_tokens = reply.total_tokens,
            "received AI response"
        );
        Ok(reply)
    }
}
