//! Application configuration. API endpoint, credential path, persona, output.

use crate::adapters::ai::openai_adapter::{DEFAULT_API_URL, DEFAULT_MESSAGE_ROLE, DEFAULT_MODEL};
use crate::domain::{DomainError, Persona};
use crate::usecases::assistant_service::DEFAULT_REPEAT_COUNT;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Credential file name looked up next to the executable.
pub const DEFAULT_KEY_FILE: &str = "openai.key";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Path to the API key file. Read from RESUME_AI_KEY_FILE.
    #[serde(default)]
    pub key_file: Option<String>,

    /// Chat completion URL. Defaults to OpenAI. Read from RESUME_AI_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Model name. Defaults to "gpt-3.5-turbo". Read from RESUME_AI_MODEL.
    #[serde(default)]
    pub model: Option<String>,

    /// Role tag of the outgoing message. Defaults to "assistant". Read from RESUME_AI_MESSAGE_ROLE.
    #[serde(default)]
    pub message_role: Option<String>,

    /// Persona name (recruiter | applicant). Read from RESUME_AI_PERSONA.
    #[serde(default)]
    pub persona: Option<String>,

    /// Fixed output path for rewritten resumes. Read from RESUME_AI_OUTPUT_PATH.
    /// When unset the path is derived from the resume file name.
    #[serde(default)]
    pub output_path: Option<String>,

    /// Independent runs merged by averaged scoring (default 3). Read from RESUME_AI_REPEAT_COUNT.
    #[serde(default)]
    pub repeat_count: Option<usize>,

    /// Diagnostic logging (credential loaded, token usage, intermediate results). Read from RESUME_AI_DEBUG.
    #[serde(default)]
    pub debug: Option<bool>,

    /// Use the offline mock adapter instead of the remote API. Read from RESUME_AI_MOCK.
    #[serde(default)]
    pub mock: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("RESUME_AI").try_parsing(true));
        if let Ok(path) = std::env::var("RESUME_AI_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the key file path. Defaults to `openai.key` beside the running executable.
    pub fn key_file_or_default(&self) -> PathBuf {
        match &self.key_file {
            Some(path) => PathBuf::from(path),
            None => std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DEFAULT_KEY_FILE),
        }
    }

    /// Returns the API URL. Defaults to OpenAI chat completions endpoint.
    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Returns the model name. Defaults to "gpt-3.5-turbo".
    pub fn model_or_default(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    /// Returns the message role. Defaults to "assistant".
    pub fn message_role_or_default(&self) -> String {
        self.message_role
            .clone()
            .unwrap_or_else(|| DEFAULT_MESSAGE_ROLE.to_string())
    }

    /// Returns the configured persona. Defaults to applicant; unknown names are an error.
    pub fn persona_or_default(&self) -> Result<Persona, DomainError> {
        match &self.persona {
            Some(name) => name.parse(),
            None => Ok(Persona::Applicant),
        }
    }

    /// Fixed rewrite output path, if configured.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output_path.as_deref().map(PathBuf::from)
    }

    /// Returns the averaged-scoring repeat count. Defaults to 3.
    pub fn repeat_count_or_default(&self) -> usize {
        self.repeat_count.unwrap_or(DEFAULT_REPEAT_COUNT)
    }

    pub fn debug_or_default(&self) -> bool {
        self.debug.unwrap_or(false)
    }

    pub fn mock_or_default(&self) -> bool {
        self.mock.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api_url_or_default(), DEFAULT_API_URL);
        assert_eq!(cfg.model_or_default(), "gpt-3.5-turbo");
        assert_eq!(cfg.message_role_or_default(), "assistant");
        assert_eq!(cfg.persona_or_default().unwrap(), Persona::Applicant);
        assert_eq!(cfg.repeat_count_or_default(), 3);
        assert!(!cfg.debug_or_default());
        assert!(!cfg.mock_or_default());
        assert!(cfg.key_file_or_default().ends_with(DEFAULT_KEY_FILE));
    }

    #[test]
    fn test_output_path_configured() {
        let cfg = AppConfig {
            output_path: Some("out/resume.md".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(cfg.output_path(), Some(PathBuf::from("out/resume.md")));
        assert_eq!(AppConfig::default().output_path(), None);
    }

    #[test]
    fn test_unknown_persona_is_invalid_role() {
        let cfg = AppConfig {
            persona: Some("manager".to_string()),
            ..AppConfig::default()
        };
        assert!(matches!(
            cfg.persona_or_default(),
            Err(DomainError::InvalidRole(_))
        ));
    }

    #[test]
    fn test_key_file_override() {
        let cfg = AppConfig {
            key_file: Some("/etc/resume-ai/key".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(cfg.key_file_or_default(), PathBuf::from("/etc/resume-ai/key"));
    }
}
