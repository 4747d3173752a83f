//! Resume assistant. Builds task prompts, submits them and shapes the replies.
//!
//! Every remote call is awaited before the next one starts; nothing is retried.

use crate::domain::{DomainError, Persona, Prompt, ReviewRequest};
use crate::ports::ChatPort;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::info;

/// Number of independent evaluations merged by averaged scoring.
pub const DEFAULT_REPEAT_COUNT: usize = 3;

/// Construction-time options for [`ResumeAssistant`].
#[derive(Debug, Clone)]
pub struct AssistantOptions {
    /// Emit token usage and intermediate results. When false these are not logged at all.
    pub diagnostics: bool,
    /// Where `rewrite` writes when the caller gives no path.
    pub rewrite_output: PathBuf,
}

impl Default for AssistantOptions {
    fn default() -> Self {
        Self {
            diagnostics: false,
            rewrite_output: PathBuf::from("new_resume.md"),
        }
    }
}

pub struct ResumeAssistant {
    chat: Arc<dyn ChatPort>,
    persona: Persona,
    options: AssistantOptions,
}

impl ResumeAssistant {
    /// Create an assistant speaking as `persona`.
    ///
    /// # Arguments
    /// * `chat` - Chat port implementation (OpenAI, Mock, etc.)
    /// * `persona` - Viewpoint framing every prompt
    /// * `options` - Diagnostics toggle and default rewrite output
    pub fn new(chat: Arc<dyn ChatPort>, persona: Persona, options: AssistantOptions) -> Self {
        if options.diagnostics {
            info!(persona = %persona, "resume assistant ready");
        }
        Self {
            chat,
            persona,
            options,
        }
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    pub fn options(&self) -> &AssistantOptions {
        &self.options
    }

    /// Ask a free-form question under the configured persona.
    pub async fn ask(&self, message: &str) -> Result<String, DomainError> {
        self.submit(&Prompt::question(self.persona, message)).await
    }

    /// Full prompt with the request's own instructions. Returns the trimmed reply.
    pub async fn custom(&self, request: &ReviewRequest) -> Result<String, DomainError> {
        self.submit(&Prompt::custom(self.persona, request)).await
    }

    /// Like [`custom`](Self::custom), then write the reply to `path` (UTF-8, overwriting).
    pub async fn custom_output(
        &self,
        request: &ReviewRequest,
        path: &Path,
    ) -> Result<String, DomainError> {
        let output = self.custom(request).await?;
        write_output(path, &output).await?;
        Ok(output)
    }

    /// Free-form review of the resume against the job post.
    pub async fn review(&self, request: &ReviewRequest) -> Result<String, DomainError> {
        self.submit(&Prompt::review(self.persona, request)).await
    }

    /// Relevance rating from 1 to 100, number only.
    pub async fn score(&self, request: &ReviewRequest) -> Result<String, DomainError> {
        self.submit(&Prompt::score(self.persona, request)).await
    }

    /// `Score:`, `Review:` and `Fit:` lines. The reply is returned as-is; its layout is not checked.
    pub async fn score_and_review(&self, request: &ReviewRequest) -> Result<String, DomainError> {
        self.submit(&Prompt::score_and_review(self.persona, request))
            .await
    }

    /// Run [`score_and_review`](Self::score_and_review) `repeat_count` times, then ask the
    /// model to reconcile all raw results into one final block.
    ///
    /// Makes `repeat_count + 1` remote calls, one after another.
    pub async fn score_and_review_averaged(
        &self,
        request: &ReviewRequest,
        repeat_count: usize,
    ) -> Result<String, DomainError> {
        if repeat_count == 0 {
            return Err(DomainError::InvalidInput(
                "repeat count must be at least 1".to_string(),
            ));
        }

        let mut results = Vec::with_capacity(repeat_count);
        for run in 1..=repeat_count {
            let result = self.score_and_review(request).await?;
            if self.options.diagnostics {
                info!(run, of = repeat_count, result = %result, "intermediate evaluation");
            }
            results.push(result);
        }

        self.submit(&Prompt::reconcile(self.persona, request, &results))
            .await
    }

    /// Tailored resume plus cover letter in Markdown, starting with `# Resume`.
    ///
    /// Written to `output`, or to the configured default when `None`.
    pub async fn rewrite(
        &self,
        request: &ReviewRequest,
        output: Option<&Path>,
    ) -> Result<String, DomainError> {
        let markdown = self.submit(&Prompt::rewrite(self.persona, request)).await?;
        let path = output.unwrap_or(self.options.rewrite_output.as_path());
        write_output(path, &markdown).await?;
        if self.options.diagnostics {
            info!(path = %path.display(), "rewritten resume saved");
        }
        Ok(markdown)
    }

    async fn submit(&self, prompt: &Prompt) -> Result<String, DomainError> {
        let reply = self.chat.complete(prompt).await?;
        if self.options.diagnostics {
            info!(total_tokens = reply.total_tokens, "token usage");
        }
        Ok(reply.text.trim().to_string())
    }
}

/// `<resume-stem>.rewritten.md` in the resume's directory.
pub fn rewrite_output_beside(resume: &Path) -> PathBuf {
    let stem = resume
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string());
    resume.with_file_name(format!("{}.rewritten.md", stem))
}

/// Builds assistants for a front end. Persona and resume can change between runs.
#[derive(Clone)]
pub struct AssistantFactory {
    chat: Arc<dyn ChatPort>,
    diagnostics: bool,
    /// Fixed rewrite output; when `None` it is derived from the resume path.
    output_path: Option<PathBuf>,
}

impl AssistantFactory {
    pub fn new(chat: Arc<dyn ChatPort>, diagnostics: bool, output_path: Option<PathBuf>) -> Self {
        Self {
            chat,
            diagnostics,
            output_path,
        }
    }

    pub fn build(&self, persona: Persona, resume: Option<&Path>) -> ResumeAssistant {
        let rewrite_output = match (&self.output_path, resume) {
            (Some(path), _) => path.clone(),
            (None, Some(resume)) => rewrite_output_beside(resume),
            (None, None) => AssistantOptions::default().rewrite_output,
        };
        ResumeAssistant::new(
            Arc::clone(&self.chat),
            persona,
            AssistantOptions {
                diagnostics: self.diagnostics,
                rewrite_output,
            },
        )
    }
}

/// Write `content` as UTF-8, replacing any existing file. Creates missing parent directories.
async fn write_output(path: &Path, content: &str) -> Result<(), DomainError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|e| {
            DomainError::Io(format!("failed to create '{}': {}", parent.display(), e))
        })?;
    }
    fs::write(path, content)
        .await
        .map_err(|e| DomainError::Io(format!("failed to write '{}': {}", path.display(), e)))
}
