//! Intake service. Loads the resume and job post and turns them into a request.
//!
//! Both texts go through the same whitespace normalization before prompting.

use crate::domain::{normalize_whitespace, DomainError, ReviewRequest};
use crate::ports::DocumentExtractor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::info;

pub struct IntakeService {
    extractor: Arc<dyn DocumentExtractor>,
}

impl IntakeService {
    pub fn new(extractor: Arc<dyn DocumentExtractor>) -> Self {
        Self { extractor }
    }

    /// Extract and normalize resume text. Runs on the blocking pool.
    pub async fn load_resume(&self, path: &Path) -> Result<String, DomainError> {
        let extractor = Arc::clone(&self.extractor);
        let owned: PathBuf = path.to_path_buf();
        let text = tokio::task::spawn_blocking(move || extractor.extract(&owned))
            .await
            .map_err(|e| DomainError::Extraction(format!("extraction task failed: {}", e)))??;

        info!(path = %path.display(), chars = text.chars().count(), "resume loaded");
        Ok(normalize_whitespace(&text))
    }

    /// Read a UTF-8 job post and normalize it.
    pub async fn load_job_post(&self, path: &Path) -> Result<String, DomainError> {
        let raw = fs::read_to_string(path).await.map_err(|e| {
            DomainError::Io(format!("failed to read job post '{}': {}", path.display(), e))
        })?;
        let text = normalize_whitespace(&raw);
        info!(path = %path.display(), chars = text.chars().count(), "job post loaded");
        Ok(text)
    }

    pub async fn load_request(
        &self,
        resume_path: &Path,
        job_post_path: &Path,
    ) -> Result<ReviewRequest, DomainError> {
        let resume = self.load_resume(resume_path).await?;
        let job_post = self.load_job_post(job_post_path).await?;
        Ok(ReviewRequest::new(resume, job_post))
    }
}
