//! API key loading. A plain-text file holding one key, read once at startup.

use crate::domain::DomainError;
use std::path::Path;
use tracing::info;

/// Read and trim the API key in `path`. Logs the key's location (never the key) when
/// `diagnostics` is on.
///
/// # Errors
/// `DomainError::Credential` if the file is missing, unreadable, or blank.
pub fn load_api_key(path: &Path, diagnostics: bool) -> Result<String, DomainError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        DomainError::Credential(format!("cannot read key file '{}': {}", path.display(), e))
    })?;
    let key = raw.trim();
    if key.is_empty() {
        return Err(DomainError::Credential(format!(
            "key file '{}' is empty",
            path.display()
        )));
    }
    if diagnostics {
        info!(path = %path.display(), "API key loaded");
    }
    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::log_capture::LogBuffer;

    #[test]
    fn test_key_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openai.key");
        std::fs::write(&path, "  sk-abc123\n").unwrap();
        assert_eq!(load_api_key(&path, false).unwrap(), "sk-abc123");
    }

    #[test]
    fn test_missing_file_is_credential_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_api_key(&dir.path().join("openai.key"), false).unwrap_err();
        assert!(matches!(err, DomainError::Credential(_)));
    }

    #[test]
    fn test_blank_file_is_credential_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openai.key");
        std::fs::write(&path, "\n \n").unwrap();
        let err = load_api_key(&path, false).unwrap_err();
        assert!(matches!(err, DomainError::Credential(_)));
    }

    #[test]
    fn test_key_load_logged_only_with_diagnostics() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openai.key");
        std::fs::write(&path, "sk-secret-value").unwrap();

        let quiet = LogBuffer::default();
        {
            let _guard = quiet.install();
            load_api_key(&path, false).unwrap();
        }
        assert!(!quiet.contents().contains("API key loaded"));

        let verbose = LogBuffer::default();
        {
            let _guard = verbose.install();
            load_api_key(&path, true).unwrap();
        }
        let logs = verbose.contents();
        assert!(logs.contains("API key loaded"), "{}", logs);
        assert!(!logs.contains("sk-secret-value"));
    }
}
