//! Registration config document validation

use crate::error::{KreatisiteError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Check that the document at `path` exists and is well-formed YAML.
///
/// Contact fields are not inspected; the AWS CLI reads the file itself
/// through `--cli-input-yaml`.
pub fn validate_config_document(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => KreatisiteError::config_not_found(path),
        _ => KreatisiteError::config_read(path, e.to_string()),
    })?;

    validate_yaml(&content)?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Config document is valid YAML");
    Ok(())
}

/// An empty document is valid and loads as null.
fn validate_yaml(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Ok(());
    }
    serde_yaml::from_str::<serde_yaml::Value>(content)?;
    Ok(())
}
