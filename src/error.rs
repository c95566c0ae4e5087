use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BumpError {
    #[error("'{field}' not found in {}", .path.display())]
    MissingField { field: String, path: PathBuf },

    #[error("Invalid version '{0}' (expected: MAJOR.MINOR.PATCH)")]
    InvalidVersion(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Failed to access {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Prompt aborted: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("Invalid replacement pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl BumpError {
    pub fn missing_field(field: &str, path: impl Into<PathBuf>) -> Self {
        BumpError::MissingField {
            field: field.to_string(),
            path: path.into(),
        }
    }

    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BumpError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
