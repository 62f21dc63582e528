//! Error types for dxp

use thiserror::Error;

/// Main error type for dxp
#[derive(Debug, Error)]
pub enum ExportError {
    /// Average score requested over goals that were never assessed
    #[error("No assessed goals: the average score is undefined")]
    NoAssessedGoals,

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Submit requested on a document built with submission disabled
    #[error("Submitting is disabled for this export")]
    SubmitDisabled,

    /// Parameters stored by an incompatible content version
    #[error("Unsupported parameters version: {0}")]
    UnsupportedVersion(String),

    /// Version string that is not `major.minor`
    #[error("Invalid version format: {0}")]
    InvalidVersion(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ExportError>,
    },
}

impl ExportError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ExportError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for dxp
pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExportError::UnsupportedVersion("2.0".to_string());
        assert_eq!(err.to_string(), "Unsupported parameters version: 2.0");
    }

    #[test]
    fn test_error_with_context() {
        let err = ExportError::NoAssessedGoals.with_context("Failed to render goals");
        let text = err.to_string();
        assert!(text.starts_with("Failed to render goals"));
        assert!(text.contains("average score is undefined"));
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ExportError = serde_err.into();
        assert!(matches!(err, ExportError::Serde(_)));
    }
}
