//! Error types for the Brokerdash core library.
//!
//! All failures are local to loading and rendering a dataset; nothing here is
//! transient or retryable, so the error set is small and grouped by code range.
//!
//! # Error Codes Reference
//!
//! | Code Range | Category | Description |
//! |------------|----------|-------------|
//! | E1001-E1099 | Dataset | Record source lookup, format and validation errors |
//! | E2001-E2099 | Config | Config file and value errors |
//! | E3001-E3099 | Lookup | Agent lookups by id |
//! | E9001-E9099 | General | IO and serialization errors |

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use tracing::error;

/// The main error type for the Brokerdash core library.
#[derive(Debug, Error)]
pub enum BrokerdashError {
    // ========================================================================
    // Dataset Errors (E1001-E1099)
    // ========================================================================
    /// Dataset file does not exist
    #[error("[E1001] Dataset file not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    /// Dataset file extension is not one of json, yaml, yml, toml
    #[error("[E1002] Unsupported dataset format '{extension}' for {}", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Dataset contents could not be deserialized
    #[error("[E1003] Failed to parse dataset {}: {message}", path.display())]
    DatasetParse { path: PathBuf, message: String },

    /// Two agent records share the same id
    #[error("[E1004] Duplicate agent id '{0}'")]
    DuplicateAgentId(String),

    /// A record field is outside its allowed domain
    #[error("[E1005] Invalid value for '{field}' on agent '{agent}': {message}")]
    InvalidField {
        agent: String,
        field: String,
        message: String,
    },

    /// A response time label could not be parsed
    #[error("[E1006] Invalid response time '{0}'")]
    InvalidResponseTime(String),

    // ========================================================================
    // Configuration Errors (E2001-E2099)
    // ========================================================================
    /// Configuration file parse error
    #[error("[E2001] Failed to parse configuration: {0}")]
    ConfigParse(String),

    /// Invalid configuration value
    #[error("[E2002] Invalid configuration value for '{key}': {message}")]
    InvalidConfigValue { key: String, message: String },

    // ========================================================================
    // Lookup Errors (E3001-E3099)
    // ========================================================================
    /// No agent with the requested id
    #[error("[E3001] Agent not found: {0}")]
    AgentNotFound(String),

    // ========================================================================
    // General Errors (E9001-E9099)
    // ========================================================================
    /// IO error
    #[error("[E9001] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("[E9002] Serialization error: {0}")]
    Serialization(String),
}

pub type BrokerdashResult<T> = Result<T, BrokerdashError>;

impl From<serde_json::Error> for BrokerdashError {
    fn from(err: serde_json::Error) -> Self {
        BrokerdashError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for BrokerdashError {
    fn from(err: config::ConfigError) -> Self {
        BrokerdashError::ConfigParse(err.to_string())
    }
}

impl BrokerdashError {
    pub fn invalid_field(
        agent: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        BrokerdashError::InvalidField {
            agent: agent.into(),
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true if the error was raised at the record-source boundary.
    pub fn is_dataset_error(&self) -> bool {
        matches!(
            self,
            BrokerdashError::DatasetNotFound(_)
                | BrokerdashError::UnsupportedFormat { .. }
                | BrokerdashError::DatasetParse { .. }
                | BrokerdashError::DuplicateAgentId(_)
                | BrokerdashError::InvalidField { .. }
                | BrokerdashError::InvalidResponseTime(_)
        )
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            BrokerdashError::ConfigParse(_) | BrokerdashError::InvalidConfigValue { .. }
        )
    }

    /// Returns an error code suitable for logging or external reporting.
    pub fn error_code(&self) -> &'static str {
        match self {
            BrokerdashError::DatasetNotFound(_) => "E1001",
            BrokerdashError::UnsupportedFormat { .. } => "E1002",
            BrokerdashError::DatasetParse { .. } => "E1003",
            BrokerdashError::DuplicateAgentId(_) => "E1004",
            BrokerdashError::InvalidField { .. } => "E1005",
            BrokerdashError::InvalidResponseTime(_) => "E1006",
            BrokerdashError::ConfigParse(_) => "E2001",
            BrokerdashError::InvalidConfigValue { .. } => "E2002",
            BrokerdashError::AgentNotFound(_) => "E3001",
            BrokerdashError::Io(_) => "E9001",
            BrokerdashError::Serialization(_) => "E9002",
        }
    }

    /// Returns a user-friendly suggestion for how to resolve this error.
    pub fn user_suggestion(&self) -> Option<&'static str> {
        match self {
            BrokerdashError::DatasetNotFound(_) => {
                Some("Check the --dataset path or unset dataset.path to use the sample data")
            }
            BrokerdashError::UnsupportedFormat { .. } => {
                Some("Use a .json, .yaml, .yml or .toml dataset file")
            }
            BrokerdashError::DuplicateAgentId(_) => Some("Every agent record needs a unique id"),
            BrokerdashError::AgentNotFound(_) => {
                Some("Run 'brokerdash roster' to list the available agent ids")
            }
            _ => None,
        }
    }

    pub fn log(&self) {
        error!(
            error_code = %self.error_code(),
            suggestion = self.user_suggestion(),
            "Error occurred: {}",
            self
        );
    }
}

/// Format an error for CLI display with its suggestion.
pub struct CliErrorDisplay<'a> {
    error: &'a BrokerdashError,
    show_suggestion: bool,
}

impl<'a> CliErrorDisplay<'a> {
    pub fn new(error: &'a BrokerdashError) -> Self {
        Self {
            error,
            show_suggestion: true,
        }
    }

    pub fn without_suggestion(mut self) -> Self {
        self.show_suggestion = false;
        self
    }
}

impl fmt::Display for CliErrorDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if self.show_suggestion {
            if let Some(suggestion) = self.error.user_suggestion() {
                writeln!(f)?;
                write!(f, "  Suggestion: {}", suggestion)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_contains_code() {
        let err = BrokerdashError::DuplicateAgentId("AG-001".to_string());
        assert!(err.to_string().contains("E1004"));
        assert!(err.to_string().contains("AG-001"));

        let err = BrokerdashError::invalid_field("AG-002", "conversion", "must be 0-100");
        assert!(err.to_string().contains("E1005"));
        assert!(err.to_string().contains("conversion"));
    }

    #[test]
    fn test_error_categories() {
        assert!(BrokerdashError::DatasetNotFound(PathBuf::from("x.json")).is_dataset_error());
        assert!(BrokerdashError::InvalidResponseTime("abc".into()).is_dataset_error());
        assert!(!BrokerdashError::AgentNotFound("x".into()).is_dataset_error());
        assert!(BrokerdashError::ConfigParse("bad".into()).is_config_error());
    }

    #[test]
    fn test_error_codes_match_display() {
        let errors = vec![
            BrokerdashError::DatasetNotFound(PathBuf::from("a.json")),
            BrokerdashError::AgentNotFound("AG-9".into()),
            BrokerdashError::Serialization("oops".into()),
        ];
        for err in errors {
            assert!(err.to_string().starts_with(&format!("[{}]", err.error_code())));
        }
    }

    #[test]
    fn test_cli_display_includes_suggestion() {
        let err = BrokerdashError::AgentNotFound("AG-404".into());
        let shown = CliErrorDisplay::new(&err).to_string();
        assert!(shown.contains("Suggestion"));

        let bare = CliErrorDisplay::new(&err).without_suggestion().to_string();
        assert!(!bare.contains("Suggestion"));
    }
}
