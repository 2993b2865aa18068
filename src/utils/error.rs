use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixError {
    #[error("IO error on {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Rule '{rule}' has an invalid pattern: {source}")]
    InvalidPatternError {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to parse rules file {}: {message}", path.display())]
    RulesFileError { path: PathBuf, message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl FixError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixError::IoError {
            path: path.into(),
            source,
        }
    }

    /// Short message for the terminal, without the error chain.
    pub fn user_friendly_message(&self) -> String {
        match self {
            FixError::IoError { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => format!("File not found: {}", path.display()),
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied: {}", path.display())
                }
                _ => format!("Could not access {}", path.display()),
            },
            FixError::InvalidPatternError { rule, .. } => {
                format!("Rule '{}' could not be compiled", rule)
            }
            FixError::RulesFileError { path, .. } => {
                format!("Rules file {} is not valid TOML", path.display())
            }
            FixError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
            FixError::SerializationError(_) => "Could not render the run report".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FixError::IoError { .. } => {
                "Check that the file is readable and writable, then re-run; files already fixed are left as they are"
            }
            FixError::InvalidPatternError { .. } => {
                "Fix the regular expression in the rule table; no file has been modified"
            }
            FixError::RulesFileError { .. } => {
                "Check the rules file syntax: each [[rules]] entry needs name, pattern and replacement"
            }
            FixError::InvalidConfigValueError { .. } => {
                "Correct the reported option or rules file entry and re-run"
            }
            FixError::SerializationError(_) => "Re-run without --json",
        }
    }
}

pub type Result<T> = std::result::Result<T, FixError>;
