//! Error types for taglog

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using TaglogError
pub type Result<T> = std::result::Result<T, TaglogError>;

/// Main error type for taglog operations
#[derive(Debug, Error)]
pub enum TaglogError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Commit line carries no `:WORD:` change-type tag
    #[error("Syntax is not correct for the commit, no :TAG: found in '{line}'")]
    MalformedCommitTag { line: String },

    /// Content line with no open section to attach it to
    #[error("Malformed changelog at line {line_number}: {reason} ('{line}')")]
    MalformedDocument {
        line_number: usize,
        line: String,
        reason: String,
    },

    /// Failed to read the changelog file
    #[error("Failed to read changelog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TaglogError {
    /// Whether this error is a rejected commit line
    pub fn is_malformed_commit_tag(&self) -> bool {
        matches!(
            self,
            Self::Changelog(ChangelogError::MalformedCommitTag { .. })
        )
    }

    /// Whether this error is a structurally broken changelog
    pub fn is_malformed_document(&self) -> bool {
        matches!(self, Self::Changelog(ChangelogError::MalformedDocument { .. }))
    }
}
