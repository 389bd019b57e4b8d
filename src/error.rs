//! Error types for commented-config.
//!
//! Uses thiserror for derive macros. Temporary-file failures get their own
//! variant carrying the offending path so callers can clean up by hand.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for config handling.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A step of the temp-file rewrite failed.
    ///
    /// The file named by `path` may be left on disk for manual recovery.
    #[error("{message} ('{}')", path.display())]
    TempFile { path: PathBuf, message: String },

    /// Any other filesystem operation failed.
    #[error("failed to {action} '{}': {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config value could not be turned into YAML.
    #[error("failed to serialize config to YAML: {0}")]
    Serialize(#[source] serde_yaml::Error),

    /// The config file could not be turned back into a config value.
    #[error("failed to parse config file '{}': {source}", path.display())]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The freshly written YAML could not be re-read as a token stream.
    #[error("failed to scan YAML structure of '{}': {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: saphyr_parser::ScanError,
    },

    /// A creation-time literal does not parse into the field's type.
    #[error("invalid creation value {literal:?} for field '{field}': {source}")]
    CreationValue {
        field: String,
        literal: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Two sibling fields resolve to the same logical name.
    #[error("duplicate field path '{path}' in config schema")]
    DuplicateField { path: String },

    /// The target path cannot name a config file.
    #[error("config path '{}' has no file name", path.display())]
    InvalidPath { path: PathBuf },
}

impl ConfigError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn temp_file(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::TempFile {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns the CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::Io { .. } | ConfigError::InvalidPath { .. } => exit_codes::USER_ERROR,
            ConfigError::Serialize(_)
            | ConfigError::Deserialize { .. }
            | ConfigError::Scan { .. } => exit_codes::PARSE_FAILURE,
            ConfigError::TempFile { .. } => exit_codes::TEMP_FILE_FAILURE,
            ConfigError::CreationValue { .. } | ConfigError::DuplicateField { .. } => {
                exit_codes::SCHEMA_ERROR
            }
        }
    }
}

/// Result type alias for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
