//! Error types for navhead-core
//!
//! Signal handling never fails: scroll, menu and route entry points always
//! degrade to a defined visual state. Errors only arise at the edges, when
//! loading configuration or parsing replay scripts.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for navhead operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse JSON in {path}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse TOML in {path}")]
    TomlParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize configuration: {message}")]
    Serialize { message: String },

    #[error("Unsupported config format for {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid script line {line_number}: {message}")]
    ScriptParse { line_number: usize, message: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl CoreError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        CoreError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Actionable hint for the user, when one exists
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CoreError::FileRead { path, .. } => {
                Some(format!("Check the file exists and is readable: ls -l {}", path.display()))
            }
            CoreError::JsonParse { .. } => Some("Validate JSON syntax with: jq . <file>".to_string()),
            CoreError::UnsupportedFormat { .. } => {
                Some("Rename the file with a .json or .toml extension".to_string())
            }
            CoreError::ScriptParse { .. } => Some(
                "Valid steps: scroll <px>, toggle, close, route <path>, follow <path>, pump, unmount"
                    .to_string(),
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
