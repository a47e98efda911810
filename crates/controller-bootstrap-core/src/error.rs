//! Error handling for the controller bootstrap library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. Every variant is terminal for
//! the current run: each one points back at an input the operator can fix
//! (service alias, model directory, output permissions) and re-run.
//!
//! # Examples
//!
//! ```
//! use controller_bootstrap_core::error::{Error, Result};
//!
//! fn require_alias(alias: &str) -> Result<()> {
//!     if alias.is_empty() {
//!         return Err(Error::config("a service alias is required"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_alias("ecr").is_ok());
//! assert!(matches!(require_alias(""), Err(Error::Config(_))));
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result type for controller bootstrap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for controller bootstrap operations
#[derive(Debug, Error)]
pub enum Error {
    /// No usable model version directory for the service
    #[error("no API model found for service '{service}': {reason}")]
    NotFound { service: String, reason: String },

    /// Model file missing, unreadable or malformed
    #[error("failed to load API model {}: {reason}", path.display())]
    ModelParse { path: PathBuf, reason: String },

    /// Missing or inconsistent options
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unresolved variable or malformed template syntax
    #[error("Template error in {}: {message}", file.display())]
    Template { file: PathBuf, message: String },

    /// Destination directory cannot be created or written
    #[error("cannot write to {}: {source}", path.display())]
    NotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new not-found error for a service
    pub fn not_found<S: Into<String>, R: Into<String>>(service: S, reason: R) -> Self {
        Self::NotFound {
            service: service.into(),
            reason: reason.into(),
        }
    }

    /// Create a new model parse error
    pub fn model_parse<P: Into<PathBuf>, R: Into<String>>(path: P, reason: R) -> Self {
        Self::ModelParse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new template error naming the offending file
    pub fn template<P: Into<PathBuf>, S: Into<String>>(file: P, message: S) -> Self {
        Self::Template {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a new not-writable error
    pub fn not_writable<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::NotWritable {
            path: path.into(),
            source,
        }
    }
}
