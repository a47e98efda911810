//! Configuration management for controller bootstrapping.
//!
//! This module defines the `Config` struct holding every already-parsed option
//! a bootstrap run consumes. The configuration can be created programmatically,
//! loaded from a YAML or JSON file, and then overridden from command-line
//! arguments by the caller.
//!
//! # Examples
//!
//! ```no_run
//! use controller_bootstrap_core::config::Config;
//!
//! // Create a new config programmatically
//! let mut config = Config::new("ecr");
//! config.output_path = "ecr-controller".into();
//! config.sdk_version = "v1.44.0".to_string();
//!
//! // Or load from a config file
//! let config = Config::from_file("bootstrap.yaml").unwrap();
//! ```

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

use crate::Error;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};

/// Options for one bootstrap run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service alias, used as the generated package name
    pub service_alias: String,

    /// Model directory name when it differs from the alias
    #[serde(default)]
    pub model_name: Option<String>,

    /// Model version to use instead of the first one found
    #[serde(default)]
    pub api_version: Option<String>,

    /// SDK version embedded in the generated files
    #[serde(default)]
    pub sdk_version: String,

    /// Controller runtime version embedded in the generated files
    #[serde(default)]
    pub runtime_version: String,

    /// Root of the repository to bootstrap or update
    #[serde(default)]
    pub output_path: PathBuf,

    /// Directory of templates to render
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,

    /// Directory holding `<service>/<version>/api-2.json` model files
    #[serde(default)]
    pub model_root: PathBuf,

    /// Print rendered files instead of writing them
    #[serde(default)]
    pub dry_run: bool,

    /// Only refresh the descriptive files of an existing repository
    #[serde(default)]
    pub existing_repo: bool,
}

impl Config {
    /// Create a new Config with default values
    pub fn new(service_alias: impl Into<String>) -> Self {
        Self {
            service_alias: service_alias.into(),
            model_name: None,
            api_version: None,
            sdk_version: String::new(),
            runtime_version: String::new(),
            output_path: PathBuf::new(),
            template_dir: default_template_dir(),
            model_root: PathBuf::new(),
            dry_run: false,
            existing_repo: false,
        }
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path_ref = path.as_ref();
        let content = std::fs::read_to_string(path_ref)?;
        let config = if is_json(path_ref) {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(config)
    }

    /// Lower-cased alias used as the generated package name
    pub fn package_alias(&self) -> String {
        self.service_alias.trim().to_lowercase()
    }

    /// Name of the model directory to look up, falling back to the alias
    pub fn service_model_name(&self) -> String {
        match self.model_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_lowercase(),
            _ => self.package_alias(),
        }
    }

    /// Check the options that every run needs.
    ///
    /// A run that writes to disk must name an output path.
    pub fn validate(&self) -> crate::Result<()> {
        if self.service_alias.trim().is_empty() {
            return Err(Error::config("a service alias is required"));
        }
        if !self.dry_run && self.output_path.as_os_str().is_empty() {
            return Err(Error::config(
                "an output path is required unless running in dry-run mode",
            ));
        }
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("template")
}
