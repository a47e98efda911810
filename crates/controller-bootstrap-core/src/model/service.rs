//! Service metadata extracted from an `api-2.json` model file.
//!
//! Only the metadata block and the operation index are read. Shapes,
//! documentation and operation bodies are skipped without validation so that
//! models using protocols or shape features this tool does not know about
//! still load.
//!
//! # Examples
//!
//! ```no_run
//! use controller_bootstrap_core::model::{locate, ServiceModel};
//! use std::path::Path;
//!
//! # fn main() -> controller_bootstrap_core::Result<()> {
//! let location = locate("ecr", Path::new("models/apis"), None)?;
//! let model = ServiceModel::extract(&location, "ecr")?;
//! println!("{} has {} operations", model.service_id, model.operation_names.len());
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::IgnoredAny;
use serde::Deserialize;

use super::ModelLocation;
use crate::{Error, Result};

/// Protocols the upstream model loader understands
const KNOWN_PROTOCOLS: &[&str] = &["json", "rest-json", "rest-xml", "query", "ec2"];

/// Identity of one API description plus its operation catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceModel {
    /// Service identifier from the model metadata (e.g. "ECR")
    pub service_id: String,
    /// Short service name (e.g. "Amazon ECR"); empty when the model has none
    pub abbreviation: String,
    /// Full service name
    pub full_name: String,
    /// Lower-cased alias chosen by the caller
    pub package_alias: String,
    /// Version directory the model was read from
    pub model_version: String,
    /// Operation names, sorted
    pub operation_names: Vec<String>,
}

/// On-disk layout of the parts of `api-2.json` we need
#[derive(Debug, Deserialize)]
struct ModelDocument {
    metadata: ModelMetadata,
    #[serde(default)]
    operations: BTreeMap<String, IgnoredAny>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelMetadata {
    #[serde(default)]
    service_id: String,
    #[serde(default)]
    service_abbreviation: String,
    #[serde(default)]
    service_full_name: String,
    #[serde(default)]
    protocol: Option<String>,
}

impl ServiceModel {
    /// Load the model at `location`.
    ///
    /// The package alias always comes from the caller; the identity fields in
    /// the file are descriptive only.
    pub fn extract(location: &ModelLocation, service_alias: &str) -> Result<Self> {
        let content = std::fs::read_to_string(location.path())
            .map_err(|e| Error::model_parse(location.path(), e.to_string()))?;
        Self::parse(&content, location.path(), service_alias, &location.version)
    }

    /// Parse model content already read from `path`
    pub fn parse(content: &str, path: &Path, service_alias: &str, version: &str) -> Result<Self> {
        let document: ModelDocument =
            serde_json::from_str(content).map_err(|e| Error::model_parse(path, e.to_string()))?;

        match document.metadata.protocol.as_deref() {
            Some(protocol) if !KNOWN_PROTOCOLS.contains(&protocol) => {
                log::warn!(
                    "Model {} uses unrecognised protocol '{}', continuing",
                    path.display(),
                    protocol
                );
            }
            _ => {}
        }

        // BTreeMap keys are already sorted
        let operation_names: Vec<String> = document.operations.into_keys().collect();
        log::debug!(
            "Loaded {} operations from {}",
            operation_names.len(),
            path.display()
        );

        Ok(Self {
            service_id: document.metadata.service_id,
            abbreviation: document.metadata.service_abbreviation,
            full_name: document.metadata.service_full_name,
            package_alias: service_alias.trim().to_lowercase(),
            model_version: version.to_string(),
            operation_names,
        })
    }
}
