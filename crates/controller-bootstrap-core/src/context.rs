//! The render context shared by every template of a run.

use std::path::PathBuf;

use serde::Serialize;

use crate::{config::Config, model::ServiceModel, Error, Result};

/// Values available to template substitution.
///
/// Built once per run and read-only afterwards. Field names are the variable
/// names templates refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub service_id: String,
    pub service_abbreviation: String,
    pub service_full_name: String,
    /// Lower-cased caller alias, used as the generated package name
    pub service_package_name: String,
    /// Model directory name, the alias unless overridden
    pub service_model_name: String,
    pub model_version: String,
    pub operation_names: Vec<String>,
    /// Resource names in catalog order
    pub crd_names: Vec<String>,
    pub sdk_version: String,
    pub runtime_version: String,
    pub output_path: PathBuf,
    pub existing_repo: bool,
    pub dry_run: bool,
}

impl RenderContext {
    /// Merge the extracted model, the derived resource names and the run options.
    ///
    /// Fails when the run would write to disk without an output path.
    pub fn build(model: ServiceModel, crd_names: Vec<String>, config: &Config) -> Result<Self> {
        if !config.dry_run && config.output_path.as_os_str().is_empty() {
            return Err(Error::config(
                "an output path is required unless running in dry-run mode",
            ));
        }

        Ok(Self {
            service_id: model.service_id,
            service_abbreviation: model.abbreviation,
            service_full_name: model.full_name,
            service_package_name: model.package_alias,
            service_model_name: config.service_model_name(),
            model_version: model.model_version,
            operation_names: model.operation_names,
            crd_names,
            sdk_version: config.sdk_version.clone(),
            runtime_version: config.runtime_version.clone(),
            output_path: config.output_path.clone(),
            existing_repo: config.existing_repo,
            dry_run: config.dry_run,
        })
    }

    /// Tera context for rendering
    pub fn to_tera(&self) -> Result<tera::Context> {
        tera::Context::from_serialize(self)
            .map_err(|e| Error::template("<context>", format!("Failed to serialize context: {}", e)))
    }
}
