//! Locates the model file to use for a service.

use std::io;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// File name every model version directory is expected to contain
pub const MODEL_FILE_NAME: &str = "api-2.json";

/// Resolved location of a service's model file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelLocation {
    /// Service directory name the model was looked up under
    pub service: String,
    /// Selected version directory name (e.g. "2015-09-21")
    pub version: String,
    /// Path to the `api-2.json` file (not checked for existence)
    pub path: PathBuf,
}

impl ModelLocation {
    /// Path to the model file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Find the model file for `service` under `model_root`.
///
/// Without an explicit version the lexicographically smallest version
/// directory is chosen. This is a plain string ordering, not an age or
/// semantic-version comparison.
pub fn locate(
    service: &str,
    model_root: &Path,
    explicit_version: Option<&str>,
) -> Result<ModelLocation> {
    let version = match explicit_version.map(str::trim).filter(|v| !v.is_empty()) {
        Some(version) => version.to_string(),
        None => first_api_version(service, model_root)?,
    };

    let path = model_root.join(service).join(&version).join(MODEL_FILE_NAME);
    log::debug!(
        "Using model version {} for service {}: {}",
        version,
        service,
        path.display()
    );

    Ok(ModelLocation {
        service: service.to_string(),
        version,
        path,
    })
}

/// Returns the first API version found for a service (e.g. "2012-10-03")
pub fn first_api_version(service: &str, model_root: &Path) -> Result<String> {
    let mut versions = api_versions(service, model_root)?;
    versions.sort();
    versions
        .into_iter()
        .next()
        .ok_or_else(|| Error::not_found(service, "no version directories found"))
}

/// Returns the version directory names found in a service directory.
///
/// Every entry must be a directory; anything else means the model root is
/// not laid out as expected.
pub fn api_versions(service: &str, model_root: &Path) -> Result<Vec<String>> {
    let service_dir = model_root.join(service);
    let entries = std::fs::read_dir(&service_dir).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::not_found(
            service,
            format!("directory {} does not exist", service_dir.display()),
        ),
        _ => Error::Io(e),
    })?;

    let mut versions = Vec::new();
    for entry in entries {
        let entry = entry?;
        // file_type() does not follow symlinks
        if !entry.file_type()?.is_dir() {
            return Err(Error::not_found(
                service,
                format!(
                    "expected only version directories in {} but found {}",
                    service_dir.display(),
                    entry.file_name().to_string_lossy()
                ),
            ));
        }
        versions.push(entry.file_name().to_string_lossy().into_owned());
    }

    if versions.is_empty() {
        return Err(Error::not_found(service, "no version directories found"));
    }
    Ok(versions)
}
