//! Test utilities for controller-bootstrap integration tests

// Internal imports (std, crate)
use std::fs;
use std::path::{Path, PathBuf};

// External imports (alphabetized)
use tempfile::TempDir;

/// Creates a temporary directory for test inputs and outputs
pub fn create_temp_dir() -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;
    let temp_path = temp_dir.path().to_path_buf();
    Ok((temp_dir, temp_path))
}

/// Creates a model root with one service model and returns the root
pub fn create_test_model_root(dir: &Path) -> anyhow::Result<PathBuf> {
    let root = dir.join("models");
    let version_dir = root.join("sns/2010-03-31");
    fs::create_dir_all(&version_dir)?;
    fs::write(
        version_dir.join("api-2.json"),
        r#"{
  "version": "2.0",
  "metadata": {
    "apiVersion": "2010-03-31",
    "protocol": "query",
    "serviceAbbreviation": "Amazon SNS",
    "serviceFullName": "Amazon Simple Notification Service",
    "serviceId": "SNS"
  },
  "operations": {
    "CreatePlatformApplication": {"name": "CreatePlatformApplication"},
    "CreateTopic": {"name": "CreateTopic"},
    "DeleteTopic": {"name": "DeleteTopic"},
    "ListTopics": {"name": "ListTopics"}
  },
  "shapes": {}
}"#,
    )?;
    Ok(root)
}

/// Creates a template tree with descriptive and source templates
pub fn create_test_templates(dir: &Path) -> anyhow::Result<PathBuf> {
    let root = dir.join("template");
    fs::create_dir_all(root.join("cmd/controller"))?;
    fs::write(
        root.join("README.md.tpl"),
        "# {{ service_full_name }} controller\n",
    )?;
    fs::write(root.join("OWNERS.tpl"), "approvers:\n- {{ service_package_name }}\n")?;
    fs::write(
        root.join("cmd/controller/main.go.tpl"),
        "package main\n\n// resources: {% for crd in crd_names %}{{ crd | snake_case }} {% endfor %}\n",
    )?;
    Ok(root)
}
