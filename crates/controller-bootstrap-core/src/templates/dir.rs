//! Template root resolution and template file selection

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::RenderMode;
use crate::{Error, Result};

/// Suffix marking a file as a template; removed from output paths
pub const TEMPLATE_SUFFIX: &str = ".tpl";

/// Files an existing repository update may touch, relative to the output root
pub const DESCRIPTIVE_FILES: &[&str] = &[
    "README.md",
    "OWNERS",
    "OWNERS_ALIASES",
    "CONTRIBUTING.md",
    "CODE_OF_CONDUCT.md",
    "GOVERNANCE.md",
    "SECURITY.md",
];

/// A template path selected for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePath {
    /// Path of the template on disk
    pub path: PathBuf,
    /// Output path relative to the output root
    pub destination: PathBuf,
}

/// Represents a validated template root directory
#[derive(Debug, Clone)]
pub struct TemplateDir {
    root_dir: PathBuf,
}

impl TemplateDir {
    /// Open a template root, which must be an existing directory
    pub fn open(root_dir: impl Into<PathBuf>) -> Result<Self> {
        let root_dir = root_dir.into();
        if !root_dir.is_dir() {
            return Err(Error::template(
                &root_dir,
                "template directory not found",
            ));
        }
        Ok(Self { root_dir })
    }

    /// Returns a displayable version of the template root
    pub fn display(&self) -> std::path::Display<'_> {
        self.root_dir.display()
    }

    /// Template files to render for `mode`, sorted by path.
    ///
    /// Fresh scaffolds take every non-directory entry below the root. Updates
    /// of an existing repository take only templates whose output path is in
    /// [`DESCRIPTIVE_FILES`].
    pub fn template_paths(&self, mode: RenderMode) -> Result<Vec<TemplatePath>> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.root_dir).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                Error::template(
                    e.path().unwrap_or(&self.root_dir),
                    format!("failed to read template directory: {}", e),
                )
            })?;
            if entry.file_type().is_dir() {
                continue;
            }

            let relative = entry.path().strip_prefix(&self.root_dir).map_err(|e| {
                Error::template(entry.path(), format!("failed to build relative path: {}", e))
            })?;
            let destination = destination_for(relative);

            if mode == RenderMode::UpdateExisting && !is_descriptive(&destination) {
                log::debug!("Skipping {} for existing repository", relative.display());
                continue;
            }
            paths.push(TemplatePath {
                path: entry.path().to_path_buf(),
                destination,
            });
        }
        Ok(paths)
    }
}

/// Output path for a template path relative to the template root
pub fn destination_for(relative: &Path) -> PathBuf {
    let stem = relative
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(TEMPLATE_SUFFIX))
        .filter(|stem| !stem.is_empty());
    match stem {
        Some(stem) => relative.with_file_name(stem),
        None => relative.to_path_buf(),
    }
}

fn is_descriptive(destination: &Path) -> bool {
    DESCRIPTIVE_FILES
        .iter()
        .any(|name| destination == Path::new(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn template_tree(root: &Path) -> Result<()> {
        fs::create_dir_all(root.join("apis/v1alpha1"))?;
        fs::create_dir_all(root.join("docs"))?;
        fs::write(root.join("README.md.tpl"), "# {{ service_id }}")?;
        fs::write(root.join("OWNERS.tpl"), "approvers: []")?;
        fs::write(root.join("OWNERS_ALIASES"), "aliases: {}")?;
        fs::write(root.join("Makefile.tpl"), "build:")?;
        fs::write(root.join("apis/v1alpha1/doc.go.tpl"), "package v1alpha1")?;
        fs::write(root.join("docs/README.md.tpl"), "nested")?;
        Ok(())
    }

    fn destinations(paths: &[TemplatePath]) -> Vec<PathBuf> {
        paths.iter().map(|p| p.destination.clone()).collect()
    }

    #[test]
    fn test_open_requires_directory() -> Result<()> {
        let root = tempdir()?;
        assert!(TemplateDir::open(root.path()).is_ok());
        assert!(matches!(
            TemplateDir::open(root.path().join("missing")),
            Err(Error::Template { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_fresh_mode_takes_every_file() -> Result<()> {
        let root = tempdir()?;
        template_tree(root.path())?;

        let dir = TemplateDir::open(root.path())?;
        let paths = dir.template_paths(RenderMode::Fresh)?;
        assert_eq!(
            destinations(&paths),
            vec![
                PathBuf::from("Makefile"),
                PathBuf::from("OWNERS"),
                PathBuf::from("OWNERS_ALIASES"),
                PathBuf::from("README.md"),
                PathBuf::from("apis/v1alpha1/doc.go"),
                PathBuf::from("docs/README.md"),
            ]
        );
        assert!(paths[0].path.ends_with("Makefile.tpl"));
        Ok(())
    }

    #[test]
    fn test_update_mode_takes_only_descriptive_files() -> Result<()> {
        let root = tempdir()?;
        template_tree(root.path())?;

        let dir = TemplateDir::open(root.path())?;
        let paths = dir.template_paths(RenderMode::UpdateExisting)?;
        assert_eq!(
            destinations(&paths),
            vec![
                PathBuf::from("OWNERS"),
                PathBuf::from("OWNERS_ALIASES"),
                PathBuf::from("README.md"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_destination_for_strips_suffix() {
        assert_eq!(
            destination_for(Path::new("cmd/controller/main.go.tpl")),
            PathBuf::from("cmd/controller/main.go")
        );
        assert_eq!(destination_for(Path::new("LICENSE")), PathBuf::from("LICENSE"));
        assert_eq!(destination_for(Path::new("a.tpl.bak")), PathBuf::from("a.tpl.bak"));
        assert_eq!(destination_for(Path::new("hack/.tpl")), PathBuf::from("hack/.tpl"));
    }
}
