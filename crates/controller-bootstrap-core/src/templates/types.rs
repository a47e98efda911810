//! Template-specific types for repository generation

use std::path::{Path, PathBuf};

/// Which templates a run renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    /// Every file under the template root
    #[default]
    Fresh,
    /// Only the descriptive files of an already generated repository
    UpdateExisting,
}

impl RenderMode {
    /// Mode for the `existing_repo` option
    pub fn from_existing(existing_repo: bool) -> Self {
        if existing_repo {
            Self::UpdateExisting
        } else {
            Self::Fresh
        }
    }
}

/// One template read from the template root
#[derive(Debug, Clone)]
pub struct TemplateFile {
    /// Path of the template on disk
    pub path: PathBuf,
    /// Output path relative to the output root
    pub destination: PathBuf,
    /// Unrendered content
    pub content: String,
}

/// A template rendered against the run's context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Output path relative to the output root
    pub destination: PathBuf,
    /// Rendered content
    pub content: Vec<u8>,
}

impl RenderedFile {
    /// Output path below `root`
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.destination)
    }
}
