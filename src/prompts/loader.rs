//! Prompt template loader
//!
//! Reads a template file from the prompts directory. There is no fallback:
//! a missing template is an error carrying the resolved path.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::TemplateKind;

/// Errors from template loading
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt template not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read prompt template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Loads prompt templates from a directory
pub struct PromptLoader {
    dir: PathBuf,
}

impl PromptLoader {
    /// Create a loader rooted at the given prompts directory
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Resolve the on-disk path for a template kind
    pub fn path_for(&self, kind: TemplateKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    /// Load the template for the given kind
    pub fn load(&self, kind: TemplateKind) -> Result<String, PromptError> {
        let path = self.path_for(kind);
        if !path.is_file() {
            return Err(PromptError::NotFound(path));
        }

        debug!(path = %path.display(), %kind, "Loading prompt template");
        std::fs::read_to_string(&path).map_err(|source| PromptError::Io { path, source })
    }
}
