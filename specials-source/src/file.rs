use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A scanned input file held fully in memory.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    content: String,
}

impl SourceFile {
    /// Read a source file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        log::debug!("read {} ({} bytes)", path.display(), content.len());

        Ok(Self { path, content })
    }

    /// Wrap in-memory text, using `path` only for reporting.
    pub fn from_text(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Iterate over the lines of the file.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.content.lines()
    }
}
