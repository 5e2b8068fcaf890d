use std::path::{Path, PathBuf};

use eyre::{Context, Result};

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already held identical content and was left untouched
    Unchanged,
}

/// A generated artifact waiting to be persisted.
///
/// Writing compares against the existing file first so regenerating an
/// unchanged project does not touch the file's modification time.
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file unless the same content is already on disk
    pub fn write(&self) -> Result<WriteResult> {
        if self.exists() {
            let current = std::fs::read_to_string(&self.path)
                .wrap_err_with(|| format!("failed to read '{}'", self.path.display()))?;
            if current == self.content {
                return Ok(WriteResult::Unchanged);
            }
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}
