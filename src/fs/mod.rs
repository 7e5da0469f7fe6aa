mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::{MockFileSystem, mock_dir, mock_entry, mock_file};

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::{DirListing, FsEntry};

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// List the direct children of `dir`, in no particular order. Fails
    /// only when `dir` cannot be opened at all.
    async fn read_dir(&self, dir: &Path) -> Result<DirListing>;

    /// Resolve a walk root. The returned entry carries the resolved path
    /// and the name to display for it.
    async fn stat(&self, path: &Path) -> Result<FsEntry>;
}
