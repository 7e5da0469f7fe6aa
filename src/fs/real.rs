use anyhow::Result;
use async_trait::async_trait;
use std::fs::{DirEntry, FileType};
use std::path::Path;
use tokio::task;

use crate::models::{DirListing, EntryKind, FsEntry, NodeError};

use super::FileSystem;

pub struct RealFileSystem;

fn entry_kind(file_type: &FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

/// Kind, size and metadata error for one listed entry. Symlinks are
/// resolved to their target; a dangling link is a file of size 0 carrying
/// the resolution error.
fn describe(entry: &DirEntry) -> (EntryKind, u64, Option<NodeError>) {
    let file_type = match entry.file_type() {
        Ok(file_type) => file_type,
        Err(err) => return (EntryKind::Other, 0, Some(NodeError::from_io(&err))),
    };

    if file_type.is_symlink() {
        return match std::fs::metadata(entry.path()) {
            Ok(target) if target.is_dir() => (EntryKind::DirectoryLink, 0, None),
            Ok(target) if target.is_file() => (EntryKind::File, target.len(), None),
            Ok(_) => (EntryKind::Other, 0, None),
            Err(err) => (EntryKind::File, 0, Some(NodeError::from_io(&err))),
        };
    }

    let kind = entry_kind(&file_type);
    if kind != EntryKind::File {
        return (kind, 0, None);
    }
    match entry.metadata() {
        Ok(metadata) => (kind, metadata.len(), None),
        Err(err) => (kind, 0, Some(NodeError::from_io(&err))),
    }
}

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<DirListing> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || -> Result<DirListing> {
            let mut listing = DirListing::default();
            for entry in std::fs::read_dir(&dir)? {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        tracing::debug!(dir = %dir.display(), %err, "entry could not be enumerated");
                        listing.error.get_or_insert_with(|| NodeError::from_io(&err));
                        continue;
                    }
                };
                let (kind, size, error) = describe(&entry);
                listing.entries.push(FsEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    path: entry.path(),
                    kind,
                    size,
                    error,
                });
            }
            Ok(listing)
        })
        .await?
    }

    async fn stat(&self, path: &Path) -> Result<FsEntry> {
        let resolved = tokio::fs::canonicalize(path).await?;
        let metadata = tokio::fs::metadata(&resolved).await?;
        let name = resolved
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| resolved.as_os_str().to_string_lossy().into_owned());

        Ok(FsEntry {
            name,
            kind: entry_kind(&metadata.file_type()),
            size: if metadata.is_file() { metadata.len() } else { 0 },
            error: None,
            path: resolved,
        })
    }
}
