use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{DirListing, EntryKind, FsEntry, NodeError};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(DirListing),
    Err(String),
    Io(io::ErrorKind),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    responses: HashMap<PathBuf, Response>,
    kinds: HashMap<PathBuf, EntryKind>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .responses
            .insert(dir.into(), Response::Ok(entries.into()));
    }

    /// A listing that yields `entries` but failed to enumerate the rest.
    pub fn set_partial_listing(
        &self,
        dir: impl Into<PathBuf>,
        entries: Vec<FsEntry>,
        error: io::ErrorKind,
    ) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        let listing = DirListing {
            entries,
            error: Some(NodeError::from_io(&io::Error::from(error))),
        };
        inner.responses.insert(dir.into(), Response::Ok(listing));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .responses
            .insert(dir.into(), Response::Err(message.into()));
    }

    pub fn set_permission_denied(&self, dir: impl Into<PathBuf>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .responses
            .insert(dir.into(), Response::Io(io::ErrorKind::PermissionDenied));
    }

    /// Override what `stat` reports for a path. Paths with a registered
    /// `read_dir` response are directories unless overridden.
    pub fn set_kind(&self, path: impl Into<PathBuf>, kind: EntryKind) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.kinds.insert(path.into(), kind);
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

pub fn mock_dir(path: &str) -> FsEntry {
    mock_entry(path, EntryKind::Directory, 0)
}

pub fn mock_file(path: &str, size: u64) -> FsEntry {
    mock_entry(path, EntryKind::File, size)
}

pub fn mock_entry(path: &str, kind: EntryKind, size: u64) -> FsEntry {
    let path = PathBuf::from(path);
    FsEntry {
        name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        path,
        kind,
        size,
        error: None,
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<DirListing> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.responses.get(dir) {
            Some(Response::Ok(listing)) => Ok(listing.clone()),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            Some(Response::Io(kind)) => Err(io::Error::from(*kind).into()),
            None => Err(anyhow!("no mock response for {}", dir.display())),
        }
    }

    async fn stat(&self, path: &Path) -> Result<FsEntry> {
        let inner = self.inner.lock().expect("mock fs lock");
        let kind = match inner.kinds.get(path) {
            Some(kind) => *kind,
            None if inner.responses.contains_key(path) => EntryKind::Directory,
            None => return Err(io::Error::from(io::ErrorKind::NotFound).into()),
        };
        let mut found = mock_entry(&path.to_string_lossy(), kind, 0);
        if found.name.is_empty() {
            found.name = path.to_string_lossy().into_owned();
        }
        Ok(found)
    }
}
