use std::io;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    /// A symlink whose target is a directory. Shown as a folder, never
    /// descended.
    DirectoryLink,
    File,
    Other,
}

/// One child of a listed directory, as reported by the filesystem layer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
    /// Byte length for regular files and links to them, 0 for everything
    /// else.
    pub size: u64,
    /// Set when the entry was listed but its metadata could not be read.
    pub error: Option<NodeError>,
}

impl FsEntry {
    /// A real directory the walk can descend into.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Displayed and counted as a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, EntryKind::Directory | EntryKind::DirectoryLink)
    }
}

/// The children of one directory. `error` is set when some entries could
/// not be enumerated; `entries` still holds the ones that could.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DirListing {
    pub entries: Vec<FsEntry>,
    pub error: Option<NodeError>,
}

impl From<Vec<FsEntry>> for DirListing {
    fn from(entries: Vec<FsEntry>) -> Self {
        Self {
            entries,
            error: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeErrorKind {
    AccessDenied,
    Io,
}

/// A contained, per-node failure. Rendered inline, never fatal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NodeError {
    pub kind: NodeErrorKind,
    pub message: String,
}

impl NodeError {
    pub fn from_io(err: &io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::PermissionDenied => NodeErrorKind::AccessDenied,
            _ => NodeErrorKind::Io,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }

    /// Classify by the first `io::Error` in the chain, if any.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        err.chain()
            .find_map(|cause| cause.downcast_ref::<io::Error>())
            .map(Self::from_io)
            .unwrap_or_else(|| Self {
                kind: NodeErrorKind::Io,
                message: err.to_string(),
            })
    }

    pub fn marker(&self) -> String {
        match self.kind {
            NodeErrorKind::AccessDenied => "⚠ permission denied".to_owned(),
            NodeErrorKind::Io => format!("⚠ {}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn permission_denied_is_access_denied() {
        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        let node_error = NodeError::from_io(&err);
        assert_eq!(node_error.kind, NodeErrorKind::AccessDenied);
        assert_eq!(node_error.marker(), "⚠ permission denied");
    }

    #[test]
    fn other_io_errors_keep_their_message() {
        let err = io::Error::new(io::ErrorKind::NotFound, "vanished");
        let node_error = NodeError::from_io(&err);
        assert_eq!(node_error.kind, NodeErrorKind::Io);
        assert_eq!(node_error.marker(), "⚠ vanished");
    }

    #[test]
    fn anyhow_chain_is_searched_for_io_errors() {
        let err: anyhow::Result<()> =
            Err(io::Error::from(io::ErrorKind::PermissionDenied)).context("reading /secret");
        let node_error = NodeError::from_anyhow(&err.unwrap_err());
        assert_eq!(node_error.kind, NodeErrorKind::AccessDenied);

        let node_error = NodeError::from_anyhow(&anyhow::anyhow!("boom"));
        assert_eq!(node_error.kind, NodeErrorKind::Io);
        assert_eq!(node_error.message, "boom");
    }
}
