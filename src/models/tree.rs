use std::path::Path;

use super::NodeError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeKind {
    Folder,
    File,
}

/// A visited node with the attributes its styling is derived from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectoryEntry {
    pub name: String,
    pub kind: NodeKind,
    /// Ancestors between this node and the walk root; the root is 0.
    pub depth: usize,
    /// Always 0 for folders.
    pub size_bytes: u64,
    /// Lowercase, without the dot; empty when there is none.
    pub extension: String,
}

impl DirectoryEntry {
    pub fn folder(name: impl Into<String>, depth: usize) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Folder,
            depth,
            size_bytes: 0,
            extension: String::new(),
        }
    }

    pub fn file(name: impl Into<String>, depth: usize, size_bytes: u64) -> Self {
        let name = name.into();
        let extension = extension_of(&name);
        Self {
            name,
            kind: NodeKind::File,
            depth,
            size_bytes,
            extension,
        }
    }
}

/// `notes.TXT` -> `txt`, `a.tar.gz` -> `gz`; dotfiles like `.gitignore`
/// have no extension.
pub(crate) fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeNode {
    pub entry: DirectoryEntry,
    pub error: Option<NodeError>,
    pub children: Vec<TreeNode>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TraversalSummary {
    pub folder_count: u64,
    pub file_count: u64,
    pub total_size_bytes: u64,
}

impl TraversalSummary {
    pub fn total_items(&self) -> u64 {
        self.folder_count + self.file_count
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WalkStatus {
    #[default]
    Complete,
    Cancelled,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirTree {
    pub root: TreeNode,
    pub summary: TraversalSummary,
    pub status: WalkStatus,
}
