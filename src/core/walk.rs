use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::WalkError;
use crate::fs::FileSystem;
use crate::models::{
    DirListing, DirTree, DirectoryEntry, EntryKind, FsEntry, NodeError, TraversalSummary,
    TreeNode, WalkStatus,
};

/// Configuration options for directory traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Checked before each sibling; once set the walk stops and reports
    /// `WalkStatus::Cancelled` with whatever was visited so far.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl WalkOptions {
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Order children the way they are displayed: folders first, then
/// everything else, each group by case-insensitive name with exact-name
/// ties broken bytewise.
pub(crate) fn sort_entries(entries: &mut [FsEntry]) {
    entries.sort_by_cached_key(|entry| {
        (!entry.is_folder(), entry.name.to_lowercase(), entry.name.clone())
    });
}

/// Walk the directory tree rooted at `root`.
///
/// Fails only when the root itself is missing or not a directory. Every
/// failure below the root is recorded on the node it happened at and the
/// walk carries on with that node's siblings.
pub async fn walk_dir<F: FileSystem>(
    fs: &F,
    root: &Path,
    options: &WalkOptions,
) -> Result<DirTree, WalkError> {
    let root_entry = fs
        .stat(root)
        .await
        .map_err(|err| WalkError::PathNotFound {
            path: root.to_path_buf(),
            reason: err.to_string(),
        })?;

    if !root_entry.is_dir() {
        return Err(WalkError::NotADirectory(root.to_path_buf()));
    }

    let mut walk = Traversal {
        fs,
        options,
        summary: TraversalSummary::default(),
        status: WalkStatus::Complete,
    };

    walk.summary.folder_count += 1;
    let (error, children) = walk.descend(&root_entry.path, 0).await;

    if walk.status == WalkStatus::Cancelled {
        tracing::warn!(root = %root.display(), "walk cancelled, summary is partial");
    }
    tracing::info!(
        folders = walk.summary.folder_count,
        files = walk.summary.file_count,
        bytes = walk.summary.total_size_bytes,
        "walk finished"
    );

    Ok(DirTree {
        root: TreeNode {
            entry: DirectoryEntry::folder(root_entry.name, 0),
            error,
            children,
        },
        summary: walk.summary,
        status: walk.status,
    })
}

struct Traversal<'a, F> {
    fs: &'a F,
    options: &'a WalkOptions,
    summary: TraversalSummary,
    status: WalkStatus,
}

impl<F: FileSystem> Traversal<'_, F> {
    /// Visit the children of `dir`, which sits at `depth`.
    async fn descend(&mut self, dir: &Path, depth: usize) -> (Option<NodeError>, Vec<TreeNode>) {
        let DirListing { mut entries, error } = match self.fs.read_dir(dir).await {
            Ok(listing) => listing,
            Err(err) => {
                let error = NodeError::from_anyhow(&err);
                tracing::debug!(dir = %dir.display(), error = %error.message, "not descending");
                return (Some(error), Vec::new());
            }
        };
        tracing::trace!(dir = %dir.display(), count = entries.len(), "listed");
        if let Some(error) = error.as_ref() {
            tracing::debug!(dir = %dir.display(), error = %error.message, "listing incomplete");
        }

        sort_entries(&mut entries);

        let child_depth = depth + 1;
        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            if self.status == WalkStatus::Cancelled || self.options.is_cancelled() {
                self.status = WalkStatus::Cancelled;
                break;
            }

            let node = if entry.kind == EntryKind::Directory {
                self.summary.folder_count += 1;
                let (error, grandchildren) = Box::pin(self.descend(&entry.path, child_depth)).await;
                TreeNode {
                    entry: DirectoryEntry::folder(entry.name, child_depth),
                    error,
                    children: grandchildren,
                }
            } else if entry.kind == EntryKind::DirectoryLink {
                // Linked folders are not followed, so link cycles cannot recurse.
                self.summary.folder_count += 1;
                TreeNode {
                    entry: DirectoryEntry::folder(entry.name, child_depth),
                    error: entry.error,
                    children: Vec::new(),
                }
            } else {
                let size = match entry.error.as_ref() {
                    Some(error) => {
                        tracing::debug!(path = %entry.path.display(), error = %error.message, "size unavailable");
                        0
                    }
                    None => entry.size,
                };
                self.summary.file_count += 1;
                self.summary.total_size_bytes += size;
                TreeNode {
                    entry: DirectoryEntry::file(entry.name, child_depth, size),
                    error: entry.error,
                    children: Vec::new(),
                }
            };

            children.push(node);
        }

        (error, children)
    }
}
