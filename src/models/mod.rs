mod entry;
mod line;
mod tree;

pub use entry::{DirListing, EntryKind, FsEntry, NodeError, NodeErrorKind};
pub use line::{Span, StyledLine};
pub use tree::{DirTree, DirectoryEntry, NodeKind, TraversalSummary, TreeNode, WalkStatus};
