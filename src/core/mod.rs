pub mod render;
pub mod search;
pub mod size;
pub mod style;
pub mod walk;

use std::path::Path;

use crate::config::RenderConfig;
use crate::error::WalkError;
use crate::fs::FileSystem;
use crate::models::{StyledLine, TraversalSummary, WalkStatus};

pub use walk::WalkOptions;

/// The rendered tree and the totals gathered while walking it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkReport {
    pub lines: Vec<StyledLine>,
    pub summary: TraversalSummary,
    pub status: WalkStatus,
}

/// Walk `root` and render it with `config`.
pub async fn walk<F: FileSystem>(
    fs: &F,
    root: &Path,
    config: &RenderConfig,
    options: &WalkOptions,
) -> Result<WalkReport, WalkError> {
    let tree = walk::walk_dir(fs, root, options).await?;
    Ok(WalkReport {
        lines: render::render_tree(&tree, config),
        summary: tree.summary,
        status: tree.status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{MockFileSystem, mock_dir, mock_file};

    #[tokio::test]
    async fn walk_renders_lines_and_summary() {
        let fs = MockFileSystem::default();
        fs.set_dir_entries("/proj", vec![mock_dir("/proj/src"), mock_file("/proj/a.md", 12)]);
        fs.set_dir_entries("/proj/src", vec![mock_file("/proj/src/lib.rs", 30)]);
        let config = RenderConfig {
            show_icons: false,
            ..RenderConfig::default()
        };

        let report = walk(&fs, Path::new("/proj"), &config, &WalkOptions::default())
            .await
            .unwrap();

        let text: Vec<String> = report.lines.iter().map(StyledLine::text).collect();
        assert_eq!(text, vec!["proj", "├── src", "│   └── lib.rs", "└── a.md"]);
        assert_eq!(report.summary.total_items(), 4);
        assert_eq!(report.summary.total_size_bytes, 42);
    }

    #[tokio::test]
    async fn missing_root_renders_nothing() {
        let fs = MockFileSystem::default();
        let result = walk(
            &fs,
            Path::new("/missing"),
            &RenderConfig::default(),
            &WalkOptions::default(),
        )
        .await;
        assert!(matches!(result, Err(WalkError::PathNotFound { .. })));
    }
}
