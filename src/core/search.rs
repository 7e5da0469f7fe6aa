use std::path::{Path, PathBuf};

use anyhow::Context;
use regex::{Regex, RegexBuilder};

use crate::fs::FileSystem;
use crate::models::{EntryKind, WalkStatus};

use super::walk::{WalkOptions, sort_entries};

/// A folder or file whose name contains the search keyword.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchMatch {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Matches in tree order. `status` is `Cancelled` when the search stopped
/// early, in which case `matches` holds only what was found before that.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchReport {
    pub matches: Vec<SearchMatch>,
    pub status: WalkStatus,
}

/// Find every entry below `root` whose name contains `keyword`, ignoring
/// case. Folders that cannot be listed are skipped; linked folders are
/// matched but not followed.
pub async fn search<F: FileSystem>(
    fs: &F,
    root: &Path,
    keyword: &str,
    options: &WalkOptions,
) -> anyhow::Result<SearchReport> {
    let matcher = RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
        .with_context(|| format!("Invalid search keyword: {keyword}"))?;

    let root = fs
        .stat(root)
        .await
        .with_context(|| format!("Cannot search {}", root.display()))?;

    let mut matches = Vec::new();
    search_dir(fs, &root.path, &matcher, options, &mut matches).await;
    let status = if options.is_cancelled() {
        tracing::warn!(keyword, "search cancelled, matches are partial");
        WalkStatus::Cancelled
    } else {
        WalkStatus::Complete
    };
    tracing::debug!(keyword, found = matches.len(), "search finished");
    Ok(SearchReport { matches, status })
}

async fn search_dir<F: FileSystem>(
    fs: &F,
    dir: &Path,
    matcher: &Regex,
    options: &WalkOptions,
    matches: &mut Vec<SearchMatch>,
) {
    let mut entries = match fs.read_dir(dir).await {
        Ok(listing) => listing.entries,
        Err(err) => {
            tracing::debug!(dir = %dir.display(), %err, "skipping during search");
            return;
        }
    };
    sort_entries(&mut entries);

    for entry in entries {
        if options.is_cancelled() {
            return;
        }
        if matcher.is_match(&entry.name) {
            matches.push(SearchMatch {
                name: entry.name.clone(),
                path: entry.path.clone(),
                kind: entry.kind,
            });
        }
        if entry.is_dir() {
            Box::pin(search_dir(fs, &entry.path, matcher, options, matches)).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{MockFileSystem, mock_dir, mock_entry, mock_file};
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;

    fn project() -> MockFileSystem {
        let fs = MockFileSystem::default();
        fs.set_dir_entries(
            "/p",
            vec![
                mock_file("/p/README.md", 1),
                mock_dir("/p/Scripts"),
                mock_dir("/p/locked"),
            ],
        );
        fs.set_dir_entries(
            "/p/Scripts",
            vec![
                mock_file("/p/Scripts/script2.sh", 1),
                mock_file("/p/Scripts/script1.py", 1),
                mock_file("/p/Scripts/notes.txt", 1),
            ],
        );
        fs.set_permission_denied("/p/locked");
        fs
    }

    fn names(report: &SearchReport) -> Vec<&str> {
        report.matches.iter().map(|m| m.name.as_str()).collect()
    }

    #[tokio::test]
    async fn matches_are_case_insensitive_and_in_tree_order() {
        let fs = project();
        let report = search(&fs, Path::new("/p"), "SCRIPT", &WalkOptions::default())
            .await
            .unwrap();
        assert_eq!(names(&report), vec!["Scripts", "script1.py", "script2.sh"]);
        assert_eq!(report.status, WalkStatus::Complete);
        assert_eq!(report.matches[0].kind, EntryKind::Directory);
        assert_eq!(report.matches[1].path, PathBuf::from("/p/Scripts/script1.py"));
    }

    #[tokio::test]
    async fn keyword_is_literal_not_a_pattern() {
        let fs = project();
        let report = search(&fs, Path::new("/p"), ".md", &WalkOptions::default())
            .await
            .unwrap();
        assert_eq!(names(&report), vec!["README.md"]);

        let report = search(&fs, Path::new("/p"), "s.*", &WalkOptions::default())
            .await
            .unwrap();
        assert!(report.matches.is_empty());
        assert_eq!(report.status, WalkStatus::Complete);
    }

    #[tokio::test]
    async fn unreadable_folders_are_skipped() {
        let fs = project();
        let report = search(&fs, Path::new("/p"), "lock", &WalkOptions::default())
            .await
            .unwrap();
        assert_eq!(names(&report), vec!["locked"]);
    }

    #[tokio::test]
    async fn missing_root_is_an_error() {
        let fs = MockFileSystem::default();
        assert!(
            search(&fs, Path::new("/none"), "x", &WalkOptions::default())
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn cancelled_search_stops_early() {
        let fs = project();
        let options = WalkOptions::default().with_cancel_flag(Arc::new(AtomicBool::new(true)));
        let report = search(&fs, Path::new("/p"), "s", &options).await.unwrap();
        assert!(report.matches.is_empty());
        assert_eq!(report.status, WalkStatus::Cancelled);
    }

    #[tokio::test]
    async fn linked_folders_match_but_are_not_followed() {
        let fs = MockFileSystem::default();
        fs.set_dir_entries(
            "/p",
            vec![mock_entry("/p/notes_link", EntryKind::DirectoryLink, 0)],
        );
        fs.set_dir_entries("/p/notes_link", vec![mock_file("/p/notes_link/notes.txt", 1)]);

        let report = search(&fs, Path::new("/p"), "notes", &WalkOptions::default())
            .await
            .unwrap();
        assert_eq!(names(&report), vec!["notes_link"]);
    }
}
