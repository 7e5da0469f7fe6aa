use crate::config::{ColorToken, RenderConfig};
use crate::models::{
    DirTree, NodeError, NodeKind, Span, StyledLine, TraversalSummary, TreeNode, WalkStatus,
};

use super::search::SearchReport;
use super::size::format_size;
use super::style::style_for;

const MID_BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUATION: &str = "│   ";
const GAP: &str = "    ";

const ERROR_COLOR: &str = "red";

/// Render a walked tree: the root line followed by one line per node.
pub fn render_tree(tree: &DirTree, config: &RenderConfig) -> Vec<StyledLine> {
    let mut lines = Vec::new();
    let root = &tree.root;
    let style = style_for(&root.entry, config);
    lines.push(StyledLine::new(vec![Span::styled(
        format!("{}{}", style.icon, root.entry.name),
        &style.color,
    )]));

    if let Some(error) = root.error.as_ref() {
        lines.push(marker_line(String::new(), error, !root.children.is_empty()));
    }

    render_children(&mut lines, &root.children, &[], config);
    lines
}

fn render_children(
    lines: &mut Vec<StyledLine>,
    children: &[TreeNode],
    ancestor_has_more: &[bool],
    config: &RenderConfig,
) {
    let prefix: String = ancestor_has_more
        .iter()
        .map(|&has_more| if has_more { CONTINUATION } else { GAP })
        .collect();

    for (index, node) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();
        let connector = if is_last { LAST_BRANCH } else { MID_BRANCH };
        let style = style_for(&node.entry, config);

        let mut spans = vec![
            Span::plain(prefix.clone()),
            Span::styled(
                format!("{connector}{}{}", style.icon, node.entry.name),
                &style.color,
            ),
        ];

        match (node.entry.kind, node.error.as_ref()) {
            (NodeKind::File, Some(error)) => {
                spans.push(Span::styled(format!(" {}", error.marker()), &error_color()));
                lines.push(StyledLine::new(spans));
            }
            (NodeKind::Folder, Some(error)) => {
                lines.push(StyledLine::new(spans));
                let nested = format!("{prefix}{}", if is_last { GAP } else { CONTINUATION });
                lines.push(marker_line(nested, error, !node.children.is_empty()));
            }
            (_, None) => lines.push(StyledLine::new(spans)),
        }

        if !node.children.is_empty() {
            let mut next_ancestor_has_more = ancestor_has_more.to_vec();
            next_ancestor_has_more.push(!is_last);
            render_children(lines, &node.children, &next_ancestor_has_more, config);
        }
    }
}

/// The line shown under a folder that could not be fully listed. It comes
/// before whatever children were still read.
fn marker_line(prefix: String, error: &NodeError, has_children: bool) -> StyledLine {
    let connector = if has_children { MID_BRANCH } else { LAST_BRANCH };
    StyledLine::new(vec![
        Span::plain(prefix),
        Span::styled(format!("{connector}{}", error.marker()), &error_color()),
    ])
}

fn error_color() -> ColorToken {
    ColorToken::builtin(ERROR_COLOR)
}

pub fn render_summary(
    summary: &TraversalSummary,
    status: WalkStatus,
    config: &RenderConfig,
) -> Vec<StyledLine> {
    let icon = |glyph: &'static str| if config.show_icons { glyph } else { "" };

    let mut lines = vec![
        StyledLine::blank(),
        StyledLine::new(vec![Span::styled(
            "Summary:",
            &ColorToken::builtin("bold green"),
        )]),
        StyledLine::blank(),
        StyledLine::new(vec![
            Span::plain(icon("📂 ")),
            Span::styled(summary.folder_count.to_string(), &ColorToken::builtin("cyan")),
            Span::plain(" folders"),
        ]),
        StyledLine::new(vec![
            Span::plain(icon("📄 ")),
            Span::styled(summary.file_count.to_string(), &ColorToken::builtin("magenta")),
            Span::plain(" files"),
        ]),
        StyledLine::new(vec![
            Span::plain(format!("{}Total items: ", icon("📦 "))),
            Span::styled(summary.total_items().to_string(), &ColorToken::builtin("yellow")),
        ]),
        StyledLine::blank(),
        StyledLine::new(vec![
            Span::styled("Total size:", &ColorToken::builtin("bold cyan")),
            Span::plain(format!(
                " {} ({} bytes)",
                format_size(summary.total_size_bytes),
                summary.total_size_bytes
            )),
        ]),
    ];

    if status == WalkStatus::Cancelled {
        lines.push(StyledLine::new(vec![Span::styled(
            "⚠ walk cancelled, counts are partial",
            &ColorToken::builtin("yellow"),
        )]));
    }

    lines
}

pub fn render_search(keyword: &str, report: &SearchReport) -> Vec<StyledLine> {
    let matches = &report.matches;
    let mut lines = vec![
        StyledLine::blank(),
        StyledLine::new(vec![
            Span::styled("Searching for:", &ColorToken::builtin("bold yellow")),
            Span::plain(" "),
            Span::styled(keyword, &ColorToken::builtin("cyan")),
        ]),
        StyledLine::blank(),
    ];

    if report.status == WalkStatus::Cancelled {
        lines.push(StyledLine::new(vec![Span::styled(
            format!("⚠ search cancelled, {} match(es) found before stopping", matches.len()),
            &ColorToken::builtin("yellow"),
        )]));
        if matches.is_empty() {
            return lines;
        }
        lines.push(StyledLine::blank());
    } else if matches.is_empty() {
        lines.push(StyledLine::new(vec![Span::styled(
            "No matches found.",
            &ColorToken::builtin("bold red"),
        )]));
        return lines;
    }

    if report.status == WalkStatus::Complete {
        lines.push(StyledLine::new(vec![Span::styled(
            format!("Found {} match(es):", matches.len()),
            &ColorToken::builtin("bold green"),
        )]));
        lines.push(StyledLine::blank());
    }

    for (index, found) in matches.iter().enumerate() {
        lines.push(StyledLine::new(vec![
            Span::plain(format!("{} ", index + 1)),
            Span::styled(found.name.as_str(), &ColorToken::builtin("cyan")),
            Span::plain(format!(" → {}", found.path.display())),
        ]));
    }

    lines
}
