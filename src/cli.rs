use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::{ColorToken, FileColor, RenderConfig};
use crate::output::ColorMode;

#[derive(Parser, Debug)]
#[command(name = "foldertree", version)]
#[command(about = "Print a colorful directory tree with a size summary", long_about = None)]
pub struct Cli {
    /// Root folder to display (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Hide folder and file icons
    #[arg(long)]
    pub no_icons: bool,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, value_name = "WHEN")]
    pub color: ColorMode,

    /// Color of the root folder, e.g. `#FE83F8` or `bold magenta`
    #[arg(long, value_name = "COLOR")]
    pub root_color: Option<ColorToken>,

    /// Folder colors cycled by depth, comma separated
    #[arg(long, value_name = "COLORS", value_delimiter = ',')]
    pub depth_colors: Vec<ColorToken>,

    /// Color for a file extension, e.g. `rs=bright_red` (repeatable)
    #[arg(long = "file-color", value_name = "EXT=COLOR")]
    pub file_colors: Vec<FileColor>,

    /// After the tree, list folders and files whose name contains KEYWORD
    #[arg(short, long, value_name = "KEYWORD")]
    pub search: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn root_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn render_config(&self) -> RenderConfig {
        let mut config = RenderConfig {
            show_icons: !self.no_icons,
            ..RenderConfig::default()
        };
        if let Some(root_color) = self.root_color.clone() {
            config.root_color = root_color;
        }
        if !self.depth_colors.is_empty() {
            config.depth_colors = self.depth_colors.clone();
        }
        config.with_file_colors(self.file_colors.iter().cloned())
    }

    /// The trimmed search keyword, if one was given and is not blank.
    pub fn search_keyword(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
    }
}
