use crate::config::{ColorToken, RenderConfig};
use crate::models::{DirectoryEntry, NodeKind};

pub const ROOT_ICON: &str = "📁 ";
pub const FOLDER_ICON: &str = "📂 ";
pub const FILE_ICON: &str = "📄 ";

/// Color and icon for one rendered entry. Derived on demand, never stored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderStyle {
    pub color: ColorToken,
    /// Empty when icons are disabled.
    pub icon: &'static str,
}

pub fn style_for(entry: &DirectoryEntry, config: &RenderConfig) -> RenderStyle {
    let (color, icon) = match entry.kind {
        NodeKind::Folder if entry.depth == 0 => (&config.root_color, ROOT_ICON),
        NodeKind::Folder => (config.folder_color(entry.depth), FOLDER_ICON),
        NodeKind::File => (config.file_color(&entry.extension), FILE_ICON),
    };

    RenderStyle {
        color: color.clone(),
        icon: if config.show_icons { icon } else { "" },
    }
}
