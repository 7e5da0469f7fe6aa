use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use termcolor::{Color, ColorSpec};

use crate::error::ConfigError;

const DEFAULT_ROOT_COLOR: &str = "#FE83F8";
const DEFAULT_FILE_COLOR: &str = "white";

const DEFAULT_DEPTH_COLORS: &[&str] = &[
    "bold #22FFC4",
    "bright_magenta",
    "bright_cyan",
    "bright_green",
    "bright_yellow",
];

const DEFAULT_FILE_TYPE_COLORS: &[(&str, &str)] = &[
    // Code
    ("py", "bright_green"),
    ("js", "bright_yellow"),
    ("html", "bright_magenta"),
    ("css", "cyan"),
    ("java", "bright_blue"),
    ("c", "blue"),
    ("cpp", "blue"),
    ("sh", "green"),
    // Documents
    ("txt", "#D8D4D4"),
    ("md", "bright_white"),
    ("pdf", "red"),
    ("doc", "bright_blue"),
    ("docx", "bright_blue"),
    ("xls", "bright_green"),
    ("xlsx", "bright_green"),
    // Images
    ("png", "magenta"),
    ("jpg", "bright_magenta"),
    ("jpeg", "bright_magenta"),
    ("gif", "bright_yellow"),
    // Logs and data
    ("log", "yellow"),
    ("csv", "cyan"),
];

/// A named color such as `bright_cyan`, `#FE83F8` or `bold #22FFC4`.
///
/// The name is kept for display and comparison; the parsed `ColorSpec`
/// is what the terminal writer applies.
#[derive(Clone, Debug)]
pub struct ColorToken {
    name: String,
    spec: ColorSpec,
}

impl ColorToken {
    /// Build a token from a compile-time name. Unknown words are ignored;
    /// the tables above are checked by tests.
    pub(crate) fn builtin(name: &'static str) -> Self {
        Self {
            name: name.to_owned(),
            spec: parse_spec(name).unwrap_or_default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn spec(&self) -> &ColorSpec {
        &self.spec
    }
}

impl PartialEq for ColorToken {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ColorToken {}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for ColorToken {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = parse_spec(s)?;
        Ok(Self {
            name: s.split_whitespace().collect::<Vec<_>>().join(" "),
            spec,
        })
    }
}

fn parse_spec(token: &str) -> Result<ColorSpec, ConfigError> {
    let invalid = || ConfigError::InvalidColor(token.to_owned());

    let mut spec = ColorSpec::new();
    let mut words = token.split_whitespace().peekable();
    if words.peek().is_none() {
        return Err(invalid());
    }

    for word in words {
        match word.to_ascii_lowercase().as_str() {
            "bold" => {
                spec.set_bold(true);
            }
            "dim" => {
                spec.set_dimmed(true);
            }
            "italic" => {
                spec.set_italic(true);
            }
            "underline" => {
                spec.set_underline(true);
            }
            other => {
                let (intense, base) = match other.strip_prefix("bright_") {
                    Some(base) => (true, base),
                    None => (false, other),
                };
                let color = named_color(base)
                    .or_else(|| if intense { None } else { hex_color(base) })
                    .ok_or_else(invalid)?;
                spec.set_fg(Some(color));
                if intense {
                    spec.set_intense(true);
                }
            }
        }
    }

    Ok(spec)
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        _ => return None,
    };
    Some(color)
}

fn hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// An `EXT=COLOR` pair from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileColor {
    pub extension: String,
    pub color: ColorToken,
}

impl FromStr for FileColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (extension, color) = s
            .split_once('=')
            .ok_or_else(|| ConfigError::InvalidFileColor(s.to_owned()))?;
        let extension = extension.trim().trim_start_matches('.').to_lowercase();
        if extension.is_empty() {
            return Err(ConfigError::InvalidFileColor(s.to_owned()));
        }
        Ok(Self {
            extension,
            color: color.parse()?,
        })
    }
}

/// Display settings for a rendered tree.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub show_icons: bool,
    pub root_color: ColorToken,
    /// Folder colors, cycled by depth.
    pub depth_colors: Vec<ColorToken>,
    /// Keyed by lowercase extension without the leading dot.
    pub file_type_colors: HashMap<String, ColorToken>,
    pub default_file_color: ColorToken,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_icons: true,
            root_color: ColorToken::builtin(DEFAULT_ROOT_COLOR),
            depth_colors: DEFAULT_DEPTH_COLORS
                .iter()
                .map(|name| ColorToken::builtin(*name))
                .collect(),
            file_type_colors: DEFAULT_FILE_TYPE_COLORS
                .iter()
                .map(|(ext, name)| ((*ext).to_owned(), ColorToken::builtin(*name)))
                .collect(),
            default_file_color: ColorToken::builtin(DEFAULT_FILE_COLOR),
        }
    }
}

impl RenderConfig {
    /// Color for a folder `depth` levels below the root.
    ///
    /// The root always uses `root_color`; its children take the first
    /// depth color and the list cycles from there.
    pub fn folder_color(&self, depth: usize) -> &ColorToken {
        if depth == 0 || self.depth_colors.is_empty() {
            return &self.root_color;
        }
        &self.depth_colors[(depth - 1) % self.depth_colors.len()]
    }

    pub fn file_color(&self, extension: &str) -> &ColorToken {
        self.file_type_colors
            .get(extension)
            .unwrap_or(&self.default_file_color)
    }

    pub fn with_file_colors(mut self, overrides: impl IntoIterator<Item = FileColor>) -> Self {
        for FileColor { extension, color } in overrides {
            self.file_type_colors.insert(extension, color);
        }
        self
    }
}
