use crate::config::ColorToken;

/// A run of text drawn in one color, or the terminal default when `color` is `None`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Span {
    pub text: String,
    pub color: Option<ColorToken>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn styled(text: impl Into<String>, color: &ColorToken) -> Self {
        Self {
            text: text.into(),
            color: Some(color.clone()),
        }
    }
}

/// One line of output, without the trailing newline.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StyledLine {
    pub spans: Vec<Span>,
}

impl StyledLine {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn blank() -> Self {
        Self::default()
    }

    /// The line with all styling dropped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}
