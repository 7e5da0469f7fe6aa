//! Terminal writer for styled lines.
//!
//! Color tokens are mapped to escape sequences by `termcolor`; with color
//! disabled the same lines come out as plain text.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::models::StyledLine;

/// When to emit colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Resolve `mode` against the environment.
pub fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").is_ok_and(|term| term == "dumb") {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

pub struct Printer<W> {
    out: W,
}

impl Printer<StandardStream> {
    pub fn stdout(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_lines(&mut self, lines: &[StyledLine]) -> io::Result<()> {
        for line in lines {
            for span in &line.spans {
                match span.color.as_ref() {
                    Some(color) => {
                        self.out.set_color(color.spec())?;
                        self.out.write_all(span.text.as_bytes())?;
                        self.out.reset()?;
                    }
                    None => self.out.write_all(span.text.as_bytes())?,
                }
            }
            self.out.write_all(b"\n")?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
