pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;
pub mod output;

pub use crate::config::RenderConfig;
pub use crate::core::{WalkOptions, WalkReport, walk};
pub use crate::error::WalkError;
