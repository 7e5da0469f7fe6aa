use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a walk before anything is rendered.
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("{}: {reason}", path.display())]
    PathNotFound { path: PathBuf, reason: String },

    #[error("{}: Not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// Invalid render configuration supplied by the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("invalid file color '{0}', expected EXT=COLOR")]
    InvalidFileColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_not_found_mentions_path_and_reason() {
        let err = WalkError::PathNotFound {
            path: PathBuf::from("/missing"),
            reason: "No such file or directory (os error 2)".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "/missing: No such file or directory (os error 2)"
        );
    }

    #[test]
    fn not_a_directory_message() {
        let err = WalkError::NotADirectory(PathBuf::from("/tmp/file.txt"));
        assert_eq!(err.to_string(), "/tmp/file.txt: Not a directory");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::InvalidColor("chartreuse".into());
        assert!(err.to_string().contains("chartreuse"));
    }
}
