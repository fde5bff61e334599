use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),
    #[error("Root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
impl CollectError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CollectError::Io {
            path: path.into(),
            source,
        }
    }
}
