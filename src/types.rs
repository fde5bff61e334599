use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What reading a matched file produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileContent {
    /// The full file, decoded as UTF-8.
    Content(String),
    /// Description of why the file could not be read or decoded.
    ReadError(String),
}

impl FileContent {
    pub fn is_error(&self) -> bool {
        matches!(self, FileContent::ReadError(_))
    }
}

/// One matched file, ready to be written as a block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileBlock {
    /// The path as produced by the walker (root joined with the relative part).
    pub path: PathBuf,
    /// Root-relative label with `/` separators.
    pub relative_path: String,
    pub content: FileContent,
}

/// Summary of a finished run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CollectReport {
    /// Where the artifact was written, if it went to a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Relative paths of every block written, in output order.
    pub files: Vec<String>,
    /// How many of those blocks carry an error marker instead of content.
    pub read_errors: usize,
    /// Directory entries the walker could not read; the walk skipped them.
    pub walk_errors: Vec<String>,
}
