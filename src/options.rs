use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output file written when no destination is given.
pub const DEFAULT_OUTPUT: &str = "./code_summary.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    /// Directory names (globs over the name only) that are never descended into.
    pub exclude_dirs: Vec<String>,
    /// Case-sensitive file-name suffixes; `a.min.js` and `weird.js` both match `.js`.
    pub suffixes: Vec<String>,
    pub follow_links: bool,
    /// Print one `Processing: <path>` line per file to stdout.
    pub progress: bool,
}
impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            exclude_dirs: vec!["node_modules".to_string()],
            suffixes: vec![".jsx".to_string(), ".js".to_string()],
            follow_links: false,
            progress: true,
        }
    }
}
#[derive(Debug, Default)]
pub struct CollectorBuilder {
    options: CollectOptions,
}
impl CollectorBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: CollectOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn exclude_dirs(mut self, names: Vec<String>) -> Self {
        self.options.exclude_dirs = names;
        self
    }
    pub fn suffixes(mut self, suffixes: Vec<String>) -> Self {
        self.options.suffixes = suffixes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn progress(mut self, yes: bool) -> Self {
        self.options.progress = yes;
        self
    }
    pub fn build(self) -> CollectOptions {
        self.options
    }
}
