//! # jsxcat
//!
//! `jsxcat` walks a directory tree, picks every file whose name ends in `.jsx` or `.js`
//! (skipping `node_modules` at any depth) and concatenates them into one text file.
//! Each file is wrapped in a header and footer carrying its root-relative path, so the
//! result can be handed to a reviewer or pasted as context in one piece.
//!
//! A file that cannot be read or is not valid UTF-8 does not stop the run: its block
//! carries an `Error reading file: ...` line instead of the content.
//!
//! # Features
//!
//! - `streaming`: Enables [`CollectStream`], an iterator over the blocks that writes nothing.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use jsxcat::{CollectorBuilder, collect_with};
//!
//! let options = CollectorBuilder::new("frontend")
//!     .output("frontend_summary.txt")
//!     .progress(false)
//!     .build();
//!
//! let report = collect_with(options).expect("Failed to collect sources");
//! println!("{} files, {} unreadable", report.files.len(), report.read_errors);
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod types;

#[cfg(feature = "streaming")]
pub use engine::CollectStream;
pub use engine::{collect, collect_into, collect_with};
pub use error::CollectError;
pub use options::{CollectOptions, CollectorBuilder, DEFAULT_OUTPUT};
pub use types::{CollectReport, FileBlock, FileContent};
