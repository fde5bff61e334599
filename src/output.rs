//! Block format of the summary artifact.
//!
//! Each matched file becomes one block:
//!
//! ```text
//! --- File: src/App.jsx ---
//!
//! <content>
//!
//! --- End of File: src/App.jsx ---
//!
//! ```
//!
//! Content is written verbatim. A file that could not be read gets an
//! `Error reading file: ...` line in place of its content.

use crate::types::{FileBlock, FileContent};
use std::io::{self, Write};

/// Prefix of the line written instead of content for unreadable files.
pub const READ_ERROR_PREFIX: &str = "Error reading file: ";

/// Writes one block to `out`.
pub fn write_block<W: Write>(out: &mut W, block: &FileBlock) -> io::Result<()> {
    write!(out, "--- File: {} ---\n\n", block.relative_path)?;
    match &block.content {
        FileContent::Content(text) => out.write_all(text.as_bytes())?,
        FileContent::ReadError(description) => {
            writeln!(out, "{}{}", READ_ERROR_PREFIX, description)?
        }
    }
    write!(out, "\n\n--- End of File: {} ---\n\n", block.relative_path)
}

/// Formats one block into a string.
pub fn format_block(block: &FileBlock) -> String {
    let mut buf = Vec::new();
    write_block(&mut buf, block).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}
