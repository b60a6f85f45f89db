//! Plain text output

use std::io::{self, Write};

use crate::tree::LogDocument;

/// Write one block per directory, each followed by a blank line.
pub fn write_text<W: Write>(doc: &LogDocument, out: &mut W) -> io::Result<()> {
    for record in doc {
        writeln!(out, "Directory: {}", record.directory)?;
        for name in &record.subdirectories {
            writeln!(out, "  [D] {}", name)?;
        }
        for file in &record.files {
            writeln!(
                out,
                "  [F] {} - Size: {} bytes, Created: {}, Modified: {}",
                file.name, file.size, file.created, file.modified
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}
