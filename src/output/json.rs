//! JSON output formatting

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::tree::LogDocument;

const INDENT: &[u8] = b"    ";

/// Write the document as a pretty-printed JSON array, 4-space indented.
pub fn write_json<W: Write>(doc: &LogDocument, out: &mut W) -> io::Result<()> {
    let mut serializer = Serializer::with_formatter(out, PrettyFormatter::with_indent(INDENT));
    doc.serialize(&mut serializer)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// Render the document as a JSON string (used for console echo).
pub fn to_json_string(doc: &LogDocument) -> io::Result<String> {
    let mut out = Vec::new();
    write_json(doc, &mut out)?;
    String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
