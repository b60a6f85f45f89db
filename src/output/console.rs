//! Console echo of a finished document

use std::io::{self, Write};

use crate::tree::LogDocument;

use super::OutputFormat;
use super::json::to_json_string;

/// Echo `doc` to a console sink: pretty JSON when the log itself is JSON,
/// a generic debug dump of the records otherwise.
pub fn echo_document<W: Write + ?Sized>(
    doc: &LogDocument,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", to_json_string(doc)?),
        _ => writeln!(out, "{:#?}", doc.records()),
    }
}
