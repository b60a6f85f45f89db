//! Log document encoders
//!
//! This module provides encoders for writing a `LogDocument` in various formats:
//! - Plain text blocks
//! - JSON (pretty-printed, 4-space indent)
//! - CSV (one row per entry)
//! - XML
//!
//! Encoders are pure: they read the document and write bytes, nothing else.
//!
//! # Module Structure
//!
//! - `text`, `json`, `csv`, `xml` - One encoder each
//! - `console` - Echo of a finished document to a console sink
//! - `utils` - Shared escaping helpers

mod console;
mod csv;
mod json;
mod text;
mod utils;
mod xml;

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

use crate::tree::LogDocument;

// Re-export public types and functions
pub use console::echo_document;
pub use csv::{CSV_HEADER, write_csv};
pub use json::{to_json_string, write_json};
pub use text::write_text;
pub use utils::{csv_field, xml_attr, xml_text};
pub use xml::{XML_DECLARATION, write_xml};

/// Output format of the log file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented plain text blocks
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
    /// Comma-separated rows
    Csv,
    /// XML document
    Xml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Csv,
        OutputFormat::Xml,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Xml => "xml",
        }
    }

    /// Write `doc` to `out` in this format.
    pub fn encode<W: Write>(&self, doc: &LogDocument, out: &mut W) -> io::Result<()> {
        match self {
            OutputFormat::Text => write_text(doc, out),
            OutputFormat::Json => write_json(doc, out),
            OutputFormat::Csv => write_csv(doc, out),
            OutputFormat::Xml => write_xml(doc, out),
        }
    }

    /// Encode into a fresh buffer.
    pub fn encode_to_vec(&self, doc: &LogDocument) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        self.encode(doc, &mut out)?;
        Ok(out)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output format '{0}' (expected text, json, csv or xml)")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        OutputFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// Small fixed document shared by the encoder tests:
/// `root` with subdirectories `d1`, `d2` and file `a.txt`; `d1` holding
/// `b.txt`; `d2` empty.
#[cfg(test)]
pub(crate) fn test_document() -> LogDocument {
    use crate::tree::{DirectoryRecord, FileRecord};

    LogDocument::from(vec![
        DirectoryRecord {
            directory: "root".to_string(),
            subdirectories: vec!["d1".to_string(), "d2".to_string()],
            files: vec![FileRecord {
                name: "a.txt".to_string(),
                size: 11,
                created: "Thu Oct  1 09:05:03 2026".to_string(),
                modified: "Fri Oct  2 10:00:00 2026".to_string(),
            }],
        },
        DirectoryRecord {
            directory: "root/d1".to_string(),
            subdirectories: Vec::new(),
            files: vec![FileRecord {
                name: "b.txt".to_string(),
                size: 0,
                created: "Thu Oct  1 09:05:03 2026".to_string(),
                modified: "Thu Oct  1 09:05:03 2026".to_string(),
            }],
        },
        DirectoryRecord {
            directory: "root/d2".to_string(),
            subdirectories: Vec::new(),
            files: Vec::new(),
        },
    ])
}
