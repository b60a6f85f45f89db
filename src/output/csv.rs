//! CSV output
//!
//! One row per subdirectory and per file. Rows end with CRLF; fields are
//! quoted only when they have to be.

use std::io::{self, Write};

use crate::tree::LogDocument;

use super::utils::csv_field;

pub const CSV_HEADER: &str = "Directory,Type,Name,Size,Created,Modified";

const ROW_END: &str = "\r\n";

pub fn write_csv<W: Write>(doc: &LogDocument, out: &mut W) -> io::Result<()> {
    write!(out, "{}{}", CSV_HEADER, ROW_END)?;
    for record in doc {
        let dir = csv_field(&record.directory);
        for name in &record.subdirectories {
            write!(out, "{},D,{},,,{}", dir, csv_field(name), ROW_END)?;
        }
        for file in &record.files {
            write!(
                out,
                "{},F,{},{},{},{}{}",
                dir,
                csv_field(&file.name),
                file.size,
                csv_field(&file.created),
                csv_field(&file.modified),
                ROW_END
            )?;
        }
    }
    Ok(())
}
