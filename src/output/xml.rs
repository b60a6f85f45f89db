//! XML output
//!
//! The document is written on a single line after the declaration, with no
//! indentation. Elements without children or text are self-closed.

use std::io::{self, Write};

use crate::tree::{FileRecord, LogDocument};

use super::utils::{xml_attr, xml_text};

pub const XML_DECLARATION: &str = "<?xml version='1.0' encoding='UTF-8'?>";

pub fn write_xml<W: Write>(doc: &LogDocument, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", XML_DECLARATION)?;
    if doc.is_empty() {
        return write!(out, "<DirectoryLog />");
    }

    write!(out, "<DirectoryLog>")?;
    for record in doc {
        let path = xml_attr(&record.directory);
        if record.subdirectories.is_empty() && record.files.is_empty() {
            write!(out, "<Directory path=\"{}\" />", path)?;
            continue;
        }
        write!(out, "<Directory path=\"{}\">", path)?;
        for name in &record.subdirectories {
            write!(out, "<Subdirectory name=\"{}\" />", xml_attr(name))?;
        }
        for file in &record.files {
            write_file(file, out)?;
        }
        write!(out, "</Directory>")?;
    }
    write!(out, "</DirectoryLog>")
}

fn write_file<W: Write>(file: &FileRecord, out: &mut W) -> io::Result<()> {
    write!(out, "<File name=\"{}\">", xml_attr(&file.name))?;
    write_text_element(out, "Size", &file.size.to_string())?;
    write_text_element(out, "Created", &file.created)?;
    write_text_element(out, "Modified", &file.modified)?;
    write!(out, "</File>")
}

fn write_text_element<W: Write>(out: &mut W, tag: &str, text: &str) -> io::Result<()> {
    if text.is_empty() {
        write!(out, "<{} />", tag)
    } else {
        write!(out, "<{tag}>{}</{tag}>", xml_text(text))
    }
}
