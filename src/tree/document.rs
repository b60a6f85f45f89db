//! Records produced by a traversal
//!
//! The serde attributes fix the JSON layout: key names and their order are
//! part of the output format.

use serde::Serialize;

/// Metadata of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileRecord {
    /// File name only, no directory part
    pub name: String,
    pub size: u64,
    pub created: String,
    pub modified: String,
}

/// Snapshot of one visited directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryRecord {
    #[serde(rename = "Directory")]
    pub directory: String,
    /// Immediate child directory names, in filesystem order
    #[serde(rename = "Directories")]
    pub subdirectories: Vec<String>,
    /// Files in the order their metadata fetch completed
    #[serde(rename = "Files")]
    pub files: Vec<FileRecord>,
}

impl DirectoryRecord {
    /// Number of rows this record contributes to a CSV log.
    pub fn entry_count(&self) -> usize {
        self.subdirectories.len() + self.files.len()
    }
}

/// Every kept directory record of a traversal, pre-order, root first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LogDocument {
    records: Vec<DirectoryRecord>,
}

impl LogDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: DirectoryRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[DirectoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up the record for a directory path string.
    pub fn find(&self, directory: &str) -> Option<&DirectoryRecord> {
        self.records.iter().find(|r| r.directory == directory)
    }

    /// Iterate over every file record with the directory it belongs to.
    pub fn files(&self) -> impl Iterator<Item = (&str, &FileRecord)> {
        self.records
            .iter()
            .flat_map(|r| r.files.iter().map(move |f| (r.directory.as_str(), f)))
    }
}

impl From<Vec<DirectoryRecord>> for LogDocument {
    fn from(records: Vec<DirectoryRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a LogDocument {
    type Item = &'a DirectoryRecord;
    type IntoIter = std::slice::Iter<'a, DirectoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(dir: &str, subdirs: &[&str], files: &[&str]) -> DirectoryRecord {
        DirectoryRecord {
            directory: dir.to_string(),
            subdirectories: subdirs.iter().map(|s| s.to_string()).collect(),
            files: files
                .iter()
                .map(|name| FileRecord {
                    name: name.to_string(),
                    size: 1,
                    created: "c".to_string(),
                    modified: "m".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_entry_count() {
        assert_eq!(record("r", &[], &[]).entry_count(), 0);
        assert_eq!(record("r", &["a", "b"], &["x"]).entry_count(), 3);
    }

    #[test]
    fn test_files_iterates_with_parent() {
        let doc = LogDocument::from(vec![
            record("root", &["d1"], &["a.txt"]),
            record("root/d1", &[], &["b.txt", "c.txt"]),
        ]);
        let pairs: Vec<(&str, &str)> = doc.files().map(|(d, f)| (d, f.name.as_str())).collect();
        assert_eq!(
            pairs,
            vec![("root", "a.txt"), ("root/d1", "b.txt"), ("root/d1", "c.txt")]
        );
        assert!(doc.find("root/d1").is_some());
        assert!(doc.find("root/d2").is_none());
    }

    #[test]
    fn test_serialized_key_names() {
        let doc = LogDocument::from(vec![record("root", &["d1"], &["a.txt"])]);
        let value = serde_json::to_value(&doc).expect("serialize");
        let first = &value[0];
        assert_eq!(first["Directory"], "root");
        assert_eq!(first["Directories"][0], "d1");
        assert_eq!(first["Files"][0]["Name"], "a.txt");
        assert_eq!(first["Files"][0]["Size"], 1);
        assert_eq!(first["Files"][0]["Created"], "c");
        assert_eq!(first["Files"][0]["Modified"], "m");
    }
}
