//! Config file support for the command-line front-end
//!
//! A config file is TOML with any of these top-level keys:
//!
//! ```toml
//! directory = "/srv/data"
//! logfile = "data.json"
//! extension = ".txt"
//! max_depth = 2
//! format = "json"
//! console = true
//! verbose = false
//! jobs = 4
//! ```
//!
//! Keys present in the file take precedence over command-line values.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::logger::LoggerConfig;
use crate::output::OutputFormat;

/// Errors raised while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Values read from a config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub directory: Option<PathBuf>,
    pub logfile: Option<PathBuf>,
    pub extension: Option<String>,
    pub max_depth: Option<usize>,
    pub format: Option<OutputFormat>,
    pub console: Option<bool>,
    pub verbose: Option<bool>,
    pub jobs: Option<usize>,
}

impl FileConfig {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Overlay the file's values on top of `base`.
    pub fn apply(self, base: LoggerConfig) -> LoggerConfig {
        LoggerConfig {
            root: self.directory.unwrap_or(base.root),
            output: self.logfile.unwrap_or(base.output),
            extension: self.extension.or(base.extension),
            max_depth: self.max_depth.or(base.max_depth),
            format: self.format.unwrap_or(base.format),
            to_console: self.console.unwrap_or(base.to_console),
            verbose: self.verbose.unwrap_or(base.verbose),
            workers: self.jobs.unwrap_or(base.workers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_file() {
        let config = FileConfig::parse(
            r#"
directory = "/srv/data"
logfile = "data.json"
extension = ".txt"
max_depth = 2
format = "json"
console = true
verbose = false
jobs = 4
"#,
        )
        .expect("parse");
        assert_eq!(config.directory, Some(PathBuf::from("/srv/data")));
        assert_eq!(config.logfile, Some(PathBuf::from("data.json")));
        assert_eq!(config.extension.as_deref(), Some(".txt"));
        assert_eq!(config.max_depth, Some(2));
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.console, Some(true));
        assert_eq!(config.verbose, Some(false));
        assert_eq!(config.jobs, Some(4));
    }

    #[test]
    fn test_empty_file_changes_nothing() {
        let config = FileConfig::parse("").expect("parse");
        assert_eq!(config, FileConfig::default());

        let base = LoggerConfig {
            extension: Some(".rs".to_string()),
            max_depth: Some(3),
            ..LoggerConfig::new("src", "out.txt")
        };
        let merged = config.apply(base.clone());
        assert_eq!(merged.root, base.root);
        assert_eq!(merged.output, base.output);
        assert_eq!(merged.extension, base.extension);
        assert_eq!(merged.max_depth, base.max_depth);
    }

    #[test]
    fn test_file_values_win() {
        let config = FileConfig::parse("format = \"xml\"\nmax_depth = 0\nconsole = true").expect("parse");
        let base = LoggerConfig {
            format: OutputFormat::Csv,
            max_depth: Some(5),
            ..LoggerConfig::new("src", "out.txt")
        };
        let merged = config.apply(base);
        assert_eq!(merged.format, OutputFormat::Xml);
        assert_eq!(merged.max_depth, Some(0));
        assert!(merged.to_console);
        assert_eq!(merged.root, PathBuf::from("src"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(FileConfig::parse("colour = true").is_err());
        assert!(FileConfig::parse("format = \"yaml\"").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().expect("temp dir");
        let missing = dir.path().join("dirlog.toml");
        assert!(matches!(
            FileConfig::load(&missing),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("dirlog.toml");
        fs::write(&path, "max_depth = \"deep\"").expect("write");
        let err = FileConfig::load(&path).expect_err("should fail");
        assert!(err.to_string().contains("dirlog.toml"), "got: {}", err);
    }
}
