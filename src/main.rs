//! CLI entry point for dirlog

use std::path::PathBuf;
use std::process;

use clap::Parser;
use dirlog::{DirectoryLogger, FileConfig, LoggerConfig, OutputFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dirlog")]
#[command(about = "Log directory contents with metadata")]
#[command(version)]
struct Args {
    /// The directory path to log
    directory: PathBuf,

    /// The log file name
    logfile: PathBuf,

    /// Filter files by extension (e.g., .txt)
    #[arg(long = "extension", value_name = "EXT")]
    extension: Option<String>,

    /// Maximum depth of directory traversal (0 = root only)
    #[arg(long = "max-depth", value_name = "N")]
    max_depth: Option<usize>,

    /// Output format of the log
    #[arg(long = "format", value_name = "FORMAT", default_value = "text")]
    format: OutputFormat,

    /// Print log to console
    #[arg(long = "console")]
    console: bool,

    /// Enable verbose mode
    #[arg(long = "verbose")]
    verbose: bool,

    /// Path to configuration file (TOML); its values override the flags
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of parallel workers for metadata collection
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,
}

impl Args {
    fn logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            root: self.directory.clone(),
            output: self.logfile.clone(),
            extension: self.extension.clone(),
            max_depth: self.max_depth,
            format: self.format,
            to_console: self.console,
            verbose: self.verbose,
            workers: self.jobs,
        }
    }
}

/// Send logs to stderr so `--console` output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default = if verbose { "dirlog=debug" } else { "dirlog=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();

    let mut config = args.logger_config();
    if let Some(ref path) = args.config {
        match FileConfig::load(path) {
            Ok(file) => config = file.apply(config),
            Err(e) => {
                eprintln!("dirlog: {}", e);
                process::exit(1);
            }
        }
    }

    init_tracing(config.verbose);

    // Run failures are already logged by the engine
    let logger = DirectoryLogger::new(config);
    if logger.run().is_err() {
        process::exit(1);
    }
}
