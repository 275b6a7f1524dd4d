//! Command-line interface components.

use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_INSPECT_FILE, DEFAULT_OUTPUT_FILE};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daily-summary")]
#[command(about = "Normalize a daily operations summary spreadsheet into dashboard JSON")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the report workbook
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_FILE)]
    pub input_path: PathBuf,

    /// Output JSON file (dashboard_data.json, or data_summary.json with --inspect)
    #[arg(short, long = "output")]
    pub output_path: Option<PathBuf>,

    /// TOML configuration file (known regions, header detection, output)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Worksheet to read instead of the first one
    #[arg(long)]
    pub sheet: Option<String>,

    /// Fail if no header row is found instead of assuming the default position
    #[arg(long)]
    pub require_header: bool,

    /// Inspection mode: summarize the raw sheet layout then exit (no normalization)
    #[arg(long)]
    pub inspect: bool,

    /// Print headline metrics and branch status after processing
    #[arg(long)]
    pub summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Get the output path, defaulting by mode when not specified
    pub fn get_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None if self.inspect => PathBuf::from(DEFAULT_INSPECT_FILE),
            None => PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }

    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
