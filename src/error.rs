//! Error handling for report normalization.
//!
//! Provides error types with context for workbook access, header
//! detection, configuration loading and output serialization failures.
//! Value coercion never produces an error; it collapses to zero instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Could not read workbook {path} - {reason}")]
    Workbook { path: PathBuf, reason: String },

    #[error("Sheet '{sheet}' not found in workbook {path}")]
    SheetNotFound { path: PathBuf, sheet: String },

    #[error("Workbook contains no worksheets: {path}")]
    EmptyWorkbook { path: PathBuf },

    #[error("Header row labelled '{label}' not found in {rows_scanned} rows")]
    HeaderNotFound { label: String, rows_scanned: usize },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Configuration file could not be parsed: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SummaryError>;
