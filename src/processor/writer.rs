//! JSON output writing
//!
//! The whole document is serialized in memory before the destination file
//! is touched, so a failed run never leaves a partial output behind.

use crate::error::Result;
use crate::models::NormalizedRecord;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Write normalized records as a JSON array
pub fn write_records(path: &Path, records: &[NormalizedRecord], pretty: bool) -> Result<usize> {
    write_json(path, records, pretty)?;
    Ok(records.len())
}

/// Serialize any value to JSON and write it to `path`
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let content = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content)?;
    debug!("Wrote JSON output to {}", path.display());
    Ok(())
}
