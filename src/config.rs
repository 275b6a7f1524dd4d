//! Configuration management and validation.
//!
//! Holds the report-specific settings of a normalization run: the region
//! labels that anchor the hierarchy, header detection parameters and output
//! options. Configuration can be loaded from a TOML file; missing keys take
//! their defaults.

use crate::constants::{DEFAULT_KNOWN_REGIONS, FALLBACK_HEADER_ROW, HEADER_LABEL, UNKNOWN_REGION};
use crate::error::{Result, SummaryError};
use crate::header::HeaderLocator;
use crate::hierarchy::{HierarchyClassifier, RegionCursor};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Settings for one normalization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Row labels that mark a region row (exact match after trimming)
    pub known_regions: Vec<String>,

    /// First-cell label of the header row
    pub header_label: String,

    /// Header row assumed when no row carries the header label
    pub fallback_header_row: usize,

    /// Fail instead of using the fallback row when the header is missing
    pub require_header: bool,

    /// Region group given to branches seen before any region
    pub unknown_region: String,

    /// Worksheet to read (first sheet if not set)
    pub sheet: Option<String>,

    /// Pretty-print the JSON output
    pub pretty: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            known_regions: DEFAULT_KNOWN_REGIONS.iter().map(|s| s.to_string()).collect(),
            header_label: HEADER_LABEL.to_string(),
            fallback_header_row: FALLBACK_HEADER_ROW,
            require_header: false,
            unknown_region: UNKNOWN_REGION.to_string(),
            sheet: None,
            pretty: true,
        }
    }
}

impl SummaryConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SummaryError::Configuration {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;

        let config: SummaryConfig = toml::from_str(&content)?;
        config.validate()?;

        debug!(
            "Loaded configuration from {} ({} known regions)",
            path.display(),
            config.known_regions.len()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.known_regions.iter().all(|r| r.trim().is_empty()) {
            return Err(SummaryError::Configuration {
                message: "known_regions must contain at least one region label".to_string(),
            });
        }
        if self.header_label.trim().is_empty() {
            return Err(SummaryError::Configuration {
                message: "header_label must not be blank".to_string(),
            });
        }
        if self.unknown_region.trim().is_empty() {
            return Err(SummaryError::Configuration {
                message: "unknown_region must not be blank".to_string(),
            });
        }
        Ok(())
    }

    /// Replace the known region labels
    pub fn with_known_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_regions = regions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_fallback_header_row(mut self, row: usize) -> Self {
        self.fallback_header_row = row;
        self
    }

    /// Fail when the header label is missing
    pub fn with_required_header(mut self) -> Self {
        self.require_header = true;
        self
    }

    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    pub fn with_compact_output(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn header_locator(&self) -> HeaderLocator {
        HeaderLocator::new(self.header_label.trim(), self.fallback_header_row)
    }

    pub fn classifier(&self) -> HierarchyClassifier {
        HierarchyClassifier::new(self.known_regions.iter().cloned())
    }

    pub fn region_cursor(&self) -> RegionCursor {
        RegionCursor::start(self.unknown_region.clone())
    }
}
