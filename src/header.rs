//! Report header row detection.
//!
//! Scans the banner section of a report grid for the row that opens the
//! data table and works out where the data rows begin.

use crate::error::{Result, SummaryError};
use crate::models::{Cell, RawGrid};
use tracing::{debug, warn};

/// How the header row was determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMethod {
    /// A row's first cell matched the header label
    Label,
    /// No row matched, the fallback row was used
    Fallback,
}

/// Header row position within a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLocation {
    pub row: usize,
    pub method: DetectionMethod,
}

impl HeaderLocation {
    /// First data row, directly below the header
    pub fn data_start(&self) -> usize {
        self.row + 1
    }

    pub fn is_detected(&self) -> bool {
        self.method == DetectionMethod::Label
    }
}

/// Finds the header row by an exact first-cell label match
#[derive(Debug, Clone)]
pub struct HeaderLocator {
    label: String,
    fallback_row: usize,
}

impl HeaderLocator {
    pub fn new(label: impl Into<String>, fallback_row: usize) -> Self {
        Self {
            label: label.into(),
            fallback_row,
        }
    }

    /// Locate the header, using the fallback row when no row matches
    pub fn locate(&self, grid: &RawGrid) -> HeaderLocation {
        match self.find_label_row(grid) {
            Some(row) => {
                debug!("Header label '{}' found at row {}", self.label, row);
                HeaderLocation {
                    row,
                    method: DetectionMethod::Label,
                }
            }
            None => {
                warn!(
                    "Header label '{}' not found in {} rows, assuming header at row {}",
                    self.label,
                    grid.row_count(),
                    self.fallback_row
                );
                HeaderLocation {
                    row: self.fallback_row,
                    method: DetectionMethod::Fallback,
                }
            }
        }
    }

    /// Locate the header, failing when no row carries the label
    pub fn locate_strict(&self, grid: &RawGrid) -> Result<HeaderLocation> {
        let location = self.find_label_row(grid).ok_or_else(|| SummaryError::HeaderNotFound {
            label: self.label.clone(),
            rows_scanned: grid.row_count(),
        })?;

        Ok(HeaderLocation {
            row: location,
            method: DetectionMethod::Label,
        })
    }

    fn find_label_row(&self, grid: &RawGrid) -> Option<usize> {
        grid.rows().iter().position(|row| match row.first() {
            Some(Cell::Text(text)) => text.trim() == self.label,
            _ => false,
        })
    }
}
