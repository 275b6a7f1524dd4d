//! Application constants for the daily summary normalizer
//!
//! Default file names, header detection values and the region labels of
//! the reference report hierarchy.

// =============================================================================
// Files
// =============================================================================

/// Report workbook read when no input path is given
pub const DEFAULT_INPUT_FILE: &str = "Parcel Perfect Daily Summary.XLS";

/// Normalized record output written when no output path is given
pub const DEFAULT_OUTPUT_FILE: &str = "dashboard_data.json";

/// Grid summary output written in inspect mode
pub const DEFAULT_INSPECT_FILE: &str = "data_summary.json";

// =============================================================================
// Header Detection
// =============================================================================

/// First-cell label marking the table header row
pub const HEADER_LABEL: &str = "Region";

/// Header row used when no row carries the header label.
///
/// The banner section of the reference report occupies rows 0-5.
pub const FALLBACK_HEADER_ROW: usize = 6;

/// Number of leading rows rendered by the grid inspector
pub const INSPECT_SAMPLE_ROWS: usize = 5;

// =============================================================================
// Hierarchy
// =============================================================================

/// Region assigned to branches seen before any region row
pub const UNKNOWN_REGION: &str = "Unknown";

/// Aggregate pseudo-region closing the report
pub const TOTAL_LABEL: &str = "TOTAL";

/// Labels that mark a region row in the reference report
pub const DEFAULT_KNOWN_REGIONS: &[&str] = &[
    "Eastern Cape",
    "Eastern Cape 2",
    "Gauteng",
    "Western Cape",
    "Western Cape 2",
    TOTAL_LABEL,
];

/// Textual rendering of a missing value in upstream exports
pub const NAN_LITERAL: &str = "nan";

// =============================================================================
// Branch Status Thresholds
// =============================================================================

pub mod status_thresholds {
    /// POD and verbal collection percentage a top performer must exceed
    pub const TOP_COLLECTION_PCT: f64 = 98.0;

    /// Fails a top performer must stay under
    pub const TOP_MAX_FAILS: f64 = 5.0;

    /// POD collection percentage below which a branch is critical
    pub const CRITICAL_POD_PCT: f64 = 95.0;

    /// Fails above which a branch is critical
    pub const CRITICAL_FAILS: f64 = 20.0;
}
