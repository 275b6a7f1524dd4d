//! Region / branch hierarchy inference.
//!
//! The report lists regions and their branches as one flat run of rows. A
//! row whose label is a known region opens a new group; every other row is
//! a branch of the most recent region. The running region is passed in and
//! returned explicitly as a [`RegionCursor`], so classification stays pure.

use crate::constants::{DEFAULT_KNOWN_REGIONS, NAN_LITERAL, UNKNOWN_REGION};
use crate::models::RecordType;
use std::collections::HashSet;

/// Most recently seen region within one pass over the data rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCursor {
    current: String,
}

impl RegionCursor {
    /// Cursor for a pass that has not seen a region yet
    pub fn start(unknown_region: impl Into<String>) -> Self {
        Self {
            current: unknown_region.into(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }
}

impl Default for RegionCursor {
    fn default() -> Self {
        Self::start(UNKNOWN_REGION)
    }
}

/// Hierarchy position assigned to one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Region,
    Branch { region_group: String },
}

impl Classification {
    pub fn record_type(&self) -> RecordType {
        match self {
            Classification::Region => RecordType::Region,
            Classification::Branch { .. } => RecordType::Branch,
        }
    }

    pub fn region_group(&self) -> Option<&str> {
        match self {
            Classification::Region => None,
            Classification::Branch { region_group } => Some(region_group.as_str()),
        }
    }

    pub fn into_region_group(self) -> Option<String> {
        match self {
            Classification::Region => None,
            Classification::Branch { region_group } => Some(region_group),
        }
    }
}

/// True when a row label marks a row that never becomes a record
pub fn is_skipped_label(name: &str) -> bool {
    name.is_empty() || name == NAN_LITERAL
}

/// Classifies row labels against a fixed set of region names
#[derive(Debug, Clone)]
pub struct HierarchyClassifier {
    known_regions: HashSet<String>,
}

impl Default for HierarchyClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_KNOWN_REGIONS.iter().copied())
    }
}

impl HierarchyClassifier {
    pub fn new<I, S>(known_regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_regions: known_regions
                .into_iter()
                .map(|s| {
                    let label: String = s.into();
                    label.trim().to_string()
                })
                .collect(),
        }
    }

    pub fn is_region(&self, name: &str) -> bool {
        self.known_regions.contains(name)
    }

    /// Classify a trimmed, non-skipped row label.
    ///
    /// Returns the classification and the cursor for the next row.
    pub fn classify(&self, name: &str, cursor: RegionCursor) -> (Classification, RegionCursor) {
        if self.is_region(name) {
            (Classification::Region, RegionCursor::start(name))
        } else {
            let region_group = cursor.current.clone();
            (Classification::Branch { region_group }, cursor)
        }
    }
}
