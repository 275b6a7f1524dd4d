//! Core data structures and types for report normalization.
//!
//! Defines the untyped cell grid handed over by the workbook reader, the
//! normalized record emitted per data row, and processing statistics.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One untyped spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Bool(bool),
    Text(String),
    /// Formula error such as `#DIV/0!`
    Error(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Render the cell as a label, the way a spreadsheet shows it.
    ///
    /// Empty, error and non-finite number cells render as the empty string.
    pub fn as_label(&self) -> String {
        match self {
            Cell::Empty | Cell::Error(_) => String::new(),
            Cell::Number(n) if !n.is_finite() => String::new(),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
            Cell::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

static EMPTY_CELL: Cell = Cell::Empty;

/// Rows x columns of untyped cells, indexed from zero.
///
/// Rows may have different lengths; cells past the end of a row read as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGrid {
    rows: Vec<Vec<Cell>>,
}

impl RawGrid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Vec<Cell>>> for RawGrid {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self::new(rows)
    }
}

/// Position of a record in the two-level report hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    Region,
    Branch,
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::Region => write!(f, "Region"),
            RecordType::Branch => write!(f, "Branch"),
        }
    }
}

/// One data row after coercion and hierarchy inference.
///
/// Serializes as a flat JSON object: `name`, the numeric fields in schema
/// order, `type`, then `region_group` on branches only.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub name: String,
    pub values: Vec<(String, f64)>,
    pub record_type: RecordType,
    pub region_group: Option<String>,
}

impl NormalizedRecord {
    /// Value of a numeric field; `None` if the schema has no such field
    pub fn get(&self, field: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| *value)
    }

    /// Value of a numeric field, zero when absent
    pub fn value(&self, field: &str) -> f64 {
        self.get(field).unwrap_or(0.0)
    }

    pub fn is_region(&self) -> bool {
        self.record_type == RecordType::Region
    }

    pub fn is_branch(&self) -> bool {
        self.record_type == RecordType::Branch
    }
}

impl Serialize for NormalizedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = if self.region_group.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(self.values.len() + extra))?;
        map.serialize_entry("name", &self.name)?;
        for (field, value) in &self.values {
            map.serialize_entry(field, value)?;
        }
        map.serialize_entry("type", &self.record_type)?;
        if let Some(group) = &self.region_group {
            map.serialize_entry("region_group", group)?;
        }
        map.end()
    }
}

/// Processing statistics
#[derive(Debug, Default, Clone)]
pub struct ProcessingStats {
    pub header_row: usize,
    pub header_detected: bool,
    pub rows_scanned: usize,
    pub rows_skipped: usize,
    pub regions: usize,
    pub branches: usize,
    /// Non-blank cells that could not be parsed and were written as zero
    pub coerced_to_zero: usize,
    pub output_path: PathBuf,
    pub processing_time_ms: u128,
}

impl ProcessingStats {
    pub fn records(&self) -> usize {
        self.regions + self.branches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_missing_cells_read_as_empty() {
        let grid = RawGrid::new(vec![vec![Cell::from("a")], vec![]]);
        assert_eq!(grid.cell(0, 0), &Cell::from("a"));
        assert_eq!(grid.cell(0, 5), &Cell::Empty);
        assert_eq!(grid.cell(1, 0), &Cell::Empty);
        assert_eq!(grid.cell(9, 9), &Cell::Empty);
        assert_eq!(grid.column_count(), 1);
    }

    #[test]
    fn test_cell_labels() {
        assert_eq!(Cell::Number(12.0).as_label(), "12");
        assert_eq!(Cell::Number(1.5).as_label(), "1.5");
        assert_eq!(Cell::Error("#N/A".into()).as_label(), "");
        assert_eq!(Cell::Empty.as_label(), "");
        assert_eq!(Cell::Number(f64::NAN).as_label(), "");
        assert_eq!(Cell::Number(f64::INFINITY).as_label(), "");
    }

    #[test]
    fn test_record_serializes_in_declared_order() {
        let record = NormalizedRecord {
            name: "BranchA".to_string(),
            values: vec![("zeta".to_string(), 1.0), ("alpha".to_string(), 2.5)],
            record_type: RecordType::Branch,
            region_group: Some("Gauteng".to_string()),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"BranchA","zeta":1.0,"alpha":2.5,"type":"Branch","region_group":"Gauteng"}"#
        );
    }

    #[test]
    fn test_region_record_has_no_region_group_key() {
        let record = NormalizedRecord {
            name: "TOTAL".to_string(),
            values: vec![],
            record_type: RecordType::Region,
            region_group: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "Region");
        assert!(value.get("region_group").is_none());
    }
}
