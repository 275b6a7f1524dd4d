//! Raw grid inspection.
//!
//! Summarizes a report grid before normalization: its extent, the leading
//! rows as they were decoded, and per-column value kinds and numeric
//! statistics. Used to work out header position and column layout of a
//! new report export.

use crate::header::HeaderLocation;
use crate::models::{Cell, RawGrid};
use serde::Serialize;
use serde_json::Value;

/// Dominant kind of the non-empty cells in a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Empty,
    Numeric,
    Text,
    Mixed,
}

/// Statistics over the native number cells of one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub column: usize,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridSummary {
    pub rows: usize,
    pub columns: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_row: Option<usize>,
    pub first_rows: Vec<Vec<Value>>,
    pub column_kinds: Vec<ColumnKind>,
    pub stats: Vec<ColumnStats>,
}

impl GridSummary {
    pub fn from_grid(grid: &RawGrid, sample_rows: usize) -> Self {
        let columns = grid.column_count();

        let first_rows = grid
            .rows()
            .iter()
            .take(sample_rows)
            .map(|row| row.iter().map(cell_to_json).collect())
            .collect();

        let column_kinds = (0..columns).map(|col| column_kind(grid, col)).collect();
        let stats = (0..columns)
            .filter_map(|col| column_stats(grid, col))
            .collect();

        Self {
            rows: grid.row_count(),
            columns,
            header_row: None,
            first_rows,
            column_kinds,
            stats,
        }
    }

    /// Record the detected header row; fallback positions are left out
    pub fn with_header(mut self, location: HeaderLocation) -> Self {
        self.header_row = location.is_detected().then_some(location.row);
        self
    }
}

fn cell_to_json(cell: &Cell) -> Value {
    match cell {
        Cell::Empty => Value::Null,
        Cell::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Cell::Bool(b) => Value::Bool(*b),
        Cell::Text(s) | Cell::Error(s) => Value::String(s.clone()),
    }
}

fn column_kind(grid: &RawGrid, col: usize) -> ColumnKind {
    let mut numeric = 0usize;
    let mut text = 0usize;

    for row in 0..grid.row_count() {
        match grid.cell(row, col) {
            Cell::Empty => {}
            Cell::Number(_) | Cell::Bool(_) => numeric += 1,
            Cell::Text(s) if s.trim().is_empty() => {}
            Cell::Text(_) | Cell::Error(_) => text += 1,
        }
    }

    match (numeric, text) {
        (0, 0) => ColumnKind::Empty,
        (_, 0) => ColumnKind::Numeric,
        (0, _) => ColumnKind::Text,
        _ => ColumnKind::Mixed,
    }
}

fn column_stats(grid: &RawGrid, col: usize) -> Option<ColumnStats> {
    let values: Vec<f64> = (0..grid.row_count())
        .filter_map(|row| match grid.cell(row, col) {
            Cell::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        })
        .collect();

    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / count as f64;

    Some(ColumnStats {
        column: col,
        count,
        min,
        max,
        mean,
    })
}
