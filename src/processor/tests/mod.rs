//! Integration tests for the processor module
//!
//! Tests the complete normalization pipeline on in-memory report grids
//! shaped like the daily summary export.

pub mod basic_processing;
pub mod error_handling;
pub mod hierarchy_scenarios;

use crate::models::{Cell, RawGrid};

/// Banner rows above the header in the reference layout
pub fn banner_rows() -> Vec<Vec<Cell>> {
    vec![
        vec![Cell::text("Parcel Perfect")],
        vec![Cell::text("Daily Summary")],
        vec![],
        vec![Cell::text("Date:"), Cell::text("25 Nov 2025")],
        vec![Cell::Empty, Cell::Empty],
        vec![],
    ]
}

pub fn header_row() -> Vec<Cell> {
    vec![
        Cell::text("Region"),
        Cell::text("Total Verbals"),
        Cell::text("Actual Verbals Outstanding"),
        Cell::text("% Collected Verbals"),
    ]
}

/// Reference layout: six banner rows, header at row 6, then `data`
pub fn report_grid(data: Vec<Vec<Cell>>) -> RawGrid {
    let mut rows = banner_rows();
    rows.push(header_row());
    rows.extend(data);
    RawGrid::new(rows)
}

pub fn labels(names: &[&str]) -> Vec<Vec<Cell>> {
    names
        .iter()
        .map(|name| vec![Cell::text(*name), Cell::Number(1.0)])
        .collect()
}
