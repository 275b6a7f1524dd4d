//! Error handling integration tests

use super::labels;
use crate::config::SummaryConfig;
use crate::error::SummaryError;
use crate::models::{Cell, RawGrid};
use crate::processor::{SummaryProcessor, normalize_grid};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_nonexistent_input_path() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("missing.xls");
    let output_path = temp_dir.path().join("dashboard_data.json");

    let processor = SummaryProcessor::new(input_path.clone(), output_path.clone());
    let result = processor.process();

    match result.unwrap_err() {
        SummaryError::InputNotFound { path } => assert_eq!(path, input_path),
        other => panic!("Expected InputNotFound error, got {other:?}"),
    }
    assert!(!output_path.exists());
}

#[test]
fn test_undecodable_workbook_writes_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("summary.XLS");
    fs::write(&input_path, "This is not a spreadsheet").unwrap();
    let output_path = temp_dir.path().join("dashboard_data.json");

    let result = SummaryProcessor::new(input_path, output_path.clone()).process();

    assert!(matches!(result, Err(SummaryError::Workbook { .. })));
    assert!(!output_path.exists());
}

#[test]
fn test_inspect_on_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("data_summary.json");
    let processor = SummaryProcessor::new(temp_dir.path().join("none.xls"), output_path.clone());

    assert!(processor.inspect(5).is_err());
    assert!(!output_path.exists());
}

#[test]
fn test_required_header_missing() {
    let grid = RawGrid::new(labels(&["Gauteng", "Sandton"]));
    let config = SummaryConfig::default().with_required_header();

    let result = normalize_grid(&grid, &config);
    assert!(matches!(
        result,
        Err(SummaryError::HeaderNotFound { rows_scanned: 2, .. })
    ));
}

#[test]
fn test_small_grid_without_header_is_empty_not_error() {
    let grid = RawGrid::new(labels(&["Gauteng", "Sandton"]));
    let report = normalize_grid(&grid, &SummaryConfig::default()).unwrap();

    assert!(report.records.is_empty());
    assert!(!report.stats.header_detected);
}

#[test]
fn test_empty_grid() {
    let report = normalize_grid(&RawGrid::default(), &SummaryConfig::default()).unwrap();
    assert!(report.records.is_empty());
    assert_eq!(report.stats.rows_scanned, 0);
}

#[test]
fn test_garbage_cells_never_fail() {
    let mut rows = vec![vec![Cell::text("Region")]];
    rows.push(vec![
        Cell::text("Sandton"),
        Cell::text("abc"),
        Cell::Error("#DIV/0!".into()),
        Cell::text("inf"),
        Cell::Number(f64::NAN),
        Cell::text("--5"),
    ]);
    let report = normalize_grid(&RawGrid::new(rows), &SummaryConfig::default()).unwrap();

    let record = &report.records[0];
    assert!(record.values.iter().all(|(_, v)| *v == 0.0));
    assert_eq!(report.stats.coerced_to_zero, 3);
}
