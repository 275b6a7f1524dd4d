//! Basic processing integration tests

use super::{banner_rows, labels, report_grid};
use crate::config::SummaryConfig;
use crate::models::{Cell, RawGrid, RecordType};
use crate::processor::normalize_grid;

#[test]
fn test_reference_scenario() {
    let grid = report_grid(vec![
        vec![
            Cell::text("TOTAL"),
            Cell::Number(100.0),
            Cell::Number(20.0),
            Cell::text("20%"),
        ],
        vec![
            Cell::text("Eastern Cape"),
            Cell::Number(50.0),
            Cell::Number(10.0),
            Cell::text("10,0%"),
        ],
        vec![
            Cell::text("BranchX"),
            Cell::Number(5.0),
            Cell::Number(1.0),
            Cell::text("abc%"),
        ],
    ]);

    let report = normalize_grid(&grid, &SummaryConfig::default()).unwrap();
    let records = &report.records;

    assert_eq!(records.len(), 3);
    assert_eq!(report.stats.header_row, 6);
    assert!(report.stats.header_detected);

    assert_eq!(records[0].name, "TOTAL");
    assert_eq!(records[0].record_type, RecordType::Region);
    assert_eq!(records[0].value("total_verbals"), 100.0);
    assert_eq!(records[0].value("verbals_collected_pct"), 20.0);
    assert!(records[0].region_group.is_none());

    assert_eq!(records[1].name, "Eastern Cape");
    assert_eq!(records[1].record_type, RecordType::Region);
    assert_eq!(records[1].value("verbals_collected_pct"), 10.0);

    assert_eq!(records[2].name, "BranchX");
    assert_eq!(records[2].record_type, RecordType::Branch);
    assert_eq!(records[2].region_group.as_deref(), Some("Eastern Cape"));
    assert_eq!(records[2].value("verbals_collected_pct"), 0.0);
    assert_eq!(report.stats.coerced_to_zero, 1);
}

#[test]
fn test_header_found_at_other_position() {
    let mut rows = vec![vec![Cell::text("Banner")], vec![Cell::text(" Region ")]];
    rows.extend(labels(&["Gauteng", "Sandton"]));
    let grid = RawGrid::new(rows);

    let report = normalize_grid(&grid, &SummaryConfig::default()).unwrap();
    assert_eq!(report.stats.header_row, 1);
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.records[0].name, "Gauteng");
}

#[test]
fn test_fallback_header_position() {
    // Header cell reads differently, so row 6 is assumed and data starts at 7
    let mut rows = banner_rows();
    rows.push(vec![Cell::text("Area")]);
    rows.extend(labels(&["Gauteng", "Sandton"]));
    let grid = RawGrid::new(rows);

    let report = normalize_grid(&grid, &SummaryConfig::default()).unwrap();
    assert!(!report.stats.header_detected);
    assert_eq!(report.stats.header_row, 6);
    assert_eq!(report.records.len(), 2);
}

#[test]
fn test_every_record_has_all_schema_fields() {
    let grid = report_grid(labels(&["Gauteng", "Sandton"]));
    let report = normalize_grid(&grid, &SummaryConfig::default()).unwrap();

    for record in &report.records {
        let value = serde_json::to_value(record).unwrap();
        let object = value.as_object().unwrap();
        let expected_keys = if record.region_group.is_some() { 23 } else { 22 };
        assert_eq!(object.len(), expected_keys, "record {}", record.name);
        assert!(object.values().all(|v| !v.is_null()));
    }
}

#[test]
fn test_output_key_order() {
    let grid = report_grid(labels(&["Sandton"]));
    let report = normalize_grid(&grid, &SummaryConfig::default()).unwrap();

    let json = serde_json::to_string(&report.records[0]).unwrap();
    let name = json.find("\"name\"").unwrap();
    let first = json.find("\"total_verbals\"").unwrap();
    let last = json.find("\"total_kgs\"").unwrap();
    let kind = json.find("\"type\"").unwrap();
    let group = json.find("\"region_group\"").unwrap();
    assert!(name < first && first < last && last < kind && kind < group);
}
