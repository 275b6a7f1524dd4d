//! Hierarchy inference across whole reports

use super::{labels, report_grid};
use crate::config::SummaryConfig;
use crate::models::{Cell, RecordType};
use crate::processor::normalize_grid;

#[test]
fn test_branches_nest_under_latest_region() {
    let grid = report_grid(labels(&[
        "Gauteng",
        "BranchA",
        "BranchB",
        "Western Cape",
        "BranchC",
    ]));

    let records = normalize_grid(&grid, &SummaryConfig::default())
        .unwrap()
        .records;

    assert_eq!(records.len(), 5);
    let groups: Vec<Option<&str>> = records.iter().map(|r| r.region_group.as_deref()).collect();
    assert_eq!(
        groups,
        vec![
            None,
            Some("Gauteng"),
            Some("Gauteng"),
            None,
            Some("Western Cape")
        ]
    );
}

#[test]
fn test_leading_branch_gets_unknown_region() {
    let grid = report_grid(labels(&["Stray", "Gauteng"]));
    let records = normalize_grid(&grid, &SummaryConfig::default())
        .unwrap()
        .records;

    assert_eq!(records[0].record_type, RecordType::Branch);
    assert_eq!(records[0].region_group.as_deref(), Some("Unknown"));
}

#[test]
fn test_blank_rows_skipped_without_resetting_region() {
    let mut data = labels(&["Gauteng"]);
    data.push(vec![Cell::Empty, Cell::Number(99.0)]);
    data.push(vec![Cell::text("nan"), Cell::Number(99.0)]);
    data.push(vec![Cell::text("   ")]);
    data.push(vec![]);
    data.extend(labels(&["Sandton"]));
    let grid = report_grid(data);

    let report = normalize_grid(&grid, &SummaryConfig::default()).unwrap();
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.stats.rows_skipped, 4);
    assert_eq!(report.stats.rows_scanned, 6);
    assert_eq!(report.records[1].region_group.as_deref(), Some("Gauteng"));
}

#[test]
fn test_non_finite_label_rows_skipped() {
    let mut data = labels(&["Gauteng"]);
    data.push(vec![Cell::Number(f64::NAN), Cell::Number(1.0)]);
    data.push(vec![Cell::Number(f64::INFINITY)]);
    data.extend(labels(&["Sandton"]));
    let grid = report_grid(data);

    let report = normalize_grid(&grid, &SummaryConfig::default()).unwrap();
    let names: Vec<&str> = report.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Gauteng", "Sandton"]);
    assert_eq!(report.stats.rows_skipped, 2);
    assert_eq!(report.records[1].region_group.as_deref(), Some("Gauteng"));
}

#[test]
fn test_order_preserved() {
    let names = ["Sandton", "TOTAL", "Gauteng", "Midrand", "Eastern Cape", "PE"];
    let grid = report_grid(labels(&names));
    let records = normalize_grid(&grid, &SummaryConfig::default())
        .unwrap()
        .records;

    let out: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(out, names);
}

#[test]
fn test_every_region_group_refers_to_earlier_region() {
    let grid = report_grid(labels(&[
        "Orphan",
        "Eastern Cape",
        "PE",
        "Eastern Cape 2",
        "Mthatha",
        "TOTAL",
    ]));
    let records = normalize_grid(&grid, &SummaryConfig::default())
        .unwrap()
        .records;

    for (i, record) in records.iter().enumerate() {
        if let Some(group) = &record.region_group {
            let earlier = records[..i].iter().any(|r| r.is_region() && &r.name == group);
            assert!(earlier || group == "Unknown", "{} -> {}", record.name, group);
        }
    }
}

#[test]
fn test_injected_region_set() {
    let config = SummaryConfig::default().with_known_regions(["North"]);
    let grid = report_grid(labels(&["Gauteng", "North", "Depot"]));
    let records = normalize_grid(&grid, &config).unwrap().records;

    assert_eq!(records[0].record_type, RecordType::Branch);
    assert_eq!(records[1].record_type, RecordType::Region);
    assert_eq!(records[2].region_group.as_deref(), Some("North"));
}

#[test]
fn test_numeric_label_is_rendered_as_text() {
    let grid = report_grid(vec![vec![Cell::Number(101.0), Cell::Number(2.0)]]);
    let records = normalize_grid(&grid, &SummaryConfig::default())
        .unwrap()
        .records;
    assert_eq!(records[0].name, "101");
    assert_eq!(records[0].record_type, RecordType::Branch);
}
