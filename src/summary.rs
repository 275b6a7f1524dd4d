//! Headline metrics and branch status over normalized records.
//!
//! These are the figures a dashboard shows above its tables: report-wide
//! values come straight from the `TOTAL` row, while a single region's values
//! are rolled up from its branches.

use crate::constants::{TOTAL_LABEL, status_thresholds};
use crate::models::NormalizedRecord;
use serde::Serialize;
use std::collections::BTreeSet;

/// Report-wide or per-region headline figures
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeadlineMetrics {
    pub total_kgs: f64,
    pub verbals_collected_pct: f64,
    pub pods_collected_pct: f64,
    pub total_fails: f64,
}

impl HeadlineMetrics {
    /// Compute headline figures.
    ///
    /// Without a region the `TOTAL` row is used as is (zeros when absent).
    /// With a region, figures are aggregated over that region's branches.
    pub fn compute(records: &[NormalizedRecord], region: Option<&str>) -> Self {
        match region {
            None => records
                .iter()
                .find(|r| r.name == TOTAL_LABEL)
                .map(|total| Self {
                    total_kgs: total.value("total_kgs"),
                    verbals_collected_pct: total.value("verbals_collected_pct"),
                    pods_collected_pct: total.value("pods_collected_pct"),
                    total_fails: total.value("total_fails"),
                })
                .unwrap_or_default(),
            Some(region) => {
                let branches: Vec<&NormalizedRecord> = records
                    .iter()
                    .filter(|r| r.is_branch() && r.region_group.as_deref() == Some(region))
                    .collect();
                Self::aggregate(&branches)
            }
        }
    }

    fn aggregate(branches: &[&NormalizedRecord]) -> Self {
        let total_verbals: f64 = branches.iter().map(|b| b.value("total_verbals")).sum();
        let verbals_collected: f64 = branches
            .iter()
            .map(|b| b.value("total_verbals") - b.value("verbals_outstanding"))
            .sum();

        let verbals_collected_pct = if total_verbals > 0.0 {
            verbals_collected / total_verbals * 100.0
        } else {
            0.0
        };

        let pods_collected_pct = if branches.is_empty() {
            0.0
        } else {
            branches
                .iter()
                .map(|b| b.value("pods_collected_pct"))
                .sum::<f64>()
                / branches.len() as f64
        };

        Self {
            total_kgs: branches.iter().map(|b| b.value("total_kgs")).sum(),
            verbals_collected_pct,
            pods_collected_pct,
            total_fails: branches.iter().map(|b| b.value("total_fails")).sum(),
        }
    }
}

/// Operational status of a branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BranchStatus {
    Top,
    Watch,
    Critical,
}

impl BranchStatus {
    pub fn classify(record: &NormalizedRecord) -> Self {
        use status_thresholds::*;

        let pods = record.value("pods_collected_pct");
        let verbals = record.value("verbals_collected_pct");
        let fails = record.value("total_fails");

        if pods > TOP_COLLECTION_PCT && verbals > TOP_COLLECTION_PCT && fails < TOP_MAX_FAILS {
            BranchStatus::Top
        } else if pods < CRITICAL_POD_PCT || fails > CRITICAL_FAILS {
            BranchStatus::Critical
        } else {
            BranchStatus::Watch
        }
    }
}

/// Branch names per status, critical branches ordered by fails descending
pub fn classify_branches(records: &[NormalizedRecord]) -> Vec<(BranchStatus, Vec<&str>)> {
    let mut top = Vec::new();
    let mut watch = Vec::new();
    let mut critical: Vec<&NormalizedRecord> = Vec::new();

    for record in records.iter().filter(|r| r.is_branch()) {
        match BranchStatus::classify(record) {
            BranchStatus::Top => top.push(record.name.as_str()),
            BranchStatus::Watch => watch.push(record.name.as_str()),
            BranchStatus::Critical => critical.push(record),
        }
    }

    critical.sort_by(|a, b| b.value("total_fails").total_cmp(&a.value("total_fails")));

    vec![
        (BranchStatus::Top, top),
        (BranchStatus::Watch, watch),
        (
            BranchStatus::Critical,
            critical.into_iter().map(|r| r.name.as_str()).collect(),
        ),
    ]
}

/// Distinct region groups referenced by branches, sorted
pub fn region_groups(records: &[NormalizedRecord]) -> Vec<&str> {
    records
        .iter()
        .filter(|r| r.is_branch())
        .filter_map(|r| r.region_group.as_deref())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
