//! Column schema for the daily summary report.
//!
//! Maps each column position of the report table to the field name it is
//! published under and the kind of value it carries. Field names are the
//! public contract of the JSON output and must stay stable.

use serde::{Deserialize, Serialize};

/// Kind of value a column carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Row label, kept as trimmed text
    Label,
    /// Coerced to a floating-point number
    Numeric,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnField {
    pub index: usize,
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Ordered column index to field mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    fields: Vec<ColumnField>,
}

/// Numeric columns of the report, in column order starting at column 1
const PARCEL_SUMMARY_FIELDS: &[&str] = &[
    "total_verbals",
    "verbals_outstanding",
    "verbals_collected_pct",
    "pods_outstanding",
    "pods_collected_pct",
    "failtypes",
    "total_returns",
    "total_fails",
    "fail_pct",
    "waybills_collected",
    "total_activities",
    "pods_outstanding_1week",
    "age_analysis",
    "trip_sheets_total",
    "trip_sheets_open",
    "manifests_total",
    "manifests_open",
    "kgs_per_tripsheet",
    "kgs_per_manifest",
    "total_kgs",
];

impl Default for ColumnSchema {
    fn default() -> Self {
        Self::parcel_summary()
    }
}

impl ColumnSchema {
    /// Schema of the daily operations summary: `name` then 20 numeric columns
    pub fn parcel_summary() -> Self {
        let mut fields = Vec::with_capacity(PARCEL_SUMMARY_FIELDS.len() + 1);
        fields.push(ColumnField {
            index: 0,
            name: "name",
            kind: FieldKind::Label,
        });
        fields.extend(
            PARCEL_SUMMARY_FIELDS
                .iter()
                .enumerate()
                .map(|(i, name)| ColumnField {
                    index: i + 1,
                    name: *name,
                    kind: FieldKind::Numeric,
                }),
        );
        Self { fields }
    }

    pub fn fields(&self) -> &[ColumnField] {
        &self.fields
    }

    /// The label column (always column 0)
    pub fn label_field(&self) -> &ColumnField {
        &self.fields[0]
    }

    pub fn numeric_fields(&self) -> impl Iterator<Item = &ColumnField> {
        self.fields.iter().filter(|f| f.kind == FieldKind::Numeric)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
