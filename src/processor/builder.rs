//! Record assembly for report data rows
//!
//! Walks the data rows below the header in order, coerces each numeric
//! column and threads the region cursor through the hierarchy classifier.

use crate::config::SummaryConfig;
use crate::hierarchy::{HierarchyClassifier, RegionCursor, is_skipped_label};
use crate::models::{NormalizedRecord, RawGrid};
use crate::normalize::{is_missing, try_coerce_value};
use crate::schema::ColumnSchema;
use tracing::debug;

/// Counters collected while building records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub rows_scanned: usize,
    pub rows_skipped: usize,
    pub regions: usize,
    pub branches: usize,
    pub coerced_to_zero: usize,
}

/// Turns grid rows into normalized records
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    schema: ColumnSchema,
    classifier: HierarchyClassifier,
    initial_cursor: RegionCursor,
}

impl RecordBuilder {
    pub fn new(
        schema: ColumnSchema,
        classifier: HierarchyClassifier,
        initial_cursor: RegionCursor,
    ) -> Self {
        Self {
            schema,
            classifier,
            initial_cursor,
        }
    }

    pub fn from_config(config: &SummaryConfig) -> Self {
        Self::new(
            ColumnSchema::parcel_summary(),
            config.classifier(),
            config.region_cursor(),
        )
    }

    /// Build records from every row at or after `data_start`, in row order
    pub fn build(&self, grid: &RawGrid, data_start: usize) -> (Vec<NormalizedRecord>, BuildStats) {
        let mut records = Vec::new();
        let mut stats = BuildStats::default();
        let mut cursor = self.initial_cursor.clone();

        for row in data_start..grid.row_count() {
            stats.rows_scanned += 1;

            match self.build_row(grid, row, cursor.clone(), &mut stats) {
                Some((record, next)) => {
                    if record.is_region() {
                        stats.regions += 1;
                    } else {
                        stats.branches += 1;
                    }
                    records.push(record);
                    cursor = next;
                }
                None => stats.rows_skipped += 1,
            }
        }

        debug!(
            "Built {} records ({} regions, {} branches) from {} rows, {} skipped",
            records.len(),
            stats.regions,
            stats.branches,
            stats.rows_scanned,
            stats.rows_skipped
        );

        (records, stats)
    }

    /// Build one row's record, `None` when the row carries no label
    fn build_row(
        &self,
        grid: &RawGrid,
        row: usize,
        cursor: RegionCursor,
        stats: &mut BuildStats,
    ) -> Option<(NormalizedRecord, RegionCursor)> {
        let label_cell = grid.cell(row, self.schema.label_field().index);
        let name = label_cell.as_label().trim().to_string();
        if is_skipped_label(&name) {
            return None;
        }

        let values = self
            .schema
            .numeric_fields()
            .map(|field| {
                let cell = grid.cell(row, field.index);
                let value = match try_coerce_value(cell) {
                    Some(value) => value,
                    None => {
                        if !is_missing(cell) {
                            stats.coerced_to_zero += 1;
                            debug!(
                                "Row {} '{}': unparseable {} value {:?} written as 0",
                                row, name, field.name, cell
                            );
                        }
                        0.0
                    }
                };
                (field.name.to_string(), value)
            })
            .collect();

        let (classification, next) = self.classifier.classify(&name, cursor);

        let record = NormalizedRecord {
            name,
            values,
            record_type: classification.record_type(),
            region_group: classification.into_region_group(),
        };

        Some((record, next))
    }
}
