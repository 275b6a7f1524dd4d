//! Main processing engine.
//!
//! Orchestrates one normalization run: read the workbook grid, locate the
//! header, build the ordered record sequence, then write the JSON output.
//! The run is all-or-nothing; output is written only after every record
//! has been built.

pub mod builder;
pub mod reader;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::builder::RecordBuilder;

use crate::config::SummaryConfig;
use crate::error::Result;
use crate::header::HeaderLocation;
use crate::inspect::GridSummary;
use crate::models::{NormalizedRecord, ProcessingStats, RawGrid};

use colored::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Records built from a grid together with run statistics
#[derive(Debug, Clone)]
pub struct NormalizedReport {
    pub records: Vec<NormalizedRecord>,
    pub stats: ProcessingStats,
}

/// Normalize an in-memory grid
pub fn normalize_grid(grid: &RawGrid, config: &SummaryConfig) -> Result<NormalizedReport> {
    let start_time = Instant::now();
    let location = locate_header(grid, config)?;

    let builder = RecordBuilder::from_config(config);
    let (records, build_stats) = builder.build(grid, location.data_start());

    let stats = ProcessingStats {
        header_row: location.row,
        header_detected: location.is_detected(),
        rows_scanned: build_stats.rows_scanned,
        rows_skipped: build_stats.rows_skipped,
        regions: build_stats.regions,
        branches: build_stats.branches,
        coerced_to_zero: build_stats.coerced_to_zero,
        output_path: PathBuf::new(),
        processing_time_ms: start_time.elapsed().as_millis(),
    };

    Ok(NormalizedReport { records, stats })
}

fn locate_header(grid: &RawGrid, config: &SummaryConfig) -> Result<HeaderLocation> {
    let locator = config.header_locator();
    if config.require_header {
        locator.locate_strict(grid)
    } else {
        Ok(locator.locate(grid))
    }
}

/// File-to-file normalization run
#[derive(Debug)]
pub struct SummaryProcessor {
    input_path: PathBuf,
    output_path: PathBuf,
    config: SummaryConfig,
}

impl SummaryProcessor {
    /// Create a processor for an existing input workbook
    pub fn new(input_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_path,
            output_path,
            config: SummaryConfig::default(),
        }
    }

    /// Configure the processor
    pub fn with_config(mut self, config: SummaryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn read_input(&self) -> Result<RawGrid> {
        reader::read_grid(&self.input_path, self.config.sheet.as_deref())
    }

    /// Main processing entry point
    pub fn process(&self) -> Result<NormalizedReport> {
        let start_time = Instant::now();
        println!("{}", "Starting daily summary normalization".bright_green().bold());
        println!("  {} {}", "Input:".bright_cyan(), self.input_path.display());
        println!("  {} {}", "Output:".bright_cyan(), self.output_path.display());

        let grid = self.read_input()?;
        info!(
            "Loaded {} rows x {} columns from {}",
            grid.row_count(),
            grid.column_count(),
            self.input_path.display()
        );

        let mut report = normalize_grid(&grid, &self.config)?;
        if report.stats.header_detected {
            println!(
                "  {} row {}",
                "Found header at".bright_green(),
                report.stats.header_row.to_string().bright_white().bold()
            );
        } else {
            println!(
                "  {} row {}",
                "Header not found, assuming".bright_yellow(),
                report.stats.header_row.to_string().bright_white().bold()
            );
        }

        writer::write_records(&self.output_path, &report.records, self.config.pretty)?;

        report.stats.output_path = self.output_path.clone();
        report.stats.processing_time_ms = start_time.elapsed().as_millis();
        print_summary(&report.stats);

        Ok(report)
    }

    /// Summarize the raw grid and write it as JSON instead of normalizing
    pub fn inspect(&self, sample_rows: usize) -> Result<GridSummary> {
        println!("{}", "Inspecting report layout".bright_green().bold());
        println!("  {} {}", "Input:".bright_cyan(), self.input_path.display());

        let grid = self.read_input()?;
        let location = self.config.header_locator().locate(&grid);
        let summary = GridSummary::from_grid(&grid, sample_rows).with_header(location);

        writer::write_json(&self.output_path, &summary, true)?;
        debug!(
            "Grid summary: {} rows, {} columns, header {:?}",
            summary.rows, summary.columns, summary.header_row
        );
        println!(
            "  {} {}",
            "Summary written to".bright_green(),
            self.output_path.display()
        );

        Ok(summary)
    }
}

fn print_summary(stats: &ProcessingStats) {
    println!("\n{}", "Processing Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );
    println!(
        "  {} {} ({} regions, {} branches)",
        "Records:".bright_cyan(),
        stats.records().to_string().bright_white().bold(),
        stats.regions,
        stats.branches
    );
    println!(
        "  {} {}",
        "Rows skipped:".bright_cyan(),
        stats.rows_skipped.to_string().bright_white()
    );
    if stats.coerced_to_zero > 0 {
        println!(
            "  {} {}",
            "Unparseable cells written as 0:".bright_yellow(),
            stats.coerced_to_zero.to_string().bright_yellow().bold()
        );
    }
}
