//! Workbook reading
//!
//! Decodes one worksheet into a [`RawGrid`] with calamine. Format
//! auto-detection is tried first; legacy exports that it rejects are
//! retried with the BIFF `.xls` decoder before giving up.

use crate::error::{Result, SummaryError};
use crate::models::{Cell, RawGrid};
use calamine::{Data, Range, Reader, Xls, open_workbook, open_workbook_auto};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use tracing::{debug, warn};

/// Read a worksheet (the first one unless `sheet` is given) into a grid
pub fn read_grid(path: &Path, sheet: Option<&str>) -> Result<RawGrid> {
    if !path.exists() {
        return Err(SummaryError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let auto_failure = match open_workbook_auto(path) {
        Ok(mut workbook) => {
            match grid_from_workbook::<BufReader<File>, _>(&mut workbook, path, sheet) {
                Ok(grid) => return Ok(grid),
                Err(e @ SummaryError::SheetNotFound { .. }) => return Err(e),
                Err(e) => e.to_string(),
            }
        }
        Err(e) => e.to_string(),
    };

    warn!(
        "Default reader failed for {} ({}), retrying with legacy XLS decoder",
        path.display(),
        auto_failure
    );

    let mut workbook: Xls<BufReader<File>> =
        open_workbook(path).map_err(|e| SummaryError::Workbook {
            path: path.to_path_buf(),
            reason: format!("{auto_failure}; legacy XLS decoder: {e}"),
        })?;

    grid_from_workbook::<BufReader<File>, _>(&mut workbook, path, sheet)
}

fn grid_from_workbook<RS, R>(workbook: &mut R, path: &Path, sheet: Option<&str>) -> Result<RawGrid>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: Display,
{
    let sheet_names = workbook.sheet_names();

    let sheet_name = match sheet {
        Some(name) => {
            if !sheet_names.iter().any(|s| s == name) {
                return Err(SummaryError::SheetNotFound {
                    path: path.to_path_buf(),
                    sheet: name.to_string(),
                });
            }
            name.to_string()
        }
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| SummaryError::EmptyWorkbook {
                path: path.to_path_buf(),
            })?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| SummaryError::Workbook {
            path: path.to_path_buf(),
            reason: format!("sheet '{}': {}", sheet_name, e),
        })?;

    let grid = range_to_grid(&range);
    debug!(
        "Read sheet '{}' from {}: {} rows x {} columns",
        sheet_name,
        path.display(),
        grid.row_count(),
        grid.column_count()
    );
    Ok(grid)
}

/// Convert a calamine range into a grid indexed by absolute sheet position.
///
/// calamine ranges start at the first used cell, so leading empty rows and
/// columns are padded back in.
pub fn range_to_grid(range: &Range<Data>) -> RawGrid {
    let Some((start_row, start_col)) = range.start() else {
        return RawGrid::default();
    };

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; start_col as usize];
        cells.extend(row.iter().map(convert_cell));
        rows.push(cells);
    }

    RawGrid::new(rows)
}

fn convert_cell(value: &Data) -> Cell {
    match value {
        Data::Empty => Cell::Empty,
        Data::Int(v) => Cell::Number(*v as f64),
        Data::Float(v) => Cell::Number(*v),
        Data::Bool(v) => Cell::Bool(*v),
        Data::String(v) => Cell::Text(v.clone()),
        Data::DateTime(v) => Cell::Number(v.as_f64()),
        Data::DateTimeIso(v) | Data::DurationIso(v) => Cell::Text(v.clone()),
        Data::Error(e) => Cell::Error(e.to_string()),
    }
}
