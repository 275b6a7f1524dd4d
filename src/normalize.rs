//! Locale-tolerant numeric coercion for report cells
//!
//! Report exports mix native numbers with text such as `"12,5%"` or
//! `"3 400"`. Every cell is coerced to a finite `f64`; anything missing or
//! unparseable becomes `0.0`. [`try_coerce_value`] keeps the two cases
//! apart for callers that need to know.

use crate::constants::NAN_LITERAL;
use crate::models::Cell;

/// Coerce one cell to a number, collapsing missing or malformed data to zero
pub fn coerce_value(cell: &Cell) -> f64 {
    try_coerce_value(cell).unwrap_or(0.0)
}

/// Coerce one cell to a finite number, `None` when missing or unparseable
pub fn try_coerce_value(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Empty | Cell::Error(_) => None,
        Cell::Number(n) => n.is_finite().then_some(*n),
        Cell::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Cell::Text(text) => parse_numeric_text(text),
    }
}

/// True for blank cells, error cells and the textual `nan` marker
pub fn is_missing(cell: &Cell) -> bool {
    match cell {
        Cell::Empty | Cell::Error(_) => true,
        Cell::Number(n) => !n.is_finite(),
        Cell::Bool(_) => false,
        Cell::Text(text) => is_missing_text(text),
    }
}

fn is_missing_text(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || trimmed == NAN_LITERAL
}

/// Parse report text after whitespace, percent sign and decimal comma cleanup
pub fn parse_numeric_text(text: &str) -> Option<f64> {
    if is_missing_text(text) {
        return None;
    }

    let cleaned = clean_numeric_text(text);
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Strip whitespace and `%`, and turn decimal commas into points.
///
/// A single decimal comma preceded by dot grouping (`"1.234,56"`) drops the
/// grouping dots. Any other mix of separators is left for the parse to reject.
pub fn clean_numeric_text(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '%')
        .collect();

    let mut commas = stripped.match_indices(',');
    match (commas.next(), commas.next()) {
        (Some((comma, _)), None) if stripped[..comma].contains('.') => {
            let (integer, fraction) = stripped.split_at(comma);
            format!("{}.{}", integer.replace('.', ""), &fraction[1..])
        }
        _ => stripped.replace(',', "."),
    }
}
