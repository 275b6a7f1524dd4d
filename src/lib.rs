//! Daily Summary Normalizer Library
//!
//! Turns a semi-structured daily operations report (banner rows, a header
//! row at an unknown position, and a flat list of region and branch rows)
//! into an ordered sequence of typed records annotated with their place in
//! the region/branch hierarchy.
//!
//! This library provides tools for:
//! - Reading a report worksheet into an untyped cell grid
//! - Locating the header row inside the report banner
//! - Coercing locale-formatted cell text to numbers
//! - Inferring which rows are regions and which branches belong to them
//! - Writing the records as dashboard JSON

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod header;
pub mod hierarchy;
pub mod inspect;
pub mod models;
pub mod normalize;
pub mod processor;
pub mod schema;
pub mod summary;

pub use config::SummaryConfig;
pub use error::{Result, SummaryError};
pub use models::{Cell, NormalizedRecord, RawGrid, RecordType};
pub use processor::{NormalizedReport, SummaryProcessor, normalize_grid};
pub use schema::ColumnSchema;
