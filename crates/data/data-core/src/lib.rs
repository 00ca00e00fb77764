//! Data Source Core
//!
//! Implementations for dataset loaders.

pub mod csv_source;

pub use csv_source::{read_records, CsvDataSource, REQUIRED_COLUMNS};
