//! CSV dataset loader
//!
//! Reads the historical dataset from a delimited file with a header row.
//!
//! # Example
//!
//! ```rust,no_run
//! use data_core::CsvDataSource;
//! use data_spi::DataSource;
//!
//! let dataset = CsvDataSource::new("healthcare_dataset.csv").load().unwrap();
//! println!("{} rows, services: {:?}", dataset.len(), dataset.services());
//! ```

use chrono::NaiveDate;
use data_spi::{DataError, DataSource, HistoricalDataset, HistoricalRecord, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Columns every dataset file must provide. Other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "date",
    "service",
    "cout_total",
    "patients_count",
    "taux_occupation",
];

/// Dataset loader backed by a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvDataSource {
    /// Create a loader for a comma-separated file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Use a different field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for CsvDataSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn load(&self) -> Result<HistoricalDataset> {
        let file = File::open(&self.path)
            .map_err(|e| DataError::Io(format!("{}: {}", self.path.display(), e)))?;
        let dataset = read_records(BufReader::new(file), self.delimiter)?;

        tracing::info!(
            path = %self.path.display(),
            rows = dataset.len(),
            services = dataset.services().len(),
            "historical dataset loaded"
        );

        Ok(dataset)
    }
}

/// One CSV row before date validation.
#[derive(Debug, Deserialize)]
struct Row {
    date: String,
    service: String,
    cout_total: f64,
    patients_count: u32,
    taux_occupation: f64,
}

impl Row {
    fn into_record(self, line: usize) -> Result<HistoricalRecord> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| DataError::InvalidDate(format!("line {}: '{}'", line, self.date)))?;
        for (column, value) in [
            ("cout_total", self.cout_total),
            ("taux_occupation", self.taux_occupation),
        ] {
            if !value.is_finite() {
                return Err(DataError::ParseError(format!(
                    "line {}: {} is not a finite number ({})",
                    line, column, value
                )));
            }
        }
        Ok(HistoricalRecord::new(
            date,
            &self.service,
            self.cout_total,
            self.patients_count,
            self.taux_occupation,
        ))
    }
}

/// Parse a dataset from any reader. The first row must be a header naming
/// at least the [`REQUIRED_COLUMNS`].
pub fn read_records<R: Read>(reader: R, delimiter: u8) -> Result<HistoricalDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| DataError::ParseError(format!("Failed to read headers: {}", e)))?
        .clone();

    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(DataError::ParseError(format!(
            "Column '{}' not found",
            missing
        )));
    }

    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<Row>().enumerate() {
        // +2: one for the header, one for 1-based line numbers
        let line = idx + 2;
        let row = result.map_err(|e| DataError::ParseError(format!("line {}: {}", line, e)))?;
        records.push(row.into_record(line)?);
    }

    if records.is_empty() {
        return Err(DataError::NoData);
    }

    Ok(HistoricalDataset::new(records))
}
