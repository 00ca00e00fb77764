//! Data error types.

use thiserror::Error;

/// Dataset loading errors.
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// Dataset file could not be opened or read
    #[error("I/O error: {0}")]
    Io(String),

    /// Failed to parse a row or header
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid date format
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// No records in the dataset
    #[error("No data returned")]
    NoData,
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let cases = [
            (
                DataError::Io("healthcare_dataset.csv: not found".to_string()),
                "I/O error: healthcare_dataset.csv: not found",
            ),
            (
                DataError::ParseError("line 3: invalid float literal".to_string()),
                "Parse error: line 3: invalid float literal",
            ),
            (
                DataError::InvalidDate("2024-02-30".to_string()),
                "Invalid date: 2024-02-30",
            ),
            (DataError::NoData, "No data returned"),
        ];
        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_boxes_as_std_error() {
        let error: Box<dyn std::error::Error + Send + Sync> = Box::new(DataError::NoData);
        assert_eq!(error.to_string(), "No data returned");
    }
}
