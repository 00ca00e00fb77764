//! Data source trait definition.

use crate::error::Result;
use crate::model::HistoricalDataset;

/// Trait for sources that can produce the historical dataset.
///
/// Loading happens once at startup; implementations are free to block.
pub trait DataSource: Send + Sync {
    /// Data source name.
    fn name(&self) -> &str;

    /// Load every record into an immutable dataset.
    fn load(&self) -> Result<HistoricalDataset>;
}
