//! Contract module containing trait definitions for dataset loading

mod data_source;

pub use data_source::DataSource;
