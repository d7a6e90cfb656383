pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod ingest;
pub mod pipeline;
pub mod records;
pub(crate) mod utils;

pub use error::{TrackerError, TrackerResult};
pub use records::{RecordTable, SampleRecord};
