use connectors::{file::csv::error::FileError, store::error::StoreError};
use thiserror::Error;

/// Fatal pipeline failures. Row-level load failures never surface here;
/// they are collected as `FailedRow`s in the run summary.
#[derive(Debug, Error)]
pub enum EtlError {
    #[error("Extraction failed: {0}")]
    Extract(#[from] FileError),

    #[error("Storage failure: {0}")]
    Store(#[from] StoreError),
}
