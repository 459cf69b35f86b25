use thiserror::Error;

/// All errors coming from the storage layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A constraint rejected a single row. The row's transactional unit is
    /// rolled back and the batch continues.
    #[error("Constraint violation ({code}): {message}")]
    Constraint { code: u16, message: String },

    /// Any MySQL driver error that is not a constraint violation. Fatal.
    #[error("MySQL error: {0}")]
    MySql(#[from] mysql_async::Error),

    /// Writing rows failed at the application level. Fatal.
    #[error("Write error: {0}")]
    Write(String),
}

impl StoreError {
    /// Row-level failures are skipped and recorded; everything else aborts
    /// the run.
    pub fn is_row_level(&self) -> bool {
        matches!(self, StoreError::Constraint { .. })
    }
}
