use connectors::store::error::StoreError;
use engine::error::EtlError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ETL run failed: {0}")]
    Etl(#[from] EtlError),

    #[error("Storage failure: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No database URL provided; pass --database-url or set FLEXIMART_DATABASE_URL")]
    MissingDatabaseUrl,
}
