use crate::{error::EtlError, load, tables, transform};
use connectors::{file::csv::source::CsvDataSource, store::session::StoreSession};
use model::{
    execution::failed_row::FailedRow,
    quality::{Entity, QualityReport, QualityTracker},
};
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub customers_file: PathBuf,
    pub products_file: PathBuf,
    pub sales_file: PathBuf,
}

impl PipelineConfig {
    /// Conventional raw-file names under one data directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        PipelineConfig {
            customers_file: dir.join("customers_raw.csv"),
            products_file: dir.join("products_raw.csv"),
            sales_file: dir.join("sales_raw.csv"),
        }
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub report: QualityReport,
    pub failures: Vec<FailedRow>,
}

/// Run the full pipeline: customers, then products, then sales. Sales rows
/// reference customer and product identities, so the order is fixed; the
/// referential dependency itself is enforced by the store. Sales are
/// extracted and cleaned once and that cleaned set feeds the loader.
pub async fn run(
    config: &PipelineConfig,
    session: &mut dyn StoreSession,
) -> Result<RunSummary, EtlError> {
    let run_id = Uuid::new_v4();
    info!(%run_id, "Starting ETL run");

    let mut tracker = QualityTracker::new();
    let mut failures = Vec::new();

    let rows = CsvDataSource::open(&config.customers_file, tables::customers_table())?.read_all()?;
    let customers = transform::clean_customers(rows, &mut tracker);
    failures
        .extend(load::load_batch(session, Entity::Customers, &customers, &mut tracker).await?);

    let rows = CsvDataSource::open(&config.products_file, tables::products_table())?.read_all()?;
    let products = transform::clean_products(rows, &mut tracker);
    failures.extend(load::load_batch(session, Entity::Products, &products, &mut tracker).await?);

    let rows = CsvDataSource::open(&config.sales_file, tables::sales_table())?.read_all()?;
    let sales = transform::clean_sales(rows, &mut tracker);
    failures.extend(load::load_sales(session, &sales, &mut tracker).await?);

    info!(%run_id, failed_rows = failures.len(), "ETL run completed");
    Ok(RunSummary {
        run_id,
        report: tracker.snapshot(),
        failures,
    })
}
