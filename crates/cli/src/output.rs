use crate::error::CliError;
use model::execution::failed_row::FailedRow;
use std::path::Path;
use tracing::warn;

pub async fn write_report(text: &str, path: &Path) -> Result<(), CliError> {
    tokio::fs::write(path, text).await?;
    Ok(())
}

pub fn print_report(text: &str) {
    println!("{text}");
}

/// Surface every skipped row distinctly instead of burying them in a count.
pub fn log_failures(failures: &[FailedRow]) {
    for failure in failures {
        warn!(id = %failure.id, "Row skipped during load: {failure}");
    }
}
