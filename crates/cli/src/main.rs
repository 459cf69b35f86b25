use crate::{commands::Commands, error::CliError};
use clap::Parser;
use connectors::store::mysql::session::MySqlSession;
use engine::{
    pipeline::{self, PipelineConfig},
    report,
};
use tracing::{Level, info};

mod commands;
mod env;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "fleximart-etl",
    version = "0.1.0",
    about = "CSV to MySQL ETL pipeline with data-quality reporting"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            data_dir,
            database_url,
            report: report_path,
        } => {
            let url = env::database_url(database_url)?;
            let mut session = MySqlSession::connect(&url).await?;

            let config = PipelineConfig::from_dir(&data_dir);
            let summary = pipeline::run(&config, &mut session).await?;
            session.disconnect().await?;

            output::log_failures(&summary.failures);

            let text = report::render(&summary.report);
            match report_path {
                Some(path) => output::write_report(&text, &path).await?,
                None => output::print_report(&text),
            }

            info!(run_id = %summary.run_id, "ETL pipeline completed successfully");
        }
        Commands::TestConn { database_url } => {
            let url = env::database_url(database_url)?;
            let session = MySqlSession::connect(&url).await?;
            session.disconnect().await?;
            info!("Connection OK");
        }
    }

    Ok(())
}
