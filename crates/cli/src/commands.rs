use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full ETL pipeline and emit the data-quality report
    Run {
        #[arg(long, help = "Directory containing the raw CSV files")]
        data_dir: PathBuf,

        #[arg(
            long,
            help = "MySQL connection string; falls back to FLEXIMART_DATABASE_URL / DATABASE_URL"
        )]
        database_url: Option<String>,

        #[arg(
            long,
            help = "If specified, writes the quality report to this file instead of stdout"
        )]
        report: Option<PathBuf>,
    },
    /// Test the database connection
    TestConn {
        #[arg(long, help = "MySQL connection string; falls back to the environment")]
        database_url: Option<String>,
    },
}
