use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};

use marketsnap::classify::{classify_failure, RunOutcome};
use marketsnap::cli::Cli;
use marketsnap::config::JobConfig;
use marketsnap::{logging, snapshot};

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI first so --help and --version exit before any setup
    let _cli = Cli::parse();

    logging::init_logging();

    let config = JobConfig::default();

    info!(
        "🚀 Fetching market orders for region {}...",
        config.region_id
    );

    match snapshot::run(&config).await {
        Ok(report) => {
            info!(
                "✅ Snapshot complete: {} orders reduced to {} items at {}",
                report.orders_fetched,
                report.items_written,
                report.output_path.display()
            );
            ExitCode::from(RunOutcome::Success.exit_code())
        }
        Err(e) => {
            error!("Snapshot failed: {}", e);

            // Log error chain if available
            let mut source = e.source();
            while let Some(err) = source {
                error!("   Caused by: {}", err);
                source = err.source();
            }

            let outcome = classify_failure(&config).await;
            ExitCode::from(outcome.exit_code())
        }
    }
}
