//! The snapshot pipeline: fetch, aggregate, persist.

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::aggregate::aggregate_orders;
use crate::config::JobConfig;
use crate::esi::EsiClient;
use crate::fetch::fetch_all_orders;
use crate::storage::write_snapshot;

/// What a successful run produced, for the final log line.
#[derive(Debug, Clone)]
pub struct SnapshotReport {
    /// Orders fetched across all pages, before filtering.
    pub orders_fetched: usize,
    /// Item types written to the snapshot.
    pub items_written: usize,
    /// Where the snapshot landed.
    pub output_path: PathBuf,
}

/// Run the full pipeline once.
pub async fn run(config: &JobConfig) -> Result<SnapshotReport> {
    let client = EsiClient::new(config)?;

    let orders = fetch_all_orders(&client, config).await?;
    info!("📦 Fetched {} orders in total", orders.len());

    let summary = aggregate_orders(&orders, config.target_system_id);

    let output_path = write_snapshot(&summary, config)?;

    Ok(SnapshotReport {
        orders_fetched: orders.len(),
        items_written: summary.len(),
        output_path,
    })
}
