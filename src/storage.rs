//! Snapshot persistence: pretty-printed JSON under the output directory.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::aggregate::PriceSummary;
use crate::config::JobConfig;

/// File name of the price snapshot inside the output directory.
pub const SNAPSHOT_FILENAME: &str = "market_prices.json";

/// Write the price summary to `<output_dir>/market_prices.json`.
///
/// Creates the output directory when missing and replaces any previous
/// snapshot in full. Because the summary keeps its keys sorted, rewriting
/// the same data produces byte-identical output.
pub fn write_snapshot(
    summary: &BTreeMap<u32, PriceSummary>,
    config: &JobConfig,
) -> Result<PathBuf> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output_dir.display()
        )
    })?;

    let path = config.output_dir.join(SNAPSHOT_FILENAME);

    let json = serde_json::to_string_pretty(summary).context("Failed to serialize snapshot")?;

    let mut file = File::create(&path)
        .with_context(|| format!("Failed to create snapshot file: {}", path.display()))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write snapshot file: {}", path.display()))?;

    info!("💾 Saved {} item prices to {}", summary.len(), path.display());

    Ok(path)
}
