//! Job configuration: every tunable the snapshot run depends on.
//!
//! All values are fixed at build time through `Default`; nothing is read from
//! files, flags, or the environment. Tests construct a [`JobConfig`] by hand
//! to point the pipeline at a mock server and a scratch output directory.

use std::path::PathBuf;
use std::time::Duration;

/// Production ESI base URL.
pub const DEFAULT_ESI_BASE_URL: &str = "https://esi.evetech.net";

/// Region whose order pages are fetched (The Forge).
pub const DEFAULT_REGION_ID: u32 = 10000002;

/// Solar system the aggregator keeps (Jita).
pub const DEFAULT_TARGET_SYSTEM_ID: u32 = 30000142;

/// Snapshot output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Everything a snapshot run needs, injected at startup.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Base URL for both the orders endpoint and the status probe.
    pub esi_base_url: String,

    /// Region id interpolated into the orders endpoint path.
    pub region_id: u32,

    /// Orders outside this solar system are discarded by the aggregator.
    pub target_system_id: u32,

    /// Upper bound on concurrently in-flight page fetches.
    pub max_concurrent_fetches: usize,

    /// Per-request timeout for order pages.
    pub request_timeout: Duration,

    /// Timeout for the status probe.
    pub probe_timeout: Duration,

    /// The upstream counts as healthy when the probe reports at least this
    /// many players online.
    pub min_players: i64,

    /// Directory the snapshot file is written into (created if missing).
    pub output_dir: PathBuf,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            esi_base_url: DEFAULT_ESI_BASE_URL.to_string(),
            region_id: DEFAULT_REGION_ID,
            target_system_id: DEFAULT_TARGET_SYSTEM_ID,
            max_concurrent_fetches: 50,
            request_timeout: Duration::from_secs(30),
            probe_timeout: Duration::from_secs(10),
            min_players: 1,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_production_constants() {
        let config = JobConfig::default();

        assert_eq!(config.esi_base_url, "https://esi.evetech.net");
        assert_eq!(config.region_id, 10000002);
        assert_eq!(config.target_system_id, 30000142);
        assert_eq!(config.max_concurrent_fetches, 50);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.probe_timeout, Duration::from_secs(10));
        assert_eq!(config.min_players, 1);
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }
}
