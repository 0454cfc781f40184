//! Failure classification via the upstream status endpoint.
//!
//! When the snapshot pipeline fails we probe `/status` to decide whether the
//! world was broken or just the job: players online means a real failure,
//! anything else reads as a maintenance window.

use tracing::{info, warn};

use crate::config::JobConfig;
use crate::esi::{EsiClient, EsiError, ServerStatus};

/// Terminal outcome of a snapshot run, mapped onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Snapshot written.
    Success,
    /// Pipeline failed while upstream was demonstrably up.
    RealFailure,
    /// Pipeline failed and upstream looks down or empty.
    Maintenance,
}

impl RunOutcome {
    pub fn exit_code(self) -> u8 {
        match self {
            RunOutcome::Success => 0,
            RunOutcome::RealFailure => 1,
            RunOutcome::Maintenance => 2,
        }
    }
}

/// Classify a pipeline failure by probing the status endpoint.
///
/// Never fails: an unreachable or undecodable status endpoint classifies as
/// maintenance. The probe builds its own client so a broken one from the
/// pipeline cannot get in the way.
pub async fn classify_failure(config: &JobConfig) -> RunOutcome {
    let client = match EsiClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            warn!("🏥 Could not build a probe client ({}); assuming a maintenance window", e);
            return RunOutcome::Maintenance;
        }
    };

    outcome_for_probe(client.server_status().await, config.min_players)
}

fn outcome_for_probe(probe: Result<ServerStatus, EsiError>, min_players: i64) -> RunOutcome {
    match probe {
        Ok(status) if status.players >= min_players => {
            info!(
                "🏥 Upstream reports {} players online; treating the failure as real",
                status.players
            );
            RunOutcome::RealFailure
        }
        Ok(status) => {
            info!(
                "🏥 Upstream reports only {} players online; assuming a maintenance window",
                status.players
            );
            RunOutcome::Maintenance
        }
        Err(e) => {
            warn!("🏥 Status probe failed ({}); assuming a maintenance window", e);
            RunOutcome::Maintenance
        }
    }
}
