//! Scheduled market snapshot job for EVE Online's Jita trade hub.
//!
//! Pulls the full order book of The Forge region from ESI, reduces it to the
//! best bid and ask per item type in Jita, and writes the result as a JSON
//! snapshot. When the pipeline fails, a status probe decides whether the exit
//! code should signal a real failure or a maintenance window.

pub mod aggregate;
pub mod classify;
pub mod cli;
pub mod config;
pub mod esi;
pub mod fetch;
pub mod logging;
pub mod snapshot;
pub mod storage;
