//! EVE Swagger Interface (ESI) integration: endpoint URLs, wire types, and
//! the HTTP client shared by the order scan and the status probe.

pub mod client;
pub mod types;

pub use client::{EsiClient, EsiEndpoints};
pub use types::{EsiError, FirstPage, MarketOrder, ServerStatus};
