//! Wire types for the ESI endpoints the snapshot job touches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ESI client error types
#[derive(Debug, thiserror::Error)]
pub enum EsiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ESI returned HTTP {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// One market order as returned by the region orders endpoint.
///
/// Decoded verbatim from upstream and never mutated. `type_id` is optional:
/// records without one occur and are dropped during aggregation instead of
/// failing the whole page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketOrder {
    /// Unique order id.
    pub order_id: i64,

    /// Item the order trades.
    pub type_id: Option<u32>,

    /// Solar system the order sits in; the locale filter key.
    pub system_id: u32,

    /// True for bids, false for asks.
    pub is_buy_order: bool,

    /// Price in ISK, as sent by upstream.
    pub price: f64,

    /// Number of days the order is valid for.
    pub duration: i32,

    /// Moment the order was issued.
    pub issued: DateTime<Utc>,

    /// Station or structure holding the order.
    pub location_id: i64,

    /// Minimum quantity per transaction.
    pub min_volume: i32,

    /// Order range ("station", "region", or a jump count).
    pub range: String,

    /// Quantity still on the books.
    pub volume_remain: i32,

    /// Quantity when the order was placed.
    pub volume_total: i32,
}

/// First page of an order scan: its records plus the total page count
/// advertised by the `x-pages` response header.
#[derive(Debug, Clone)]
pub struct FirstPage {
    pub orders: Vec<MarketOrder>,
    pub total_pages: u32,
}

/// Response body of the `/status` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerStatus {
    /// Players currently online; the classifier's health signal.
    pub players: i64,

    /// Build identifier, when the cluster reports one.
    #[serde(default)]
    pub server_version: Option<String>,

    /// Moment the current cluster session started.
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
}
