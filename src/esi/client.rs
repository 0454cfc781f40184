//! HTTP client for the EVE Swagger Interface (ESI).
//!
//! One shared `reqwest::Client` serves both the paginated order scan and the
//! `/status` probe. The probe carries its own short per-request timeout so a
//! wedged status endpoint cannot stall failure classification for the full
//! request timeout.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_ENCODING};
use std::time::Duration;
use tracing::debug;

use crate::config::JobConfig;

use super::types::{EsiError, FirstPage, MarketOrder, ServerStatus};

/// Response header carrying the total page count of a paginated endpoint.
const PAGES_HEADER: &str = "x-pages";

/// URL builder for the ESI endpoints we call.
#[derive(Debug, Clone)]
pub struct EsiEndpoints {
    base_url: String,
}

impl EsiEndpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Region order book, one page at a time.
    pub fn orders(&self, region_id: u32, page: u32) -> String {
        format!(
            "{}/markets/{}/orders?order_type=all&page={}",
            self.base_url, region_id, page
        )
    }

    /// Cluster status endpoint used by the failure classifier.
    pub fn status(&self) -> String {
        format!("{}/status", self.base_url)
    }
}

/// Client for the ESI market and status endpoints.
pub struct EsiClient {
    client: reqwest::Client,
    endpoints: EsiEndpoints,
    region_id: u32,
    probe_timeout: Duration,
}

impl EsiClient {
    /// Create a new ESI client from the job configuration.
    pub fn new(config: &JobConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip,deflate"));

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            endpoints: EsiEndpoints::new(&config.esi_base_url),
            region_id: config.region_id,
            probe_timeout: config.probe_timeout,
        })
    }

    /// Fetch page 1 of the region order book along with the total page count.
    ///
    /// The page count comes from the `x-pages` response header; a missing or
    /// unparsable header means a single page.
    pub async fn first_orders_page(&self) -> Result<FirstPage, EsiError> {
        let url = self.endpoints.orders(self.region_id, 1);
        debug!("Fetching first order page: {}", url);

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;

        let total_pages = response
            .headers()
            .get(PAGES_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(1);

        let orders = response.json::<Vec<MarketOrder>>().await?;

        Ok(FirstPage {
            orders,
            total_pages,
        })
    }

    /// Fetch one page of the region order book.
    pub async fn orders_page(&self, page: u32) -> Result<Vec<MarketOrder>, EsiError> {
        let url = self.endpoints.orders(self.region_id, page);
        debug!("Fetching order page: {}", url);

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;

        Ok(response.json::<Vec<MarketOrder>>().await?)
    }

    /// Probe the cluster status endpoint.
    ///
    /// Uses a short per-request timeout instead of the client default so the
    /// classifier gets an answer quickly even when upstream hangs.
    pub async fn server_status(&self) -> Result<ServerStatus, EsiError> {
        let url = self.endpoints.status();
        debug!("Probing server status: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.probe_timeout)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        Ok(response.json::<ServerStatus>().await?)
    }

    /// Turn a non-2xx response into `EsiError::Api`, keeping the body text
    /// for the log line.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, EsiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(EsiError::Api { status, body })
        }
    }
}
