//! Concurrent paginated fetch of the region order book.
//!
//! Page 1 is fetched alone to learn the total page count, then the remaining
//! pages are fetched concurrently behind a semaphore. A failed page after the
//! first is logged and skipped so one bad page cannot sink the whole run.

use anyhow::{Context, Result};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::config::JobConfig;
use crate::esi::{EsiClient, MarketOrder};

/// Fetch every page of the region order book.
///
/// Fails only when page 1 fails; later pages degrade to empty on error.
/// Record order is deterministic: page order first, upstream order within
/// each page.
pub async fn fetch_all_orders(client: &EsiClient, config: &JobConfig) -> Result<Vec<MarketOrder>> {
    let first = client
        .first_orders_page()
        .await
        .context("Failed to fetch page 1 of the region order book")?;

    info!("📄 Region has {} order page(s)", first.total_pages);
    info!("📄 Page 1: {} orders", first.orders.len());

    if first.total_pages <= 1 {
        return Ok(first.orders);
    }

    let semaphore = Arc::new(Semaphore::new(config.max_concurrent_fetches));

    let mut futures = Vec::new();
    for page in 2..=first.total_pages {
        futures.push(fetch_page(client, Arc::clone(&semaphore), page));
    }

    let pages = join_all(futures).await;

    Ok(merge_pages(first.orders, pages))
}

/// Fetch a single page under the concurrency cap.
///
/// Never fails: an error is logged and the page contributes no orders.
async fn fetch_page(
    client: &EsiClient,
    semaphore: Arc<Semaphore>,
    page: u32,
) -> (u32, Vec<MarketOrder>) {
    let _permit = semaphore.acquire().await.expect("semaphore closed");

    match client.orders_page(page).await {
        Ok(orders) => (page, orders),
        Err(e) => {
            warn!("⚠️  Page {} failed, continuing without it: {}", page, e);
            (page, Vec::new())
        }
    }
}

/// Stitch the fetched pages back together in page order.
fn merge_pages<T>(first: Vec<T>, mut pages: Vec<(u32, Vec<T>)>) -> Vec<T> {
    pages.sort_by_key(|(page, _)| *page);

    let mut orders = first;
    for (page, records) in pages {
        info!("📄 Page {}: {} orders", page, records.len());
        orders.extend(records);
    }
    orders
}
