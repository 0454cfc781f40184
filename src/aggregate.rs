//! Reduce raw market orders to a best-price summary per item type.
//!
//! Orders are narrowed to the target solar system, grouped by `type_id`, and
//! reduced to the highest bid and lowest ask on each side. An absent side
//! stays absent in the output; there are no sentinel prices.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use crate::esi::MarketOrder;

/// Best bid and ask for one item type.
///
/// Either side may be missing when the system has no orders on it. A present
/// side always reflects a real order, including one priced at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    /// Highest open buy price, when the system has any bids.
    #[serde(rename = "b", default, skip_serializing_if = "Option::is_none")]
    pub best_bid: Option<f64>,

    /// Lowest open sell price, when the system has any asks.
    #[serde(rename = "s", default, skip_serializing_if = "Option::is_none")]
    pub best_ask: Option<f64>,
}

/// Reduce a region order book to per-type best prices for one solar system.
///
/// Orders without a `type_id` are dropped. Types with no orders on either
/// side after filtering get no entry at all. The `BTreeMap` keeps type ids
/// in ascending numeric order, which keeps the serialized snapshot stable
/// across runs over the same data.
pub fn aggregate_orders(
    orders: &[MarketOrder],
    target_system_id: u32,
) -> BTreeMap<u32, PriceSummary> {
    let local: Vec<&MarketOrder> = orders
        .iter()
        .filter(|order| order.system_id == target_system_id)
        .collect();

    info!(
        "🔍 {} of {} orders are in system {}",
        local.len(),
        orders.len(),
        target_system_id
    );

    let mut by_type: BTreeMap<u32, Vec<&MarketOrder>> = BTreeMap::new();
    for order in local {
        if let Some(type_id) = order.type_id {
            by_type.entry(type_id).or_default().push(order);
        }
    }

    info!("🔍 {} distinct type ids", by_type.len());

    let mut summary = BTreeMap::new();
    for (type_id, group) in by_type {
        let best_bid = group
            .iter()
            .filter(|order| order.is_buy_order)
            .map(|order| order.price)
            .reduce(f64::max);

        let best_ask = group
            .iter()
            .filter(|order| !order.is_buy_order)
            .map(|order| order.price)
            .reduce(f64::min);

        // No orders on either side means no entry.
        if best_bid.is_none() && best_ask.is_none() {
            continue;
        }

        summary.insert(type_id, PriceSummary { best_bid, best_ask });
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const JITA: u32 = 30000142;

    fn order(system_id: u32, type_id: Option<u32>, is_buy_order: bool, price: f64) -> MarketOrder {
        MarketOrder {
            order_id: 1,
            type_id,
            system_id,
            is_buy_order,
            price,
            duration: 90,
            issued: Utc::now(),
            location_id: 60003760,
            min_volume: 1,
            range: "region".to_string(),
            volume_remain: 10,
            volume_total: 10,
        }
    }

    #[test]
    fn test_best_bid_is_highest_buy_and_best_ask_is_lowest_sell() {
        let orders = vec![
            order(JITA, Some(34), true, 100.0),
            order(JITA, Some(34), true, 150.0),
            order(JITA, Some(34), false, 200.0),
            order(JITA, Some(34), false, 180.0),
        ];

        let summary = aggregate_orders(&orders, JITA);

        assert_eq!(
            summary.get(&34),
            Some(&PriceSummary {
                best_bid: Some(150.0),
                best_ask: Some(180.0),
            })
        );
    }

    #[test]
    fn test_orders_outside_target_system_are_ignored() {
        let orders = vec![
            order(JITA, Some(34), true, 100.0),
            order(30000144, Some(34), true, 9999.0),
            order(30002187, Some(34), false, 1.0),
        ];

        let summary = aggregate_orders(&orders, JITA);

        assert_eq!(
            summary.get(&34),
            Some(&PriceSummary {
                best_bid: Some(100.0),
                best_ask: None,
            })
        );
    }

    #[test]
    fn test_orders_without_type_id_are_dropped() {
        let orders = vec![
            order(JITA, None, true, 500.0),
            order(JITA, Some(35), false, 12.5),
        ];

        let summary = aggregate_orders(&orders, JITA);

        assert_eq!(summary.len(), 1);
        assert!(summary.contains_key(&35));
    }

    #[test]
    fn test_one_sided_books_keep_the_other_side_absent() {
        let orders = vec![
            order(JITA, Some(34), true, 150.0),
            order(JITA, Some(35), false, 42.0),
        ];

        let summary = aggregate_orders(&orders, JITA);

        assert_eq!(
            summary.get(&34),
            Some(&PriceSummary {
                best_bid: Some(150.0),
                best_ask: None,
            })
        );
        assert_eq!(
            summary.get(&35),
            Some(&PriceSummary {
                best_bid: None,
                best_ask: Some(42.0),
            })
        );
    }

    #[test]
    fn test_zero_priced_order_is_a_real_price() {
        let orders = vec![order(JITA, Some(34), true, 0.0)];

        let summary = aggregate_orders(&orders, JITA);

        assert_eq!(summary.get(&34).and_then(|s| s.best_bid), Some(0.0));
    }

    #[test]
    fn test_empty_input_produces_empty_summary() {
        let summary = aggregate_orders(&[], JITA);

        assert!(summary.is_empty());
    }

    #[test]
    fn test_result_is_independent_of_order_arrival() {
        let forward = vec![
            order(JITA, Some(34), true, 100.0),
            order(JITA, Some(34), true, 150.0),
            order(JITA, Some(34), false, 180.0),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(
            aggregate_orders(&forward, JITA),
            aggregate_orders(&reversed, JITA)
        );
    }

    #[test]
    fn test_absent_sides_are_omitted_from_json() {
        let summary = PriceSummary {
            best_bid: Some(150.0),
            best_ask: None,
        };

        let json = serde_json::to_string(&summary).unwrap();

        assert_eq!(json, r#"{"b":150.0}"#);
    }

    #[test]
    fn test_summary_round_trips_through_json() {
        let summary = PriceSummary {
            best_bid: Some(150.0),
            best_ask: Some(180.0),
        };

        let json = serde_json::to_string(&summary).unwrap();
        let back: PriceSummary = serde_json::from_str(&json).unwrap();

        assert_eq!(back, summary);
    }
}
