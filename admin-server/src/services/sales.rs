//! Daily sales aggregation

use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use shared::models::{OTHER_PAYMENT_TYPE, Order, SalesSummary};

use crate::db::repository::OrderRepository;
use crate::utils::{AppResult, time};

/// Sum order amounts overall and per payment type.
///
/// A null amount counts as zero; a null or blank payment type is bucketed
/// under `OTHER`. Only payment types that occur get a key, and the values
/// always add up to the total.
pub fn summarize(orders: &[Order]) -> SalesSummary {
    let mut summary = SalesSummary::default();
    for order in orders {
        let amount = order.final_amount.unwrap_or(Decimal::ZERO);
        let key = order
            .payment_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(OTHER_PAYMENT_TYPE);

        summary.total += amount;
        *summary
            .by_payment_type
            .entry(key.to_string())
            .or_insert(Decimal::ZERO) += amount;
    }
    summary
}

#[derive(Clone)]
pub struct SalesAggregator {
    orders: Arc<dyn OrderRepository>,
    offset: FixedOffset,
}

impl SalesAggregator {
    pub fn new(orders: Arc<dyn OrderRepository>, offset: FixedOffset) -> Self {
        Self { orders, offset }
    }

    /// Sales of one store over the business day `date`
    pub async fn daily(&self, store_id: i64, date: NaiveDate) -> AppResult<SalesSummary> {
        let start = time::day_start_millis(date, self.offset);
        let end = time::day_end_millis(date, self.offset);
        let orders = self.orders.find_in_range(store_id, start, end).await?;

        let summary = summarize(&orders);
        tracing::debug!(store_id, %date, orders = orders.len(), total = %summary.total, "Aggregated daily sales");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;

    fn order(amount: Option<i64>, payment_type: Option<&str>) -> Order {
        Order {
            id: 0,
            store_id: 1,
            final_amount: amount.map(Decimal::from),
            payment_type: payment_type.map(str::to_string),
            created_at: 0,
        }
    }

    #[test]
    fn test_empty_is_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, Decimal::ZERO);
        assert!(summary.by_payment_type.is_empty());
    }

    #[test]
    fn test_card_and_cash() {
        let summary = summarize(&[
            order(Some(1000), Some("CARD")),
            order(Some(2000), Some("CARD")),
            order(Some(500), Some("CASH")),
        ]);
        assert_eq!(summary.total, Decimal::from(3500));
        assert_eq!(summary.by_payment_type.len(), 2);
        assert_eq!(summary.by_payment_type["CARD"], Decimal::from(3000));
        assert_eq!(summary.by_payment_type["CASH"], Decimal::from(500));
    }

    #[test]
    fn test_nulls_count_as_zero_and_other() {
        let summary = summarize(&[
            order(None, Some("CARD")),
            order(Some(700), None),
            order(Some(300), Some("  ")),
        ]);
        assert_eq!(summary.total, Decimal::from(1000));
        assert_eq!(summary.by_payment_type["CARD"], Decimal::ZERO);
        assert_eq!(summary.by_payment_type[OTHER_PAYMENT_TYPE], Decimal::from(1000));
    }

    #[test]
    fn test_mapping_sums_to_total() {
        let orders: Vec<Order> = (0..50)
            .map(|i| {
                let pt = ["CARD", "CASH", "POINT"].get(i % 4).copied();
                order((i % 3 != 0).then_some(i as i64 * 37), pt)
            })
            .collect();
        let summary = summarize(&orders);
        let sum: Decimal = summary.by_payment_type.values().copied().sum();
        assert_eq!(sum, summary.total);
    }

    #[tokio::test]
    async fn test_day_window_is_inclusive() {
        let offset = time::offset_from_hours(9);
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let start = time::day_start_millis(date, offset);
        let end = time::day_end_millis(date, offset);

        let store = Arc::new(MemoryStore::new());
        store.insert_order(1, Some(Decimal::from(1)), Some("CARD"), start - 1);
        store.insert_order(1, Some(Decimal::from(10)), Some("CARD"), start);
        store.insert_order(1, Some(Decimal::from(100)), Some("CASH"), end);
        store.insert_order(1, Some(Decimal::from(1000)), Some("CASH"), end + 1);
        store.insert_order(2, Some(Decimal::from(5)), Some("CARD"), start);

        let summary = SalesAggregator::new(store, offset)
            .daily(1, date)
            .await
            .unwrap();
        assert_eq!(summary.total, Decimal::from(110));
    }
}
