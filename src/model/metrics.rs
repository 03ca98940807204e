//! Derived dashboard metrics
//!
//! Pure functions over the fetched lists, recomputed on every draw. Nothing
//! here touches the network or screen state.

use crate::model::item::Item;
use crate::model::transaction::{Transaction, TxnKind};
use chrono::{Days, NaiveDate};

/// Direction of the day-over-day revenue movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    NoChange,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::NoChange => "―",
        }
    }
}

/// Today's revenue compared against yesterday's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueDelta {
    pub today: f64,
    pub yesterday: f64,
    /// Percentage change rounded to the nearest integer. Defined as 100 when
    /// yesterday was zero and today is not, and 0 when both are zero.
    pub percentage: i64,
    pub trend: Trend,
}

/// Sum of all item quantities.
pub fn total_stock(items: &[Item]) -> i64 {
    items.iter().map(|i| i.quantity).sum()
}

/// Number of items at or below their restock floor.
pub fn low_stock_count(items: &[Item]) -> usize {
    items.iter().filter(|i| i.is_low_stock()).count()
}

/// Low-stock share of the whole list, or `None` for an empty list.
pub fn low_stock_percentage(items: &[Item]) -> Option<f64> {
    if items.is_empty() {
        return None;
    }
    Some(low_stock_count(items) as f64 / items.len() as f64 * 100.0)
}

fn revenue_on(transactions: &[Transaction], date: NaiveDate) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == TxnKind::Inflow && t.date == date)
        .map(|t| t.amount)
        .sum()
}

/// Day-over-day inflow revenue delta for the given "today".
pub fn revenue_delta(transactions: &[Transaction], today: NaiveDate) -> RevenueDelta {
    let yesterday = today
        .checked_sub_days(Days::new(1))
        .unwrap_or(today);

    let today_revenue = revenue_on(transactions, today);
    let yesterday_revenue = revenue_on(transactions, yesterday);

    let (percentage, trend) = if yesterday_revenue == 0.0 {
        if today_revenue == 0.0 {
            (0, Trend::NoChange)
        } else {
            (100, Trend::Up)
        }
    } else {
        let pct =
            ((today_revenue - yesterday_revenue) / yesterday_revenue * 100.0).round() as i64;
        let trend = match pct {
            p if p > 0 => Trend::Up,
            p if p < 0 => Trend::Down,
            _ => Trend::NoChange,
        };
        (pct, trend)
    };

    RevenueDelta {
        today: today_revenue,
        yesterday: yesterday_revenue,
        percentage,
        trend,
    }
}

/// Inflow/outflow totals for the transactions summary bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TxnSummary {
    pub total_inflow: f64,
    pub total_outflow: f64,
    pub net_balance: f64,
}

pub fn summarize(transactions: &[Transaction]) -> TxnSummary {
    let mut summary = TxnSummary::default();
    for t in transactions {
        match t.kind {
            TxnKind::Inflow => summary.total_inflow += t.amount,
            TxnKind::Outflow => summary.total_outflow += t.amount,
        }
    }
    summary.net_balance = summary.total_inflow - summary.total_outflow;
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::transaction::TxnStatus;

    fn item(quantity: i64, threshold: i64) -> Item {
        let mut item: Item = serde_json::from_str(r#"{"itemName": "x"}"#).unwrap();
        item.quantity = quantity;
        item.low_stock_threshold = threshold;
        item
    }

    fn txn(date: &str, amount: f64, kind: TxnKind) -> Transaction {
        Transaction {
            id: 0,
            date: date.parse().unwrap(),
            description: String::new(),
            amount,
            kind,
            category: "General".to_string(),
            status: TxnStatus::Completed,
        }
    }

    #[test]
    fn test_total_and_low_stock() {
        let items = vec![item(3, 5), item(10, 5), item(5, 5)];
        assert_eq!(total_stock(&items), 18);
        assert_eq!(low_stock_count(&items), 2);
        let pct = low_stock_percentage(&items).unwrap();
        assert!((pct - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_low_stock_percentage_empty_list_is_none() {
        assert_eq!(low_stock_percentage(&[]), None);
    }

    #[test]
    fn test_revenue_delta_from_zero_yesterday() {
        let today: NaiveDate = "2026-08-30".parse().unwrap();
        let txns = vec![txn("2026-08-30", 50.0, TxnKind::Inflow)];
        let delta = revenue_delta(&txns, today);
        assert_eq!(delta.percentage, 100);
        assert_eq!(delta.trend, Trend::Up);
    }

    #[test]
    fn test_revenue_delta_halved() {
        let today: NaiveDate = "2026-08-30".parse().unwrap();
        let txns = vec![
            txn("2026-08-29", 100.0, TxnKind::Inflow),
            txn("2026-08-30", 50.0, TxnKind::Inflow),
        ];
        let delta = revenue_delta(&txns, today);
        assert_eq!(delta.percentage, -50);
        assert_eq!(delta.trend, Trend::Down);
    }

    #[test]
    fn test_revenue_delta_both_zero() {
        let today: NaiveDate = "2026-08-30".parse().unwrap();
        let delta = revenue_delta(&[], today);
        assert_eq!(delta.percentage, 0);
        assert_eq!(delta.trend, Trend::NoChange);
    }

    #[test]
    fn test_revenue_ignores_outflows_and_other_days() {
        let today: NaiveDate = "2026-08-30".parse().unwrap();
        let txns = vec![
            txn("2026-08-30", 50.0, TxnKind::Inflow),
            txn("2026-08-30", 500.0, TxnKind::Outflow),
            txn("2026-08-20", 999.0, TxnKind::Inflow),
        ];
        let delta = revenue_delta(&txns, today);
        assert_eq!(delta.today, 50.0);
        assert_eq!(delta.yesterday, 0.0);
    }

    #[test]
    fn test_summary_splits_by_kind() {
        let txns = vec![
            txn("2026-08-30", 50.0, TxnKind::Inflow),
            txn("2026-08-30", 30.0, TxnKind::Outflow),
            txn("2026-08-29", 20.0, TxnKind::Inflow),
        ];
        let summary = summarize(&txns);
        assert_eq!(summary.total_inflow, 70.0);
        assert_eq!(summary.total_outflow, 30.0);
        assert_eq!(summary.net_balance, 40.0);
    }
}
