//! Transaction records mirrored from the backend

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a transaction relative to the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum TxnKind {
    #[default]
    Inflow,
    Outflow,
}

impl From<String> for TxnKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Outflow" | "outflow" => TxnKind::Outflow,
            _ => TxnKind::Inflow,
        }
    }
}

impl TxnKind {
    pub fn label(&self) -> &'static str {
        match self {
            TxnKind::Inflow => "Inflow",
            TxnKind::Outflow => "Outflow",
        }
    }

    /// Sign prefix used when displaying the amount.
    pub fn sign(&self) -> &'static str {
        match self {
            TxnKind::Inflow => "+",
            TxnKind::Outflow => "-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum TxnStatus {
    #[default]
    Completed,
    Pending,
    Cancelled,
}

impl From<String> for TxnStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Pending" | "pending" => TxnStatus::Pending,
            "Cancelled" | "cancelled" => TxnStatus::Cancelled,
            _ => TxnStatus::Completed,
        }
    }
}

impl TxnStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TxnStatus::Completed => "Completed",
            TxnStatus::Pending => "Pending",
            TxnStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub id: i64,
    pub date: NaiveDate,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(rename = "type", default)]
    pub kind: TxnKind,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub status: TxnStatus,
}

fn default_description() -> String {
    "No description".to_string()
}

fn default_category() -> String {
    "General".to_string()
}

/// Body for `POST /transactions/` and `PUT /transactions/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TxnKind,
    pub category: String,
    pub status: TxnStatus,
}

impl From<&Transaction> for TransactionDraft {
    fn from(t: &Transaction) -> Self {
        Self {
            date: t.date,
            description: t.description.clone(),
            amount: t.amount,
            kind: t.kind,
            category: t.category.clone(),
            status: t.status,
        }
    }
}

/// Filter applied to the transactions table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Inflow,
    Outflow,
}

impl KindFilter {
    pub fn next(&self) -> KindFilter {
        match self {
            KindFilter::All => KindFilter::Inflow,
            KindFilter::Inflow => KindFilter::Outflow,
            KindFilter::Outflow => KindFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            KindFilter::All => "All",
            KindFilter::Inflow => "Inflows",
            KindFilter::Outflow => "Outflows",
        }
    }

    pub fn matches(&self, kind: TxnKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Inflow => kind == TxnKind::Inflow,
            KindFilter::Outflow => kind == TxnKind::Outflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(json: &str) -> Transaction {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_transaction_defaults() {
        let t = txn(r#"{"id": 1, "date": "2026-08-30", "amount": 50.0}"#);
        assert_eq!(t.description, "No description");
        assert_eq!(t.kind, TxnKind::Inflow);
        assert_eq!(t.category, "General");
        assert_eq!(t.status, TxnStatus::Completed);
    }

    #[test]
    fn test_type_tag_round_trip() {
        let t = txn(
            r#"{"id": 2, "date": "2026-08-30", "description": "Restock",
                "amount": 120.0, "type": "Outflow", "status": "Pending"}"#,
        );
        assert_eq!(t.kind, TxnKind::Outflow);
        assert_eq!(t.status, TxnStatus::Pending);

        let json = serde_json::to_value(TransactionDraft::from(&t)).unwrap();
        assert_eq!(json.get("type").unwrap(), "Outflow");
        assert_eq!(json.get("status").unwrap(), "Pending");
    }

    #[test]
    fn test_unknown_tags_use_defaults() {
        let t = txn(
            r#"{"id": 3, "date": "2026-08-30", "type": "sideways", "status": "???"}"#,
        );
        assert_eq!(t.kind, TxnKind::Inflow);
        assert_eq!(t.status, TxnStatus::Completed);
    }

    #[test]
    fn test_kind_filter_cycle_and_match() {
        let f = KindFilter::All;
        assert!(f.matches(TxnKind::Inflow));
        assert!(f.matches(TxnKind::Outflow));

        let f = f.next();
        assert_eq!(f, KindFilter::Inflow);
        assert!(f.matches(TxnKind::Inflow));
        assert!(!f.matches(TxnKind::Outflow));

        let f = f.next();
        assert_eq!(f, KindFilter::Outflow);
        assert_eq!(f.next(), KindFilter::All);
    }
}
