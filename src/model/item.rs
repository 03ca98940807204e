//! Inventory item records mirrored from the backend

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inventory item as returned by `GET /items/`.
///
/// The backend omits optional fields freely; defaults here match what the
/// screens display when a field is absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub id: i64,
    #[serde(default = "default_item_name")]
    pub item_name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_supplier")]
    pub supplier: String,
    #[serde(default)]
    pub last_restocked: Option<NaiveDate>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default = "default_threshold")]
    pub low_stock_threshold: i64,
}

fn default_item_name() -> String {
    "Unknown Item".to_string()
}

fn default_category() -> String {
    "Uncategorized".to_string()
}

fn default_unit() -> String {
    "pcs".to_string()
}

fn default_supplier() -> String {
    "Unknown Supplier".to_string()
}

fn default_threshold() -> i64 {
    5
}

impl Item {
    /// Whether the item sits at or below its restock floor.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.low_stock_threshold
    }
}

/// Body for `POST /items/` and `PUT /items/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub item_name: String,
    pub category: String,
    pub quantity: i64,
    pub unit: String,
    pub supplier: String,
    pub last_restocked: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub low_stock_threshold: i64,
}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self {
            item_name: item.item_name.clone(),
            category: item.category.clone(),
            quantity: item.quantity,
            unit: item.unit.clone(),
            supplier: item.supplier.clone(),
            last_restocked: item.last_restocked,
            expiry_date: item.expiry_date,
            low_stock_threshold: item.low_stock_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_defaults_for_absent_fields() {
        let item: Item = serde_json::from_str(r#"{"itemName": "Flour", "quantity": 3}"#).unwrap();
        assert_eq!(item.id, 0);
        assert_eq!(item.item_name, "Flour");
        assert_eq!(item.category, "Uncategorized");
        assert_eq!(item.unit, "pcs");
        assert_eq!(item.supplier, "Unknown Supplier");
        assert_eq!(item.low_stock_threshold, 5);
        assert!(item.last_restocked.is_none());
    }

    #[test]
    fn test_item_full_round() {
        let json = r#"{
            "id": 4,
            "itemName": "Sugar",
            "category": "Baking",
            "quantity": 12,
            "unit": "kg",
            "supplier": "Acme Foods",
            "lastRestocked": "2026-08-01",
            "expiryDate": "2027-01-01",
            "lowStockThreshold": 10
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 4);
        assert_eq!(item.quantity, 12);
        assert_eq!(
            item.last_restocked,
            Some(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap())
        );
        assert!(!item.is_low_stock());
    }

    #[test]
    fn test_low_stock_boundary() {
        let mut item: Item = serde_json::from_str(r#"{"itemName": "Rice"}"#).unwrap();
        item.quantity = 5;
        item.low_stock_threshold = 5;
        assert!(item.is_low_stock());
        item.quantity = 6;
        assert!(!item.is_low_stock());
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = ItemDraft {
            item_name: "Salt".to_string(),
            low_stock_threshold: 2,
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("itemName").is_some());
        assert!(json.get("lowStockThreshold").is_some());
    }
}
