//! CSV report export
//!
//! Writes a snapshot of a data screen into the current working directory
//! with a timestamped name so repeated exports never clobber each other.

use crate::model::item::Item;
use crate::model::supplier::Supplier;
use crate::model::transaction::Transaction;
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use tracing::info;

fn report_path(prefix: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}-report-{}.csv",
        prefix,
        Local::now().format("%Y%m%d-%H%M%S")
    ))
}

pub fn export_items(items: &[Item]) -> Result<PathBuf> {
    let path = report_path("inventory");
    write_items_csv(&path, items)?;
    info!(path = %path.display(), rows = items.len(), "exported inventory report");
    Ok(path)
}

pub fn export_suppliers(suppliers: &[Supplier]) -> Result<PathBuf> {
    let path = report_path("suppliers");
    write_suppliers_csv(&path, suppliers)?;
    info!(path = %path.display(), rows = suppliers.len(), "exported supplier report");
    Ok(path)
}

/// Exports the rows currently visible, so an active kind filter carries
/// over into the report.
pub fn export_transactions(transactions: &[&Transaction]) -> Result<PathBuf> {
    let path = report_path("transactions");
    write_transactions_csv(&path, transactions)?;
    info!(path = %path.display(), rows = transactions.len(), "exported transaction report");
    Ok(path)
}

fn write_items_csv(path: &PathBuf, items: &[Item]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    writer.write_record([
        "id",
        "name",
        "category",
        "quantity",
        "unit",
        "supplier",
        "low_stock_threshold",
        "low_stock",
    ])?;
    for item in items {
        writer.write_record([
            item.id.to_string(),
            item.item_name.clone(),
            item.category.clone(),
            item.quantity.to_string(),
            item.unit.clone(),
            item.supplier.clone(),
            item.low_stock_threshold.to_string(),
            if item.is_low_stock() { "yes" } else { "no" }.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_suppliers_csv(path: &PathBuf, suppliers: &[Supplier]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    writer.write_record([
        "id",
        "name",
        "contact",
        "email",
        "phone",
        "items_provided",
        "rating",
        "status",
    ])?;
    for supplier in suppliers {
        writer.write_record([
            supplier.id.to_string(),
            supplier.supplier_name.clone(),
            supplier.contact_person.clone(),
            supplier.email.clone(),
            supplier.phone_number.clone(),
            supplier.items_provided.clone(),
            supplier.rating.to_string(),
            supplier.status.label().to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_transactions_csv(path: &PathBuf, transactions: &[&Transaction]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    writer.write_record(["id", "date", "description", "amount", "type", "category", "status"])?;
    for txn in transactions {
        writer.write_record([
            txn.id.to_string(),
            txn.date.to_string(),
            txn.description.clone(),
            txn.amount.to_string(),
            txn.kind.label().to_string(),
            txn.category.clone(),
            txn.status.label().to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item(name: &str, quantity: i64, threshold: i64) -> Item {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "itemName": name,
            "quantity": quantity,
            "lowStockThreshold": threshold,
        }))
        .unwrap()
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let dir = std::env::temp_dir().join("inventory-tui-export-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("report.csv");
        let items = vec![sample_item("Bolts", 3, 5), sample_item("Nuts", 50, 5)];
        write_items_csv(&path, &items).unwrap();
        let body = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,name"));
        assert!(lines[1].contains("Bolts"));
        assert!(lines[1].ends_with("yes"));
        assert!(lines[2].ends_with("no"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_transaction_csv_keeps_row_order() {
        let dir = std::env::temp_dir().join("inventory-tui-export-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("transactions.csv");
        let txns: Vec<Transaction> = vec![
            serde_json::from_value(serde_json::json!({
                "id": 1, "date": "2026-08-01", "amount": 25.0, "type": "Inflow",
            }))
            .unwrap(),
            serde_json::from_value(serde_json::json!({
                "id": 2, "date": "2026-08-02", "amount": 10.0, "type": "Outflow",
            }))
            .unwrap(),
        ];
        let refs: Vec<&Transaction> = txns.iter().collect();
        write_transactions_csv(&path, &refs).unwrap();
        let body = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Inflow"));
        assert!(lines[2].contains("Outflow"));
        std::fs::remove_file(&path).ok();
    }
}
