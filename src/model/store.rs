//! Fetched backend data, owned by the app and patched in place
//!
//! The backend is the source of truth; this is a mirror updated after each
//! successful call. Overwrites are last-write-wins by design.

use crate::model::alert::Alert;
use crate::model::event::CalendarEvent;
use crate::model::item::Item;
use crate::model::supplier::Supplier;
use crate::model::transaction::Transaction;

#[derive(Debug, Default)]
pub struct Store {
    pub items: Vec<Item>,
    pub suppliers: Vec<Supplier>,
    pub transactions: Vec<Transaction>,
    pub alerts: Vec<Alert>,
    pub events: Vec<CalendarEvent>,
    /// Set while the initial fetch batch is in flight.
    pub loading: bool,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the item list, substituting positional ids where the backend
    /// sent none (the list endpoint omits ids for some records).
    pub fn set_items(&mut self, mut items: Vec<Item>) {
        for (index, item) in items.iter_mut().enumerate() {
            if item.id == 0 {
                item.id = index as i64 + 1;
            }
        }
        self.items = items;
    }

    pub fn set_transactions(&mut self, mut transactions: Vec<Transaction>) {
        for (index, t) in transactions.iter_mut().enumerate() {
            if t.id == 0 {
                t.id = index as i64 + 1;
            }
        }
        self.transactions = transactions;
    }

    pub fn upsert_item(&mut self, item: Item) {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    pub fn upsert_supplier(&mut self, supplier: Supplier) {
        match self.suppliers.iter_mut().find(|s| s.id == supplier.id) {
            Some(existing) => *existing = supplier,
            None => self.suppliers.push(supplier),
        }
    }

    pub fn upsert_transaction(&mut self, transaction: Transaction) {
        match self.transactions.iter_mut().find(|t| t.id == transaction.id) {
            Some(existing) => *existing = transaction,
            None => self.transactions.push(transaction),
        }
    }

    pub fn push_event(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    pub fn remove_event(&mut self, id: i64) {
        self.events.retain(|e| e.id != id);
    }
}
