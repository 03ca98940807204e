//! REST client for the inventory backend
//!
//! Blocking client; callers run it on background threads (see `worker`).
//! Errors split into the three cases the screens care about: the request
//! never completed, the body did not parse, or the backend said no.

use crate::model::alert::Alert;
use crate::model::event::{CalendarEvent, EventDraft};
use crate::model::forecast::{ForecastRequest, ForecastResponse};
use crate::model::item::{Item, ItemDraft};
use crate::model::supplier::{Supplier, SupplierDraft};
use crate::model::transaction::{Transaction, TransactionDraft};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("bad response body: {0}")]
    Parse(String),
    #[error("backend rejected the request: {0}")]
    Server(String),
}

/// Which entity collection a bulk operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Item,
    Supplier,
    Transaction,
}

impl EntityKind {
    pub fn path(&self) -> &'static str {
        match self {
            EntityKind::Item => "items",
            EntityKind::Supplier => "suppliers",
            EntityKind::Transaction => "transactions",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Item => "item",
            EntityKind::Supplier => "supplier",
            EntityKind::Transaction => "transaction",
        }
    }
}

/// Client for the inventory backend.
pub struct ApiClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response)
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response)
    }

    fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .put(&url)
            .json(body)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response)
    }

    fn decode<T: DeserializeOwned>(
        response: reqwest::blocking::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Server(format!("{} {}", status, body.trim())));
        }
        response.json().map_err(|e| ApiError::Parse(e.to_string()))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Collections
    // ─────────────────────────────────────────────────────────────────────

    pub fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        self.get_json("items/")
    }

    pub fn list_suppliers(&self) -> Result<Vec<Supplier>, ApiError> {
        self.get_json("suppliers/")
    }

    pub fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json("transactions/")
    }

    pub fn list_alerts(&self) -> Result<Vec<Alert>, ApiError> {
        self.get_json("alerts/")
    }

    pub fn list_events(&self) -> Result<Vec<CalendarEvent>, ApiError> {
        self.get_json("events/")
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    pub fn create_item(&self, draft: &ItemDraft) -> Result<Item, ApiError> {
        self.post_json("items/", draft)
    }

    pub fn update_item(&self, id: i64, draft: &ItemDraft) -> Result<Item, ApiError> {
        self.put_json(&format!("items/{}", id), draft)
    }

    pub fn create_supplier(&self, draft: &SupplierDraft) -> Result<Supplier, ApiError> {
        self.post_json("suppliers/", draft)
    }

    pub fn update_supplier(&self, id: i64, draft: &SupplierDraft) -> Result<Supplier, ApiError> {
        self.put_json(&format!("suppliers/{}", id), draft)
    }

    pub fn create_transaction(
        &self,
        draft: &TransactionDraft,
    ) -> Result<Transaction, ApiError> {
        self.post_json("transactions/", draft)
    }

    pub fn update_transaction(
        &self,
        id: i64,
        draft: &TransactionDraft,
    ) -> Result<Transaction, ApiError> {
        self.put_json(&format!("transactions/{}", id), draft)
    }

    pub fn create_event(&self, draft: &EventDraft) -> Result<CalendarEvent, ApiError> {
        self.post_json("events/", draft)
    }

    /// Delete one record from the given collection.
    pub fn delete(&self, entity: EntityKind, id: i64) -> Result<(), ApiError> {
        let url = format!("{}/{}/{}", self.base_url, entity.path(), id);
        let response = self
            .client
            .delete(&url)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Server(status.to_string()));
        }
        Ok(())
    }

    pub fn forecast(&self, request: &ForecastRequest) -> Result<Vec<f64>, ApiError> {
        let response: ForecastResponse = self.post_json("api/forecast", request)?;
        Ok(response.forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_paths() {
        assert_eq!(EntityKind::Item.path(), "items");
        assert_eq!(EntityKind::Supplier.path(), "suppliers");
        assert_eq!(EntityKind::Transaction.path(), "transactions");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Server("404 Not Found".to_string());
        assert!(err.to_string().contains("404"));
    }
}
