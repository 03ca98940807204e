//! Background API worker
//!
//! Every network call runs on its own thread and reports back over a
//! channel. The app drains the channel on each tick so the UI never
//! blocks on the backend.

use crate::model::alert::Alert;
use crate::model::event::{CalendarEvent, EventDraft};
use crate::model::forecast::ForecastRequest;
use crate::model::item::{Item, ItemDraft};
use crate::model::supplier::{Supplier, SupplierDraft};
use crate::model::transaction::{Transaction, TransactionDraft};
use crate::services::api::{ApiClient, ApiError, EntityKind};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use tracing::{debug, error};

/// Completed background call, delivered on the next tick.
#[derive(Debug)]
pub enum ApiMsg {
    Items(Result<Vec<Item>, ApiError>),
    Suppliers(Result<Vec<Supplier>, ApiError>),
    Transactions(Result<Vec<Transaction>, ApiError>),
    Alerts(Result<Vec<Alert>, ApiError>),
    Events(Result<Vec<CalendarEvent>, ApiError>),
    ItemSaved(Result<Item, ApiError>),
    SupplierSaved(Result<Supplier, ApiError>),
    TransactionSaved(Result<Transaction, ApiError>),
    EventSaved(Result<CalendarEvent, ApiError>),
    /// Outcome of a batched delete. `failed` counts ids whose request
    /// did not succeed; rows are only removed locally when it is zero.
    Deleted {
        entity: EntityKind,
        ids: Vec<i64>,
        failed: usize,
    },
    Forecast(Result<Vec<f64>, ApiError>),
}

pub struct ApiWorker {
    base_url: String,
    tx: Sender<ApiMsg>,
    rx: Receiver<ApiMsg>,
}

impl ApiWorker {
    pub fn new(base_url: impl Into<String>) -> Self {
        let (tx, rx) = channel();
        Self {
            base_url: base_url.into(),
            tx,
            rx,
        }
    }

    /// Drain everything that finished since the last tick.
    pub fn poll(&self) -> Vec<ApiMsg> {
        self.rx.try_iter().collect()
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce(ApiClient) -> ApiMsg + Send + 'static,
    {
        let tx = self.tx.clone();
        let base_url = self.base_url.clone();
        thread::spawn(move || {
            let msg = job(ApiClient::new(base_url));
            // Receiver gone means the app is shutting down.
            let _ = tx.send(msg);
        });
    }

    pub fn fetch_items(&self) {
        debug!("fetching items");
        self.spawn(|api| ApiMsg::Items(api.list_items()));
    }

    pub fn fetch_suppliers(&self) {
        debug!("fetching suppliers");
        self.spawn(|api| ApiMsg::Suppliers(api.list_suppliers()));
    }

    pub fn fetch_transactions(&self) {
        debug!("fetching transactions");
        self.spawn(|api| ApiMsg::Transactions(api.list_transactions()));
    }

    pub fn fetch_alerts(&self) {
        debug!("fetching alerts");
        self.spawn(|api| ApiMsg::Alerts(api.list_alerts()));
    }

    pub fn fetch_events(&self) {
        debug!("fetching events");
        self.spawn(|api| ApiMsg::Events(api.list_events()));
    }

    pub fn fetch_all(&self) {
        self.fetch_items();
        self.fetch_suppliers();
        self.fetch_transactions();
        self.fetch_alerts();
        self.fetch_events();
    }

    pub fn save_item(&self, id: Option<i64>, draft: ItemDraft) {
        self.spawn(move |api| {
            ApiMsg::ItemSaved(match id {
                Some(id) => api.update_item(id, &draft),
                None => api.create_item(&draft),
            })
        });
    }

    pub fn save_supplier(&self, id: Option<i64>, draft: SupplierDraft) {
        self.spawn(move |api| {
            ApiMsg::SupplierSaved(match id {
                Some(id) => api.update_supplier(id, &draft),
                None => api.create_supplier(&draft),
            })
        });
    }

    pub fn save_transaction(&self, id: Option<i64>, draft: TransactionDraft) {
        self.spawn(move |api| {
            ApiMsg::TransactionSaved(match id {
                Some(id) => api.update_transaction(id, &draft),
                None => api.create_transaction(&draft),
            })
        });
    }

    pub fn save_event(&self, draft: EventDraft) {
        self.spawn(move |api| ApiMsg::EventSaved(api.create_event(&draft)));
    }

    pub fn forecast(&self, request: ForecastRequest) {
        debug!(product = %request.product, "requesting forecast");
        self.spawn(move |api| ApiMsg::Forecast(api.forecast(&request)));
    }

    /// Delete each id on its own thread, then report one combined result
    /// once every request has finished.
    pub fn delete_batch(&self, entity: EntityKind, ids: Vec<i64>) {
        if ids.is_empty() {
            return;
        }
        let tx = self.tx.clone();
        let base_url = self.base_url.clone();
        thread::spawn(move || {
            let (done_tx, done_rx) = channel();
            for &id in &ids {
                let done_tx = done_tx.clone();
                let base_url = base_url.clone();
                thread::spawn(move || {
                    let result = ApiClient::new(base_url).delete(entity, id);
                    if let Err(ref err) = result {
                        error!(id, %err, "delete failed");
                    }
                    let _ = done_tx.send(result.is_ok());
                });
            }
            drop(done_tx);
            let failed = done_rx.iter().filter(|ok| !ok).count();
            let _ = tx.send(ApiMsg::Deleted {
                entity,
                ids,
                failed,
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::time::Duration;

    /// Bind an ephemeral port, then drop the listener. Connecting to the
    /// address is refused immediately, with no network involved.
    fn dead_backend_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    #[test]
    fn test_poll_empty_when_idle() {
        let worker = ApiWorker::new("http://localhost:8000");
        assert!(worker.poll().is_empty());
    }

    #[test]
    fn test_delete_batch_reports_failures_against_dead_backend() {
        let worker = ApiWorker::new(dead_backend_url());
        worker.delete_batch(EntityKind::Item, vec![1, 2, 3]);
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        loop {
            let msgs = worker.poll();
            if let Some(ApiMsg::Deleted { ids, failed, .. }) = msgs.into_iter().next() {
                assert_eq!(ids, vec![1, 2, 3]);
                assert_eq!(failed, 3);
                break;
            }
            assert!(std::time::Instant::now() < deadline, "no delete result");
            thread::sleep(Duration::from_millis(20));
        }
    }

    #[test]
    fn test_delete_batch_empty_ids_is_inert() {
        let worker = ApiWorker::new(dead_backend_url());
        worker.delete_batch(EntityKind::Item, vec![]);
        thread::sleep(Duration::from_millis(50));
        assert!(worker.poll().is_empty());
    }
}
