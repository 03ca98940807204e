//! Model layer - domain records and app-level state types
//!
//! Entity records mirror backend JSON; `Store` holds the fetched lists;
//! `SelectionModel` drives the bulk-action workflow shared by the data
//! screens; `metrics` holds the pure dashboard computations.

pub mod alert;
pub mod event;
pub mod forecast;
pub mod item;
pub mod metrics;
pub mod modal;
pub mod selection;
pub mod store;
pub mod supplier;
pub mod transaction;
pub mod ui;

pub use alert::{Alert, AlertKind};
pub use event::{CalendarEvent, EventDraft};
pub use item::{Item, ItemDraft};
pub use modal::ModalStack;
pub use selection::{ActionKind, ConfirmOutcome, SelectionModel};
pub use store::Store;
pub use supplier::{Supplier, SupplierDraft, SupplierStatus};
pub use transaction::{KindFilter, Transaction, TransactionDraft, TxnKind, TxnStatus};
pub use ui::Screen;
