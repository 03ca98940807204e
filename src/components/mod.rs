//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod alerts;
pub mod calendar;
pub mod confirm_dialog;
pub mod dashboard;
pub mod forecast;
pub mod forms;
pub mod help_dialog;
pub mod inventory;
pub mod layout;
pub mod quit_dialog;
pub mod suppliers;
pub mod table;
pub mod transactions;

pub use alerts::AlertsScreen;
pub use calendar::CalendarScreen;
pub use confirm_dialog::ConfirmDialog;
pub use dashboard::DashboardScreen;
pub use forecast::ForecastScreen;
pub use forms::{EventForm, FormDialog};
pub use help_dialog::HelpDialog;
pub use inventory::InventoryScreen;
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use suppliers::SuppliersScreen;
pub use table::SelectTable;
pub use transactions::TransactionsScreen;
