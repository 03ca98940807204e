//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to the screens
//! and modal dialogs. App coordinates between components and the
//! background API worker but holds no business logic itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, AlertsScreen, CalendarScreen, ConfirmDialog, DashboardScreen,
    EventForm, ForecastScreen, FormDialog, HelpDialog, InventoryScreen, QuitDialog,
    SuppliersScreen, TransactionsScreen,
};
use crate::components::forms::FormTarget;
use crate::config::Config;
use crate::model::modal::ModalStack;
use crate::model::selection::{ActionKind, ConfirmOutcome, SelectionModel};
use crate::model::store::Store;
use crate::model::ui::Screen;
use crate::services::api::EntityKind;
use crate::services::export;
use crate::services::worker::{ApiMsg, ApiWorker};
use crate::theme::{ColorMode, Theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{error, info, warn};

/// A modal overlay together with the component that drives it.
pub enum ModalEntry {
    Quit(QuitDialog),
    Confirm(ConfirmDialog),
    Form(FormDialog),
    Event(EventForm),
    EventDelete { id: i64, dialog: ConfirmDialog },
    Help(HelpDialog),
}

impl ModalEntry {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self {
            ModalEntry::Quit(dialog) => dialog.handle_key_event(key),
            ModalEntry::Confirm(dialog) => dialog.handle_key_event(key),
            ModalEntry::Form(form) => form.handle_key_event(key),
            ModalEntry::Event(form) => form.handle_key_event(key),
            ModalEntry::EventDelete { dialog, .. } => dialog.handle_key_event(key),
            ModalEntry::Help(dialog) => dialog.handle_key_event(key),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self {
            ModalEntry::Quit(dialog) => dialog.draw(frame, area),
            ModalEntry::Confirm(dialog) => dialog.draw(frame, area),
            ModalEntry::Form(form) => form.draw(frame, area),
            ModalEntry::Event(form) => form.draw(frame, area),
            ModalEntry::EventDelete { dialog, .. } => dialog.draw(frame, area),
            ModalEntry::Help(dialog) => dialog.draw(frame, area),
        }
    }
}

/// Main application state - coordinates between components
pub struct App {
    /// Active screen tab
    pub screen: Screen,

    /// Fetched backend data shared by every screen
    pub store: Store,

    /// Modal overlay stack
    pub modals: ModalStack<ModalEntry>,

    /// Background API worker
    pub worker: ApiWorker,

    /// Immutable color palette
    pub theme: Theme,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message shown in the status line
    pub status_message: Option<String>,

    api_url: String,

    // ─────────────────────────────────────────────────────────────────────────
    // Screens
    // ─────────────────────────────────────────────────────────────────────────
    pub dashboard: DashboardScreen,
    pub inventory: InventoryScreen,
    pub suppliers: SuppliersScreen,
    pub transactions: TransactionsScreen,
    pub alerts: AlertsScreen,
    pub calendar: CalendarScreen,
    pub forecast: ForecastScreen,
}

impl App {
    pub fn new(config: &Config) -> App {
        let mut store = Store::new();
        store.loading = true;
        let worker = ApiWorker::new(config.api_url.clone());
        worker.fetch_all();

        App {
            screen: Screen::Dashboard,
            store,
            modals: ModalStack::new(),
            worker,
            theme: Theme::new(ColorMode::from_name(&config.color_mode)),
            should_quit: false,
            status_message: None,
            api_url: config.api_url.clone(),
            dashboard: DashboardScreen::default(),
            inventory: InventoryScreen::default(),
            suppliers: SuppliersScreen::default(),
            transactions: TransactionsScreen::default(),
            alerts: AlertsScreen::default(),
            calendar: CalendarScreen::default(),
            forecast: ForecastScreen::default(),
        }
    }

    /// Deep-link straight to one alert (`--alert <id>`).
    pub fn open_alert(&mut self, id: i64) {
        self.screen = Screen::Alerts;
        self.alerts.focus(id);
    }

    fn status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Selection model of the active record screen, if it has one.
    fn active_selection(&mut self) -> Option<&mut SelectionModel> {
        match self.screen {
            Screen::Inventory => Some(&mut self.inventory.selection),
            Screen::Suppliers => Some(&mut self.suppliers.selection),
            Screen::Transactions => Some(&mut self.transactions.selection),
            _ => None,
        }
    }

    fn active_entity(&self) -> Option<EntityKind> {
        match self.screen {
            Screen::Inventory => Some(EntityKind::Item),
            Screen::Suppliers => Some(EntityKind::Supplier),
            Screen::Transactions => Some(EntityKind::Transaction),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Global key map (no modal open, screen did not consume the key)
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_global_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::ForceQuit);
        }
        match key.code {
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Tab => Some(Action::NextScreen),
            KeyCode::BackTab => Some(Action::PrevScreen),
            KeyCode::Char(c) => Screen::all()
                .into_iter()
                .find(|screen| screen.shortcut() == c)
                .map(Action::GotoScreen),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Action handlers
    // ─────────────────────────────────────────────────────────────────────────

    fn open_add_form(&mut self) {
        let form = match self.screen {
            Screen::Inventory => FormDialog::item(None),
            Screen::Suppliers => FormDialog::supplier(None),
            Screen::Transactions => FormDialog::transaction(None),
            _ => return,
        };
        self.modals.push(ModalEntry::Form(form));
    }

    fn open_edit_form(&mut self, id: i64) {
        let form = match self.screen {
            Screen::Inventory => {
                let item = self.store.items.iter().find(|item| item.id == id);
                FormDialog::item(item)
            }
            Screen::Suppliers => {
                let supplier = self.store.suppliers.iter().find(|s| s.id == id);
                FormDialog::supplier(supplier)
            }
            Screen::Transactions => {
                let txn = self.store.transactions.iter().find(|t| t.id == id);
                FormDialog::transaction(txn)
            }
            _ => return,
        };
        self.modals.push(ModalEntry::Form(form));
    }

    fn request_action(&mut self, kind: ActionKind) {
        let entity = match self.active_entity() {
            Some(entity) => entity,
            None => return,
        };
        let selection = match self.active_selection() {
            Some(selection) => selection,
            None => return,
        };
        // Arming with nothing selected is allowed; confirming it is a no-op.
        selection.request(kind);
        let count = selection.selected_ids().len();
        self.modals.push(ModalEntry::Confirm(ConfirmDialog::new(
            kind,
            count,
            entity.label(),
        )));
    }

    fn confirm_pending(&mut self) {
        // Event deletion confirms through the same action but is not part
        // of the record-selection workflow.
        if let Some(ModalEntry::EventDelete { id, .. }) = self.modals.top() {
            let id = *id;
            self.modals.pop();
            self.store.remove_event(id);
            self.status("Event removed");
            return;
        }

        self.modals.pop();
        let entity = self.active_entity();
        let outcome = match self.active_selection() {
            Some(selection) => selection.confirm(),
            None => return,
        };
        match outcome {
            ConfirmOutcome::Noop => self.status("Nothing selected"),
            ConfirmOutcome::Edit(id) => self.open_edit_form(id),
            ConfirmOutcome::Delete(ids) => {
                if let Some(entity) = entity {
                    info!(count = ids.len(), entity = entity.label(), "deleting records");
                    self.status(format!("Deleting {} record(s)...", ids.len()));
                    self.worker.delete_batch(entity, ids);
                }
            }
        }
    }

    fn cancel_pending(&mut self) {
        if matches!(
            self.modals.top(),
            Some(ModalEntry::Confirm(_)) | Some(ModalEntry::EventDelete { .. })
        ) {
            self.modals.pop();
        }
        if let Some(selection) = self.active_selection() {
            selection.cancel();
        }
        self.status_message = None;
    }

    fn submit_form(&mut self) {
        let Some(top) = self.modals.top_mut() else {
            return;
        };
        match top {
            ModalEntry::Form(form) => {
                let id = form.record_id;
                match form.target {
                    FormTarget::Item => {
                        if let Some(draft) = form.take_item_draft() {
                            self.worker.save_item(id, draft);
                            self.modals.pop();
                            self.status("Saving item...");
                        }
                    }
                    FormTarget::Supplier => {
                        if let Some(draft) = form.take_supplier_draft() {
                            self.worker.save_supplier(id, draft);
                            self.modals.pop();
                            self.status("Saving supplier...");
                        }
                    }
                    FormTarget::Transaction => {
                        if let Some(draft) = form.take_transaction_draft() {
                            self.worker.save_transaction(id, draft);
                            self.modals.pop();
                            self.status("Saving transaction...");
                        }
                    }
                }
            }
            ModalEntry::Event(form) => {
                if let Some(draft) = form.take_draft() {
                    self.worker.save_event(draft);
                    self.modals.pop();
                    self.status("Saving event...");
                }
            }
            _ => {}
        }
    }

    fn export_csv(&mut self) {
        let result = match self.screen {
            Screen::Inventory => export::export_items(&self.store.items),
            Screen::Suppliers => export::export_suppliers(&self.store.suppliers),
            Screen::Transactions => {
                export::export_transactions(&self.transactions.visible(&self.store))
            }
            _ => return,
        };
        match result {
            Ok(path) => self.status(format!("Report written to {}", path.display())),
            Err(err) => {
                error!(%err, "csv export failed");
                self.status(format!("Export failed: {}", err));
            }
        }
    }

    fn refresh(&mut self) {
        self.store.loading = true;
        self.worker.fetch_all();
        self.status("Refreshing...");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Background results
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_api_msg(&mut self, msg: ApiMsg) {
        match msg {
            ApiMsg::Items(Ok(items)) => {
                self.store.loading = false;
                self.store.set_items(items);
            }
            ApiMsg::Suppliers(Ok(suppliers)) => {
                self.store.loading = false;
                self.store.suppliers = suppliers;
            }
            ApiMsg::Transactions(Ok(transactions)) => {
                self.store.loading = false;
                self.store.set_transactions(transactions);
            }
            ApiMsg::Alerts(Ok(alerts)) => {
                self.store.loading = false;
                self.store.alerts = alerts;
                self.alerts.resolve_focus(&self.store);
            }
            ApiMsg::Events(Ok(events)) => {
                self.store.loading = false;
                self.store.events = events;
            }
            ApiMsg::Items(Err(err))
            | ApiMsg::Suppliers(Err(err))
            | ApiMsg::Transactions(Err(err))
            | ApiMsg::Alerts(Err(err))
            | ApiMsg::Events(Err(err)) => {
                self.store.loading = false;
                warn!(%err, "fetch failed");
                self.status(format!("Fetch failed: {}", err));
            }
            ApiMsg::ItemSaved(Ok(item)) => {
                self.store.upsert_item(item);
                self.status("Item saved");
            }
            ApiMsg::SupplierSaved(Ok(supplier)) => {
                self.store.upsert_supplier(supplier);
                self.status("Supplier saved");
            }
            ApiMsg::TransactionSaved(Ok(transaction)) => {
                self.store.upsert_transaction(transaction);
                self.status("Transaction saved");
            }
            ApiMsg::EventSaved(Ok(event)) => {
                self.store.push_event(event);
                self.status("Event saved");
            }
            ApiMsg::ItemSaved(Err(err))
            | ApiMsg::SupplierSaved(Err(err))
            | ApiMsg::TransactionSaved(Err(err))
            | ApiMsg::EventSaved(Err(err)) => {
                warn!(%err, "save failed");
                self.status(format!("Save failed: {}", err));
            }
            ApiMsg::Deleted {
                entity,
                ids,
                failed,
            } => {
                if failed > 0 {
                    // Partial failure leaves the local lists untouched.
                    warn!(failed, total = ids.len(), "delete batch had failures");
                    self.status(format!(
                        "{} of {} deletes failed; no rows removed",
                        failed,
                        ids.len()
                    ));
                } else {
                    let removed = match entity {
                        EntityKind::Item => crate::model::selection::apply_delete(
                            &mut self.store.items,
                            &ids,
                            true,
                            |item| item.id,
                        ),
                        EntityKind::Supplier => crate::model::selection::apply_delete(
                            &mut self.store.suppliers,
                            &ids,
                            true,
                            |supplier| supplier.id,
                        ),
                        EntityKind::Transaction => crate::model::selection::apply_delete(
                            &mut self.store.transactions,
                            &ids,
                            true,
                            |txn| txn.id,
                        ),
                    };
                    self.status(format!("Deleted {} record(s)", removed));
                }
            }
            ApiMsg::Forecast(result) => {
                if let Err(ref err) = result {
                    warn!(%err, "forecast request failed");
                }
                self.forecast.set_result(result);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Chrome rendering
    // ─────────────────────────────────────────────────────────────────────────

    fn draw_tabs(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];
        for screen in Screen::all() {
            let style = if screen == self.screen {
                Style::default()
                    .fg(self.theme.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.dim())
            };
            spans.push(Span::styled(
                format!("[{}] {}", screen.shortcut(), screen.title()),
                style,
            ));
            spans.push(Span::raw("  "));
        }
        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Inventory TUI ")
                .title_style(
                    Style::default()
                        .fg(self.theme.header())
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(self.theme.dim())),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let text = match &self.status_message {
            Some(message) => message.clone(),
            None if self.store.loading => format!("Loading from {}...", self.api_url),
            None => format!("Connected to {}", self.api_url),
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!(" {}", text),
            Style::default().fg(self.theme.dim()),
        )));
        frame.render_widget(paragraph, area);
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let hint = match self.screen {
            Screen::Dashboard => "1-7 screens | r refresh | ? help | q quit",
            Screen::Inventory | Screen::Suppliers => {
                "Space select | n new | e edit | d delete | x export | ? help"
            }
            Screen::Transactions => {
                "Space select | n new | e edit | d delete | f filter | c calendar | x export"
            }
            Screen::Alerts => "j/k move | Enter expand | ? help",
            Screen::Calendar => "h/j/k/l move | [/] month | a add | d delete | ? help",
            Screen::Forecast => "i edit | j/k field | s submit | ? help",
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!(" {}", hint),
            Style::default().fg(self.theme.dim()),
        )));
        frame.render_widget(paragraph, area);
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Only the top modal receives input
        if let Some(modal) = self.modals.top_mut() {
            return modal.handle_key_event(key);
        }

        // Screen-local keys first, global fallbacks second
        let screen_action = match self.screen {
            Screen::Dashboard => None,
            Screen::Inventory => self.inventory.handle_key_event(key),
            Screen::Suppliers => self.suppliers.handle_key_event(key),
            Screen::Transactions => self.transactions.handle_key_event(key),
            Screen::Alerts => self.alerts.handle_key_event(key),
            Screen::Calendar => self.calendar.handle_key_event(key),
            Screen::Forecast => {
                if let Some(consumed) = self.forecast.handle_key_event(key) {
                    return Ok(consumed);
                }
                None
            }
        };
        if screen_action.is_some() {
            return Ok(screen_action);
        }

        Ok(self.handle_global_key(key))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                for msg in self.worker.poll() {
                    self.handle_api_msg(msg);
                }
            }
            Action::ForceQuit => self.should_quit = true,
            Action::Resize(_, _) => {}

            Action::GotoScreen(screen) => self.screen = screen,
            Action::NextScreen => self.screen = self.screen.next(),
            Action::PrevScreen => self.screen = self.screen.prev(),

            Action::NextRow
            | Action::PrevRow
            | Action::FirstRow
            | Action::LastRow
            | Action::ToggleRowSelection
            | Action::SelectAllRows
            | Action::ClearSelection => match self.screen {
                Screen::Inventory => self.inventory.apply(&action, &self.store),
                Screen::Suppliers => self.suppliers.apply(&action, &self.store),
                Screen::Transactions => self.transactions.apply(&action, &self.store),
                Screen::Alerts => self.alerts.apply(&action, &self.store),
                _ => {}
            },

            Action::OpenAddForm => self.open_add_form(),
            Action::RequestAction(kind) => self.request_action(kind),
            Action::ConfirmPending => self.confirm_pending(),
            Action::CancelPending => self.cancel_pending(),

            Action::OpenQuitDialog => self.modals.push(ModalEntry::Quit(QuitDialog)),
            Action::OpenHelp => self.modals.push(ModalEntry::Help(HelpDialog::default())),
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::SubmitForm => self.submit_form(),

            Action::Refresh => self.refresh(),
            Action::ExportCsv => self.export_csv(),

            Action::CycleFilter | Action::ToggleCalendarView => {
                self.transactions.apply(&action, &self.store)
            }
            Action::ToggleAlertExpanded => self.alerts.apply(&action, &self.store),

            Action::CalendarMove(_) | Action::CalendarShiftMonth(_) => {
                self.calendar.apply(&action)
            }
            Action::CalendarAddEvent => {
                let form = EventForm::new(self.calendar.cursor);
                self.modals.push(ModalEntry::Event(form));
            }
            Action::CalendarDeleteEvent => match self.calendar.event_under_cursor(&self.store) {
                Some(event) => {
                    let dialog = ConfirmDialog::new(ActionKind::Delete, 1, "event");
                    self.modals.push(ModalEntry::EventDelete {
                        id: event.id,
                        dialog,
                    });
                }
                None => self.status("No event on this day"),
            },

            Action::SubmitForecast => {
                if let Some(request) = self.forecast.validate() {
                    self.worker.forecast(request);
                }
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);
        self.draw_tabs(frame, layout.tabs);

        match self.screen {
            Screen::Dashboard => {
                self.dashboard
                    .draw(frame, layout.body, &self.store, &self.theme)
            }
            Screen::Inventory => {
                self.inventory
                    .draw(frame, layout.body, &self.store, &self.theme)
            }
            Screen::Suppliers => {
                self.suppliers
                    .draw(frame, layout.body, &self.store, &self.theme)
            }
            Screen::Transactions => {
                self.transactions
                    .draw(frame, layout.body, &self.store, &self.theme)
            }
            Screen::Alerts => self.alerts.draw(frame, layout.body, &self.store, &self.theme),
            Screen::Calendar => {
                self.calendar
                    .draw(frame, layout.body, &self.store, &self.theme)
            }
            Screen::Forecast => self.forecast.draw(frame, layout.body, &self.theme),
        }

        self.draw_status(frame, layout.status);
        self.draw_help_bar(frame, layout.help);

        // Overlays render bottom to top
        for modal in self.modals.iter_mut() {
            modal.draw(frame, area)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::Item;

    fn app() -> App {
        let config = Config {
            // Nothing listens here; background fetches fail harmlessly.
            api_url: "http://127.0.0.1:9".to_string(),
            color_mode: "dark".to_string(),
        };
        App::new(&config)
    }

    fn add_items(app: &mut App, n: i64) {
        let items = (1..=n)
            .map(|i| {
                serde_json::from_value::<Item>(serde_json::json!({
                    "id": i,
                    "itemName": format!("Item {}", i),
                }))
                .unwrap()
            })
            .collect();
        app.store.set_items(items);
    }

    #[test]
    fn test_screen_navigation_actions() {
        let mut app = app();
        app.update(Action::GotoScreen(Screen::Calendar)).unwrap();
        assert_eq!(app.screen, Screen::Calendar);
        app.update(Action::NextScreen).unwrap();
        assert_eq!(app.screen, Screen::Forecast);
        app.update(Action::PrevScreen).unwrap();
        assert_eq!(app.screen, Screen::Calendar);
    }

    #[test]
    fn test_confirm_with_empty_selection_is_inert() {
        let mut app = app();
        app.screen = Screen::Inventory;
        add_items(&mut app, 3);
        app.update(Action::RequestAction(ActionKind::Delete)).unwrap();
        assert!(matches!(app.modals.top(), Some(ModalEntry::Confirm(_))));
        app.update(Action::ConfirmPending).unwrap();
        assert!(app.modals.is_empty());
        assert_eq!(app.store.items.len(), 3);
        assert!(app.status_message.as_deref().unwrap().contains("Nothing selected"));
    }

    #[test]
    fn test_request_with_selection_opens_confirm_modal() {
        let mut app = app();
        app.screen = Screen::Inventory;
        add_items(&mut app, 2);
        app.update(Action::ToggleRowSelection).unwrap();
        app.update(Action::RequestAction(ActionKind::Delete)).unwrap();
        assert!(matches!(app.modals.top(), Some(ModalEntry::Confirm(_))));
    }

    #[test]
    fn test_cancel_clears_selection_and_modal() {
        let mut app = app();
        app.screen = Screen::Inventory;
        add_items(&mut app, 2);
        app.update(Action::ToggleRowSelection).unwrap();
        app.update(Action::RequestAction(ActionKind::Delete)).unwrap();
        app.update(Action::CancelPending).unwrap();
        assert!(app.modals.is_empty());
        assert!(app.inventory.selection.is_empty());
    }

    #[test]
    fn test_confirm_edit_opens_prefilled_form() {
        let mut app = app();
        app.screen = Screen::Inventory;
        add_items(&mut app, 2);
        app.update(Action::NextRow).unwrap();
        app.update(Action::ToggleRowSelection).unwrap();
        app.update(Action::RequestAction(ActionKind::Edit)).unwrap();
        app.update(Action::ConfirmPending).unwrap();
        match app.modals.top() {
            Some(ModalEntry::Form(form)) => assert_eq!(form.record_id, Some(2)),
            _ => panic!("expected an edit form on top of the modal stack"),
        }
        // The workflow consumed the selection
        assert!(app.inventory.selection.is_empty());
    }

    #[test]
    fn test_partial_delete_failure_keeps_rows() {
        let mut app = app();
        add_items(&mut app, 3);
        app.handle_api_msg(ApiMsg::Deleted {
            entity: EntityKind::Item,
            ids: vec![1, 2],
            failed: 1,
        });
        assert_eq!(app.store.items.len(), 3);
        assert!(app.status_message.as_deref().unwrap().contains("no rows removed"));
    }

    #[test]
    fn test_complete_delete_removes_rows() {
        let mut app = app();
        add_items(&mut app, 3);
        app.handle_api_msg(ApiMsg::Deleted {
            entity: EntityKind::Item,
            ids: vec![1, 3],
            failed: 0,
        });
        let remaining: Vec<i64> = app.store.items.iter().map(|item| item.id).collect();
        assert_eq!(remaining, vec![2]);
    }

    #[test]
    fn test_event_delete_confirm_removes_locally() {
        let mut app = app();
        app.store.events = vec![crate::model::CalendarEvent {
            id: 4,
            title: "Stock take".to_string(),
            description: String::new(),
            date: app.calendar.cursor,
        }];
        app.screen = Screen::Calendar;
        app.update(Action::CalendarDeleteEvent).unwrap();
        assert!(matches!(
            app.modals.top(),
            Some(ModalEntry::EventDelete { .. })
        ));
        app.update(Action::ConfirmPending).unwrap();
        assert!(app.store.events.is_empty());
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_quit_dialog_flow() {
        let mut app = app();
        app.update(Action::OpenQuitDialog).unwrap();
        assert!(matches!(app.modals.top(), Some(ModalEntry::Quit(_))));
        app.update(Action::CloseModal).unwrap();
        assert!(app.modals.is_empty());
        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }
}
