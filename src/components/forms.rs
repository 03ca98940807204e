//! Record form dialogs
//!
//! One generic field-based form backs the item, supplier, and transaction
//! modals. Text fields take typed input; choice fields cycle with the
//! arrow keys. Submitting parses the fields into the matching draft and
//! surfaces the first parse error inline instead of closing.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::event::EventDraft;
use crate::model::item::{Item, ItemDraft};
use crate::model::supplier::{Supplier, SupplierDraft, SupplierStatus};
use crate::model::transaction::{Transaction, TransactionDraft, TxnKind, TxnStatus};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

enum FieldKind {
    Text,
    Choice(Vec<&'static str>),
}

struct Field {
    label: &'static str,
    value: String,
    kind: FieldKind,
}

impl Field {
    fn text(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            kind: FieldKind::Text,
        }
    }

    fn choice(label: &'static str, options: Vec<&'static str>, value: &str) -> Self {
        Self {
            label,
            value: value.to_string(),
            kind: FieldKind::Choice(options),
        }
    }

    fn cycle(&mut self, delta: isize) {
        if let FieldKind::Choice(options) = &self.kind {
            let current = options.iter().position(|o| *o == self.value).unwrap_or(0) as isize;
            let len = options.len() as isize;
            let next = (current + delta).rem_euclid(len) as usize;
            self.value = options[next].to_string();
        }
    }
}

/// Which entity this form produces on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Item,
    Supplier,
    Transaction,
}

/// Modal form for creating or editing one record
pub struct FormDialog {
    pub target: FormTarget,
    /// Present when editing an existing record
    pub record_id: Option<i64>,
    fields: Vec<Field>,
    focus: usize,
    error: Option<String>,
}

impl FormDialog {
    pub fn item(existing: Option<&Item>) -> Self {
        let draft = existing.map(ItemDraft::from).unwrap_or_default();
        Self {
            target: FormTarget::Item,
            record_id: existing.map(|item| item.id),
            fields: vec![
                Field::text("Name", &draft.item_name),
                Field::text("Category", &draft.category),
                Field::text("Quantity", draft.quantity.to_string()),
                Field::text("Unit", &draft.unit),
                Field::text("Supplier", &draft.supplier),
                Field::text(
                    "Last restocked",
                    draft
                        .last_restocked
                        .map(|d| d.to_string())
                        .unwrap_or_default(),
                ),
                Field::text(
                    "Expiry date",
                    draft.expiry_date.map(|d| d.to_string()).unwrap_or_default(),
                ),
                Field::text("Low stock threshold", draft.low_stock_threshold.to_string()),
            ],
            focus: 0,
            error: None,
        }
    }

    pub fn supplier(existing: Option<&Supplier>) -> Self {
        let draft = existing.map(SupplierDraft::from).unwrap_or_default();
        Self {
            target: FormTarget::Supplier,
            record_id: existing.map(|supplier| supplier.id),
            fields: vec![
                Field::text("Name", &draft.supplier_name),
                Field::text("Contact person", &draft.contact_person),
                Field::text("Email", &draft.email),
                Field::text("Phone", &draft.phone_number),
                Field::text("Address", &draft.address),
                Field::text("Items provided", &draft.items_provided),
                Field::text("Rating", draft.rating.to_string()),
                Field::choice(
                    "Status",
                    vec!["Active", "Inactive", "Pending"],
                    draft.status.label(),
                ),
            ],
            focus: 0,
            error: None,
        }
    }

    pub fn transaction(existing: Option<&Transaction>) -> Self {
        let draft = existing.map(TransactionDraft::from).unwrap_or_else(|| {
            TransactionDraft {
                date: Local::now().date_naive(),
                description: String::new(),
                amount: 0.0,
                kind: TxnKind::Inflow,
                category: String::new(),
                status: TxnStatus::Completed,
            }
        });
        Self {
            target: FormTarget::Transaction,
            record_id: existing.map(|txn| txn.id),
            fields: vec![
                Field::text("Date", draft.date.to_string()),
                Field::text("Description", &draft.description),
                Field::text("Amount", draft.amount.to_string()),
                Field::choice("Type", vec!["Inflow", "Outflow"], draft.kind.label()),
                Field::text("Category", &draft.category),
                Field::choice(
                    "Status",
                    vec!["Completed", "Pending", "Cancelled"],
                    draft.status.label(),
                ),
            ],
            focus: 0,
            error: None,
        }
    }

    fn value(&self, label: &str) -> &str {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }

    fn parse_i64(&mut self, label: &'static str) -> Option<i64> {
        match self.value(label).trim().parse() {
            Ok(n) => Some(n),
            Err(_) => {
                self.error = Some(format!("{} must be a whole number", label));
                None
            }
        }
    }

    fn parse_f64(&mut self, label: &'static str) -> Option<f64> {
        match self.value(label).trim().parse() {
            Ok(n) => Some(n),
            Err(_) => {
                self.error = Some(format!("{} must be a number", label));
                None
            }
        }
    }

    fn parse_date(&mut self, label: &'static str) -> Option<NaiveDate> {
        match NaiveDate::parse_from_str(self.value(label).trim(), "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                self.error = Some(format!("{} must be YYYY-MM-DD", label));
                None
            }
        }
    }

    /// Blank is fine, anything else must be a date.
    fn parse_date_opt(&mut self, label: &'static str) -> Option<Option<NaiveDate>> {
        if self.value(label).trim().is_empty() {
            return Some(None);
        }
        self.parse_date(label).map(Some)
    }

    fn require(&mut self, label: &'static str) -> Option<String> {
        let value = self.value(label).trim().to_string();
        if value.is_empty() {
            self.error = Some(format!("{} is required", label));
            None
        } else {
            Some(value)
        }
    }

    /// Parse the fields into an item draft, recording an error on failure.
    pub fn take_item_draft(&mut self) -> Option<ItemDraft> {
        self.error = None;
        let item_name = self.require("Name")?;
        let quantity = self.parse_i64("Quantity")?;
        let last_restocked = self.parse_date_opt("Last restocked")?;
        let expiry_date = self.parse_date_opt("Expiry date")?;
        let low_stock_threshold = self.parse_i64("Low stock threshold")?;
        Some(ItemDraft {
            item_name,
            category: self.value("Category").trim().to_string(),
            quantity,
            unit: self.value("Unit").trim().to_string(),
            supplier: self.value("Supplier").trim().to_string(),
            last_restocked,
            expiry_date,
            low_stock_threshold,
        })
    }

    pub fn take_supplier_draft(&mut self) -> Option<SupplierDraft> {
        self.error = None;
        let supplier_name = self.require("Name")?;
        let rating = self.parse_f64("Rating")?;
        Some(SupplierDraft {
            supplier_name,
            contact_person: self.value("Contact person").trim().to_string(),
            email: self.value("Email").trim().to_string(),
            phone_number: self.value("Phone").trim().to_string(),
            address: self.value("Address").trim().to_string(),
            items_provided: self.value("Items provided").trim().to_string(),
            rating,
            status: SupplierStatus::from(self.value("Status").to_string()),
        })
    }

    pub fn take_transaction_draft(&mut self) -> Option<TransactionDraft> {
        self.error = None;
        let description = self.require("Description")?;
        let date = self.parse_date("Date")?;
        let amount = self.parse_f64("Amount")?;
        Some(TransactionDraft {
            date,
            description,
            amount,
            kind: TxnKind::from(self.value("Type").to_string()),
            category: self.value("Category").trim().to_string(),
            status: TxnStatus::from(self.value("Status").to_string()),
        })
    }

    fn title(&self) -> String {
        let verb = if self.record_id.is_some() {
            "Edit"
        } else {
            "New"
        };
        let noun = match self.target {
            FormTarget::Item => "Item",
            FormTarget::Supplier => "Supplier",
            FormTarget::Transaction => "Transaction",
        };
        format!(" {} {} ", verb, noun)
    }
}

impl Component for FormDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::SubmitForm),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % self.fields.len();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
                None
            }
            KeyCode::Left => {
                self.fields[self.focus].cycle(-1);
                None
            }
            KeyCode::Right => {
                self.fields[self.focus].cycle(1);
                None
            }
            KeyCode::Backspace => {
                if matches!(self.fields[self.focus].kind, FieldKind::Text) {
                    self.fields[self.focus].value.pop();
                }
                None
            }
            KeyCode::Char(c) => {
                if matches!(self.fields[self.focus].kind, FieldKind::Text) {
                    self.fields[self.focus].value.push(c);
                }
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let height = self.fields.len() as u16 + 5;
        let popup_area = centered_popup(area, 58, height);
        frame.render_widget(Clear, popup_area);

        let mut content = vec![Line::from("")];
        for (i, field) in self.fields.iter().enumerate() {
            let focused = i == self.focus;
            let label_style = if focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let value = match field.kind {
                FieldKind::Choice(_) => format!("< {} >", field.value),
                FieldKind::Text if focused => format!("{}_", field.value),
                FieldKind::Text => field.value.clone(),
            };
            content.push(Line::from(vec![
                Span::styled(format!(" {:>20}: ", field.label), label_style),
                Span::styled(value, Style::default().fg(Color::White)),
            ]));
        }
        content.push(Line::from(""));
        if let Some(error) = &self.error {
            content.push(Line::from(Span::styled(
                format!(" {}", error),
                Style::default().fg(Color::Red),
            )));
        } else {
            content.push(Line::from(Span::styled(
                " Tab next field | Left/Right cycle | Enter save | Esc cancel",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(self.title())
                .title_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

/// Small two-field form for a calendar event on a fixed date
pub struct EventForm {
    pub date: NaiveDate,
    title: String,
    description: String,
    editing_description: bool,
    error: Option<String>,
}

impl EventForm {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            title: String::new(),
            description: String::new(),
            editing_description: false,
            error: None,
        }
    }

    pub fn take_draft(&mut self) -> Option<EventDraft> {
        if self.title.trim().is_empty() {
            self.error = Some("Title is required".to_string());
            return None;
        }
        Some(EventDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            date: self.date,
        })
    }
}

impl Component for EventForm {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::SubmitForm),
            KeyCode::Tab | KeyCode::Down | KeyCode::Up | KeyCode::BackTab => {
                self.editing_description = !self.editing_description;
                None
            }
            KeyCode::Backspace => {
                if self.editing_description {
                    self.description.pop();
                } else {
                    self.title.pop();
                }
                None
            }
            KeyCode::Char(c) => {
                if self.editing_description {
                    self.description.push(c);
                } else {
                    self.title.push(c);
                }
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 50, 9);
        frame.render_widget(Clear, popup_area);

        let focus = |active: bool| {
            if active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            }
        };
        let mut content = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("       Title: ", focus(!self.editing_description)),
                Span::styled(
                    if self.editing_description {
                        self.title.clone()
                    } else {
                        format!("{}_", self.title)
                    },
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(vec![
                Span::styled(" Description: ", focus(self.editing_description)),
                Span::styled(
                    if self.editing_description {
                        format!("{}_", self.description)
                    } else {
                        self.description.clone()
                    },
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
        ];
        if let Some(error) = &self.error {
            content.push(Line::from(Span::styled(
                format!(" {}", error),
                Style::default().fg(Color::Red),
            )));
        } else {
            content.push(Line::from(Span::styled(
                " Tab switch field | Enter save | Esc cancel",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(format!(" New Event - {} ", self.date))
                .title_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut FormDialog, text: &str) {
        for c in text.chars() {
            form.handle_key_event(KeyEvent::from(KeyCode::Char(c)))
                .unwrap();
        }
    }

    #[test]
    fn test_item_form_parses_typed_fields() {
        let mut form = FormDialog::item(None);
        type_text(&mut form, "Bolts");
        form.handle_key_event(KeyEvent::from(KeyCode::Tab)).unwrap();
        type_text(&mut form, "Hardware");
        let draft = form.take_item_draft().unwrap();
        assert_eq!(draft.item_name, "Bolts");
        assert_eq!(draft.category, "Hardware");
        assert_eq!(draft.quantity, 0);
        assert_eq!(draft.low_stock_threshold, 0);
        assert!(draft.last_restocked.is_none());
    }

    #[test]
    fn test_item_form_rejects_bad_quantity() {
        let mut form = FormDialog::item(None);
        type_text(&mut form, "Bolts");
        form.handle_key_event(KeyEvent::from(KeyCode::Tab)).unwrap();
        form.handle_key_event(KeyEvent::from(KeyCode::Tab)).unwrap();
        type_text(&mut form, "abc");
        assert!(form.take_item_draft().is_none());
        assert!(form.error.as_deref().unwrap().contains("Quantity"));
    }

    #[test]
    fn test_item_form_requires_name() {
        let mut form = FormDialog::item(None);
        assert!(form.take_item_draft().is_none());
        assert!(form.error.as_deref().unwrap().contains("required"));
    }

    #[test]
    fn test_choice_field_cycles_with_arrows() {
        let mut form = FormDialog::transaction(None);
        for _ in 0..3 {
            form.handle_key_event(KeyEvent::from(KeyCode::Tab)).unwrap();
        }
        form.handle_key_event(KeyEvent::from(KeyCode::Right))
            .unwrap();
        assert_eq!(form.value("Type"), "Outflow");
        form.handle_key_event(KeyEvent::from(KeyCode::Right))
            .unwrap();
        assert_eq!(form.value("Type"), "Inflow");
        form.handle_key_event(KeyEvent::from(KeyCode::Left))
            .unwrap();
        assert_eq!(form.value("Type"), "Outflow");
    }

    #[test]
    fn test_transaction_form_rejects_bad_date() {
        let mut form = FormDialog::transaction(None);
        // Clear the prefilled date field
        for _ in 0..10 {
            form.handle_key_event(KeyEvent::from(KeyCode::Backspace))
                .unwrap();
        }
        type_text(&mut form, "not-a-date");
        form.handle_key_event(KeyEvent::from(KeyCode::Tab)).unwrap();
        type_text(&mut form, "Restock order");
        assert!(form.take_transaction_draft().is_none());
        assert!(form.error.as_deref().unwrap().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_edit_form_prefills_from_record() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "id": 7,
            "itemName": "Washers",
            "quantity": 30,
        }))
        .unwrap();
        let mut form = FormDialog::item(Some(&item));
        assert_eq!(form.record_id, Some(7));
        let draft = form.take_item_draft().unwrap();
        assert_eq!(draft.item_name, "Washers");
        assert_eq!(draft.quantity, 30);
        assert_eq!(draft.low_stock_threshold, 5);
    }

    #[test]
    fn test_event_form_requires_title() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut form = EventForm::new(date);
        assert!(form.take_draft().is_none());
        form.handle_key_event(KeyEvent::from(KeyCode::Char('x')))
            .unwrap();
        let draft = form.take_draft().unwrap();
        assert_eq!(draft.title, "x");
        assert_eq!(draft.date, date);
    }
}
