//! Suppliers screen

use crate::action::Action;
use crate::components::table::{SelectTable, TableRow};
use crate::model::selection::SelectionModel;
use crate::model::store::Store;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

#[derive(Default)]
pub struct SuppliersScreen {
    pub selection: SelectionModel,
    table: SelectTable,
}

impl SuppliersScreen {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('x') => Some(Action::ExportCsv),
            _ => SelectTable::handle_key(key),
        }
    }

    pub fn cursor_id(&self, store: &Store) -> Option<i64> {
        store
            .suppliers
            .get(self.selection.cursor())
            .map(|supplier| supplier.id)
    }

    pub fn all_ids(&self, store: &Store) -> Vec<i64> {
        store.suppliers.iter().map(|supplier| supplier.id).collect()
    }

    pub fn apply(&mut self, action: &Action, store: &Store) {
        let count = store.suppliers.len();
        match action {
            Action::NextRow => self.selection.next(count),
            Action::PrevRow => self.selection.prev(count),
            Action::FirstRow => self.selection.first(),
            Action::LastRow => self.selection.last(count),
            Action::ToggleRowSelection => {
                if let Some(id) = self.cursor_id(store) {
                    self.selection.toggle(id);
                }
            }
            Action::SelectAllRows => self.selection.select_all(self.all_ids(store)),
            Action::ClearSelection => self.selection.clear(),
            _ => {}
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        self.selection.clamp(store.suppliers.len());
        let rows: Vec<TableRow> = store
            .suppliers
            .iter()
            .map(|supplier| {
                TableRow::colored(
                    vec![
                        supplier.supplier_name.clone(),
                        supplier.contact_person.clone(),
                        supplier.email.clone(),
                        supplier.phone_number.clone(),
                        format!("{:.1}", supplier.rating),
                        supplier.status.label().to_string(),
                    ],
                    theme.supplier_status_color(supplier.status),
                )
            })
            .collect();

        let selection = &self.selection;
        self.table.draw(
            frame,
            area,
            "Suppliers",
            &["Name", "Contact", "Email", "Phone", "Rating", "Status"],
            &rows,
            selection.cursor(),
            |i| {
                store
                    .suppliers
                    .get(i)
                    .map(|supplier| selection.is_selected(supplier.id))
                    .unwrap_or(false)
            },
            theme,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::supplier::Supplier;

    #[test]
    fn test_cursor_id_follows_navigation() {
        let mut store = Store::new();
        store.suppliers = vec![
            serde_json::from_str::<Supplier>(r#"{"id": 5, "supplierName": "Acme"}"#).unwrap(),
            serde_json::from_str::<Supplier>(r#"{"id": 9, "supplierName": "Beta"}"#).unwrap(),
        ];
        let mut screen = SuppliersScreen::default();
        assert_eq!(screen.cursor_id(&store), Some(5));
        screen.apply(&Action::NextRow, &store);
        assert_eq!(screen.cursor_id(&store), Some(9));
    }
}
