//! Inventory screen
//!
//! Item table with multi-select, the edit/delete confirmation workflow,
//! and CSV export. Low-stock rows render in the warning color.

use crate::action::Action;
use crate::components::table::{SelectTable, TableRow};
use crate::model::selection::SelectionModel;
use crate::model::store::Store;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

#[derive(Default)]
pub struct InventoryScreen {
    pub selection: SelectionModel,
    table: SelectTable,
}

impl InventoryScreen {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('x') {
            return Some(Action::ExportCsv);
        }
        SelectTable::handle_key(key)
    }

    /// Id of the row under the cursor, if any.
    pub fn cursor_id(&self, store: &Store) -> Option<i64> {
        store.items.get(self.selection.cursor()).map(|item| item.id)
    }

    pub fn all_ids(&self, store: &Store) -> Vec<i64> {
        store.items.iter().map(|item| item.id).collect()
    }

    pub fn apply(&mut self, action: &Action, store: &Store) {
        let count = store.items.len();
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
        self.selection.clamp(store.items.len());
        let rows: Vec<TableRow> = store
            .items
            .iter()
            .map(|item| {
                let cells = vec![
                    item.item_name.clone(),
                    item.category.clone(),
                    format!("{} {}", item.quantity, item.unit),
                    item.supplier.clone(),
                    item.low_stock_threshold.to_string(),
                ];
                if item.is_low_stock() {
                    TableRow::colored(cells, theme.low_stock())
                } else {
                    TableRow::new(cells)
                }
            })
            .collect();

        let selection = &self.selection;
        self.table.draw(
            frame,
            area,
            "Inventory",
            &["Item", "Category", "Stock", "Supplier", "Threshold"],
            &rows,
            selection.cursor(),
            |i| {
                store
                    .items
                    .get(i)
                    .map(|item| selection.is_selected(item.id))
                    .unwrap_or(false)
            },
            theme,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::Item;

    fn store_with_items(n: i64) -> Store {
        let mut store = Store::new();
        let items = (1..=n)
            .map(|i| {
                serde_json::from_value::<Item>(serde_json::json!({
                    "id": i,
                    "itemName": format!("Item {}", i),
                }))
                .unwrap()
            })
            .collect();
        store.set_items(items);
        store
    }

    #[test]
    fn test_toggle_selects_row_under_cursor() {
        let store = store_with_items(3);
        let mut screen = InventoryScreen::default();
        screen.apply(&Action::NextRow, &store);
        screen.apply(&Action::ToggleRowSelection, &store);
        assert!(screen.selection.is_selected(2));
        assert!(!screen.selection.is_selected(1));
    }

    #[test]
    fn test_select_all_marks_every_id() {
        let store = store_with_items(3);
        let mut screen = InventoryScreen::default();
        screen.apply(&Action::SelectAllRows, &store);
        assert_eq!(screen.selection.selected_ids(), &[1, 2, 3]);
    }

    #[test]
    fn test_export_key_maps_to_action() {
        let mut screen = InventoryScreen::default();
        let action = screen.handle_key_event(KeyEvent::from(KeyCode::Char('x')));
        assert_eq!(action, Some(Action::ExportCsv));
    }
}
