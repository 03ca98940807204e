//! Row selection and the action-confirmation workflow
//!
//! Shared by the Inventory, Suppliers, and Transactions screens. The flow
//! is a small state machine:
//!
//! ```text
//! Idle -> Pending(Edit | Delete) -> confirm/cancel -> Idle
//! ```
//!
//! Requesting an action with nothing selected still enters `Pending`, but
//! confirming it is inert. Every terminal transition returns to `Idle` with
//! an empty selection.

/// The bulk action a user has asked for but not yet confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Edit,
    Delete,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Edit => "Edit",
            ActionKind::Delete => "Delete",
        }
    }
}

/// What confirming a pending action resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Nothing was selected; no network call happens.
    Noop,
    /// Edit the first selected row.
    Edit(i64),
    /// Delete every selected row.
    Delete(Vec<i64>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Flow {
    #[default]
    Idle,
    Pending(ActionKind),
}

/// Cursor position plus the set of row ids marked for a bulk action.
///
/// Selection order is preserved: "the first selected id" for an edit is the
/// one the user marked first, not the lowest id.
#[derive(Debug, Default)]
pub struct SelectionModel {
    cursor: usize,
    selected: Vec<i64>,
    flow: Flow,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Cursor movement
    // ─────────────────────────────────────────────────────────────────────

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn next(&mut self, row_count: usize) {
        if row_count == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = (self.cursor + 1) % row_count;
    }

    pub fn prev(&mut self, row_count: usize) {
        if row_count == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = if self.cursor == 0 {
            row_count - 1
        } else {
            self.cursor - 1
        };
    }

    pub fn first(&mut self) {
        self.cursor = 0;
    }

    pub fn last(&mut self, row_count: usize) {
        self.cursor = row_count.saturating_sub(1);
    }

    /// Keep the cursor in range after the row list shrank.
    pub fn clamp(&mut self, row_count: usize) {
        if self.cursor >= row_count {
            self.cursor = row_count.saturating_sub(1);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Selection set
    // ─────────────────────────────────────────────────────────────────────

    pub fn toggle(&mut self, id: i64) {
        if let Some(pos) = self.selected.iter().position(|&s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
    }

    pub fn select_all(&mut self, ids: impl IntoIterator<Item = i64>) {
        for id in ids {
            if !self.selected.contains(&id) {
                self.selected.push(id);
            }
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drop selected ids no longer in the visible row set. Screens with a
    /// filter call this when the filter changes so a hidden row cannot stay
    /// marked for a bulk action.
    pub fn prune(&mut self, visible: &[i64]) {
        self.selected.retain(|id| visible.contains(id));
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_ids(&self) -> &[i64] {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Action flow
    // ─────────────────────────────────────────────────────────────────────

    /// Enter `Pending`. Allowed even with an empty selection; the screen
    /// shows "select rows first" and confirm is inert.
    pub fn request(&mut self, kind: ActionKind) {
        self.flow = Flow::Pending(kind);
    }

    pub fn pending(&self) -> Option<ActionKind> {
        match self.flow {
            Flow::Idle => None,
            Flow::Pending(kind) => Some(kind),
        }
    }

    /// Resolve the pending action. Always returns to `Idle` with an empty
    /// selection; the caller performs the network operation named by the
    /// outcome.
    pub fn confirm(&mut self) -> ConfirmOutcome {
        let outcome = match self.flow {
            Flow::Idle => ConfirmOutcome::Noop,
            Flow::Pending(_) if self.selected.is_empty() => ConfirmOutcome::Noop,
            Flow::Pending(ActionKind::Edit) => ConfirmOutcome::Edit(self.selected[0]),
            Flow::Pending(ActionKind::Delete) => {
                ConfirmOutcome::Delete(self.selected.clone())
            }
        };
        self.flow = Flow::Idle;
        self.selected.clear();
        outcome
    }

    /// Discard the pending action and the selection.
    pub fn cancel(&mut self) {
        self.flow = Flow::Idle;
        self.selected.clear();
    }
}

/// Remove the rows named by `ids`, but only when every backend delete
/// succeeded. Returns the number of rows removed.
pub fn apply_delete<T>(
    rows: &mut Vec<T>,
    ids: &[i64],
    all_succeeded: bool,
    id_of: impl Fn(&T) -> i64,
) -> usize {
    if !all_succeeded {
        return 0;
    }
    let before = rows.len();
    rows.retain(|row| !ids.contains(&id_of(row)));
    before - rows.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_with_empty_selection_is_inert() {
        let mut sel = SelectionModel::new();
        sel.request(ActionKind::Delete);
        assert_eq!(sel.pending(), Some(ActionKind::Delete));
        assert_eq!(sel.confirm(), ConfirmOutcome::Noop);
        assert_eq!(sel.pending(), None);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_confirm_delete_yields_all_selected_ids() {
        let mut sel = SelectionModel::new();
        sel.toggle(3);
        sel.toggle(7);
        sel.toggle(1);
        sel.request(ActionKind::Delete);
        assert_eq!(sel.confirm(), ConfirmOutcome::Delete(vec![3, 7, 1]));
        // Terminal transition: back to idle, selection empty
        assert_eq!(sel.pending(), None);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_confirm_edit_targets_first_selected() {
        let mut sel = SelectionModel::new();
        sel.toggle(9);
        sel.toggle(2);
        sel.request(ActionKind::Edit);
        assert_eq!(sel.confirm(), ConfirmOutcome::Edit(9));
    }

    #[test]
    fn test_cancel_clears_selection_and_flow() {
        let mut sel = SelectionModel::new();
        sel.toggle(4);
        sel.request(ActionKind::Delete);
        sel.cancel();
        assert_eq!(sel.pending(), None);
        assert!(sel.is_empty());
        // A later confirm does nothing
        assert_eq!(sel.confirm(), ConfirmOutcome::Noop);
    }

    #[test]
    fn test_prune_keeps_only_visible_ids() {
        let mut sel = SelectionModel::new();
        sel.toggle(1);
        sel.toggle(2);
        sel.toggle(3);
        sel.prune(&[1, 3]);
        assert_eq!(sel.selected_ids(), &[1, 3]);
        assert!(!sel.is_selected(2));
    }

    #[test]
    fn test_toggle_is_involutive() {
        let mut sel = SelectionModel::new();
        sel.toggle(5);
        assert!(sel.is_selected(5));
        sel.toggle(5);
        assert!(!sel.is_selected(5));
    }

    #[test]
    fn test_cursor_wraps() {
        let mut sel = SelectionModel::new();
        sel.next(3);
        sel.next(3);
        sel.next(3);
        assert_eq!(sel.cursor(), 0);
        sel.prev(3);
        assert_eq!(sel.cursor(), 2);
    }

    #[test]
    fn test_cursor_empty_list() {
        let mut sel = SelectionModel::new();
        sel.next(0);
        assert_eq!(sel.cursor(), 0);
        sel.prev(0);
        assert_eq!(sel.cursor(), 0);
    }

    #[test]
    fn test_apply_delete_all_succeeded_removes_exactly_those() {
        let mut rows = vec![1_i64, 2, 3, 4, 5];
        let removed = apply_delete(&mut rows, &[2, 4], true, |&id| id);
        assert_eq!(removed, 2);
        assert_eq!(rows, vec![1, 3, 5]);
    }

    #[test]
    fn test_apply_delete_partial_failure_removes_nothing() {
        let mut rows = vec![1_i64, 2, 3];
        let removed = apply_delete(&mut rows, &[1, 2], false, |&id| id);
        assert_eq!(removed, 0);
        assert_eq!(rows, vec![1, 2, 3]);
    }
}
