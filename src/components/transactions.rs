//! Transactions screen
//!
//! Filterable table of inflows and outflows with a summary bar, plus an
//! alternate calendar view that lays the month out with per-day totals.
//! Selection and the edit/delete workflow operate on the filtered rows.

use crate::action::Action;
use crate::components::calendar::month_grid;
use crate::components::table::{SelectTable, TableRow};
use crate::model::metrics;
use crate::model::selection::SelectionModel;
use crate::model::store::Store;
use crate::model::transaction::{KindFilter, Transaction, TxnKind};
use crate::theme::Theme;
use chrono::{Datelike, Local};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct TransactionsScreen {
    pub selection: SelectionModel,
    pub filter: KindFilter,
    pub calendar_view: bool,
    table: SelectTable,
}

impl TransactionsScreen {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('f') => Some(Action::CycleFilter),
            KeyCode::Char('c') => Some(Action::ToggleCalendarView),
            KeyCode::Char('x') => Some(Action::ExportCsv),
            _ => SelectTable::handle_key(key),
        }
    }

    pub fn visible<'a>(&self, store: &'a Store) -> Vec<&'a Transaction> {
        store
            .transactions
            .iter()
            .filter(|txn| self.filter.matches(txn.kind))
            .collect()
    }

    pub fn cursor_id(&self, store: &Store) -> Option<i64> {
        self.visible(store)
            .get(self.selection.cursor())
            .map(|txn| txn.id)
    }

    pub fn all_ids(&self, store: &Store) -> Vec<i64> {
        self.visible(store).iter().map(|txn| txn.id).collect()
    }

    pub fn apply(&mut self, action: &Action, store: &Store) {
        let count = self.visible(store).len();
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
            Action::CycleFilter => {
                self.filter = self.filter.next();
                let visible = self.all_ids(store);
                self.selection.first();
                // A row hidden by the new filter must not stay marked, or a
                // later delete would remove rows the user cannot see.
                self.selection.prune(&visible);
            }
            Action::ToggleCalendarView => self.calendar_view = !self.calendar_view,
            _ => {}
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.draw_summary(frame, rows[0], store, theme);
        if self.calendar_view {
            self.draw_calendar(frame, rows[1], store, theme);
        } else {
            self.draw_table(frame, rows[1], store, theme);
        }
    }

    fn draw_summary(&self, frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let summary = metrics::summarize(&store.transactions);
        let line = Line::from(vec![
            Span::styled(" In ", Style::default().fg(theme.dim())),
            Span::styled(
                format!("+${:.2}", summary.total_inflow),
                Style::default()
                    .fg(theme.kind_color(TxnKind::Inflow))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Out ", Style::default().fg(theme.dim())),
            Span::styled(
                format!("-${:.2}", summary.total_outflow),
                Style::default()
                    .fg(theme.kind_color(TxnKind::Outflow))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Net ", Style::default().fg(theme.dim())),
            Span::styled(
                format!("${:.2}", summary.net_balance),
                Style::default()
                    .fg(theme.text())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   Filter: {}", self.filter.label()),
                Style::default().fg(theme.accent()),
            ),
        ]);

        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.dim())),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_table(&mut self, frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let visible = self.visible(store);
        self.selection.clamp(visible.len());
        let rows: Vec<TableRow> = visible
            .iter()
            .map(|txn| {
                TableRow::colored(
                    vec![
                        txn.date.to_string(),
                        txn.description.clone(),
                        format!("{}${:.2}", txn.kind.sign(), txn.amount),
                        txn.category.clone(),
                        txn.status.label().to_string(),
                    ],
                    theme.status_color(txn.status),
                )
            })
            .collect();

        let selection = &self.selection;
        self.table.draw(
            frame,
            area,
            "Transactions",
            &["Date", "Description", "Amount", "Category", "Status"],
            &rows,
            selection.cursor(),
            |i| {
                visible
                    .get(i)
                    .map(|txn| selection.is_selected(txn.id))
                    .unwrap_or(false)
            },
            theme,
        );
    }

    fn draw_calendar(&self, frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let today = Local::now().date_naive();
        let mut lines = Vec::new();
        lines.push(Line::from(Span::styled(
            "    Sun       Mon       Tue       Wed       Thu       Fri       Sat",
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )));

        for week in month_grid(today.year(), today.month()) {
            let mut day_spans = Vec::new();
            let mut amount_spans = Vec::new();
            for slot in week {
                match slot {
                    Some(date) => {
                        let net: f64 = store
                            .transactions
                            .iter()
                            .filter(|txn| txn.date == date && self.filter.matches(txn.kind))
                            .map(|txn| match txn.kind {
                                TxnKind::Inflow => txn.amount,
                                TxnKind::Outflow => -txn.amount,
                            })
                            .sum();
                        let day_style = if date == today {
                            Style::default()
                                .fg(theme.header())
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(theme.dim())
                        };
                        day_spans.push(Span::styled(format!("   {:>2}     ", date.day()), day_style));
                        if net == 0.0 {
                            amount_spans.push(Span::raw("          "));
                        } else {
                            let color = if net > 0.0 {
                                theme.kind_color(TxnKind::Inflow)
                            } else {
                                theme.kind_color(TxnKind::Outflow)
                            };
                            amount_spans.push(Span::styled(
                                format!(" {:>8.0} ", net),
                                Style::default().fg(color),
                            ));
                        }
                    }
                    None => {
                        day_spans.push(Span::raw("          "));
                        amount_spans.push(Span::raw("          "));
                    }
                }
            }
            lines.push(Line::from(day_spans));
            lines.push(Line::from(amount_spans));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} · daily net ", today.format("%B %Y")))
                .title_style(Style::default().fg(theme.header()))
                .border_style(Style::default().fg(theme.dim())),
        );
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::transaction::TxnStatus;
    use chrono::NaiveDate;

    fn txn(id: i64, kind: TxnKind) -> Transaction {
        Transaction {
            id,
            date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            description: String::new(),
            amount: 10.0,
            kind,
            category: "General".to_string(),
            status: TxnStatus::Completed,
        }
    }

    fn store() -> Store {
        let mut store = Store::new();
        store.transactions = vec![
            txn(1, TxnKind::Inflow),
            txn(2, TxnKind::Outflow),
            txn(3, TxnKind::Inflow),
        ];
        store
    }

    #[test]
    fn test_filter_narrows_visible_rows() {
        let store = store();
        let mut screen = TransactionsScreen::default();
        assert_eq!(screen.visible(&store).len(), 3);
        screen.apply(&Action::CycleFilter, &store);
        assert_eq!(screen.filter, KindFilter::Inflow);
        assert_eq!(screen.all_ids(&store), vec![1, 3]);
        screen.apply(&Action::CycleFilter, &store);
        assert_eq!(screen.all_ids(&store), vec![2]);
    }

    #[test]
    fn test_select_all_only_selects_filtered() {
        let store = store();
        let mut screen = TransactionsScreen::default();
        screen.apply(&Action::CycleFilter, &store);
        screen.apply(&Action::SelectAllRows, &store);
        assert_eq!(screen.selection.selected_ids(), &[1, 3]);
        assert!(!screen.selection.is_selected(2));
    }

    #[test]
    fn test_filter_change_drops_hidden_selections() {
        let store = store();
        let mut screen = TransactionsScreen::default();
        screen.apply(&Action::ToggleRowSelection, &store);
        screen.apply(&Action::NextRow, &store);
        screen.apply(&Action::ToggleRowSelection, &store);
        assert_eq!(screen.selection.selected_ids(), &[1, 2]);

        // The Inflow filter hides row 2; its selection must go with it.
        screen.apply(&Action::CycleFilter, &store);
        assert_eq!(screen.filter, KindFilter::Inflow);
        assert!(!screen.selection.is_selected(2));
        assert_eq!(screen.selection.selected_ids(), &[1]);
    }

    #[test]
    fn test_cursor_resets_when_filter_changes() {
        let store = store();
        let mut screen = TransactionsScreen::default();
        screen.apply(&Action::NextRow, &store);
        screen.apply(&Action::NextRow, &store);
        assert_eq!(screen.selection.cursor(), 2);
        screen.apply(&Action::CycleFilter, &store);
        assert_eq!(screen.selection.cursor(), 0);
    }

    #[test]
    fn test_calendar_view_toggles() {
        let store = store();
        let mut screen = TransactionsScreen::default();
        assert!(!screen.calendar_view);
        screen.apply(&Action::ToggleCalendarView, &store);
        assert!(screen.calendar_view);
    }
}
