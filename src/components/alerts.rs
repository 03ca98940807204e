//! Alerts screen
//!
//! Accordion list of backend alerts. At most one alert is expanded at a
//! time. `--alert <id>` on the command line deep-links here; the focus is
//! resolved once the alert list arrives.

use crate::action::Action;
use crate::model::store::Store;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct AlertsScreen {
    pub cursor: usize,
    expanded: Option<usize>,
    /// Alert id to focus once the list is loaded
    focus_id: Option<i64>,
}

impl AlertsScreen {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstRow),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastRow),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ToggleAlertExpanded),
            _ => None,
        }
    }

    pub fn apply(&mut self, action: &Action, store: &Store) {
        let count = store.alerts.len();
        match action {
            Action::NextRow if count > 0 => self.cursor = (self.cursor + 1) % count,
            Action::PrevRow if count > 0 => {
                self.cursor = if self.cursor == 0 {
                    count - 1
                } else {
                    self.cursor - 1
                }
            }
            Action::FirstRow => self.cursor = 0,
            Action::LastRow => self.cursor = count.saturating_sub(1),
            Action::ToggleAlertExpanded => {
                self.expanded = if self.expanded == Some(self.cursor) {
                    None
                } else {
                    Some(self.cursor)
                };
            }
            _ => {}
        }
    }

    /// Remember an alert id to jump to when the list arrives.
    pub fn focus(&mut self, id: i64) {
        self.focus_id = Some(id);
    }

    /// Called after the alert list loads; moves the cursor to the
    /// requested alert and expands it.
    pub fn resolve_focus(&mut self, store: &Store) {
        if let Some(id) = self.focus_id.take() {
            if let Some(idx) = store.alerts.iter().position(|alert| alert.id == id) {
                self.cursor = idx;
                self.expanded = Some(idx);
            }
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        if self.cursor >= store.alerts.len() {
            self.cursor = store.alerts.len().saturating_sub(1);
        }

        let mut lines = Vec::new();
        if store.alerts.is_empty() {
            lines.push(Line::from(Span::styled(
                " No alerts. All clear.",
                Style::default().fg(theme.dim()),
            )));
        }
        for (i, alert) in store.alerts.iter().enumerate() {
            let color = theme.alert_color(alert.kind);
            let mut style = Style::default().fg(theme.text());
            if i == self.cursor {
                style = style.bg(theme.selection_bg()).add_modifier(Modifier::BOLD);
            }
            let chevron = if self.expanded == Some(i) { "▾" } else { "▸" };
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", chevron), style),
                Span::styled(format!("{} ", alert.kind.icon()), style.fg(color)),
                Span::styled(alert.title.clone(), style),
                Span::styled(
                    format!("  [{}]", alert.kind.label()),
                    style.fg(theme.dim()),
                ),
            ]));
            if self.expanded == Some(i) {
                for text_line in alert.message.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("     {}", text_line),
                        Style::default().fg(theme.dim()),
                    )));
                }
            }
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Alerts ({}) ", store.alerts.len()))
                .title_style(Style::default().fg(theme.header()))
                .border_style(Style::default().fg(theme.dim())),
        );
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::alert::Alert;

    fn store() -> Store {
        let mut store = Store::new();
        store.alerts = serde_json::from_str::<Vec<Alert>>(
            r#"[
                {"id": 10, "type": "warning", "title": "Low stock", "message": "Flour"},
                {"id": 20, "type": "info", "title": "Sync done", "message": "ok"}
            ]"#,
        )
        .unwrap();
        store
    }

    #[test]
    fn test_only_one_alert_expanded() {
        let store = store();
        let mut screen = AlertsScreen::default();
        screen.apply(&Action::ToggleAlertExpanded, &store);
        assert_eq!(screen.expanded, Some(0));
        screen.apply(&Action::NextRow, &store);
        screen.apply(&Action::ToggleAlertExpanded, &store);
        assert_eq!(screen.expanded, Some(1));
        screen.apply(&Action::ToggleAlertExpanded, &store);
        assert_eq!(screen.expanded, None);
    }

    #[test]
    fn test_focus_resolves_by_id() {
        let store = store();
        let mut screen = AlertsScreen::default();
        screen.focus(20);
        screen.resolve_focus(&store);
        assert_eq!(screen.cursor, 1);
        assert_eq!(screen.expanded, Some(1));
    }

    #[test]
    fn test_focus_unknown_id_is_ignored() {
        let store = store();
        let mut screen = AlertsScreen::default();
        screen.focus(99);
        screen.resolve_focus(&store);
        assert_eq!(screen.cursor, 0);
        assert_eq!(screen.expanded, None);
    }
}
