//! Confirmation dialog for armed edit and delete actions

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::selection::ActionKind;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Asks the user to confirm the armed action before anything is sent
/// to the backend. Declining cancels the action and the selection.
pub struct ConfirmDialog {
    kind: ActionKind,
    count: usize,
    entity: &'static str,
}

impl ConfirmDialog {
    pub fn new(kind: ActionKind, count: usize, entity: &'static str) -> Self {
        Self {
            kind,
            count,
            entity,
        }
    }

    fn message(&self) -> String {
        if self.count == 0 {
            return format!("No {} selected. Nothing will happen.", self.entity);
        }
        match self.kind {
            ActionKind::Edit => format!("Edit the first selected {}?", self.entity),
            ActionKind::Delete => {
                if self.count == 1 {
                    format!("Delete 1 {}?", self.entity)
                } else {
                    format!("Delete {} {}s?", self.count, self.entity)
                }
            }
        }
    }
}

impl Component for ConfirmDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Some(Action::ConfirmPending)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CancelPending),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 44, 7);
        frame.render_widget(Clear, popup_area);

        let (title, border) = match self.kind {
            ActionKind::Edit => (" Edit ", Color::Yellow),
            ActionKind::Delete => (" Delete ", Color::Red),
        };

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.message(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " y/Enter ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Confirm  "),
                Span::styled(
                    " n/Esc ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("Cancel"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(title)
                    .title_style(Style::default().fg(border).add_modifier(Modifier::BOLD)),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_message_counts() {
        let dialog = ConfirmDialog::new(ActionKind::Delete, 1, "item");
        assert_eq!(dialog.message(), "Delete 1 item?");
        let dialog = ConfirmDialog::new(ActionKind::Delete, 3, "supplier");
        assert_eq!(dialog.message(), "Delete 3 suppliers?");
    }

    #[test]
    fn test_keys_map_to_pending_actions() {
        let mut dialog = ConfirmDialog::new(ActionKind::Edit, 1, "item");
        let action = dialog
            .handle_key_event(KeyEvent::from(KeyCode::Char('y')))
            .unwrap();
        assert_eq!(action, Some(Action::ConfirmPending));
        let action = dialog
            .handle_key_event(KeyEvent::from(KeyCode::Esc))
            .unwrap();
        assert_eq!(action, Some(Action::CancelPending));
    }
}
