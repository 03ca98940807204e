//! Quit confirmation dialog

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Last stop before the terminal is restored. No state; the dialog only
/// resolves a key to quit-or-stay.
#[derive(Default)]
pub struct QuitDialog;

impl QuitDialog {
    fn resolve(key: KeyCode) -> Option<Action> {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ForceQuit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        }
    }

    fn hint(key: &'static str, label: &'static str, color: Color) -> Vec<Span<'static>> {
        vec![
            Span::styled(
                key,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(label),
        ]
    }
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(Self::resolve(key.code))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 42, 7);
        frame.render_widget(Clear, popup_area);

        let mut hints = Self::hint(" y/Enter ", "Quit  ", Color::Green);
        hints.extend(Self::hint(" n/Esc ", "Stay", Color::Red));

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Quit Inventory TUI?",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(hints),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Quit? ")
            .title_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(
            Paragraph::new(content)
                .block(block)
                .alignment(Alignment::Center),
            popup_area,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_resolve_quit_or_stay() {
        let mut dialog = QuitDialog;
        let action = dialog
            .handle_key_event(KeyEvent::from(KeyCode::Enter))
            .unwrap();
        assert_eq!(action, Some(Action::ForceQuit));
        let action = dialog
            .handle_key_event(KeyEvent::from(KeyCode::Esc))
            .unwrap();
        assert_eq!(action, Some(Action::CloseModal));
        let action = dialog
            .handle_key_event(KeyEvent::from(KeyCode::Char('z')))
            .unwrap();
        assert_eq!(action, None);
    }
}
