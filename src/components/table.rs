//! Selection-aware table rendering shared by the record screens
//!
//! Each data screen feeds its rows through `SelectTable`, which handles
//! column sizing, the selection checkbox column, cursor highlighting,
//! and keeping the cursor row scrolled into view.

use crate::action::Action;
use crate::model::selection::ActionKind;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const MAX_COL_WIDTH: usize = 40;

/// One rendered row: cell text plus an optional row color override.
pub struct TableRow {
    pub cells: Vec<String>,
    pub fg: Option<Color>,
}

impl TableRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells, fg: None }
    }

    pub fn colored(cells: Vec<String>, fg: Color) -> Self {
        Self {
            cells,
            fg: Some(fg),
        }
    }
}

/// Table renderer with a checkbox column and cursor tracking
#[derive(Default)]
pub struct SelectTable {
    scroll: usize,
}

impl SelectTable {
    /// Map table navigation keys to actions. Shared by every record screen.
    pub fn handle_key(key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstRow),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastRow),
            KeyCode::Char(' ') => Some(Action::ToggleRowSelection),
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::SelectAllRows)
            }
            KeyCode::Char('n') => Some(Action::OpenAddForm),
            KeyCode::Char('e') => Some(Action::RequestAction(ActionKind::Edit)),
            KeyCode::Char('d') => Some(Action::RequestAction(ActionKind::Delete)),
            KeyCode::Esc => Some(Action::CancelPending),
            _ => None,
        }
    }

    fn truncate(text: &str, width: usize) -> String {
        if text.width() <= width {
            return text.to_string();
        }
        let mut out = String::new();
        for ch in text.chars() {
            if out.width() + 4 > width {
                break;
            }
            out.push(ch);
        }
        out.push_str("...");
        out
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        headers: &[&str],
        rows: &[TableRow],
        cursor: usize,
        is_selected: impl Fn(usize) -> bool,
        theme: &Theme,
    ) {
        // Column widths from header and cell content, capped
        let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
        for row in rows {
            for (i, cell) in row.cells.iter().enumerate() {
                if i < col_widths.len() {
                    col_widths[i] = col_widths[i].max(cell.width());
                }
            }
        }
        for width in &mut col_widths {
            *width = (*width).min(MAX_COL_WIDTH);
        }

        let mut lines: Vec<Line> = Vec::new();

        let mut header_spans = vec![Span::raw("    ")];
        for (i, header) in headers.iter().enumerate() {
            header_spans.push(Span::styled(
                format!("{:width$}", header, width = col_widths[i]),
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            ));
            header_spans.push(Span::raw("  "));
        }
        lines.push(Line::from(header_spans));

        let visible_height = area.height.saturating_sub(3) as usize;
        // Keep the cursor row visible
        if cursor < self.scroll {
            self.scroll = cursor;
        } else if visible_height > 0 && cursor >= self.scroll + visible_height {
            self.scroll = cursor + 1 - visible_height;
        }

        if rows.is_empty() {
            lines.push(Line::from(Span::styled(
                "  No records",
                Style::default().fg(theme.dim()),
            )));
        }

        for (i, row) in rows
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(visible_height)
        {
            let marker = if is_selected(i) { "[x] " } else { "[ ] " };
            let base = Style::default().fg(row.fg.unwrap_or(theme.text()));
            let style = if i == cursor {
                base.bg(theme.selection_bg()).add_modifier(Modifier::BOLD)
            } else {
                base
            };
            let mut spans = vec![Span::styled(marker, style)];
            for (j, cell) in row.cells.iter().enumerate() {
                let width = col_widths.get(j).copied().unwrap_or(10);
                spans.push(Span::styled(
                    format!(
                        "{:width$}",
                        Self::truncate(cell, width),
                        width = width
                    ),
                    style,
                ));
                spans.push(Span::styled("  ", style));
            }
            lines.push(Line::from(spans));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ({}) ", title, rows.len()))
                .border_style(Style::default().fg(theme.dim())),
        );
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(SelectTable::truncate("bolts", 10), "bolts");
    }

    #[test]
    fn test_truncate_long_text_gets_ellipsis() {
        let truncated = SelectTable::truncate("a very long item name", 10);
        assert!(truncated.ends_with("..."));
        assert!(truncated.width() <= 10);
    }

    #[test]
    fn test_handle_key_maps_selection_keys() {
        let key = KeyEvent::from(KeyCode::Char(' '));
        assert_eq!(
            SelectTable::handle_key(key),
            Some(Action::ToggleRowSelection)
        );
        let key = KeyEvent::from(KeyCode::Char('d'));
        assert_eq!(
            SelectTable::handle_key(key),
            Some(Action::RequestAction(ActionKind::Delete))
        );
        let key = KeyEvent::from(KeyCode::Char('z'));
        assert_eq!(SelectTable::handle_key(key), None);
    }
}
