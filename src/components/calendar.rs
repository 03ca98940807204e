//! Calendar screen
//!
//! Month grid with a day cursor. Days with events are marked; the panel
//! below the grid lists the highlighted day's events. Weeks start on
//! Sunday to match the rest of the product.

use crate::action::Action;
use crate::model::store::Store;
use crate::theme::Theme;
use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Weeks of a month, padded with `None` so every week has seven slots.
pub fn month_grid(year: i32, month: u32) -> Vec<[Option<NaiveDate>; 7]> {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date,
        None => return Vec::new(),
    };
    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut day = first;
    loop {
        let slot = day.weekday().num_days_from_sunday() as usize;
        week[slot] = Some(day);
        if slot == 6 {
            weeks.push(week);
            week = [None; 7];
        }
        match day.checked_add_days(Days::new(1)) {
            Some(next) if next.month() == month => day = next,
            _ => break,
        }
    }
    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }
    weeks
}

pub struct CalendarScreen {
    /// Day under the cursor; also defines the visible month.
    pub cursor: NaiveDate,
}

impl Default for CalendarScreen {
    fn default() -> Self {
        Self {
            cursor: Local::now().date_naive(),
        }
    }
}

impl CalendarScreen {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('h') | KeyCode::Left => Some(Action::CalendarMove(-1)),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::CalendarMove(1)),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::CalendarMove(7)),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::CalendarMove(-7)),
            KeyCode::Char('[') => Some(Action::CalendarShiftMonth(-1)),
            KeyCode::Char(']') => Some(Action::CalendarShiftMonth(1)),
            KeyCode::Char('t') => {
                self.cursor = Local::now().date_naive();
                None
            }
            KeyCode::Char('a') => Some(Action::CalendarAddEvent),
            KeyCode::Char('d') => Some(Action::CalendarDeleteEvent),
            _ => None,
        }
    }

    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::CalendarMove(days) => {
                let moved = if *days >= 0 {
                    self.cursor.checked_add_days(Days::new(*days as u64))
                } else {
                    self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
                };
                if let Some(date) = moved {
                    self.cursor = date;
                }
            }
            Action::CalendarShiftMonth(delta) => {
                let shifted = if *delta >= 0 {
                    self.cursor.checked_add_months(Months::new(*delta as u32))
                } else {
                    self.cursor
                        .checked_sub_months(Months::new(delta.unsigned_abs()))
                };
                if let Some(date) = shifted {
                    self.cursor = date;
                }
            }
            _ => {}
        }
    }

    /// First event on the highlighted day, used by the delete prompt.
    pub fn event_under_cursor<'a>(&self, store: &'a Store) -> Option<&'a crate::model::CalendarEvent> {
        store.events.iter().find(|event| event.date == self.cursor)
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(7)])
            .split(area);

        self.draw_grid(frame, rows[0], store, theme);
        self.draw_day_panel(frame, rows[1], store, theme);
    }

    fn draw_grid(&self, frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let today = Local::now().date_naive();
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            "  Sun   Mon   Tue   Wed   Thu   Fri   Sat",
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )));

        for week in month_grid(self.cursor.year(), self.cursor.month()) {
            let mut spans = Vec::new();
            for slot in week {
                match slot {
                    Some(date) => {
                        let has_event = store.events.iter().any(|e| e.date == date);
                        let mut style = Style::default().fg(if has_event {
                            theme.accent()
                        } else {
                            theme.text()
                        });
                        if date == today {
                            style = style.add_modifier(Modifier::UNDERLINED);
                        }
                        if date == self.cursor {
                            style = style
                                .bg(theme.selection_bg())
                                .add_modifier(Modifier::BOLD);
                        }
                        let marker = if has_event { "*" } else { " " };
                        spans.push(Span::styled(
                            format!("  {:>2}{} ", date.day(), marker),
                            style,
                        ));
                    }
                    None => spans.push(Span::raw("      ")),
                }
            }
            lines.push(Line::from(""));
            lines.push(Line::from(spans));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.cursor.format("%B %Y")))
                .title_style(
                    Style::default()
                        .fg(theme.header())
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(theme.dim())),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_day_panel(&self, frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let mut lines = Vec::new();
        let todays: Vec<_> = store
            .events
            .iter()
            .filter(|event| event.date == self.cursor)
            .collect();
        if todays.is_empty() {
            lines.push(Line::from(Span::styled(
                " No events. Press a to add one.",
                Style::default().fg(theme.dim()),
            )));
        }
        for event in todays {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" • {} ", event.title),
                    Style::default()
                        .fg(theme.text())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(event.description.clone(), Style::default().fg(theme.dim())),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.cursor))
                .title_style(Style::default().fg(theme.header()))
                .border_style(Style::default().fg(theme.dim())),
        );
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_grid_september_2026() {
        // 2026-09-01 is a Tuesday
        let weeks = month_grid(2026, 9);
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], None);
        assert_eq!(weeks[0][2], NaiveDate::from_ymd_opt(2026, 9, 1));
        assert_eq!(weeks[4][3], NaiveDate::from_ymd_opt(2026, 9, 30));
        assert_eq!(weeks[4][4], None);
    }

    #[test]
    fn test_month_grid_covers_every_day_once() {
        let weeks = month_grid(2026, 2);
        let days: Vec<_> = weeks.iter().flatten().flatten().collect();
        assert_eq!(days.len(), 28);
        assert_eq!(days[0].day(), 1);
        assert_eq!(days[27].day(), 28);
    }

    #[test]
    fn test_cursor_moves_across_month_boundary() {
        let mut screen = CalendarScreen {
            cursor: NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
        };
        screen.apply(&Action::CalendarMove(1));
        assert_eq!(screen.cursor, NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
        screen.apply(&Action::CalendarMove(-7));
        assert_eq!(screen.cursor, NaiveDate::from_ymd_opt(2026, 8, 25).unwrap());
    }

    #[test]
    fn test_month_shift_clamps_day() {
        let mut screen = CalendarScreen {
            cursor: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        };
        screen.apply(&Action::CalendarShiftMonth(1));
        assert_eq!(screen.cursor, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
    }

    #[test]
    fn test_first_weekday_slot_matches_chrono() {
        let weeks = month_grid(2026, 8);
        // 2026-08-01 is a Saturday
        assert_eq!(
            NaiveDate::from_ymd_opt(2026, 8, 1).unwrap().weekday(),
            Weekday::Sat
        );
        assert_eq!(weeks[0][6], NaiveDate::from_ymd_opt(2026, 8, 1));
    }
}
