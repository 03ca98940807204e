//! Demand forecast screen
//!
//! Three-field form posted to the prediction endpoint. Validation runs
//! entirely client-side before any request is made; per-field errors show
//! inline. The screen has a browse mode, where global keys still work,
//! and an edit mode that captures typing into the focused field.

use crate::action::Action;
use crate::model::forecast::{self, FieldErrors, ForecastRequest};
use crate::services::api::ApiError;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELD_COUNT: usize = 3;

#[derive(Default)]
pub struct ForecastScreen {
    product: String,
    current_stock: String,
    sales_data: String,
    focus: usize,
    editing: bool,
    errors: FieldErrors,
    result: Option<Vec<f64>>,
    server_error: Option<String>,
    pub waiting: bool,
}

impl ForecastScreen {
    /// Returns `None` when the key should fall through to the global map.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Option<Action>> {
        if self.editing {
            match key.code {
                KeyCode::Esc => self.editing = false,
                KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
                    if self.focus + 1 < FIELD_COUNT {
                        self.focus += 1;
                    } else {
                        self.editing = false;
                        return Some(Some(Action::SubmitForecast));
                    }
                }
                KeyCode::BackTab | KeyCode::Up => {
                    self.focus = self.focus.saturating_sub(1);
                }
                KeyCode::Backspace => {
                    self.field_mut().pop();
                }
                KeyCode::Char(c) => {
                    self.field_mut().push(c);
                }
                _ => {}
            }
            return Some(None);
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                self.focus = (self.focus + 1) % FIELD_COUNT;
                Some(None)
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
                Some(None)
            }
            KeyCode::Char('i') | KeyCode::Enter => {
                self.editing = true;
                Some(None)
            }
            KeyCode::Char('s') => Some(Some(Action::SubmitForecast)),
            _ => None,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            0 => &mut self.product,
            1 => &mut self.current_stock,
            _ => &mut self.sales_data,
        }
    }

    /// Validate the form; on success the caller posts the request.
    pub fn validate(&mut self) -> Option<ForecastRequest> {
        match forecast::validate(&self.product, &self.current_stock, &self.sales_data) {
            Ok(request) => {
                self.errors = FieldErrors::default();
                self.server_error = None;
                self.result = None;
                self.waiting = true;
                Some(request)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn set_result(&mut self, result: Result<Vec<f64>, ApiError>) {
        self.waiting = false;
        match result {
            Ok(forecast) => {
                self.result = Some(forecast);
                self.server_error = None;
            }
            Err(err) => {
                self.result = None;
                self.server_error = Some(err.to_string());
            }
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.draw_form(frame, columns[0], theme);
        self.draw_result(frame, columns[1], theme);
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let fields = [
            ("Product", &self.product, self.errors.product),
            ("Current stock", &self.current_stock, self.errors.current_stock),
            ("Sales history", &self.sales_data, self.errors.sales_data),
        ];

        let mut lines = vec![Line::from("")];
        for (i, (label, value, error)) in fields.iter().enumerate() {
            let focused = i == self.focus;
            let label_style = if focused {
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.dim())
            };
            let shown = if focused && self.editing {
                format!("{}_", value)
            } else {
                value.to_string()
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {:>14}: ", label), label_style),
                Span::styled(shown, Style::default().fg(theme.text())),
            ]));
            if let Some(error) = error {
                lines.push(Line::from(Span::styled(
                    format!("                 {}", error),
                    Style::default().fg(theme.low_stock()),
                )));
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Sales history is comma-separated, e.g. 10,20,30",
            Style::default().fg(theme.dim()),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            if self.editing {
                " typing · Enter next field · Esc stop editing"
            } else {
                " i edit field · j/k move · s submit"
            },
            Style::default().fg(theme.dim()),
        )));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Demand Forecast ")
                .title_style(
                    Style::default()
                        .fg(theme.header())
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(theme.dim())),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_result(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = vec![Line::from("")];
        if self.waiting {
            lines.push(Line::from(Span::styled(
                " Asking the prediction service...",
                Style::default().fg(theme.accent()),
            )));
        } else if let Some(error) = &self.server_error {
            lines.push(Line::from(Span::styled(
                format!(" {}", error),
                Style::default().fg(theme.low_stock()),
            )));
        } else if let Some(result) = &self.result {
            lines.push(Line::from(Span::styled(
                format!(" Projected demand for {}:", self.product.trim()),
                Style::default()
                    .fg(theme.text())
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            for (month, value) in result.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  Month {:>2}  ", month + 1),
                        Style::default().fg(theme.dim()),
                    ),
                    Span::styled(
                        format!("{:.1}", value),
                        Style::default().fg(theme.accent()),
                    ),
                ]));
            }
        } else {
            lines.push(Line::from(Span::styled(
                " Fill in the form and submit to see a projection.",
                Style::default().fg(theme.dim()),
            )));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Projection ")
                .title_style(Style::default().fg(theme.header()))
                .border_style(Style::default().fg(theme.dim())),
        );
        frame.render_widget(paragraph, area);
    }
}
