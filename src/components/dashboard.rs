//! Dashboard screen
//!
//! Metric cards over the fetched data plus the most recent transactions
//! and open alerts. Everything shown here is recomputed on draw from the
//! shared store; the screen itself holds no state.

use crate::model::metrics;
use crate::model::store::Store;
use crate::theme::Theme;
use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct DashboardScreen;

impl DashboardScreen {
    pub fn draw(&mut self, frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        self.draw_cards(frame, rows[0], store, theme);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        self.draw_recent_transactions(frame, columns[0], store, theme);
        self.draw_low_stock(frame, columns[1], store, theme);
    }

    fn draw_cards(&self, frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        let card = |title: &str, value: String, detail: Line<'static>| {
            Paragraph::new(vec![
                Line::from(Span::styled(
                    value,
                    Style::default()
                        .fg(theme.text())
                        .add_modifier(Modifier::BOLD),
                )),
                detail,
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", title))
                    .title_style(Style::default().fg(theme.header()))
                    .border_style(Style::default().fg(theme.dim())),
            )
        };

        frame.render_widget(
            card(
                "Items",
                store.items.len().to_string(),
                Line::from(Span::styled(
                    format!("{} units in stock", metrics::total_stock(&store.items)),
                    Style::default().fg(theme.dim()),
                )),
            ),
            cards[0],
        );

        let low = metrics::low_stock_count(&store.items);
        let low_detail = match metrics::low_stock_percentage(&store.items) {
            Some(pct) => format!("{:.1}% of inventory", pct),
            None => "no items loaded".to_string(),
        };
        frame.render_widget(
            card(
                "Low Stock",
                low.to_string(),
                Line::from(Span::styled(
                    low_detail,
                    Style::default().fg(if low > 0 {
                        theme.low_stock()
                    } else {
                        theme.dim()
                    }),
                )),
            ),
            cards[1],
        );

        let today = Local::now().date_naive();
        let delta = metrics::revenue_delta(&store.transactions, today);
        frame.render_widget(
            card(
                "Revenue Today",
                format!("${:.2}", delta.today),
                Line::from(vec![
                    Span::styled(
                        format!("{} {}% ", delta.trend.arrow(), delta.percentage),
                        Style::default().fg(theme.trend_color(delta.trend)),
                    ),
                    Span::styled("vs yesterday", Style::default().fg(theme.dim())),
                ]),
            ),
            cards[2],
        );

        frame.render_widget(
            card(
                "Alerts",
                store.alerts.len().to_string(),
                Line::from(Span::styled(
                    format!("{} suppliers", store.suppliers.len()),
                    Style::default().fg(theme.dim()),
                )),
            ),
            cards[3],
        );
    }

    fn draw_recent_transactions(
        &self,
        frame: &mut Frame,
        area: Rect,
        store: &Store,
        theme: &Theme,
    ) {
        let mut lines = Vec::new();
        if store.transactions.is_empty() {
            lines.push(Line::from(Span::styled(
                " No transactions yet",
                Style::default().fg(theme.dim()),
            )));
        }
        // Newest first
        let mut recent: Vec<_> = store.transactions.iter().collect();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        for txn in recent.iter().take(area.height.saturating_sub(2) as usize) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", txn.date),
                    Style::default().fg(theme.dim()),
                ),
                Span::styled(
                    format!("{}${:<9.2}", txn.kind.sign(), txn.amount),
                    Style::default().fg(theme.kind_color(txn.kind)),
                ),
                Span::styled(txn.description.clone(), Style::default().fg(theme.text())),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Recent Transactions ")
                .title_style(Style::default().fg(theme.header()))
                .border_style(Style::default().fg(theme.dim())),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_low_stock(&self, frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let mut lines = Vec::new();
        let low: Vec<_> = store.items.iter().filter(|item| item.is_low_stock()).collect();
        if low.is_empty() {
            lines.push(Line::from(Span::styled(
                " All items sufficiently stocked",
                Style::default().fg(theme.dim()),
            )));
        }
        for item in low.iter().take(area.height.saturating_sub(2) as usize) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", item.item_name),
                    Style::default().fg(theme.low_stock()),
                ),
                Span::styled(
                    format!(
                        "{} {} left (threshold {})",
                        item.quantity, item.unit, item.low_stock_threshold
                    ),
                    Style::default().fg(theme.dim()),
                ),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Low Stock ")
                .title_style(Style::default().fg(theme.header()))
                .border_style(Style::default().fg(theme.dim())),
        );
        frame.render_widget(paragraph, area);
    }
}
