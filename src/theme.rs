//! Color palette shared across screens
//!
//! Built once at startup from the configured color mode and passed to
//! the components by reference; nothing mutates it after that.

use crate::model::alert::AlertKind;
use crate::model::metrics::Trend;
use crate::model::supplier::SupplierStatus;
use crate::model::transaction::{TxnKind, TxnStatus};
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Dark,
    Light,
}

impl ColorMode {
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => ColorMode::Light,
            _ => ColorMode::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    mode: ColorMode,
}

impl Theme {
    pub fn new(mode: ColorMode) -> Self {
        Self { mode }
    }

    pub fn accent(&self) -> Color {
        Color::Cyan
    }

    pub fn header(&self) -> Color {
        Color::Yellow
    }

    pub fn dim(&self) -> Color {
        match self.mode {
            ColorMode::Dark => Color::DarkGray,
            ColorMode::Light => Color::Gray,
        }
    }

    pub fn text(&self) -> Color {
        match self.mode {
            ColorMode::Dark => Color::White,
            ColorMode::Light => Color::Black,
        }
    }

    pub fn selection_bg(&self) -> Color {
        match self.mode {
            ColorMode::Dark => Color::DarkGray,
            ColorMode::Light => Color::Gray,
        }
    }

    pub fn low_stock(&self) -> Color {
        Color::Red
    }

    pub fn alert_color(&self, kind: AlertKind) -> Color {
        match kind {
            AlertKind::Info => Color::Blue,
            AlertKind::Warning => Color::Yellow,
            AlertKind::Error => Color::Red,
            AlertKind::Success => Color::Green,
        }
    }

    pub fn kind_color(&self, kind: TxnKind) -> Color {
        match kind {
            TxnKind::Inflow => Color::Green,
            TxnKind::Outflow => Color::Red,
        }
    }

    pub fn status_color(&self, status: TxnStatus) -> Color {
        match status {
            TxnStatus::Completed => Color::Green,
            TxnStatus::Pending => Color::Blue,
            TxnStatus::Cancelled => Color::Red,
        }
    }

    pub fn supplier_status_color(&self, status: SupplierStatus) -> Color {
        match status {
            SupplierStatus::Active => Color::Green,
            SupplierStatus::Inactive => Color::Red,
            SupplierStatus::Pending => Color::Yellow,
        }
    }

    pub fn trend_color(&self, trend: Trend) -> Color {
        match trend {
            Trend::Up => Color::Green,
            Trend::Down => Color::Red,
            Trend::NoChange => self.dim(),
        }
    }
}
