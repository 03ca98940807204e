//! Alert records and their severity tags

use serde::{Deserialize, Serialize};

/// Alert severity. Wire values are lowercase; unknown strings collapse to
/// `Info` rather than failing the whole list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum AlertKind {
    #[default]
    Info,
    Warning,
    Error,
    Success,
}

impl From<String> for AlertKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "warning" => AlertKind::Warning,
            "error" => AlertKind::Error,
            "success" => AlertKind::Success,
            _ => AlertKind::Info,
        }
    }
}

impl AlertKind {
    pub fn icon(&self) -> &'static str {
        match self {
            AlertKind::Info => "ℹ",
            AlertKind::Warning => "⚠",
            AlertKind::Error => "✗",
            AlertKind::Success => "✓",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::Info => "info",
            AlertKind::Warning => "warning",
            AlertKind::Error => "error",
            AlertKind::Success => "success",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: AlertKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_kinds_parse() {
        let alerts: Vec<Alert> = serde_json::from_str(
            r#"[
                {"id": 1, "type": "warning", "title": "Low Stock", "message": "Flour is low"},
                {"id": 2, "type": "success", "title": "Synced", "message": "ok"},
                {"id": 3, "type": "blinking", "title": "???", "message": "?"}
            ]"#,
        )
        .unwrap();
        assert_eq!(alerts[0].kind, AlertKind::Warning);
        assert_eq!(alerts[1].kind, AlertKind::Success);
        // Unknown tag falls back to Info
        assert_eq!(alerts[2].kind, AlertKind::Info);
    }

    #[test]
    fn test_alert_kind_icons_distinct() {
        let icons = [
            AlertKind::Info.icon(),
            AlertKind::Warning.icon(),
            AlertKind::Error.icon(),
            AlertKind::Success.icon(),
        ];
        for (i, a) in icons.iter().enumerate() {
            for b in icons.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
