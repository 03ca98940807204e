//! Calendar event records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An event as returned by `GET /events/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarEvent {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

/// Body for `POST /events/`.
#[derive(Debug, Clone, Serialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_parses() {
        let e: CalendarEvent = serde_json::from_str(
            r#"{"id": 1, "title": "Stock take", "description": "Q3", "date": "2026-09-14"}"#,
        )
        .unwrap();
        assert_eq!(e.title, "Stock take");
        assert_eq!(e.date, NaiveDate::from_ymd_opt(2026, 9, 14).unwrap());
    }
}
