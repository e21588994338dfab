//! Events that students register for.

use serde_json::Value;
use time::{Date, OffsetDateTime, macros::format_description};
use uuid::Uuid;

use super::documents::{Document, Fields};

#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub id: Uuid,
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub created_at: Option<OffsetDateTime>,
}

impl EventRecord {
    pub fn from_document(document: &Document) -> Self {
        Self {
            id: document.id,
            name: document.text("eventName"),
            date: document.text("eventDate"),
            time: document.text("eventTime"),
            location: document.text("eventLocation"),
            created_at: document.timestamp("createdAt"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

impl NewEvent {
    pub fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("eventName".into(), Value::String(self.name));
        fields.insert("eventDate".into(), Value::String(self.date));
        fields.insert("eventTime".into(), Value::String(self.time));
        fields.insert("eventLocation".into(), Value::String(self.location));
        fields
    }
}

/// Render a `YYYY-MM-DD` date as e.g. `September 25, 2025`.
///
/// Values that are not calendar dates are returned unchanged.
pub fn format_event_date(value: &str) -> String {
    let input = format_description!("[year]-[month]-[day]");
    let output = format_description!("[month repr:long] [day padding:none], [year]");

    Date::parse(value.trim(), &input)
        .ok()
        .and_then(|date| date.format(&output).ok())
        .unwrap_or_else(|| value.to_string())
}

/// Render a 24-hour `HH:MM` time on a 12-hour clock, e.g. `14:30` as `2:30 PM`.
///
/// An empty value stays empty; a value without a numeric hour is returned unchanged.
pub fn format_event_time(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let mut parts = value.split(':');
    let hours = parts.next().unwrap_or_default();
    let Some(minutes) = parts.next() else {
        return value.to_string();
    };
    let Ok(hours) = hours.trim().parse::<u32>() else {
        return value.to_string();
    };

    let meridiem = if hours >= 12 { "PM" } else { "AM" };
    let hours = match hours % 12 {
        0 => 12,
        other => other,
    };

    format!("{hours}:{minutes} {meridiem}")
}
