//! Collections of flat key-value documents, as held by the document store.

use serde_json::{Map, Value};
use time::{
    OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339,
    macros::format_description,
};
use uuid::Uuid;

/// Field map of a single document.
pub type Fields = Map<String, Value>;

/// Named collections known to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Students,
    Events,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Students => "students",
            Collection::Events => "events",
        }
    }

    /// Field stamped with a server-generated timestamp on insert.
    pub fn timestamp_field(self) -> &'static str {
        match self {
            Collection::Students => "registeredAt",
            Collection::Events => "createdAt",
        }
    }

    pub fn default_order(self) -> OrderBy {
        match self {
            Collection::Students => OrderBy::descending("registeredAt"),
            Collection::Events => OrderBy::descending("eventDate"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub field: &'static str,
    pub direction: SortDirection,
}

impl OrderBy {
    pub fn ascending(field: &'static str) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: &'static str) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: Uuid, fields: Fields) -> Self {
        Self { id, fields }
    }

    /// Display text of `key`. Numbers and booleans are shown as written;
    /// missing, null and nested values read as empty.
    pub fn text(&self, key: &str) -> String {
        match self.fields.get(key) {
            Some(Value::String(value)) => value.clone(),
            Some(Value::Number(value)) => value.to_string(),
            Some(Value::Bool(value)) => value.to_string(),
            _ => String::new(),
        }
    }

    /// Like [`Document::text`], with empty values as `None`.
    pub fn optional_text(&self, key: &str) -> Option<String> {
        Some(self.text(key)).filter(|value| !value.is_empty())
    }

    /// The value of `key` only when it is stored as a string.
    pub fn string(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// RFC 3339 timestamp stored under `key`; anything else reads as `None`.
    pub fn timestamp(&self, key: &str) -> Option<OffsetDateTime> {
        self.string(key)
            .and_then(|value| OffsetDateTime::parse(value, &Rfc3339).ok())
    }
}

/// Format `now` the way stores stamp timestamps: UTC, microsecond precision,
/// fixed width so that string order matches time order.
pub fn server_timestamp(now: OffsetDateTime) -> String {
    let format =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z");
    now.to_offset(UtcOffset::UTC)
        .format(&format)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn server_timestamp_is_fixed_width_utc() {
        let stamp = server_timestamp(datetime!(2025-09-25 14:30:05.5 +02:00));
        assert_eq!(stamp, "2025-09-25T12:30:05.500000Z");
    }

    #[test]
    fn server_timestamps_sort_chronologically() {
        let earlier = server_timestamp(datetime!(2025-01-09 23:59:59 UTC));
        let later = server_timestamp(datetime!(2025-01-10 00:00:00 UTC));
        assert!(earlier < later);
    }

    fn document(value: Value) -> Document {
        let Value::Object(fields) = value else {
            panic!("fixture must be an object");
        };
        Document::new(Uuid::new_v4(), fields)
    }

    #[test]
    fn scalar_fields_read_as_text() {
        let doc = document(json!({ "a": "x", "n": 42, "b": true, "z": null, "o": { "k": 1 } }));

        assert_eq!(doc.text("a"), "x");
        assert_eq!(doc.text("n"), "42");
        assert_eq!(doc.text("b"), "true");
        assert_eq!(doc.text("z"), "");
        assert_eq!(doc.text("o"), "");
        assert_eq!(doc.text("missing"), "");
        assert_eq!(doc.optional_text("z"), None);
        assert_eq!(doc.string("n"), None);
    }

    #[test]
    fn timestamps_that_are_not_rfc3339_read_as_none() {
        let doc = document(json!({
            "stamped": "2025-03-02T09:00:00.000000Z",
            "spaced": "2025-03-01 09:00:00",
            "imported": { "_seconds": 1740819600, "_nanoseconds": 0 },
        }));

        assert!(doc.timestamp("stamped").is_some());
        assert_eq!(doc.timestamp("spaced"), None);
        assert_eq!(doc.timestamp("imported"), None);
    }

    #[test]
    fn collections_stamp_their_own_field() {
        assert_eq!(Collection::Students.timestamp_field(), "registeredAt");
        assert_eq!(Collection::Events.timestamp_field(), "createdAt");
        assert_eq!(
            Collection::Events.default_order(),
            OrderBy::descending("eventDate")
        );
    }
}
