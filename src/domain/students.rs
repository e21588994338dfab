//! Student registrations.

use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

use super::documents::{Document, Fields};

/// Review state of a registration. Anything outside the three known labels,
/// including a missing value, is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StudentStatus {
    Pending,
    Approved,
    Rejected,
    Unknown,
}

impl StudentStatus {
    /// Statuses offered by the status filter, in display order.
    pub const FILTERABLE: [StudentStatus; 3] = [
        StudentStatus::Approved,
        StudentStatus::Pending,
        StudentStatus::Rejected,
    ];

    pub fn from_label(label: &str) -> Self {
        match label {
            "Pending" => StudentStatus::Pending,
            "Approved" => StudentStatus::Approved,
            "Rejected" => StudentStatus::Rejected,
            _ => StudentStatus::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StudentStatus::Pending => "Pending",
            StudentStatus::Approved => "Approved",
            StudentStatus::Rejected => "Rejected",
            StudentStatus::Unknown => "Unknown",
        }
    }

    /// Stable lowercase key used for badge styling.
    pub fn key(self) -> &'static str {
        match self {
            StudentStatus::Pending => "pending",
            StudentStatus::Approved => "approved",
            StudentStatus::Rejected => "rejected",
            StudentStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub id: Uuid,
    pub name: String,
    pub registration_id: String,
    pub registered_for: String,
    pub status: StudentStatus,
    /// Status exactly as stored, when it is a string; the status filter matches on it.
    pub status_label: Option<String>,
    pub registered_at: Option<OffsetDateTime>,
    pub email: Option<String>,
}

impl StudentRecord {
    /// Every document yields a record; fields of an unexpected shape fall back
    /// to empty text, `Unknown` status or no timestamp.
    pub fn from_document(document: &Document) -> Self {
        let status_label = document.string("status").map(str::to_string);
        Self {
            id: document.id,
            name: document.text("name"),
            registration_id: document.text("registrationId"),
            registered_for: document.text("registeredFor"),
            status: status_label
                .as_deref()
                .map(StudentStatus::from_label)
                .unwrap_or(StudentStatus::Unknown),
            status_label,
            registered_at: document.timestamp("registeredAt"),
            email: document.optional_text("email"),
        }
    }
}

/// Fields submitted by the registration dialog.
#[derive(Debug, Clone, Default)]
pub struct NewStudent {
    pub name: String,
    pub email: Option<String>,
    pub registration_id: String,
    pub registered_for: String,
}

impl NewStudent {
    /// Document fields for a fresh registration; every registration starts `Pending`.
    pub fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".into(), Value::String(self.name));
        if let Some(email) = self.email {
            fields.insert("email".into(), Value::String(email));
        }
        fields.insert(
            "registrationId".into(),
            Value::String(self.registration_id),
        );
        fields.insert("registeredFor".into(), Value::String(self.registered_for));
        fields.insert(
            "status".into(),
            Value::String(StudentStatus::Pending.label().to_string()),
        );
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: Value) -> Document {
        let Value::Object(fields) = value else {
            panic!("fixture must be an object");
        };
        Document::new(Uuid::new_v4(), fields)
    }

    #[test]
    fn decodes_camel_case_fields() {
        let doc = document(json!({
            "name": "Ada Lovelace",
            "registrationId": "REG-001",
            "registeredFor": "Hackathon",
            "status": "Approved",
            "registeredAt": "2025-09-25T12:30:05.500000Z",
            "email": "ada@example.com",
            "phone": "ignored"
        }));

        let record = StudentRecord::from_document(&doc);
        assert_eq!(record.name, "Ada Lovelace");
        assert_eq!(record.registration_id, "REG-001");
        assert_eq!(record.registered_for, "Hackathon");
        assert_eq!(record.status, StudentStatus::Approved);
        assert_eq!(record.status_label.as_deref(), Some("Approved"));
        assert_eq!(record.email.as_deref(), Some("ada@example.com"));
        assert!(record.registered_at.is_some());
    }

    #[test]
    fn unrecognised_or_missing_status_is_unknown() {
        let odd = StudentRecord::from_document(&document(json!({
            "name": "A",
            "status": "approved",
        })));
        let missing = StudentRecord::from_document(&document(json!({ "name": "B" })));

        assert_eq!(odd.status, StudentStatus::Unknown);
        assert_eq!(odd.status_label.as_deref(), Some("approved"));
        assert_eq!(missing.status, StudentStatus::Unknown);
        assert_eq!(missing.status_label, None);
    }

    #[test]
    fn non_string_status_is_unknown() {
        for status in [json!(1), json!(true), json!({ "label": "Approved" })] {
            let record = StudentRecord::from_document(&document(json!({
                "name": "Ada",
                "status": status,
            })));
            assert_eq!(record.status, StudentStatus::Unknown);
            assert_eq!(record.status_label, None);
        }
    }

    #[test]
    fn timestamp_outside_rfc3339_keeps_the_record() {
        let record = StudentRecord::from_document(&document(json!({
            "name": "Grace",
            "status": "Approved",
            "registeredAt": "2025-03-01 09:00:00",
        })));

        assert_eq!(record.name, "Grace");
        assert_eq!(record.status, StudentStatus::Approved);
        assert_eq!(record.registered_at, None);
    }

    #[test]
    fn scalar_fields_are_shown_as_text() {
        let record = StudentRecord::from_document(&document(json!({
            "name": 42,
            "registrationId": 1007,
            "email": "",
        })));

        assert_eq!(record.name, "42");
        assert_eq!(record.registration_id, "1007");
        assert_eq!(record.email, None);
    }

    #[test]
    fn new_registrations_default_to_pending() {
        let fields = NewStudent {
            name: "Grace".into(),
            email: None,
            registration_id: "REG-7".into(),
            registered_for: "Workshop".into(),
        }
        .into_fields();

        assert_eq!(fields.get("status"), Some(&json!("Pending")));
        assert_eq!(fields.get("registrationId"), Some(&json!("REG-7")));
        assert!(!fields.contains_key("email"));
    }
}
