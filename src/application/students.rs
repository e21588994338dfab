use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info};

use crate::application::repos::DocumentStore;
use crate::domain::documents::Collection;
use crate::domain::events::EventRecord;
use crate::domain::students::{NewStudent, StudentRecord};

/// Owns the fetched student snapshot shared by every students panel request.
#[derive(Clone)]
pub struct StudentService {
    store: Arc<dyn DocumentStore>,
    snapshot: Arc<RwLock<Arc<[StudentRecord]>>>,
}

impl StudentService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            snapshot: Arc::new(RwLock::new(Arc::from(Vec::new()))),
        }
    }

    /// Fetch every student, newest registration first, and replace the snapshot.
    ///
    /// A failed fetch is logged and leaves an empty snapshot behind.
    pub async fn reload(&self) -> Arc<[StudentRecord]> {
        let records: Arc<[StudentRecord]> = self.fetch().await.into();
        *self.snapshot.write().await = records.clone();
        records
    }

    pub async fn snapshot(&self) -> Arc<[StudentRecord]> {
        self.snapshot.read().await.clone()
    }

    async fn fetch(&self) -> Vec<StudentRecord> {
        let collection = Collection::Students;
        let documents = match self
            .store
            .fetch_all(collection, collection.default_order())
            .await
        {
            Ok(documents) => documents,
            Err(err) => {
                error!(
                    target = "application::students::reload",
                    error = %err,
                    "failed to fetch students"
                );
                return Vec::new();
            }
        };

        documents.iter().map(StudentRecord::from_document).collect()
    }

    /// Store a new registration with status `Pending`. Failures are logged, not raised.
    pub async fn register(&self, student: NewStudent) -> bool {
        match self
            .store
            .insert(Collection::Students, student.into_fields())
            .await
        {
            Ok(document) => {
                info!(
                    target = "application::students::register",
                    id = %document.id,
                    "student registered"
                );
                true
            }
            Err(err) => {
                error!(
                    target = "application::students::register",
                    error = %err,
                    "failed to register student"
                );
                false
            }
        }
    }
}

/// Choices offered by the event filter: known event names plus any event a
/// student registered for, deduplicated and sorted.
pub fn event_options(events: &[EventRecord], students: &[StudentRecord]) -> Vec<String> {
    events
        .iter()
        .map(|event| event.name.as_str())
        .chain(students.iter().map(|student| student.registered_for.as_str()))
        .filter(|name| !name.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::students::StudentStatus;
    use crate::infra::memory::MemoryDocuments;
    use serde_json::json;
    use uuid::Uuid;

    #[tokio::test]
    async fn register_then_reload_sees_pending_record() {
        let service = StudentService::new(Arc::new(MemoryDocuments::new()));
        assert!(service.snapshot().await.is_empty());

        let ok = service
            .register(NewStudent {
                name: "Ada".into(),
                email: Some("ada@example.com".into()),
                registration_id: "REG-1".into(),
                registered_for: "Hackathon".into(),
            })
            .await;
        assert!(ok);

        let records = service.reload().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, StudentStatus::Pending);
        assert!(records[0].registered_at.is_some());
        assert_eq!(service.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn foreign_shaped_documents_stay_in_the_snapshot() {
        let store = Arc::new(MemoryDocuments::new());
        store
            .seed(
                Collection::Students,
                json!({
                    "name": "Ada",
                    "status": "Approved",
                    "registeredAt": "2025-03-01 09:00:00",
                }),
            )
            .await;
        store
            .seed(
                Collection::Students,
                json!({
                    "name": "Grace",
                    "status": 1,
                    "registeredAt": "2025-03-02T09:00:00.000000Z",
                }),
            )
            .await;

        let service = StudentService::new(store);
        let records = service.reload().await;
        let shown: Vec<_> = records
            .iter()
            .map(|record| (record.name.as_str(), record.status))
            .collect();
        assert_eq!(
            shown,
            [("Grace", StudentStatus::Unknown), ("Ada", StudentStatus::Approved)]
        );
        assert_eq!(records[1].registered_at, None);
    }

    #[test]
    fn event_options_merge_and_dedupe() {
        let event = EventRecord {
            id: Uuid::new_v4(),
            name: "Workshop".into(),
            date: String::new(),
            time: String::new(),
            location: String::new(),
            created_at: None,
        };
        let student = StudentRecord {
            id: Uuid::new_v4(),
            name: "Ada".into(),
            registration_id: "REG-1".into(),
            registered_for: "Hackathon".into(),
            status: StudentStatus::Pending,
            status_label: Some("Pending".into()),
            registered_at: None,
            email: None,
        };
        let mut same = student.clone();
        same.registered_for = "Workshop".into();

        assert_eq!(
            event_options(&[event], &[student, same]),
            ["Hackathon", "Workshop"]
        );
    }
}
