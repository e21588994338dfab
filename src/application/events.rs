use std::sync::Arc;

use tracing::{error, info};

use crate::application::repos::DocumentStore;
use crate::domain::documents::Collection;
use crate::domain::events::{EventRecord, NewEvent};

#[derive(Clone)]
pub struct EventService {
    store: Arc<dyn DocumentStore>,
}

impl EventService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All events, latest date first. Fetch failures are logged and yield no rows.
    pub async fn fetch_all(&self) -> Vec<EventRecord> {
        let collection = Collection::Events;
        let documents = match self
            .store
            .fetch_all(collection, collection.default_order())
            .await
        {
            Ok(documents) => documents,
            Err(err) => {
                error!(
                    target = "application::events::fetch_all",
                    error = %err,
                    "failed to fetch events"
                );
                return Vec::new();
            }
        };

        documents.iter().map(EventRecord::from_document).collect()
    }

    pub async fn create(&self, event: NewEvent) -> bool {
        match self
            .store
            .insert(Collection::Events, event.into_fields())
            .await
        {
            Ok(document) => {
                info!(
                    target = "application::events::create",
                    id = %document.id,
                    "event created"
                );
                true
            }
            Err(err) => {
                error!(
                    target = "application::events::create",
                    error = %err,
                    "failed to create event"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::repos::RepoError;
    use crate::domain::documents::{Document, Fields, OrderBy};
    use crate::infra::memory::MemoryDocuments;
    use async_trait::async_trait;

    struct FailingStore;

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn fetch_all(
            &self,
            _collection: Collection,
            _order: OrderBy,
        ) -> Result<Vec<Document>, RepoError> {
            Err(RepoError::Timeout)
        }

        async fn insert(
            &self,
            _collection: Collection,
            _fields: Fields,
        ) -> Result<Document, RepoError> {
            Err(RepoError::from_persistence("write refused"))
        }
    }

    #[tokio::test]
    async fn failures_become_false_and_empty() {
        let service = EventService::new(Arc::new(FailingStore));
        assert!(service.fetch_all().await.is_empty());
        assert!(!service.create(NewEvent::default()).await);
    }

    #[tokio::test]
    async fn events_are_listed_latest_date_first() {
        let service = EventService::new(Arc::new(MemoryDocuments::new()));
        for (name, date) in [("Early", "2025-01-10"), ("Late", "2025-09-25")] {
            assert!(
                service
                    .create(NewEvent {
                        name: name.into(),
                        date: date.into(),
                        time: "10:00".into(),
                        location: "Hall".into(),
                    })
                    .await
            );
        }

        let events = service.fetch_all().await;
        let names: Vec<_> = events.iter().map(|event| event.name.as_str()).collect();
        assert_eq!(names, ["Late", "Early"]);
        assert!(events.iter().all(|event| event.created_at.is_some()));
    }
}
