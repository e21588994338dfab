//! In-process document store used when no database is configured, and by tests.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::repos::{DocumentStore, RepoError};
use crate::domain::documents::{
    Collection, Document, Fields, OrderBy, SortDirection, server_timestamp,
};

/// Documents per collection, kept in insertion order.
#[derive(Default)]
pub struct MemoryDocuments {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl MemoryDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` as-is, without stamping a timestamp.
    ///
    /// Non-object values are stored as empty documents.
    pub async fn seed(&self, collection: Collection, value: Value) -> Document {
        let fields = match value {
            Value::Object(fields) => fields,
            _ => Fields::new(),
        };
        let document = Document::new(Uuid::new_v4(), fields);
        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(document.clone());
        document
    }
}

#[async_trait]
impl DocumentStore for MemoryDocuments {
    async fn fetch_all(
        &self,
        collection: Collection,
        order: OrderBy,
    ) -> Result<Vec<Document>, RepoError> {
        let guard = self.collections.read().await;
        let mut documents: Vec<Document> = guard
            .get(&collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| document.fields.contains_key(order.field))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        drop(guard);

        documents.sort_by(|a, b| {
            let ordering = compare_values(&a.fields[order.field], &b.fields[order.field]);
            match order.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        Ok(documents)
    }

    async fn insert(
        &self,
        collection: Collection,
        mut fields: Fields,
    ) -> Result<Document, RepoError> {
        fields.insert(
            collection.timestamp_field().to_string(),
            Value::String(server_timestamp(OffsetDateTime::now_utc())),
        );
        let document = Document::new(Uuid::new_v4(), fields);

        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(document.clone());

        Ok(document)
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Values of different JSON types order by type; strings compare bytewise.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or_default();
            let b = b.as_f64().unwrap_or_default();
            a.total_cmp(&b)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(documents: &[Document]) -> Vec<&str> {
        documents
            .iter()
            .map(|document| document.fields["name"].as_str().unwrap_or_default())
            .collect()
    }

    #[tokio::test]
    async fn insert_stamps_the_collection_timestamp() {
        let store = MemoryDocuments::new();
        let Value::Object(fields) = json!({ "name": "Ada" }) else {
            unreachable!()
        };

        let document = store
            .insert(Collection::Students, fields)
            .await
            .expect("insert succeeds");

        let stamp = document.fields["registeredAt"].as_str().expect("stamped");
        assert_eq!(stamp.len(), "2025-09-25T12:30:05.500000Z".len());
        assert!(stamp.ends_with('Z'));
        assert!(!document.fields.contains_key("createdAt"));
    }

    #[tokio::test]
    async fn fetch_orders_by_field_and_direction() {
        let store = MemoryDocuments::new();
        for (name, date) in [("b", "2025-02-01"), ("c", "2025-03-01"), ("a", "2025-01-01")] {
            store
                .seed(Collection::Events, json!({ "name": name, "eventDate": date }))
                .await;
        }

        let descending = store
            .fetch_all(Collection::Events, OrderBy::descending("eventDate"))
            .await
            .unwrap();
        assert_eq!(names(&descending), ["c", "b", "a"]);

        let ascending = store
            .fetch_all(Collection::Events, OrderBy::ascending("eventDate"))
            .await
            .unwrap();
        assert_eq!(names(&ascending), ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn documents_without_the_order_field_are_excluded() {
        let store = MemoryDocuments::new();
        store
            .seed(Collection::Students, json!({ "name": "stamped", "registeredAt": "x" }))
            .await;
        store
            .seed(Collection::Students, json!({ "name": "legacy" }))
            .await;

        let documents = store
            .fetch_all(Collection::Students, OrderBy::descending("registeredAt"))
            .await
            .unwrap();
        assert_eq!(names(&documents), ["stamped"]);
    }

    #[tokio::test]
    async fn collections_are_isolated() {
        let store = MemoryDocuments::new();
        store
            .seed(Collection::Events, json!({ "name": "e", "eventDate": "2025-01-01" }))
            .await;

        let students = store
            .fetch_all(Collection::Students, OrderBy::descending("eventDate"))
            .await
            .unwrap();
        assert!(students.is_empty());
    }

    #[test]
    fn mixed_types_order_by_type() {
        assert_eq!(compare_values(&json!(1), &json!("1")), Ordering::Less);
        assert_eq!(compare_values(&json!(2), &json!(10)), Ordering::Less);
        assert_eq!(compare_values(&json!(null), &json!(false)), Ordering::Less);
    }
}
