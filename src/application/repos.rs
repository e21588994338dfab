//! Document store trait implemented by the persistence adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::documents::{Collection, Document, Fields, OrderBy};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },
    #[error("resource not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("integrity error: {message}")]
    Integrity { message: String },
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every document of `collection` that carries `order.field`, sorted by it.
    async fn fetch_all(
        &self,
        collection: Collection,
        order: OrderBy,
    ) -> Result<Vec<Document>, RepoError>;

    /// Store `fields` under a new id, stamping the collection's timestamp field.
    async fn insert(&self, collection: Collection, fields: Fields) -> Result<Document, RepoError>;

    async fn health_check(&self) -> Result<(), RepoError> {
        Ok(())
    }
}
