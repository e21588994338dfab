//! Postgres-backed document store. Each document is one JSONB row tagged with
//! its collection name.

mod util;

pub use util::map_sqlx_error;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{
    Postgres, QueryBuilder,
    postgres::{PgPool, PgPoolOptions},
    query,
    types::Json,
};
use uuid::Uuid;

use crate::application::repos::{DocumentStore, RepoError};
use crate::domain::documents::{Collection, Document, Fields, OrderBy};

/// `to_char` pattern matching `server_timestamp`.
const SERVER_TIMESTAMP_SQL: &str =
    r#"to_char(now() AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS.US"Z"')"#;

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    data: Json<Fields>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Document::new(row.id, row.data.0)
    }
}

#[derive(Clone)]
pub struct PostgresDocuments {
    pool: Arc<PgPool>,
}

impl PostgresDocuments {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn connect(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
    }

    pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(Into::into)
    }
}

#[async_trait]
impl DocumentStore for PostgresDocuments {
    async fn fetch_all(
        &self,
        collection: Collection,
        order: OrderBy,
    ) -> Result<Vec<Document>, RepoError> {
        let mut qb =
            QueryBuilder::<Postgres>::new("SELECT id, data FROM documents WHERE collection = ");
        qb.push_bind(collection.as_str());
        qb.push(" AND data ? ");
        qb.push_bind(order.field);
        qb.push(" ORDER BY data ->> ");
        qb.push_bind(order.field);
        qb.push(" COLLATE \"C\" ");
        qb.push(order.direction.as_sql());
        qb.push(", created_at, id");

        let rows: Vec<DocumentRow> = qb
            .build_query_as()
            .fetch_all(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn insert(&self, collection: Collection, fields: Fields) -> Result<Document, RepoError> {
        let mut qb =
            QueryBuilder::<Postgres>::new("INSERT INTO documents (id, collection, data) VALUES (");
        qb.push_bind(Uuid::new_v4());
        qb.push(", ");
        qb.push_bind(collection.as_str());
        qb.push(", ");
        qb.push_bind(Json(fields));
        qb.push("::jsonb || jsonb_build_object(");
        qb.push_bind(collection.timestamp_field());
        qb.push("::text, ");
        qb.push(SERVER_TIMESTAMP_SQL);
        qb.push(")) RETURNING id, data");

        let row: DocumentRow = qb
            .build_query_as()
            .fetch_one(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn health_check(&self) -> Result<(), RepoError> {
        query("SELECT 1")
            .execute(self.pool())
            .await
            .map(|_| ())
            .map_err(map_sqlx_error)
    }
}
