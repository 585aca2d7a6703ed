//! Image location repository: the sqlx-backed record store the credential
//! migration walks.

use async_trait::async_trait;
use pictor_migrate::{MigrationRecord, RecordError, RecordStore};
use sqlx::PgPool;
use uuid::Uuid;

/// Row type for the images table (for FromRow).
#[derive(Debug, sqlx::FromRow)]
struct ImageLocationRow {
    id: Uuid,
    location: Option<String>,
}

/// Repository over the images table, exposing only the id/location columns
/// the migration needs.
#[derive(Clone)]
pub struct ImageLocationRepository {
    pool: PgPool,
}

impl ImageLocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for ImageLocationRepository {
    #[tracing::instrument(skip(self), fields(db.table = "images"))]
    async fn list_all(&self) -> Result<Vec<MigrationRecord>, RecordError> {
        let rows: Vec<ImageLocationRow> =
            sqlx::query_as("SELECT id, location FROM images ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RecordError::Backend(e.to_string()))?;
        Ok(rows
            .into_iter()
            .map(|row| MigrationRecord {
                id: row.id,
                location: row.location,
            })
            .collect())
    }

    #[tracing::instrument(skip(self, location), fields(db.table = "images", db.record_id = %id))]
    async fn update(&self, id: Uuid, location: String) -> Result<(), RecordError> {
        sqlx::query("UPDATE images SET location = $1 WHERE id = $2")
            .bind(&location)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RecordError::Backend(e.to_string()))?;
        Ok(())
    }
}
