//! Record store capability for the credential migration.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// A persisted image row as the migration sees it: the id and the encrypted
/// location value. Rows are updated in place, never deleted.
#[derive(Debug, Clone)]
pub struct MigrationRecord {
    pub id: Uuid,
    pub location: Option<String>,
}

/// Errors from the record store.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record store error: {0}")]
    Backend(String),
}

/// Capability over the persisted image rows.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// List every record. The migration calls this exactly once, before any
    /// update is issued.
    async fn list_all(&self) -> Result<Vec<MigrationRecord>, RecordError>;

    /// Replace the stored location for `id`.
    async fn update(&self, id: Uuid, location: String) -> Result<(), RecordError>;
}
