//! Object store capability traits.
//!
//! The actual network conversation with the Swift endpoint lives behind
//! these traits; the backend only ever sees containers, object names, and
//! byte streams. Implementations must report "not found" and "conflict"
//! distinguishably.

use crate::location::Credentials;
use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;
use thiserror::Error;

/// Errors reported by an [`ObjectStore`] implementation.
#[derive(Debug, Error)]
pub enum ObjectError {
    #[error("not found")]
    NotFound,

    #[error("already exists")]
    Conflict,

    #[error("{0}")]
    Other(String),
}

/// Response metadata from a get or head call. Only the fields the backend
/// inspects are surfaced.
#[derive(Debug, Clone, Default)]
pub struct ObjectHeaders {
    pub content_length: Option<u64>,
    pub etag: Option<String>,
}

/// A lazily-produced, finite, non-restartable byte sequence.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, ObjectError>> + Send>>;

/// A connected object-store session, keyed by container and object name.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch an object as a stream of chunks of at most `chunk_size` bytes.
    async fn get_object(
        &self,
        container: &str,
        object: &str,
        chunk_size: usize,
    ) -> Result<(ObjectHeaders, ByteStream), ObjectError>;

    /// Write an object, returning its etag.
    async fn put_object(
        &self,
        container: &str,
        object: &str,
        data: ByteStream,
    ) -> Result<String, ObjectError>;

    async fn delete_object(&self, container: &str, object: &str) -> Result<(), ObjectError>;

    async fn head_object(&self, container: &str, object: &str)
        -> Result<ObjectHeaders, ObjectError>;

    async fn head_container(&self, container: &str) -> Result<(), ObjectError>;

    async fn put_container(&self, container: &str) -> Result<(), ObjectError>;
}

/// The seam where an auth URL plus credentials become a connection.
#[async_trait]
pub trait ObjectStoreConnector: Send + Sync {
    type Store: ObjectStore;

    async fn connect(
        &self,
        auth_url: &str,
        credentials: Option<&Credentials>,
    ) -> Result<Self::Store, ObjectError>;
}

/// Storage backend errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no image found at location {0}")]
    NotFound(String),

    #[error("an image already exists at location {0}")]
    Duplicate(String),

    #[error("expected {expected} byte image, store has {actual} bytes")]
    SizeMismatch { expected: u64, actual: u64 },

    #[error(
        "container {0} does not exist; set SWIFT_STORE_CREATE_CONTAINER_ON_PUT \
         to add containers automatically"
    )]
    ContainerMissing(String),

    #[error("missing required configuration option {0}")]
    MissingConfig(&'static str),

    #[error("object store failure: {0}")]
    Backend(String),
}

/// Result type for storage backend operations
pub type StoreResult<T> = Result<T, StoreError>;
