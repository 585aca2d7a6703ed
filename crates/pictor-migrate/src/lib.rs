//! Credential quoting migration for persisted image locations.
//!
//! Every persisted location is an encrypted URI that may carry embedded
//! credentials. This crate rewrites all of them from one credential-encoding
//! convention to the other: decrypt, re-encode via the location codec,
//! re-encrypt, write back. Records that fail to decrypt are assumed to be
//! unrelated data and are skipped; records that decrypt but do not parse
//! indicate a logic bug and abort the whole run.

pub mod migrate;
pub mod records;

// Re-export commonly used types
pub use migrate::{migrate, Direction, MigrationError, MigrationReport};
pub use records::{MigrationRecord, RecordError, RecordStore};
