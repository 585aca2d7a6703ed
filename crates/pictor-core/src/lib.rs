//! Pictor Core Library
//!
//! This crate provides the configuration surface, shared constants, and the
//! location cipher used across all Pictor components.

pub mod config;
pub mod constants;
pub mod crypto;

// Re-export commonly used types
pub use config::{Config, SwiftStoreConfig};
pub use crypto::{CryptError, LocationCipher};
