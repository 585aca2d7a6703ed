//! Configuration module
//!
//! Settings are read from the environment (with `.env` support via dotenvy).
//! `SwiftStoreConfig` is the surface consumed by the storage backend;
//! `Config` adds the database and encryption-key settings the CLI needs.

use std::env;

use crate::constants::{DEFAULT_SWIFT_ACCOUNT, DEFAULT_SWIFT_CONTAINER};

const MAX_CONNECTIONS: u32 = 5;

/// Connection and write-policy settings for the Swift object store.
#[derive(Clone, Debug)]
pub struct SwiftStoreConfig {
    pub account: String,
    pub container: String,
    pub auth_address: Option<String>,
    pub user: Option<String>,
    pub key: Option<String>,
    pub create_container_on_put: bool,
}

impl Default for SwiftStoreConfig {
    fn default() -> Self {
        SwiftStoreConfig {
            account: DEFAULT_SWIFT_ACCOUNT.to_string(),
            container: DEFAULT_SWIFT_CONTAINER.to_string(),
            auth_address: None,
            user: None,
            key: None,
            create_container_on_put: false,
        }
    }
}

impl SwiftStoreConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        SwiftStoreConfig {
            account: env::var("SWIFT_STORE_ACCOUNT")
                .unwrap_or_else(|_| DEFAULT_SWIFT_ACCOUNT.to_string()),
            container: env::var("SWIFT_STORE_CONTAINER")
                .unwrap_or_else(|_| DEFAULT_SWIFT_CONTAINER.to_string()),
            auth_address: env::var("SWIFT_STORE_AUTH_ADDRESS")
                .ok()
                .filter(|s| !s.is_empty()),
            user: env::var("SWIFT_STORE_USER").ok().filter(|s| !s.is_empty()),
            key: env::var("SWIFT_STORE_KEY").ok().filter(|s| !s.is_empty()),
            create_container_on_put: env::var("SWIFT_STORE_CREATE_CONTAINER_ON_PUT")
                .unwrap_or_else(|_| "false".to_string())
                .to_lowercase()
                .parse()
                .unwrap_or(false),
        }
    }
}

/// Application configuration for the CLI and migration tooling.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Base64-encoded 32-byte key for encrypting persisted locations.
    /// When absent, the credential migration is a declared no-op.
    pub metadata_encryption_key: Option<String>,
    pub db_max_connections: u32,
    pub swift: SwiftStoreConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        Ok(Config {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            metadata_encryption_key: env::var("METADATA_ENCRYPTION_KEY")
                .ok()
                .filter(|s| !s.is_empty()),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(MAX_CONNECTIONS),
            swift: SwiftStoreConfig::from_env(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swift_store_defaults() {
        let config = SwiftStoreConfig::default();
        assert_eq!(config.account, "pictor");
        assert_eq!(config.container, "pictor");
        assert!(config.auth_address.is_none());
        assert!(!config.create_container_on_put);
    }
}
