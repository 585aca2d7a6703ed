//! Shared constants.

/// Account used when `SWIFT_STORE_ACCOUNT` is not configured.
pub const DEFAULT_SWIFT_ACCOUNT: &str = "pictor";

/// Container used when `SWIFT_STORE_CONTAINER` is not configured.
pub const DEFAULT_SWIFT_CONTAINER: &str = "pictor";
