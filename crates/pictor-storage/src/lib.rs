//! Pictor Storage Library
//!
//! Swift-backed image storage: the location URI codec and the storage
//! backend that moves image payloads through an `ObjectStore` capability.
//!
//! # Location URI format
//!
//! `<scheme>://[<user>:<key>@]<authority>/<container>/<object>` where the
//! scheme is one of `swift`, `swift+http`, `swift+https`. Credentials may be
//! percent-encoded ("quoted") or embedded literally ("unquoted"); the codec
//! in the `location` module converts between the two. Two authority layouts
//! exist for historical reasons and both parse losslessly; see the module
//! documentation.

pub mod location;
pub mod swift;
pub mod traits;

// Re-export commonly used types
pub use location::{Credentials, Location, Quoting, Scheme, UriError};
pub use swift::SwiftBackend;
pub use traits::{
    ByteStream, ObjectError, ObjectHeaders, ObjectStore, ObjectStoreConnector, StoreError,
    StoreResult,
};
