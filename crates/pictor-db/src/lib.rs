//! Pictor DB Library
//!
//! Postgres-backed repositories. Currently this is the image-location
//! repository the credential migration walks.

pub mod images;

pub use images::ImageLocationRepository;
