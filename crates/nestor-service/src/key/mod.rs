//! Key creation and listing.

pub mod service;

pub use service::{CreateKeyRequest, KeyService};
