//! Collection creation and listing.

pub mod service;

pub use service::{CollectionService, CreateCollectionRequest};
