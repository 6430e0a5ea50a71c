//! # nestor-service
//!
//! Business logic service layer for Nestor. Each service orchestrates the
//! record stores and the auth components to implement one group of use
//! cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod collection;
pub mod context;
pub mod key;
pub mod session;

pub use collection::{CollectionService, CreateCollectionRequest};
pub use context::RequestContext;
pub use key::{CreateKeyRequest, KeyService};
pub use session::SessionService;

#[cfg(test)]
pub(crate) mod testing;
