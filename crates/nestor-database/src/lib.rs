//! # nestor-database
//!
//! The persistence seam for Nestor. [`store`] defines the record store
//! traits the auth and service layers are written against; two
//! implementations are provided:
//!
//! - [`repositories`]: PostgreSQL via sqlx, uniqueness enforced by table
//!   constraints
//! - [`memory`]: a process-local store enforcing the same constraints under
//!   a single lock

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use store::{CollectionStore, KeyStore, Stores, TokenStore, UserStore};
