//! Process-local record store.

pub mod store;

pub use store::MemoryStore;
