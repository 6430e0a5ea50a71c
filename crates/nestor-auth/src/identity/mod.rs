//! User registration and credential authentication.

pub mod registry;

pub use registry::IdentityRegistry;
