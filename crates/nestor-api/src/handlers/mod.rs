//! Request handlers, one module per resource.

pub mod collections;
pub mod health;
pub mod keys;
pub mod tokens;
pub mod users;
