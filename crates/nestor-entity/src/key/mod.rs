//! Key domain entities.

pub mod model;

pub use model::{CreateKey, Key};
