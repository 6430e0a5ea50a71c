//! Bearer token entities.

pub mod model;

pub use model::{CreateToken, Token};
