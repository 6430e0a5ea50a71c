//! Bearer token generation and issuance.

pub mod generator;
pub mod issuer;

pub use generator::{RandomTokenGenerator, TOKEN_ALPHABET, TOKEN_LENGTH, TokenSource};
pub use issuer::TokenIssuer;
