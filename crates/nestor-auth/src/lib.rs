//! # nestor-auth
//!
//! Authentication core for Nestor.
//!
//! ## Modules
//!
//! - `password`: Argon2id credential hashing and input limits
//! - `token`: random bearer token generation and collision-free issuance
//! - `identity`: user registration and credential authentication
//! - `gate`: bearer token resolution for every authenticated operation

pub mod gate;
pub mod identity;
pub mod password;
pub mod token;

pub use gate::AuthorizationGate;
pub use identity::IdentityRegistry;
pub use password::{PasswordHasher, PasswordValidator};
pub use token::{RandomTokenGenerator, TokenIssuer, TokenSource};
