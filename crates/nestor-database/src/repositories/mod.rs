//! PostgreSQL repository implementations of the store traits.

pub mod collection;
pub mod key;
pub mod token;
pub mod user;

pub use collection::CollectionRepository;
pub use key::KeyRepository;
pub use token::TokenRepository;
pub use user::UserRepository;
