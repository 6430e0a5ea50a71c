//! Unified application error types for Nestor.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Domain failures (bad input, duplicate
//! names, unknown tokens, ownership violations) and infrastructure failures
//! (database, hashing, configuration) share the type but never the kind.

use std::fmt;
use thiserror::Error;

/// Error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A required input field was empty or missing.
    IncompleteInput,
    /// A user with the requested username already exists.
    DuplicateUsername,
    /// The caller already owns a collection with the requested name.
    DuplicateCollectionName,
    /// The caller already owns a key with the requested name.
    DuplicateKeyName,
    /// No user has the supplied username.
    UserNotFound,
    /// The password did not match the stored credential.
    InvalidCredentials,
    /// The request carried no bearer token.
    MissingToken,
    /// The bearer token does not match any issued token.
    TokenNotFound,
    /// The referenced collection does not exist.
    CollectionNotFound,
    /// The referenced resource belongs to another user.
    Forbidden,
    /// A store-level uniqueness constraint rejected a write.
    Conflict,
    /// A database error occurred.
    Database,
    /// Password hashing failed. Treated as fatal.
    Hashing,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl ErrorKind {
    /// Whether this kind is a recoverable domain failure that should be
    /// reported to the caller verbatim.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::IncompleteInput
                | Self::DuplicateUsername
                | Self::DuplicateCollectionName
                | Self::DuplicateKeyName
                | Self::UserNotFound
                | Self::InvalidCredentials
                | Self::MissingToken
                | Self::TokenNotFound
                | Self::CollectionNotFound
                | Self::Forbidden
        )
    }

    /// Whether this kind means the process can no longer serve safely.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Hashing)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteInput => write!(f, "INCOMPLETE_INPUT"),
            Self::DuplicateUsername => write!(f, "DUPLICATE_USERNAME"),
            Self::DuplicateCollectionName => write!(f, "DUPLICATE_COLLECTION_NAME"),
            Self::DuplicateKeyName => write!(f, "DUPLICATE_KEY_NAME"),
            Self::UserNotFound => write!(f, "USER_NOT_FOUND"),
            Self::InvalidCredentials => write!(f, "INVALID_CREDENTIALS"),
            Self::MissingToken => write!(f, "MISSING_TOKEN"),
            Self::TokenNotFound => write!(f, "TOKEN_NOT_FOUND"),
            Self::CollectionNotFound => write!(f, "COLLECTION_NOT_FOUND"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Database => write!(f, "DATABASE"),
            Self::Hashing => write!(f, "HASHING"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout Nestor.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// A required field was empty.
    pub fn incomplete_input() -> Self {
        Self::new(ErrorKind::IncompleteInput, "Incomplete form submission.")
    }

    /// The username is taken.
    pub fn duplicate_username(username: &str) -> Self {
        Self::new(
            ErrorKind::DuplicateUsername,
            format!("The username '{username}' is already in use."),
        )
    }

    /// The caller already owns a collection with this name.
    pub fn duplicate_collection_name(name: &str) -> Self {
        Self::new(
            ErrorKind::DuplicateCollectionName,
            format!("A collection named '{name}' already exists."),
        )
    }

    /// The caller already owns a key with this name.
    pub fn duplicate_key_name(name: &str) -> Self {
        Self::new(
            ErrorKind::DuplicateKeyName,
            format!("A key named '{name}' already exists."),
        )
    }

    /// No such user.
    pub fn user_not_found() -> Self {
        Self::new(ErrorKind::UserNotFound, "User not found.")
    }

    /// Password mismatch.
    pub fn invalid_credentials() -> Self {
        Self::new(
            ErrorKind::InvalidCredentials,
            "Incorrect username/password combination.",
        )
    }

    /// No bearer token supplied.
    pub fn missing_token() -> Self {
        Self::new(ErrorKind::MissingToken, "Failed to authenticate with a token.")
    }

    /// Bearer token not issued.
    pub fn token_not_found() -> Self {
        Self::new(ErrorKind::TokenNotFound, "Token not found.")
    }

    /// No such collection.
    pub fn collection_not_found() -> Self {
        Self::new(ErrorKind::CollectionNotFound, "Collection not found.")
    }

    /// The collection belongs to someone else.
    pub fn forbidden() -> Self {
        Self::new(
            ErrorKind::Forbidden,
            "You aren't authorized to access this collection.",
        )
    }

    /// Create a store-level conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a hashing error.
    pub fn hashing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Hashing, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_kinds_are_not_fatal() {
        let err = AppError::duplicate_username("alice");
        assert!(err.kind.is_domain());
        assert!(!err.kind.is_fatal());
        assert_eq!(err.message, "The username 'alice' is already in use.");
    }

    #[test]
    fn test_infrastructure_kinds() {
        assert!(!ErrorKind::Database.is_domain());
        assert!(!ErrorKind::Conflict.is_domain());
        assert!(ErrorKind::Hashing.is_fatal());
    }

    #[test]
    fn test_display_includes_code() {
        let err = AppError::token_not_found();
        assert_eq!(err.to_string(), "TOKEN_NOT_FOUND: Token not found.");
    }

    #[test]
    fn test_clone_drops_source() {
        let io = std::io::Error::other("disk");
        let err = AppError::with_source(ErrorKind::Database, "boom", io);
        assert!(err.source.is_some());
        let cloned = err.clone();
        assert!(cloned.source.is_none());
        assert_eq!(cloned.kind, ErrorKind::Database);
    }
}
