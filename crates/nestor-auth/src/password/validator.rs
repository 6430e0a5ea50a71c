//! Input limits for submitted passwords.

use nestor_core::config::AuthConfig;
use nestor_core::error::{AppError, ErrorKind};

/// Rejects passwords the hasher should never see.
///
/// There is deliberately no strength policy: any non-empty password within
/// the length limit is accepted.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Maximum password length in bytes.
    max_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            max_length: config.password_max_length,
        }
    }

    /// Validates a submitted password.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.is_empty() {
            return Err(AppError::incomplete_input());
        }

        if password.len() > self.max_length {
            return Err(AppError::new(
                ErrorKind::IncompleteInput,
                format!(
                    "Password must be at most {} characters long.",
                    self.max_length
                ),
            ));
        }

        Ok(())
    }
}
