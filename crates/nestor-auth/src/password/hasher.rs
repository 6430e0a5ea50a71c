//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use tracing::info;

use nestor_core::config::AuthConfig;
use nestor_core::error::AppError;

const SELF_CHECK_SAMPLE: &str = "nestor-self-check";

/// Handles password hashing and verification using Argon2id.
///
/// Plaintext passwords are only ever borrowed; nothing here retains them.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Creates a hasher with the cost parameters from `config`.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let params = Params::new(
            config.hash_memory_kib,
            config.hash_iterations,
            config.hash_parallelism,
            None,
        )
        .map_err(|e| AppError::configuration(format!("Invalid Argon2 parameters: {e}")))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::hashing(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored Argon2 hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not. The
    /// cost parameters embedded in `hash` are used, not the configured ones.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match self.argon2().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }

    /// Hashes and verifies a sample value. Run once at startup; a failure
    /// means the credential store cannot work and the server must not start.
    pub fn self_check(&self) -> Result<(), AppError> {
        let hash = self.hash_password(SELF_CHECK_SAMPLE)?;
        if !self.verify_password(SELF_CHECK_SAMPLE, &hash)? {
            return Err(AppError::hashing("Password hasher self-check mismatch"));
        }
        info!(
            memory_kib = self.params.m_cost(),
            iterations = self.params.t_cost(),
            parallelism = self.params.p_cost(),
            "Password hasher ready"
        );
        Ok(())
    }
}
