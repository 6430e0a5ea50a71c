//! Credential hashing configuration.

use serde::{Deserialize, Serialize};

/// Argon2id cost parameters and password limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub hash_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_iterations")]
    pub hash_iterations: u32,
    /// Argon2 degree of parallelism.
    #[serde(default = "default_parallelism")]
    pub hash_parallelism: u32,
    /// Longest accepted password, in bytes.
    #[serde(default = "default_password_max")]
    pub password_max_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            hash_memory_kib: default_memory_kib(),
            hash_iterations: default_iterations(),
            hash_parallelism: default_parallelism(),
            password_max_length: default_password_max(),
        }
    }
}

fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}

fn default_password_max() -> usize {
    1024
}
