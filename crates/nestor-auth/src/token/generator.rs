//! Random bearer token strings.

use rand::Rng;

/// Length of every issued token, in characters.
pub const TOKEN_LENGTH: usize = 20;

/// Characters a token is drawn from.
pub const TOKEN_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%&()+=-_?";

/// Produces candidate token strings for the issuer.
pub trait TokenSource: Send + Sync + 'static {
    /// Returns a fresh candidate. Uniqueness is the issuer's job.
    fn generate(&self) -> String;
}

/// Draws [`TOKEN_LENGTH`] characters uniformly from [`TOKEN_ALPHABET`]
/// using the thread-local CSPRNG.
#[derive(Debug, Clone, Default)]
pub struct RandomTokenGenerator;

impl RandomTokenGenerator {
    /// Creates a new generator.
    pub fn new() -> Self {
        Self
    }
}

impl TokenSource for RandomTokenGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..TOKEN_LENGTH)
            .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
            .collect()
    }
}
