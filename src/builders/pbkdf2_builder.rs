//! src/builders/pbkdf2_builder.rs
//! PBKDF2-HMAC-SHA1 parameters for the file key

use crate::aliases::{Aes256Key32, PasswordString, Salt32};
use crate::consts::{PBKDF2_ITERATIONS, SALT};
use crate::error::PbecryptError;
use crate::kdf::derive_pbkdf2_key;

/// PBKDF2-HMAC-SHA1 key derivation builder
///
/// Defaults are the compiled-in salt and [`PBKDF2_ITERATIONS`] (10,000). Only the
/// defaults produce keys compatible with files written by the `pbecrypt` binary;
/// the setters exist for tests and benchmarks.
///
/// # Thread Safety
///
/// This type is `Send + Sync`. Derivation is pure.
pub struct Pbkdf2Builder {
    iterations: u32,
    salt: Salt32,
}

impl Pbkdf2Builder {
    /// Create builder with the file-format defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
            salt: Salt32::new(SALT),
        }
    }

    /// Set custom iteration count (minimum 1)
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    /// Set custom salt
    #[must_use]
    pub fn with_salt(mut self, salt: impl Into<[u8; 32]>) -> Self {
        self.salt = Salt32::new(salt.into());
        self
    }

    /// Current salt as raw 32-byte array
    #[must_use]
    pub fn salt(&self) -> &[u8; 32] {
        self.salt.expose_secret()
    }

    /// Current iteration count
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// `true` when both parameters match the file format
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.iterations == PBKDF2_ITERATIONS && self.salt.expose_secret() == &SALT
    }

    /// Derive key directly into caller-provided secure buffer
    pub fn derive_secure(
        &self,
        password: &PasswordString,
        out_key: &mut Aes256Key32,
    ) -> Result<(), PbecryptError> {
        derive_pbkdf2_key(password, &self.salt, self.iterations, out_key)
    }

    /// Convenience: derive and return a fresh secure key
    pub fn derive_secure_new(&self, password: &PasswordString) -> Result<Aes256Key32, PbecryptError> {
        let mut key = Aes256Key32::new([0u8; 32]);
        self.derive_secure(password, &mut key)?;
        Ok(key)
    }
}

impl Default for Pbkdf2Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Pbkdf2Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pbkdf2Builder")
            .field("iterations", &self.iterations)
            .field("default_salt", &(self.salt.expose_secret() == &SALT))
            .finish()
    }
}
