//! # Error Types
//!
//! Every fallible operation in the crate returns
//! [`Result<T, PbecryptError>`](PbecryptError). Nothing is retried; the caller
//! decides how to report.

use thiserror::Error;

/// The error type for all encryption and decryption operations.
#[derive(Error, Debug)]
pub enum PbecryptError {
    /// A precondition on the user's input was not met.
    ///
    /// Raised before any key is derived or any file is touched:
    /// - empty password
    /// - missing source file
    /// - source path is a directory
    /// - decryption target would overwrite the source
    ///
    /// The message is meant to be shown to the user as-is.
    #[error("{0}")]
    Validation(String),

    /// Key derivation or cipher construction failed.
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// The ciphertext could not be decrypted.
    ///
    /// Usually a wrong password, a corrupted file, or a file that was never
    /// produced by this tool. CBC without authentication can only detect this
    /// through a padding mismatch.
    #[error("Decryption failed: {0}")]
    Transform(String),

    /// I/O error while reading the source or writing the target.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PbecryptError {
    /// `true` for input problems the user can fix by changing the arguments.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, PbecryptError::Validation(_))
    }
}

impl From<&'static str> for PbecryptError {
    fn from(msg: &'static str) -> Self {
        PbecryptError::Crypto(msg.to_string())
    }
}
