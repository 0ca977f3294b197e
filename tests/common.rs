//! tests/common.rs
//! Common constants and helpers shared across test files

use pbecrypt_rs::aliases::PasswordString;
use pbecrypt_rs::{CipherContext, Pbkdf2Builder};

/// Fast iteration count for tests that do not need file-format keys.
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ITERATIONS: u32 = 5;

/// Password used by the known-answer vectors.
#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "pw123";

#[allow(dead_code)]
pub const TEST_DATA: &[u8] = b"hello world";

/// Context with a cheap KDF. Its keys do not match the file format.
#[allow(dead_code)]
pub fn fast_context(password: &str) -> CipherContext {
    let password = PasswordString::new(password.to_string());
    CipherContext::with_params(&password, &Pbkdf2Builder::new().with_iterations(TEST_ITERATIONS))
        .unwrap()
}

/// Context with the real file-format parameters.
#[allow(dead_code)]
pub fn file_context(password: &str) -> CipherContext {
    CipherContext::new(&PasswordString::new(password.to_string())).unwrap()
}
