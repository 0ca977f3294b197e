//! src/kdf/pbkdf2.rs

use crate::aliases::{Aes256Key32, HmacSha1, PasswordString, Salt32};
use crate::consts::{PBKDF2_ITERATIONS, SALT};
use crate::error::PbecryptError;

use pbkdf2::pbkdf2;

/// Derive PBKDF2-HMAC-SHA1 directly into an [`Aes256Key32`] buffer.
///
/// The password is fed as raw UTF-8. An empty password is accepted here;
/// rejecting it is the caller's job.
///
/// # Errors
/// [`PbecryptError::Crypto`] if `iterations` is zero or the primitive fails.
#[inline]
pub fn derive_pbkdf2_key(
    password: &PasswordString,
    salt: &Salt32,
    iterations: u32,
    out_key: &mut Aes256Key32,
) -> Result<(), PbecryptError> {
    if iterations == 0 {
        return Err("PBKDF2 iterations must be ≥1".into());
    }

    pbkdf2::<HmacSha1>(
        password.expose_secret().as_bytes(),
        salt.expose_secret(),
        iterations,
        out_key.expose_secret_mut(),
    )
    .map_err(|e| PbecryptError::Crypto(format!("PBKDF2 failed: {e}")))?;

    Ok(())
}

/// Derive the file key with the compiled-in salt and iteration count.
///
/// Deterministic across processes: the same password always gives the same key.
pub fn derive_key(password: &PasswordString) -> Result<Aes256Key32, PbecryptError> {
    let salt = Salt32::new(SALT);
    let mut key = Aes256Key32::new([0u8; 32]);
    derive_pbkdf2_key(password, &salt, PBKDF2_ITERATIONS, &mut key)?;
    Ok(key)
}
