//! src/cipher.rs
//! AES-256-CBC handles bound to the derived key and the fixed IV

use crate::aliases::PasswordString;
use crate::builders::Pbkdf2Builder;
use crate::consts::{BLOCK_SIZE, IV};
use crate::error::PbecryptError;
use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use tracing::debug;

/// Encrypting handle: AES-256-CBC with the fixed IV.
pub type EncryptHandle = cbc::Encryptor<Aes256>;
/// Decrypting handle: AES-256-CBC with the fixed IV.
pub type DecryptHandle = cbc::Decryptor<Aes256>;

/// Both cipher handles for one run, built from a single key derivation.
///
/// The key is derived once in [`CipherContext::new`] and both handles are
/// constructed immediately, so a context that exists is always usable. The
/// key itself is dropped (and zeroized) as soon as the handles hold their own
/// expanded copies.
///
/// Every transform works on a clone of the stored handle, so each call starts
/// from the fixed IV. A context can be shared between threads.
#[derive(Clone)]
pub struct CipherContext {
    encryptor: EncryptHandle,
    decryptor: DecryptHandle,
}

impl CipherContext {
    /// Derive the key with the file-format defaults and build both handles.
    pub fn new(password: &PasswordString) -> Result<Self, PbecryptError> {
        Self::with_params(password, &Pbkdf2Builder::default())
    }

    /// Same as [`CipherContext::new`] with explicit KDF parameters.
    pub fn with_params(
        password: &PasswordString,
        params: &Pbkdf2Builder,
    ) -> Result<Self, PbecryptError> {
        debug!(
            iterations = params.iterations(),
            default_params = params.is_default(),
            "deriving key"
        );
        let key = params.derive_secure_new(password)?;
        let encryptor = EncryptHandle::new_from_slices(key.expose_secret(), &IV)
            .map_err(|e| PbecryptError::Crypto(format!("encrypt cipher init failed: {e}")))?;
        let decryptor = DecryptHandle::new_from_slices(key.expose_secret(), &IV)
            .map_err(|e| PbecryptError::Crypto(format!("decrypt cipher init failed: {e}")))?;

        debug!("cipher handles ready");
        Ok(Self {
            encryptor,
            decryptor,
        })
    }

    /// Fresh encrypting handle positioned at the fixed IV.
    #[must_use]
    pub fn encrypt_handle(&self) -> EncryptHandle {
        self.encryptor.clone()
    }

    /// Fresh decrypting handle positioned at the fixed IV.
    #[must_use]
    pub fn decrypt_handle(&self) -> DecryptHandle {
        self.decryptor.clone()
    }

    /// Encrypt a whole buffer with PKCS#7 padding.
    ///
    /// Output length is the input length rounded up to the next block,
    /// plus a full block when the input is already aligned.
    #[must_use]
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        self.encrypt_handle()
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext)
    }

    /// Decrypt a whole buffer and strip PKCS#7 padding.
    ///
    /// An empty buffer decrypts to an empty plaintext.
    ///
    /// # Errors
    /// [`PbecryptError::Transform`] if the length is not a multiple of the block
    /// size or the padding does not check out.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, PbecryptError> {
        if ciphertext.is_empty() {
            return Ok(Vec::new());
        }
        if ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(PbecryptError::Transform(format!(
                "ciphertext length {} is not a multiple of {BLOCK_SIZE}",
                ciphertext.len()
            )));
        }

        self.decrypt_handle()
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| {
                PbecryptError::Transform("bad padding (wrong password or corrupted file)".into())
            })
    }
}

impl std::fmt::Debug for CipherContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherContext").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_context(password: &str) -> CipherContext {
        let password = PasswordString::new(password.to_string());
        CipherContext::with_params(&password, &Pbkdf2Builder::new().with_iterations(1)).unwrap()
    }

    #[test]
    fn handles_restart_from_fixed_iv() {
        let ctx = fast_context("pw");
        assert_eq!(ctx.encrypt(b"same bytes"), ctx.encrypt(b"same bytes"));
    }

    #[test]
    fn padding_adds_full_block_when_aligned() {
        let ctx = fast_context("pw");
        assert_eq!(ctx.encrypt(&[]).len(), 16);
        assert_eq!(ctx.encrypt(&[0u8; 15]).len(), 16);
        assert_eq!(ctx.encrypt(&[0u8; 16]).len(), 32);
    }

    #[test]
    fn decrypt_rejects_unaligned_input() {
        let ctx = fast_context("pw");
        let err = ctx.decrypt(&[0u8; 17]).unwrap_err();
        assert!(matches!(err, PbecryptError::Transform(_)));
        let err = ctx.decrypt(&[0u8; 8]).unwrap_err();
        assert!(matches!(err, PbecryptError::Transform(_)));
    }

    #[test]
    fn empty_ciphertext_decrypts_to_nothing() {
        let ctx = fast_context("pw");
        assert!(ctx.decrypt(&[]).unwrap().is_empty());
    }
}
