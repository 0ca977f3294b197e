//! src/decryptor/decrypt.rs
//! Whole-buffer AES-256-CBC decryption over `Read`/`Write`

use crate::cipher::CipherContext;
use crate::encryptor::write_octets;
use crate::error::PbecryptError;
use std::io::{Read, Write};
use tracing::trace;

/// Decrypt everything `input` yields and write the plaintext to `output`.
///
/// The plaintext is collected in an intermediate buffer first, so a padding
/// failure leaves `output` untouched. Returns the number of bytes written.
pub fn decrypt<R, W>(
    mut input: R,
    mut output: W,
    context: &CipherContext,
) -> Result<usize, PbecryptError>
where
    R: Read,
    W: Write,
{
    let mut ciphertext = Vec::new();
    input.read_to_end(&mut ciphertext)?;

    let plaintext = context.decrypt(&ciphertext)?;
    trace!(ciphertext = ciphertext.len(), plaintext = plaintext.len(), "decrypted buffer");

    write_octets(&mut output, &plaintext)?;
    output.flush()?;
    Ok(plaintext.len())
}
