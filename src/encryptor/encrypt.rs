//! src/encryptor/encrypt.rs
//! Whole-buffer AES-256-CBC encryption over `Read`/`Write`

use crate::cipher::CipherContext;
use crate::encryptor::write::write_octets;
use crate::error::PbecryptError;
use std::io::{Read, Write};
use tracing::trace;

/// Encrypt everything `input` yields and write the ciphertext to `output`.
///
/// The input is buffered in full before the cipher runs; the output is raw
/// ciphertext with no header or trailer. Returns the number of bytes written.
pub fn encrypt<R, W>(
    mut input: R,
    mut output: W,
    context: &CipherContext,
) -> Result<usize, PbecryptError>
where
    R: Read,
    W: Write,
{
    let mut plaintext = Vec::new();
    input.read_to_end(&mut plaintext)?;

    let ciphertext = context.encrypt(&plaintext);
    trace!(plaintext = plaintext.len(), ciphertext = ciphertext.len(), "encrypted buffer");

    write_octets(&mut output, &ciphertext)?;
    output.flush()?;
    Ok(ciphertext.len())
}
