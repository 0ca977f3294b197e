//! src/encryptor/write.rs

use crate::error::PbecryptError;
use std::io::Write;

#[inline]
pub fn write_octets<W: Write>(writer: &mut W, data: &[u8]) -> Result<(), PbecryptError> {
    writer.write_all(data).map_err(PbecryptError::Io)
}
