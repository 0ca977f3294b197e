// src/encryptor/mod.rs

//! Encryption facade.
//!
//! Core API: `encrypt(input, output, &context)?` for whole-stream encryption.
//! Utility: `write_octets(writer, bytes)?` for raw writes.

pub(crate) mod encrypt;
pub(crate) mod write;

pub use encrypt::encrypt;
pub use write::write_octets;
