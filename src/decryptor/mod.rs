// src/decryptor/mod.rs

//! Decryption facade.
//!
//! Core API: `decrypt(input, output, &context)?`. Nothing is written to `output`
//! unless the whole ciphertext decrypts cleanly.

pub(crate) mod decrypt;

pub use decrypt::decrypt;
