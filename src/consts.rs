//! # Constants
//!
//! Compiled-in parameters of the file format. Salt and IV are fixed for every
//! invocation and every user: the same password always yields the same key, and
//! the same plaintext always yields the same ciphertext. Files produced by this
//! crate carry no header, so changing any value here breaks compatibility with
//! every file already on disk.

/// PBKDF2 salt shared by all invocations.
///
/// Its length equals [`KEY_LENGTH`].
pub const SALT: [u8; KEY_LENGTH] = [
    0x43, 0xf4, 0xc5, 0xb2, 0x62, 0xd5, 0x23, 0x95, 0x68, 0x75, 0x21, 0x18, 0xe4, 0x8f, 0x26, 0xd9,
    0xdc, 0xa2, 0x48, 0xbd, 0xa2, 0x04, 0x65, 0xcc, 0x4b, 0x27, 0xe0, 0x64, 0xcb, 0xfd, 0xd1, 0xf6,
];

/// AES-CBC initialization vector shared by all invocations.
pub const IV: [u8; BLOCK_SIZE] = [
    0x53, 0xe5, 0x38, 0xff, 0x0f, 0x41, 0xe6, 0x50, 0xf4, 0x79, 0xec, 0x62, 0xf2, 0xa1, 0x40, 0x1f,
];

/// PBKDF2 iteration count used for every key.
pub const PBKDF2_ITERATIONS: u32 = 10_000;

/// Derived key length in bytes (AES-256).
pub const KEY_LENGTH: usize = 32;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Literal appended to a file name on encryption and stripped on decryption.
pub const ENC_MARKER: &str = "ENC";

/// Version reported by `pbecrypt -v`.
pub const VERSION_NAME: &str = env!("CARGO_PKG_VERSION");
