//! # Secure-Gate Type Aliases
//!
//! Secret-carrying types used throughout the crate. Every alias here is backed by
//! [`secure-gate`](https://github.com/Slurp9187/secure-gate), so the bytes are
//! zeroized on drop and only reachable through an explicit `.expose_secret()`.
//!
//! ## Type Categories
//!
//! ### HMAC Primitives
//! - [`HmacSha1`] - PRF used by the PBKDF2 key derivation
//!
//! ### Dynamic Secrets
//! - [`PasswordString`] - user password
//!
//! ### Fixed-Size Secrets
//! - [`Aes256Key32`] - 32-byte derived AES-256 key
//! - [`Salt32`] - 32-byte PBKDF2 salt

use hmac::Hmac;
use secure_gate::{Dynamic, Fixed};
use sha1::Sha1;

// ─────────────────────────────────────────────────────────────────────────────
// HMAC primitive
// ─────────────────────────────────────────────────────────────────────────────
pub type HmacSha1 = Hmac<Sha1>;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type PasswordString = Dynamic<String>;

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size secrets, alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
pub type Aes256Key32 = Fixed<[u8; 32]>; // derived key
pub type Salt32 = Fixed<[u8; 32]>; // PBKDF2 salt
