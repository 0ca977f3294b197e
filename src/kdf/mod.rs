//! # Key Derivation
//!
//! Turns the user's password into the AES-256 key.
//!
//! ## Modules
//!
//! - [`pbkdf2`] - PBKDF2-HMAC-SHA1 with the compiled-in salt and iteration count
//!
//! ## Usage
//!
//! Most callers never touch this module directly: [`CipherContext::new`](crate::CipherContext::new)
//! derives the key once and keeps it for the rest of the run. The functions are
//! public for benchmarks and for tools that need the raw key.

pub mod pbkdf2;

pub use pbkdf2::{derive_key, derive_pbkdf2_key};
