//! # Builders
//!
//! ## Modules
//!
//! - [`pbkdf2_builder`] - Builder for the PBKDF2-HMAC-SHA1 parameters
//!
//! ## Usage
//!
//! [`Pbkdf2Builder::default()`] is what the binary uses. Overriding salt or
//! iterations is useful for fast tests and benchmarks but yields keys that cannot
//! open files written with the defaults.

pub mod pbkdf2_builder;

pub use pbkdf2_builder::Pbkdf2Builder;
