// src/lib.rs

pub mod aliases;
pub mod builders;
pub mod cipher;
pub mod consts;
pub mod decryptor;
pub mod encryptor;
pub mod engine;
pub mod error;
pub mod kdf;
pub mod naming;
pub mod validate;

// High-level API
pub use engine::{run, FileTransformEngine, Operation};
pub use error::PbecryptError;

pub use builders::Pbkdf2Builder;
pub use cipher::CipherContext;
pub use decryptor::decrypt;
pub use encryptor::encrypt;
pub use kdf::{derive_key, derive_pbkdf2_key};
pub use naming::{decrypted_path_for, encrypted_path_for, has_marker};
