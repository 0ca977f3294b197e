//! src/engine.rs
//! File-level encryption and decryption

use crate::aliases::PasswordString;
use crate::cipher::CipherContext;
use crate::decryptor::decrypt;
use crate::encryptor::{encrypt, write_octets};
use crate::error::PbecryptError;
use crate::naming::{decrypted_path_for, encrypted_path_for};
use crate::validate::{validate_password, validate_source_file};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Direction of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encrypt,
    Decrypt,
}

/// Encrypts or decrypts one file into a sibling file.
///
/// Owns the [`CipherContext`] for the run. Sources are expected to have passed
/// [`validate_source_file`] already; the engine does not re-check them.
#[derive(Debug)]
pub struct FileTransformEngine {
    context: CipherContext,
}

impl FileTransformEngine {
    pub fn new(context: CipherContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &CipherContext {
        &self.context
    }

    /// Encrypt `source` into `<source>ENC` and return the target path.
    ///
    /// An existing target is replaced. The target is only created once the
    /// whole source has been read, so an unreadable source leaves no output.
    pub fn encrypt_file(&self, source: &Path) -> Result<PathBuf, PbecryptError> {
        let target = encrypted_path_for(source);
        debug!(source = %source.display(), output = %target.display(), "encrypting file");
        remove_existing(&target)?;

        let reader = BufReader::new(fs_err::File::open(source)?);
        let mut ciphertext = Vec::new();
        encrypt(reader, &mut ciphertext, &self.context)?;

        let mut writer = fs_err::File::create(&target)?;
        write_octets(&mut writer, &ciphertext)?;

        info!(output = %target.display(), bytes = ciphertext.len(), "file encrypted");
        Ok(target)
    }

    /// Decrypt `source` into its name without the trailing `ENC` and return the
    /// target path.
    ///
    /// An existing target is replaced. The target is only created after the
    /// whole source has decrypted, so a wrong password leaves no output file.
    ///
    /// # Errors
    /// [`PbecryptError::Validation`] if the name has no `ENC` suffix, since the
    /// target would then be the source itself.
    pub fn decrypt_file(&self, source: &Path) -> Result<PathBuf, PbecryptError> {
        let target = decrypted_path_for(source);
        if target == source {
            return Err(PbecryptError::Validation(format!(
                "File name does not end with {}, refusing to overwrite the source",
                crate::consts::ENC_MARKER
            )));
        }
        debug!(source = %source.display(), output = %target.display(), "decrypting file");
        remove_existing(&target)?;

        let reader = BufReader::new(fs_err::File::open(source)?);
        let mut plaintext = Vec::new();
        decrypt(reader, &mut plaintext, &self.context)?;

        let mut writer = fs_err::File::create(&target)?;
        write_octets(&mut writer, &plaintext)?;

        info!(output = %target.display(), bytes = plaintext.len(), "file decrypted");
        Ok(target)
    }

    pub fn transform_file(
        &self,
        operation: Operation,
        source: &Path,
    ) -> Result<PathBuf, PbecryptError> {
        match operation {
            Operation::Encrypt => self.encrypt_file(source),
            Operation::Decrypt => self.decrypt_file(source),
        }
    }
}

/// Validate the inputs, derive the key and run one operation.
///
/// Nothing on disk is touched when validation fails.
pub fn run(operation: Operation, password: &str, source: &Path) -> Result<PathBuf, PbecryptError> {
    validate_password(password)?;
    validate_source_file(source)?;

    let password = PasswordString::new(password.to_string());
    let engine = FileTransformEngine::new(CipherContext::new(&password)?);
    engine.transform_file(operation, source)
}

fn remove_existing(path: &Path) -> Result<(), PbecryptError> {
    match fs_err::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed existing target");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
