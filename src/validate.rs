//! Input checks performed before any key is derived.

use crate::error::PbecryptError;
use std::path::Path;

/// Rejects an empty password.
pub fn validate_password(password: &str) -> Result<(), PbecryptError> {
    if password.is_empty() {
        return Err(PbecryptError::Validation("Password is empty!".into()));
    }
    Ok(())
}

/// Requires `path` to exist and not be a directory.
///
/// Symlinks are followed.
pub fn validate_source_file(path: &Path) -> Result<(), PbecryptError> {
    let metadata = match fs_err::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PbecryptError::Validation("File does not exist".into()));
        }
        Err(e) => return Err(e.into()),
    };

    if metadata.is_dir() {
        return Err(PbecryptError::Validation(
            "This is a directory, provide path to file".into(),
        ));
    }
    Ok(())
}
