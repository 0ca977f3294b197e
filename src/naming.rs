//! Output file naming.
//!
//! Encrypted files live next to their source with [`ENC_MARKER`] appended to the
//! name; decryption strips the marker again. Both functions are pure: nothing
//! here touches the filesystem.

use crate::consts::ENC_MARKER;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// `dir/name` → `dir/nameENC`.
///
/// A path without a file name (`/`, `..`) is returned unchanged.
#[must_use]
pub fn encrypted_path_for(path: &Path) -> PathBuf {
    match path.file_name() {
        Some(name) => {
            let mut new_name = name.to_os_string();
            new_name.push(ENC_MARKER);
            path.with_file_name(new_name)
        }
        None => path.to_path_buf(),
    }
}

/// `dir/nameENC` → `dir/name`.
///
/// Only a marker at the very end of the name is removed. Any other name comes
/// back unchanged, which means the result equals the input; callers that write
/// to the result must check for that.
#[must_use]
pub fn decrypted_path_for(path: &Path) -> PathBuf {
    match path.file_name().and_then(strip_marker) {
        Some(stripped) if !stripped.is_empty() => path.with_file_name(stripped),
        _ => path.to_path_buf(),
    }
}

/// `true` if the file name ends with [`ENC_MARKER`].
#[must_use]
pub fn has_marker(path: &Path) -> bool {
    path.file_name().and_then(strip_marker).is_some()
}

fn strip_marker(name: &OsStr) -> Option<OsString> {
    if let Some(name) = name.to_str() {
        return name.strip_suffix(ENC_MARKER).map(OsString::from);
    }

    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        name.as_bytes()
            .strip_suffix(ENC_MARKER.as_bytes())
            .map(|bytes| OsStr::from_bytes(bytes).to_os_string())
    }
    #[cfg(not(unix))]
    {
        let _ = name;
        None
    }
}
