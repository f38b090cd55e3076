//! Input validation shared by every transfer operation.

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Check the preconditions shared by every transfer operation.
///
/// Purely a gate: nothing is opened, created, or modified.
///
/// # Errors
///
/// - [`Error::EmptyPath`] if either path is the empty string
/// - [`Error::SourceNotFound`] if `src` does not reference an existing file
/// - [`Error::DestinationReadOnly`] if `dst` exists and is marked read-only
///
/// Metadata failures other than not-found propagate as [`Error::Io`].
pub fn validate(src: &Path, dst: &Path) -> Result<()> {
    if src.as_os_str().is_empty() {
        return Err(Error::EmptyPath { which: "source" });
    }
    if dst.as_os_str().is_empty() {
        return Err(Error::EmptyPath {
            which: "destination",
        });
    }

    match fs::metadata(src) {
        Ok(meta) if meta.is_file() => {}
        // A directory source is as unusable as a missing one.
        Ok(_) => return Err(Error::SourceNotFound(src.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::SourceNotFound(src.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    }

    match fs::metadata(dst) {
        Ok(meta) if meta.permissions().readonly() => {
            Err(Error::DestinationReadOnly(dst.to_path_buf()))
        }
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
