//! Per-byte copy through raw file handles.

use crate::error::Result;
use crate::validate::validate;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Copy `src` to `dst` one byte at a time.
///
/// The destination is created or truncated. Every byte is a separate read
/// and a separate write against the raw handles; this is the unbuffered
/// baseline the other strategies are measured against, so correctness wins
/// over speed.
///
/// Returns the number of bytes copied.
///
/// # Errors
///
/// Returns an error if:
/// - Either path is empty ([`Error::EmptyPath`](crate::Error::EmptyPath))
/// - The source is not an existing file ([`Error::SourceNotFound`](crate::Error::SourceNotFound))
/// - The destination exists read-only ([`Error::DestinationReadOnly`](crate::Error::DestinationReadOnly))
/// - IO operations fail ([`Error::Io`](crate::Error::Io))
pub fn copy_by_byte(src: &Path, dst: &Path) -> Result<u64> {
    validate(src, dst)?;

    let mut source = File::open(src)?;
    let mut destination = File::create(dst)?;

    let mut byte = [0u8; 1];
    let mut count = 0u64;
    loop {
        match source.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {
                destination.write_all(&byte)?;
                count += 1;
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(src = %src.display(), dst = %dst.display(), bytes = count, "per-byte copy done");

    Ok(count)
}
