//! In-memory staged copies.
//!
//! These strategies read the whole source as text, re-encode it, round-trip
//! the bytes through a growable in-memory buffer, and write the rebuilt text
//! to the destination. They demonstrate that an in-memory buffer is a
//! drop-in substitute for a disk-backed stream when staging byte content, at
//! the cost of holding the entire file in memory.
//!
//! The staging buffer is encoded and decoded with the same
//! [`TextCodec`](crate::TextCodec) value
//! ([`TransferOptions::staging_codec`](crate::TransferOptions)), so the
//! decode/re-encode symmetry the round trip depends on cannot be violated by
//! a caller. A staging codec that differs from the text codec is honored but
//! lossy for content the staging codec cannot represent; see
//! [`Unmappable`](crate::Unmappable).

use crate::error::Result;
use crate::options::TransferOptions;
use crate::validate::validate;
use std::fs::File;
use std::io::{Cursor, Read, Write};
use std::path::Path;

/// Copy `src` to `dst`, staging the content through an in-memory buffer one
/// byte per call.
///
/// The byte-at-a-time staging mirrors [`copy_by_byte`](crate::copy_by_byte):
/// the in-memory buffer is driven exactly like a file handle would be.
///
/// Returns the number of bytes staged, which differs from the source length
/// whenever the staging codec is not the text codec.
///
/// # Errors
///
/// The validation errors of [`validate`](crate::validate), plus
/// [`Error::Malformed`](crate::Error::Malformed) if the source is not valid
/// in the text codec, [`Error::Unrepresentable`](crate::Error::Unrepresentable)
/// under [`Unmappable::Error`](crate::Unmappable::Error), and
/// [`Error::Io`](crate::Error::Io) for stream failures.
pub fn copy_in_memory_by_byte(src: &Path, dst: &Path, options: &TransferOptions) -> Result<u64> {
    validate(src, dst)?;

    let text = read_source_text(src, options)?;
    let staged = options.staging_codec.encode(&text, options.on_unmappable)?;

    let mut staging = Cursor::new(Vec::with_capacity(staged.len()));
    for byte in &staged {
        staging.write_all(std::slice::from_ref(byte))?;
    }
    staging.set_position(0);

    let mut restored = Vec::with_capacity(staged.len());
    let mut byte = [0u8; 1];
    loop {
        match staging.read(&mut byte)? {
            0 => break,
            _ => restored.push(byte[0]),
        }
    }

    write_restored_text(src, dst, &restored, options)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(src = %src.display(), dst = %dst.display(), staged = restored.len(), "in-memory per-byte copy done");

    Ok(restored.len() as u64)
}

/// Copy `src` to `dst`, staging the content through an in-memory buffer in
/// single whole-buffer calls.
///
/// Identical to [`copy_in_memory_by_byte`] except the staging buffer is
/// written and read back in one call each.
///
/// Returns the number of bytes staged.
///
/// # Errors
///
/// Same as [`copy_in_memory_by_byte`].
pub fn copy_in_memory_by_block(src: &Path, dst: &Path, options: &TransferOptions) -> Result<u64> {
    validate(src, dst)?;

    let text = read_source_text(src, options)?;
    let staged = options.staging_codec.encode(&text, options.on_unmappable)?;

    let mut staging = Cursor::new(Vec::with_capacity(staged.len()));
    staging.write_all(&staged)?;
    staging.set_position(0);

    let mut restored = Vec::with_capacity(staged.len());
    staging.read_to_end(&mut restored)?;

    write_restored_text(src, dst, &restored, options)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(src = %src.display(), dst = %dst.display(), staged = restored.len(), "in-memory block copy done");

    Ok(restored.len() as u64)
}

/// Read the whole source through its handle and decode it with the text
/// codec.
fn read_source_text(src: &Path, options: &TransferOptions) -> Result<String> {
    let mut source = File::open(src)?;
    let mut raw = Vec::new();
    source.read_to_end(&mut raw)?;
    options.text_codec.decode(&raw, src)
}

/// Rebuild text from the staged bytes with the staging codec and write it to
/// the destination with the text codec.
fn write_restored_text(
    src: &Path,
    dst: &Path,
    restored: &[u8],
    options: &TransferOptions,
) -> Result<()> {
    let text = options.staging_codec.decode(restored, src)?;
    let out = options.text_codec.encode(&text, options.on_unmappable)?;

    let mut destination = File::create(dst)?;
    destination.write_all(&out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{TextCodec, Unmappable};
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_utf8_round_trip_by_byte() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        fs::write(&src, "hello, in-memory world\n").unwrap();

        let staged = copy_in_memory_by_byte(&src, &dst, &TransferOptions::default()).unwrap();

        assert_eq!(staged, 23);
        assert_eq!(fs::read(&dst).unwrap(), fs::read(&src).unwrap());
    }

    #[test]
    fn test_utf8_round_trip_by_block() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        fs::write(&src, "line one\nline two\n").unwrap();

        let staged = copy_in_memory_by_block(&src, &dst, &TransferOptions::default()).unwrap();

        assert_eq!(staged, 18);
        assert_eq!(fs::read(&dst).unwrap(), fs::read(&src).unwrap());
    }

    #[test]
    fn test_byte_and_block_variants_agree() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let by_byte = dir.path().join("byte.txt");
        let by_block = dir.path().join("block.txt");
        fs::write(&src, "même contenu, deux chemins\n").unwrap();

        let options = TransferOptions::default();
        let a = copy_in_memory_by_byte(&src, &by_byte, &options).unwrap();
        let b = copy_in_memory_by_block(&src, &by_block, &options).unwrap();

        assert_eq!(a, b);
        assert_eq!(fs::read(&by_byte).unwrap(), fs::read(&by_block).unwrap());
    }

    #[test]
    fn test_staged_count_reflects_staging_codec() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        // "café" is 5 bytes in UTF-8 but 4 in windows-1252.
        fs::write(&src, "café").unwrap();

        let options = TransferOptions::default()
            .with_staging_codec(TextCodec::new("windows-1252").unwrap());
        let staged = copy_in_memory_by_block(&src, &dst, &options).unwrap();

        assert_eq!(staged, 4);
        // Every character is representable, so the destination still
        // matches the source byte for byte.
        assert_eq!(fs::read(&dst).unwrap(), fs::read(&src).unwrap());
    }

    #[test]
    fn test_mismatched_codecs_are_lossy() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        // CJK text cannot survive a windows-1252 staging round trip.
        fs::write(&src, "日本語").unwrap();

        let options = TransferOptions::default()
            .with_staging_codec(TextCodec::new("windows-1252").unwrap());
        copy_in_memory_by_block(&src, &dst, &options).unwrap();

        assert_ne!(fs::read(&dst).unwrap(), fs::read(&src).unwrap());
    }

    #[test]
    fn test_mismatched_codecs_fail_under_strict_policy() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        fs::write(&src, "日本語").unwrap();

        let options = TransferOptions::default()
            .with_staging_codec(TextCodec::new("windows-1252").unwrap())
            .with_on_unmappable(Unmappable::Error);
        let result = copy_in_memory_by_byte(&src, &dst, &options);

        assert!(matches!(result, Err(Error::Unrepresentable { .. })));
    }

    #[test]
    fn test_non_text_source_rejected() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.bin");
        let dst = dir.path().join("dst.bin");
        fs::write(&src, [0xFF, 0xFE, 0xFD]).unwrap();

        let result = copy_in_memory_by_byte(&src, &dst, &TransferOptions::default());

        assert!(matches!(result, Err(Error::Malformed { .. })));
    }

    #[test]
    fn test_empty_source() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("empty");
        let dst = dir.path().join("out");
        fs::write(&src, []).unwrap();

        let staged = copy_in_memory_by_byte(&src, &dst, &TransferOptions::default()).unwrap();

        assert_eq!(staged, 0);
        assert_eq!(fs::metadata(&dst).unwrap().len(), 0);
    }
}
