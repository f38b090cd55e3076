//! Byte-exact content comparison.

use crate::error::Result;
use crate::validate::validate;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

const WORD: usize = size_of::<u64>();

/// Compare two files for exact byte equality.
///
/// Lengths are compared first; when they differ the files are reported
/// unequal without reading any content. Otherwise both files are consumed in
/// parallel 8-byte words compared numerically; a short final word is
/// compared only over its valid bytes, never over stale buffer content.
///
/// The comparison is reflexive and symmetric.
///
/// # Errors
///
/// The validation errors of [`validate`](crate::validate) (the second path
/// is gated like a destination, so a read-only second file is rejected),
/// plus [`Error::Io`](crate::Error::Io) for any stream failure, including a
/// missing second file.
pub fn content_equals(a: &Path, b: &Path) -> Result<bool> {
    validate(a, b)?;

    if fs::metadata(a)?.len() != fs::metadata(b)?.len() {
        return Ok(false);
    }

    let mut file_a = File::open(a)?;
    let mut file_b = File::open(b)?;

    let mut word_a = [0u8; WORD];
    let mut word_b = [0u8; WORD];
    loop {
        let n_a = read_full(&mut file_a, &mut word_a)?;
        let n_b = read_full(&mut file_b, &mut word_b)?;
        if n_a != n_b {
            // Lengths matched up front, so a mismatch here means a file
            // changed mid-scan. Report inequality rather than guessing.
            return Ok(false);
        }
        if n_a == 0 {
            return Ok(true);
        }
        if n_a == WORD {
            if u64::from_ne_bytes(word_a) != u64::from_ne_bytes(word_b) {
                return Ok(false);
            }
        } else if word_a[..n_a] != word_b[..n_b] {
            return Ok(false);
        }
    }
}

/// Read until `buf` is full or the reader is exhausted, returning the number
/// of bytes read. Short `read` returns are retried so the two streams stay
/// aligned word for word.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TransferOptions;
    use crate::transfer::{copy_buffered, copy_by_block, copy_by_byte};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_reflexive() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, "same file twice").unwrap();

        assert!(content_equals(&file, &file).unwrap());
    }

    #[test]
    fn test_symmetric() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, "identical content").unwrap();
        fs::write(&b, "identical content").unwrap();

        assert!(content_equals(&a, &b).unwrap());
        assert!(content_equals(&b, &a).unwrap());

        fs::write(&b, "different content").unwrap();
        assert!(!content_equals(&a, &b).unwrap());
        assert!(!content_equals(&b, &a).unwrap());
    }

    #[test]
    fn test_length_mismatch_with_identical_prefix() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, "shared prefix").unwrap();
        fs::write(&b, "shared prefix plus tail").unwrap();

        assert!(!content_equals(&a, &b).unwrap());
    }

    #[test]
    fn test_difference_in_partial_final_word() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        // 11 bytes: one full word plus a 3-byte tail differing in its last
        // byte. A fixed-size reinterpretation of the tail would miss this.
        fs::write(&a, b"01234567abc").unwrap();
        fs::write(&b, b"01234567abd").unwrap();

        assert!(!content_equals(&a, &b).unwrap());
    }

    #[test]
    fn test_difference_inside_full_word() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, b"0123x56789abcdef").unwrap();
        fs::write(&b, b"0123y56789abcdef").unwrap();

        assert!(!content_equals(&a, &b).unwrap());
    }

    #[test]
    fn test_word_multiple_lengths() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, b"0123456789abcdef").unwrap();
        fs::write(&b, b"0123456789abcdef").unwrap();

        assert!(content_equals(&a, &b).unwrap());
    }

    #[test]
    fn test_two_empty_files_are_equal() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, []).unwrap();
        fs::write(&b, []).unwrap();

        assert!(content_equals(&a, &b).unwrap());
    }

    #[test]
    fn test_confirms_every_binary_copy_strategy() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let data: Vec<u8> = (0..3000u32).map(|i| (i * 31 % 256) as u8).collect();
        fs::write(&src, &data).unwrap();

        let options = TransferOptions::default();

        let dst = dir.path().join("by_byte");
        copy_by_byte(&src, &dst).unwrap();
        assert!(content_equals(&src, &dst).unwrap());

        let dst = dir.path().join("by_block");
        copy_by_block(&src, &dst, &options).unwrap();
        assert!(content_equals(&src, &dst).unwrap());

        let dst = dir.path().join("buffered");
        copy_buffered(&src, &dst, &options).unwrap();
        assert!(content_equals(&src, &dst).unwrap());
    }
}
