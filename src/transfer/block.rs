//! Fixed-block and buffered-sink copies.

use crate::error::Result;
use crate::options::TransferOptions;
use crate::validate::validate;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// Copy `src` to `dst` through a fixed-size transfer buffer.
///
/// The buffer is filled and flushed repeatedly until the source is
/// exhausted. Each iteration writes exactly the bytes the read returned, so
/// a short final block never pads the destination with stale buffer content.
///
/// Returns the total number of bytes written.
///
/// # Errors
///
/// The validation errors of [`validate`](crate::validate), plus
/// [`Error::Io`](crate::Error::Io) for any stream failure.
pub fn copy_by_block(src: &Path, dst: &Path, options: &TransferOptions) -> Result<u64> {
    validate(src, dst)?;

    let mut source = File::open(src)?;
    let mut destination = File::create(dst)?;
    let written = copy_blocks(&mut source, &mut destination, options.block_size)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(src = %src.display(), dst = %dst.display(), bytes = written, "block copy done");

    Ok(written)
}

/// Copy `src` to `dst` through a buffering writer wrapped around the
/// destination handle.
///
/// The writer batches small writes into larger underlying writes and is
/// flushed explicitly before it drops, so tail data cannot be lost to a
/// silently failing drop.
///
/// Returns the total number of bytes written.
///
/// # Errors
///
/// Same as [`copy_by_block`].
pub fn copy_buffered(src: &Path, dst: &Path, options: &TransferOptions) -> Result<u64> {
    validate(src, dst)?;

    let mut source = File::open(src)?;
    let mut destination =
        BufWriter::with_capacity(options.write_buffer_capacity, File::create(dst)?);
    let written = copy_blocks(&mut source, &mut destination, options.block_size)?;
    destination.flush()?;

    #[cfg(feature = "tracing")]
    tracing::trace!(src = %src.display(), dst = %dst.display(), bytes = written, "buffered copy done");

    Ok(written)
}

/// Drain `reader` into `writer` block by block, writing exactly the number
/// of bytes each read returned.
fn copy_blocks<R: Read, W: Write>(reader: &mut R, writer: &mut W, block_size: usize) -> Result<u64> {
    let mut block = vec![0u8; block_size.max(1)];
    let mut written = 0u64;
    loop {
        let n = match reader.read(&mut block) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        writer.write_all(&block[..n])?;
        written += n as u64;
    }
    Ok(written)
}
