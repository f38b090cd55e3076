//! Line-oriented text copy.

use crate::error::Result;
use crate::options::TransferOptions;
use crate::validate::validate;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Copy `src` to `dst` line by line.
///
/// The source is decoded with the text codec and consumed as a lazy, finite,
/// non-restartable sequence of lines; both `\n` and `\r\n` are recognized as
/// boundaries at read time. Every line is written followed by a `\n`, except
/// the last, which keeps a trailing newline only if the source ended with
/// one. Interior empty lines are lines like any other and are preserved.
///
/// A CRLF source therefore comes out with `\n` endings; the content of every
/// line is untouched.
///
/// Returns the number of lines copied.
///
/// # Errors
///
/// The validation errors of [`validate`](crate::validate), plus
/// [`Error::Malformed`](crate::Error::Malformed) if the source is not valid
/// in the text codec and [`Error::Io`](crate::Error::Io) for stream
/// failures.
pub fn copy_by_line(src: &Path, dst: &Path, options: &TransferOptions) -> Result<u64> {
    validate(src, dst)?;

    let mut source = File::open(src)?;
    let mut raw = Vec::new();
    source.read_to_end(&mut raw)?;
    let text = options.text_codec.decode(&raw, src)?;
    let ends_with_newline = text.ends_with('\n');

    let newline = options.text_codec.encode("\n", options.on_unmappable)?;
    let mut destination = BufWriter::new(File::create(dst)?);

    let mut count = 0u64;
    let mut lines = text.lines().peekable();
    while let Some(line) = lines.next() {
        let encoded = options.text_codec.encode(line, options.on_unmappable)?;
        destination.write_all(&encoded)?;
        if lines.peek().is_some() || ends_with_newline {
            destination.write_all(&newline)?;
        }
        count += 1;
    }
    destination.flush()?;

    #[cfg(feature = "tracing")]
    tracing::trace!(src = %src.display(), dst = %dst.display(), lines = count, "line copy done");

    Ok(count)
}
