//! # fcopy
//!
//! Byte, block, buffered, and line-oriented file copying with byte-exact
//! content comparison.
//!
//! Every operation is a standalone synchronous function: it validates its
//! inputs, opens its own handles, and releases them on every exit path
//! before returning. No state is shared between calls and nothing outlives
//! a call.
//!
//! ## Strategies
//!
//! | Function | Staging | Returns |
//! |----------|---------|---------|
//! | [`copy_by_byte`] | none, one byte per syscall | bytes copied |
//! | [`copy_by_block`] | fixed-size buffer | bytes written |
//! | [`copy_buffered`] | buffering writer around the destination | bytes written |
//! | [`copy_in_memory_by_byte`] | in-memory buffer, driven per byte | bytes staged |
//! | [`copy_in_memory_by_block`] | in-memory buffer, whole-buffer calls | bytes staged |
//! | [`copy_by_line`] | decoded text, line by line | lines copied |
//! | [`content_equals`] | 8-byte word comparison | equality |
//!
//! ## Quick Start
//!
//! ```no_run
//! use fcopy::{content_equals, copy_by_block, TransferOptions};
//! use std::path::Path;
//!
//! let options = TransferOptions::default();
//! let written = copy_by_block(Path::new("notes.txt"), Path::new("notes.bak"), &options)?;
//! assert!(content_equals(Path::new("notes.txt"), Path::new("notes.bak"))?);
//! println!("copied {written} bytes");
//! # Ok::<(), fcopy::Error>(())
//! ```
//!
//! ## Text operations and encodings
//!
//! The in-memory and line-oriented operations treat file content as text
//! under a [`TextCodec`] carried in [`TransferOptions`]. Decode and
//! re-encode within one operation always go through the same codec value,
//! so the symmetry that keeps a round trip lossless holds by construction.
//! A staging codec that differs from the text codec is honored but lossy
//! for unrepresentable content — or a hard error under
//! [`Unmappable::Error`].
//!
//! ```no_run
//! use fcopy::{copy_in_memory_by_block, TextCodec, TransferOptions};
//! use std::path::Path;
//!
//! let options = TransferOptions::default()
//!     .with_staging_codec(TextCodec::new("windows-1252")?);
//! let staged = copy_in_memory_by_block(Path::new("a.txt"), Path::new("b.txt"), &options)?;
//! println!("staged {staged} bytes");
//! # Ok::<(), fcopy::Error>(())
//! ```
//!
//! ## Errors
//!
//! Every operation gates on [`validate`]: an empty path, a missing source
//! file, or a read-only destination fails before any handle is opened.
//! Lower-level I/O failures propagate as [`Error::Io`] without
//! classification; the crate never logs or swallows errors.
//!
//! ## Limitations
//!
//! Concurrent invocations against the same destination path are
//! last-writer-wins; the crate does no cross-process or cross-thread
//! coordination.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Operation-level trace events via the tracing crate |
//! | `serde` | Serialize/Deserialize for [`TransferOptions`] |

mod encoding;
mod error;
mod options;
mod transfer;
mod validate;

pub use encoding::{TextCodec, Unmappable};
pub use error::{Error, Result};
pub use options::TransferOptions;
pub use transfer::{
    content_equals, copy_buffered, copy_by_block, copy_by_byte, copy_by_line,
    copy_in_memory_by_block, copy_in_memory_by_byte,
};
pub use validate::validate;
