//! Error types for fcopy.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur during transfer operations, and the [`Result`] type alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | Validation | [`Error::EmptyPath`], [`Error::SourceNotFound`], [`Error::DestinationReadOnly`] |
//! | Encoding | [`Error::UnsupportedEncoding`], [`Error::Malformed`], [`Error::Unrepresentable`] |
//! | IO | [`Error::Io`] |
//!
//! The validation errors are raised by [`validate`](crate::validate) before
//! any handle is opened. Lower-level I/O failures (disk full, handle
//! exhaustion) propagate as [`Error::Io`] without further classification.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for fcopy operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during transfer operations.
///
/// All path-related errors include the offending path to aid debugging.
/// The crate never logs or swallows errors; reporting is the caller's job.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A path argument was empty
    ///
    /// A missing path is unrepresentable in a `&Path` API, so an empty
    /// string is the only "no path" input this crate can see.
    #[error("{which} path is empty")]
    EmptyPath {
        /// Which argument was empty ("source" or "destination")
        which: &'static str,
    },

    /// Source path does not reference an existing file
    #[error("source file does not exist: {0}")]
    SourceNotFound(PathBuf),

    /// Destination file exists and is marked read-only
    #[error("destination is read-only: {0}")]
    DestinationReadOnly(PathBuf),

    /// The encoding label is not recognized
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// File content is not a valid byte sequence in the declared encoding
    #[error("invalid {encoding} byte sequence in {path}")]
    Malformed {
        /// File the bytes came from
        path: PathBuf,
        /// Canonical name of the encoding that rejected them
        encoding: &'static str,
    },

    /// Text contains characters the target encoding cannot represent
    ///
    /// Only raised under [`Unmappable::Error`](crate::Unmappable::Error);
    /// the default policy substitutes instead.
    #[error("text cannot be represented in {encoding}")]
    Unrepresentable {
        /// Canonical name of the encoding that cannot express the text
        encoding: &'static str,
    },
}
