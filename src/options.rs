//! Configuration options for transfer operations.
//!
//! This module provides [`TransferOptions`] for configuring buffer sizes and
//! the text-encoding policy of the text-oriented operations.
//!
//! # Example
//!
//! ```
//! use fcopy::{TextCodec, TransferOptions, Unmappable};
//!
//! let options = TransferOptions::default()
//!     .with_block_size(8 * 1024)
//!     .with_staging_codec(TextCodec::new("windows-1252")?)
//!     .with_on_unmappable(Unmappable::Error);
//! # Ok::<(), fcopy::Error>(())
//! ```

use crate::encoding::{TextCodec, Unmappable};

/// Options for transfer operations.
///
/// Use [`Default::default()`] to get the documented defaults, then customize
/// using the builder methods.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `block_size` | 1024 | Fixed transfer buffer size |
/// | `write_buffer_capacity` | 5000 | Buffering-writer capacity |
/// | `text_codec` | UTF-8 | Codec for file content read/written as text |
/// | `staging_codec` | UTF-8 | Codec for the in-memory staging round trip |
/// | `on_unmappable` | `Substitute` | Policy for unrepresentable characters |
///
/// The text operations are lossless exactly when `text_codec` and
/// `staging_codec` agree and the content is representable in both; a
/// mismatched pair is supported but lossy (or a hard error, per
/// `on_unmappable`).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransferOptions {
    /// Size in bytes of the fixed transfer buffer used by the block and
    /// buffered copies (default: 1024)
    pub block_size: usize,

    /// Capacity in bytes of the buffering writer wrapped around the
    /// destination in [`copy_buffered`](crate::copy_buffered) (default: 5000)
    pub write_buffer_capacity: usize,

    /// Codec applied when file content is read or written as text
    pub text_codec: TextCodec,

    /// Codec applied when text is staged through the in-memory buffer
    pub staging_codec: TextCodec,

    /// Behavior when a codec cannot represent a character
    pub on_unmappable: Unmappable,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            block_size: 1024,
            write_buffer_capacity: 5000,
            text_codec: TextCodec::utf8(),
            staging_codec: TextCodec::utf8(),
            on_unmappable: Unmappable::default(),
        }
    }
}

impl TransferOptions {
    /// Set the fixed transfer buffer size.
    ///
    /// Value is clamped to at least 1 to prevent a zero-length read loop.
    #[must_use]
    pub fn with_block_size(mut self, size: usize) -> Self {
        self.block_size = size.max(1);
        self
    }

    /// Set the buffering-writer capacity used by
    /// [`copy_buffered`](crate::copy_buffered).
    #[must_use]
    pub fn with_write_buffer_capacity(mut self, capacity: usize) -> Self {
        self.write_buffer_capacity = capacity.max(1);
        self
    }

    /// Set the codec for file content read or written as text.
    #[must_use]
    pub fn with_text_codec(mut self, codec: TextCodec) -> Self {
        self.text_codec = codec;
        self
    }

    /// Set the codec for the in-memory staging round trip.
    #[must_use]
    pub fn with_staging_codec(mut self, codec: TextCodec) -> Self {
        self.staging_codec = codec;
        self
    }

    /// Set the unmappable-character policy.
    #[must_use]
    pub fn with_on_unmappable(mut self, policy: Unmappable) -> Self {
        self.on_unmappable = policy;
        self
    }
}
