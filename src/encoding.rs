//! Text codecs for the in-memory and line-oriented operations.
//!
//! Encoding names are resolved through `encoding_rs` labels, so the usual
//! aliases work: "utf-8", "utf8", "iso-8859-1", "latin1", "windows-1252",
//! "shift_jis", and so on. Note that the Encoding Standard folds some
//! historical names together ("latin1" and "iso-8859-1" both resolve to
//! windows-1252) and defines no encoder for UTF-16, for which `encoding_rs`
//! emits UTF-8 output instead.
//!
//! Whatever codec decodes bytes to text must re-encode that text within the
//! same operation, or content corruption results. Operations in this crate
//! hold a single [`TextCodec`] value for each role, so the symmetry holds by
//! construction.

use crate::error::{Error, Result};
use std::path::Path;

/// Policy for characters the target encoding cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unmappable {
    /// Replace with the encoding's substitution output (default).
    ///
    /// Substitution keeps the operation running when the codec pair is
    /// mismatched; the loss is observable because the copied bytes differ
    /// from the source instead of the whole operation failing.
    #[default]
    Substitute,
    /// Fail the operation with [`Error::Unrepresentable`].
    Error,
}

/// A named character encoding applied when an operation treats file content
/// as text rather than raw bytes.
///
/// # Example
///
/// ```
/// use fcopy::TextCodec;
///
/// let utf8 = TextCodec::utf8();
/// assert_eq!(utf8.name(), "UTF-8");
///
/// let latin = TextCodec::new("latin1")?;
/// assert_eq!(latin.name(), "windows-1252");
/// # Ok::<(), fcopy::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCodec {
    encoding: &'static encoding_rs::Encoding,
}

impl Default for TextCodec {
    fn default() -> Self {
        Self::utf8()
    }
}

impl TextCodec {
    /// UTF-8, the default codec for every text operation.
    #[must_use]
    pub fn utf8() -> Self {
        Self {
            encoding: encoding_rs::UTF_8,
        }
    }

    /// Resolve a codec from an encoding label such as "utf-8" or "latin1".
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedEncoding`] if the label is not recognized.
    pub fn new(label: &str) -> Result<Self> {
        let encoding = encoding_rs::Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| Error::UnsupportedEncoding(label.to_string()))?;
        Ok(Self { encoding })
    }

    /// Canonical name of the underlying encoding.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Decode bytes read from `path` into text.
    ///
    /// Malformed input is an error, never a silent replacement: substituting
    /// on decode would corrupt the very content a copy is supposed to
    /// preserve. A byte-order mark is content here, not metadata, and must
    /// survive the round trip, so no BOM sniffing or stripping is done.
    pub(crate) fn decode(&self, bytes: &[u8], path: &Path) -> Result<String> {
        let (text, had_errors) = self.encoding.decode_without_bom_handling(bytes);
        if had_errors {
            return Err(Error::Malformed {
                path: path.to_path_buf(),
                encoding: self.encoding.name(),
            });
        }
        Ok(text.into_owned())
    }

    /// Encode text to bytes under the given unmappable-character policy.
    pub(crate) fn encode(&self, text: &str, on_unmappable: Unmappable) -> Result<Vec<u8>> {
        let (bytes, _, had_errors) = self.encoding.encode(text);
        if had_errors && on_unmappable == Unmappable::Error {
            return Err(Error::Unrepresentable {
                encoding: self.encoding.name(),
            });
        }
        Ok(bytes.into_owned())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TextCodec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TextCodec {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        use serde::Deserialize as _;
        let label = String::deserialize(deserializer)?;
        TextCodec::new(&label).map_err(serde::de::Error::custom)
    }
}
