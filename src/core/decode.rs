// irclogparse - core/decode.rs
//
// Byte-line decoding with a two-tier policy: strict UTF-8 first, then
// windows-1252 as the fallback. The fallback is a single-byte encoding
// that assigns a character to every byte value, so the second tier
// accepts any input — at worst it produces a plausible-but-wrong
// substitution for a line written in some other legacy code page.

use crate::util::error::DecodeError;
use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;

/// Decode one raw byte line to text.
///
/// Valid UTF-8 is passed through borrowed; anything else is decoded as
/// windows-1252. If both tiers fail (unreachable for windows-1252, which
/// covers all 256 byte values) the error is propagated rather than being
/// papered over with replacement characters.
pub fn decode_bytes(bytes: &[u8]) -> Result<Cow<'_, str>, DecodeError> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(Cow::Borrowed(text)),
        Err(utf8_error) => {
            let (text, had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            if had_errors {
                return Err(DecodeError {
                    valid_up_to: utf8_error.valid_up_to(),
                    source: utf8_error,
                });
            }
            Ok(text)
        }
    }
}

/// A line as produced by a caller-supplied source: either already text
/// or an undifferentiated byte sequence.
///
/// Implemented for the owned and borrowed forms of both representations,
/// so any iterator of strings or byte buffers can feed the parser.
pub trait RawLine {
    /// Produce the line's text, decoding if necessary.
    fn decode(&self) -> Result<Cow<'_, str>, DecodeError>;
}

impl RawLine for str {
    fn decode(&self) -> Result<Cow<'_, str>, DecodeError> {
        Ok(Cow::Borrowed(self))
    }
}

impl RawLine for String {
    fn decode(&self) -> Result<Cow<'_, str>, DecodeError> {
        Ok(Cow::Borrowed(self))
    }
}

impl RawLine for [u8] {
    fn decode(&self) -> Result<Cow<'_, str>, DecodeError> {
        decode_bytes(self)
    }
}

impl RawLine for Vec<u8> {
    fn decode(&self) -> Result<Cow<'_, str>, DecodeError> {
        decode_bytes(self)
    }
}

impl<T: RawLine + ?Sized> RawLine for &T {
    fn decode(&self) -> Result<Cow<'_, str>, DecodeError> {
        (**self).decode()
    }
}
