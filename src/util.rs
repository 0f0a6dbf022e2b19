//! Shared text-decoding helpers.

use std::borrow::Cow;

/// Decode raw catalog bytes to a string.
///
/// Tries UTF-8 first (a BOM is handled automatically by `encoding_rs`),
/// then falls back to Windows-1252, which covers the accented characters
/// found in older bundled catalogs.
pub(crate) fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}
