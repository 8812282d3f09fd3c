//! # sheetbridge-codec
//!
//! Transcoding between the legacy host's single-byte "ANSI" text and the UTF-8
//! the backing engine requires.
//!
//! The code page is an explicit [`Codepage`] value rather than ambient process
//! locale state, so conversion is a pure function of its arguments and can be
//! tested deterministically. Failure is reported through [`CodecError`], never
//! by returning an empty string: an empty result always means the input really
//! was empty.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::{Mutex, OnceLock};

use encoding_rs::{
    Encoding, BIG5, EUC_KR, GBK, SHIFT_JIS, UTF_8, WINDOWS_1250, WINDOWS_1251, WINDOWS_1252,
    WINDOWS_1253, WINDOWS_1254, WINDOWS_1255, WINDOWS_1256, WINDOWS_1257, WINDOWS_1258,
    WINDOWS_874,
};
use thiserror::Error;

/// Result type alias using [`CodecError`]
pub type Result<T> = std::result::Result<T, CodecError>;

/// Transcoding errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Input bytes are not a valid sequence under the given code page
    #[error("Byte sequence is not valid for code page {0}")]
    Malformed(u16),

    /// Text contains characters the target code page cannot represent
    #[error("Text is not representable in code page {0}")]
    Unmappable(u16),
}

/// A Windows code page identifier.
///
/// Defaults to 1252 (Western European), the overwhelmingly common setting for
/// the legacy hosts this bridge serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codepage(u16);

impl Codepage {
    pub const WINDOWS_1250: Codepage = Codepage(1250);
    pub const WINDOWS_1252: Codepage = Codepage(1252);
    pub const UTF_8: Codepage = Codepage(65001);

    /// Wrap a raw code page number. Unknown numbers are accepted; decoding
    /// under them falls back to a lossless byte-to-Unicode mapping.
    pub fn new(number: u16) -> Self {
        Codepage(number)
    }

    /// The raw code page number.
    pub fn number(self) -> u16 {
        self.0
    }

    fn encoding(self) -> Option<&'static Encoding> {
        Some(match self.0 as u32 {
            874 => WINDOWS_874,
            932 => SHIFT_JIS,
            936 => GBK,
            949 => EUC_KR,
            950 => BIG5,
            1250 => WINDOWS_1250,
            1251 => WINDOWS_1251,
            1252 => WINDOWS_1252,
            1253 => WINDOWS_1253,
            1254 => WINDOWS_1254,
            1255 => WINDOWS_1255,
            1256 => WINDOWS_1256,
            1257 => WINDOWS_1257,
            1258 => WINDOWS_1258,
            65001 => UTF_8,
            _ => return None,
        })
    }
}

impl Default for Codepage {
    fn default() -> Self {
        Codepage::WINDOWS_1252
    }
}

/// Decode legacy-encoded bytes into an owned UTF-8 string.
///
/// Empty input decodes to an empty string; that is success, not a failure
/// marker. Malformed input under a multi-byte code page is an error. Unknown
/// code pages decode with a lossless byte-to-Unicode mapping (ASCII intact),
/// with a warn-once log entry per code page.
pub fn to_utf8(codepage: Codepage, bytes: &[u8]) -> Result<String> {
    if bytes.is_empty() {
        return Ok(String::new());
    }

    let Some(encoding) = codepage.encoding() else {
        warn_unknown_codepage(codepage.number());
        return Ok(bytes.iter().copied().map(char::from).collect());
    };

    match encoding.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(Cow::Borrowed(s)) => Ok(s.to_owned()),
        Some(Cow::Owned(s)) => Ok(s),
        None => Err(CodecError::Malformed(codepage.number())),
    }
}

/// Encode a UTF-8 string back into the legacy code page.
///
/// Only used for host-bound text (diagnostics, round-trip checks); the bridge's
/// forwarding path is one-directional. Characters the code page cannot
/// represent are an error rather than being replaced.
pub fn from_utf8(codepage: Codepage, text: &str) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let Some(encoding) = codepage.encoding() else {
        // Inverse of the lossless decode fallback: only U+0000..=U+00FF map.
        return text
            .chars()
            .map(|c| {
                u8::try_from(u32::from(c)).map_err(|_| CodecError::Unmappable(codepage.number()))
            })
            .collect();
    };

    let (encoded, _, had_errors) = encoding.encode(text);
    if had_errors {
        return Err(CodecError::Unmappable(codepage.number()));
    }
    Ok(encoded.into_owned())
}

fn warn_unknown_codepage(codepage: u16) {
    static WARNED: OnceLock<Mutex<BTreeSet<u16>>> = OnceLock::new();

    let warned = WARNED.get_or_init(|| Mutex::new(BTreeSet::new()));
    let mut warned = match warned.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    if warned.insert(codepage) {
        log::warn!(
            "unknown code page {codepage}; decoding with lossless byte-to-Unicode mapping"
        );
    }
}
