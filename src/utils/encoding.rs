//! Encoding-aware reading of existing manifests.
//!
//! Visual Studio writes project files as UTF-8 with a BOM, older tools sometimes
//! as UTF-16 or a legacy code page. The merge engine works on `String`s, so:
//! - UTF-8 (BOM or not) is kept byte-for-byte, BOM included
//! - UTF-16 LE/BE with BOM is decoded with `encoding_rs`
//! - anything else is guessed with `chardetng` and decoded with replacement
//!
//! Manifests are always written back as UTF-8, so decoded text has its XML
//! declaration rewritten to match (`DecodedText::into_utf8_text`).

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::io;
use std::path::Path;

const UTF8_BOM: &[u8] = &[0xef, 0xbb, 0xbf];
const UTF16LE_BOM: &[u8] = &[0xff, 0xfe];
const UTF16BE_BOM: &[u8] = &[0xfe, 0xff];

/// `encoding` pseudo-attribute of a leading XML declaration.
static DECLARED_ENCODING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\A(\x{FEFF}?\s*<\?xml\b[^>]*?\bencoding\s*=\s*)(?:"[^"]*"|'[^']*')"#)
        .expect("valid regex")
});

/// Text of a manifest plus the encoding it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static str,
}

impl DecodedText {
    /// True when the text is the file's own bytes, so writing it back as UTF-8
    /// keeps the file's encoding.
    pub fn is_utf8(&self) -> bool {
        matches!(self.encoding, "utf-8" | "utf-8-sig")
    }

    /// The text to write back as UTF-8. Text decoded from another encoding gets
    /// its XML declaration rewritten to `encoding="utf-8"`.
    pub fn into_utf8_text(self) -> String {
        if self.is_utf8() {
            return self.text;
        }
        let rewritten = match declare_utf8(&self.text) {
            Cow::Owned(text) => Some(text),
            Cow::Borrowed(_) => None,
        };
        match rewritten {
            Some(text) => {
                tracing::info!("Rewriting XML declaration from {} to utf-8", self.encoding);
                text
            }
            None => self.text,
        }
    }
}

/// Set the `encoding` of a leading XML declaration to `utf-8`. Text without a
/// declaration, or whose declaration names no encoding, is returned unchanged.
pub fn declare_utf8(text: &str) -> Cow<'_, str> {
    DECLARED_ENCODING.replace(text, "${1}\"utf-8\"")
}

/// Read a manifest from disk. Only I/O failures are errors; undecodable bytes
/// are replaced.
pub fn read_manifest_text(path: &Path) -> io::Result<DecodedText> {
    let bytes = std::fs::read(path)?;
    Ok(decode_bytes(bytes))
}

/// Decode raw manifest bytes.
pub fn decode_bytes(bytes: Vec<u8>) -> DecodedText {
    if bytes.starts_with(UTF16LE_BOM) {
        return decode_with(UTF_16LE, &bytes);
    }
    if bytes.starts_with(UTF16BE_BOM) {
        return decode_with(UTF_16BE, &bytes);
    }

    let is_bom = bytes.starts_with(UTF8_BOM);
    match String::from_utf8(bytes) {
        Ok(text) => DecodedText { text, encoding: if is_bom { "utf-8-sig" } else { "utf-8" } },
        Err(err) => {
            let bytes = err.into_bytes();
            let mut detector = EncodingDetector::new();
            detector.feed(&bytes, true);
            decode_with(detector.guess(None, true), &bytes)
        }
    }
}

fn decode_with(encoding: &'static Encoding, bytes: &[u8]) -> DecodedText {
    // `decode` sniffs and drops a BOM on its own.
    let (decoded, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::debug!("Replaced malformed {} sequences while decoding", used.name());
    }
    DecodedText { text: decoded.into_owned(), encoding: used.name() }
}
