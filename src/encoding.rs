//! Decoding raw CSV bytes into text using chardetng and `encoding_rs`.

use std::borrow::Cow;

use chardetng::EncodingDetector;
use simdutf8::basic::from_utf8;

/// Check if the given bytes are valid UTF-8.
///
/// Uses SIMD-accelerated validation for performance.
pub fn is_utf8(data: &[u8]) -> bool {
    from_utf8(data).is_ok()
}

/// Check if the data starts with a UTF-8 BOM (Byte Order Mark).
///
/// The UTF-8 BOM is the byte sequence: EF BB BF
pub fn has_utf8_bom(data: &[u8]) -> bool {
    data.len() >= 3 && data[0] == 0xEF && data[1] == 0xBB && data[2] == 0xBF
}

/// Skip the UTF-8 BOM if present and return the remaining data.
pub fn skip_bom(data: &[u8]) -> &[u8] {
    if has_utf8_bom(data) { &data[3..] } else { data }
}

/// How input bytes were turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingInfo {
    /// Name of the encoding the bytes were decoded as.
    pub encoding: &'static str,
    /// Whether a byte order mark was present.
    pub has_bom: bool,
    /// Whether the bytes were transcoded from a non-UTF-8 encoding.
    pub transcoded: bool,
    /// Whether malformed sequences were replaced with U+FFFD.
    pub lossy: bool,
}

impl EncodingInfo {
    /// Create a new `EncodingInfo`.
    pub const fn new(encoding: &'static str, has_bom: bool, transcoded: bool, lossy: bool) -> Self {
        Self {
            encoding,
            has_bom,
            transcoded,
            lossy,
        }
    }
}

/// Decode `data` into text.
///
/// UTF-16 input is recognised by its BOM, a UTF-8 BOM is stripped, and valid
/// UTF-8 is borrowed without copying. Anything else is transcoded from the
/// encoding chardetng guesses when `transcode` is set, or decoded as UTF-8
/// otherwise; either way malformed sequences become U+FFFD.
pub fn decode_text(data: &[u8], transcode: bool) -> (Cow<'_, str>, EncodingInfo) {
    // chardetng doesn't handle UTF-16 well, so go by the BOM
    if transcode && data.len() >= 2 {
        let utf16 = match (data[0], data[1]) {
            (0xFF, 0xFE) => Some(encoding_rs::UTF_16LE),
            (0xFE, 0xFF) => Some(encoding_rs::UTF_16BE),
            _ => None,
        };
        if let Some(encoding) = utf16 {
            let (decoded, actual, lossy) = encoding.decode(data);
            return (decoded, EncodingInfo::new(actual.name(), true, true, lossy));
        }
    }

    let has_bom = has_utf8_bom(data);
    let body = skip_bom(data);

    if let Ok(text) = from_utf8(body) {
        return (
            Cow::Borrowed(text),
            EncodingInfo::new(encoding_rs::UTF_8.name(), has_bom, false, false),
        );
    }

    let encoding = if transcode {
        let mut detector = EncodingDetector::new();
        detector.feed(body, true);
        detector.guess(None, true)
    } else {
        encoding_rs::UTF_8
    };

    let (decoded, lossy) = encoding.decode_without_bom_handling(body);
    let transcoded = encoding != encoding_rs::UTF_8;
    (
        decoded,
        EncodingInfo::new(encoding.name(), has_bom, transcoded, lossy),
    )
}
