/// Encoding and line-ending detection for file I/O.
use anyhow::{Context, Result};

/// Encodings a document can be read from and written back in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
    /// Any other encoding known to `encoding_rs`, guessed by `chardetng`.
    Legacy(&'static encoding_rs::Encoding),
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Utf8 => write!(f, "UTF-8"),
            Self::Utf8Bom => write!(f, "UTF-8 BOM"),
            Self::Utf16Le => write!(f, "UTF-16 LE"),
            Self::Utf16Be => write!(f, "UTF-16 BE"),
            Self::Legacy(enc) => write!(f, "{}", enc.name()),
        }
    }
}

/// Line ending format found in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
    Cr,
}

impl Default for LineEnding {
    fn default() -> Self {
        if cfg!(windows) {
            Self::CrLf
        } else {
            Self::Lf
        }
    }
}

impl std::fmt::Display for LineEnding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lf => write!(f, "LF"),
            Self::CrLf => write!(f, "CRLF"),
            Self::Cr => write!(f, "CR"),
        }
    }
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }
}

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Detects the encoding of raw file bytes.
pub fn detect_encoding(bytes: &[u8]) -> TextEncoding {
    if bytes.starts_with(UTF8_BOM) {
        return TextEncoding::Utf8Bom;
    }
    if bytes.starts_with(UTF16_LE_BOM) {
        return TextEncoding::Utf16Le;
    }
    if bytes.starts_with(UTF16_BE_BOM) {
        return TextEncoding::Utf16Be;
    }
    if std::str::from_utf8(bytes).is_ok() {
        return TextEncoding::Utf8;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    TextEncoding::Legacy(detector.guess(None, true))
}

/// Detects the dominant line ending; files without any newline get `Lf`.
pub fn detect_line_ending(text: &str) -> LineEnding {
    if text.contains("\r\n") {
        LineEnding::CrLf
    } else if text.contains('\r') {
        LineEnding::Cr
    } else {
        LineEnding::Lf
    }
}

/// Rewrites `\r\n` and lone `\r` as `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Converts `\n`-normalized text to the given line ending.
pub fn apply_line_ending(text: &str, ending: LineEnding) -> String {
    match ending {
        LineEnding::Lf => text.to_string(),
        other => text.replace('\n', other.as_str()),
    }
}

/// Decodes raw bytes with the given encoding, dropping any BOM.
///
/// # Errors
///
/// Returns an error if the bytes are not valid in that encoding.
pub fn decode_bytes(bytes: &[u8], encoding: TextEncoding) -> Result<String> {
    match encoding {
        TextEncoding::Utf8 => String::from_utf8(bytes.to_vec()).context("invalid UTF-8 content"),
        TextEncoding::Utf8Bom => {
            let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
            String::from_utf8(content.to_vec()).context("invalid UTF-8 content")
        }
        TextEncoding::Utf16Le => {
            let content = bytes.strip_prefix(UTF16_LE_BOM).unwrap_or(bytes);
            decode_utf16(content, u16::from_le_bytes).context("invalid UTF-16 LE content")
        }
        TextEncoding::Utf16Be => {
            let content = bytes.strip_prefix(UTF16_BE_BOM).unwrap_or(bytes);
            decode_utf16(content, u16::from_be_bytes).context("invalid UTF-16 BE content")
        }
        TextEncoding::Legacy(enc) => {
            let (decoded, had_errors) = enc.decode_without_bom_handling(bytes);
            if had_errors {
                anyhow::bail!("invalid {} content", enc.name());
            }
            Ok(decoded.into_owned())
        }
    }
}

/// Decodes UTF-16 code units. A trailing odd byte is an error.
fn decode_utf16(content: &[u8], to_unit: fn([u8; 2]) -> u16) -> Result<String> {
    if content.len() % 2 != 0 {
        anyhow::bail!("odd byte count ({}) in UTF-16 content", content.len());
    }
    let units: Vec<u16> = content
        .chunks_exact(2)
        .map(|pair| to_unit([pair[0], pair[1]]))
        .collect();
    Ok(String::from_utf16(&units)?)
}

/// Encodes text with the given encoding, writing a BOM where the encoding had one.
///
/// # Errors
///
/// Returns an error if a character cannot be represented in a legacy encoding.
pub fn encode_string(text: &str, encoding: TextEncoding) -> Result<Vec<u8>> {
    match encoding {
        TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
        TextEncoding::Utf8Bom => {
            let mut bytes = UTF8_BOM.to_vec();
            bytes.extend_from_slice(text.as_bytes());
            Ok(bytes)
        }
        TextEncoding::Utf16Le => {
            let mut bytes = UTF16_LE_BOM.to_vec();
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_le_bytes());
            }
            Ok(bytes)
        }
        TextEncoding::Utf16Be => {
            let mut bytes = UTF16_BE_BOM.to_vec();
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_be_bytes());
            }
            Ok(bytes)
        }
        TextEncoding::Legacy(enc) => {
            let (encoded, _, had_errors) = enc.encode(text);
            if had_errors {
                anyhow::bail!("text cannot be represented in {}", enc.name());
            }
            Ok(encoded.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_boms() {
        assert_eq!(detect_encoding(b"\xEF\xBB\xBFhi"), TextEncoding::Utf8Bom);
        assert_eq!(detect_encoding(b"\xFF\xFEh\x00"), TextEncoding::Utf16Le);
        assert_eq!(detect_encoding(b"\xFE\xFF\x00h"), TextEncoding::Utf16Be);
    }

    #[test]
    fn test_detect_plain_utf8() {
        assert_eq!(detect_encoding("héllo".as_bytes()), TextEncoding::Utf8);
        assert_eq!(detect_encoding(b""), TextEncoding::Utf8);
    }

    #[test]
    fn test_detect_legacy_falls_back_to_chardetng() {
        // "café" in windows-1252
        let bytes = b"caf\xE9 au lait, tr\xE8s bien";
        assert!(matches!(detect_encoding(bytes), TextEncoding::Legacy(_)));
    }

    #[test]
    fn test_decode_strips_bom() {
        let text = decode_bytes(b"\xEF\xBB\xBFhello", TextEncoding::Utf8Bom).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_decode_utf16_le() {
        let bytes = encode_string("añb", TextEncoding::Utf16Le).unwrap();
        assert_eq!(&bytes[..2], UTF16_LE_BOM);
        assert_eq!(decode_bytes(&bytes, TextEncoding::Utf16Le).unwrap(), "añb");
    }

    #[test]
    fn test_decode_utf16_odd_length_errors() {
        let err = decode_bytes(b"\xFF\xFEa\x00b", TextEncoding::Utf16Le).unwrap_err();
        assert!(format!("{err:#}").contains("odd byte count"));
        assert!(decode_bytes(b"\xFE\xFF\x00a\x00", TextEncoding::Utf16Be).is_err());
    }

    #[test]
    fn test_decode_invalid_utf8_errors() {
        assert!(decode_bytes(b"\xC3\x28", TextEncoding::Utf8).is_err());
    }

    #[test]
    fn test_legacy_encode_unrepresentable_errors() {
        let latin1 = TextEncoding::Legacy(encoding_rs::WINDOWS_1252);
        assert!(encode_string("日本", latin1).is_err());
        assert_eq!(encode_string("café", latin1).unwrap(), b"caf\xE9");
    }

    #[test]
    fn test_line_ending_detection() {
        assert_eq!(detect_line_ending("a\r\nb"), LineEnding::CrLf);
        assert_eq!(detect_line_ending("a\rb"), LineEnding::Cr);
        assert_eq!(detect_line_ending("a\nb"), LineEnding::Lf);
        assert_eq!(detect_line_ending("ab"), LineEnding::Lf);
    }

    #[test]
    fn test_normalize_and_apply() {
        let normalized = normalize_line_endings("a\r\nb\rc\nd");
        assert_eq!(normalized, "a\nb\nc\nd");
        assert_eq!(apply_line_ending("a\nb", LineEnding::CrLf), "a\r\nb");
        assert_eq!(apply_line_ending("a\nb", LineEnding::Lf), "a\nb");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TextEncoding::Utf8.to_string(), "UTF-8");
        assert_eq!(
            TextEncoding::Legacy(encoding_rs::WINDOWS_1252).to_string(),
            "windows-1252"
        );
        assert_eq!(LineEnding::CrLf.to_string(), "CRLF");
    }
}
