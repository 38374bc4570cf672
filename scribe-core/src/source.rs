//! Template source reading with byte-order-mark detection.

use std::{fmt, path::Path};

use eyre::{Result, WrapErr, bail};

/// Encoding a source file was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    /// UTF-8, with or without a byte-order mark.
    Utf8 { bom: bool },
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
    /// Fallback code page for BOM-less files that are not valid UTF-8.
    Windows1252,
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceEncoding::Utf8 { bom: true } => write!(f, "utf-8 (bom)"),
            SourceEncoding::Utf8 { bom: false } => write!(f, "utf-8"),
            SourceEncoding::Utf16Le => write!(f, "utf-16le"),
            SourceEncoding::Utf16Be => write!(f, "utf-16be"),
            SourceEncoding::Utf32Le => write!(f, "utf-32le"),
            SourceEncoding::Utf32Be => write!(f, "utf-32be"),
            SourceEncoding::Windows1252 => write!(f, "windows-1252"),
        }
    }
}

/// Decoded template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub text: String,
    pub encoding: SourceEncoding,
}

/// Read and decode a template file.
pub fn read_source(path: impl AsRef<Path>) -> Result<SourceText> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
    decode_source(&bytes).wrap_err_with(|| format!("failed to decode '{}'", path.display()))
}

/// Decode raw bytes, honoring a leading byte-order mark.
pub fn decode_source(bytes: &[u8]) -> Result<SourceText> {
    // UTF-32LE must be checked before UTF-16LE, they share a prefix
    let (text, encoding) = match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => (
            String::from_utf8(rest.to_vec()).wrap_err("invalid utf-8 after byte-order mark")?,
            SourceEncoding::Utf8 { bom: true },
        ),
        [0xFF, 0xFE, 0x00, 0x00, rest @ ..] => (
            decode_utf32(rest, u32::from_le_bytes)?,
            SourceEncoding::Utf32Le,
        ),
        [0x00, 0x00, 0xFE, 0xFF, rest @ ..] => (
            decode_utf32(rest, u32::from_be_bytes)?,
            SourceEncoding::Utf32Be,
        ),
        [0xFF, 0xFE, rest @ ..] => (
            decode_utf16(rest, u16::from_le_bytes)?,
            SourceEncoding::Utf16Le,
        ),
        [0xFE, 0xFF, rest @ ..] => (
            decode_utf16(rest, u16::from_be_bytes)?,
            SourceEncoding::Utf16Be,
        ),
        _ => match std::str::from_utf8(bytes) {
            Ok(text) => (text.to_string(), SourceEncoding::Utf8 { bom: false }),
            Err(_) => (decode_windows_1252(bytes), SourceEncoding::Windows1252),
        },
    };
    Ok(SourceText { text, encoding })
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    if bytes.len() % 2 != 0 {
        bail!("truncated utf-16 input ({} bytes)", bytes.len());
    }
    let units = bytes.chunks_exact(2).map(|c| unit([c[0], c[1]]));
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .wrap_err("invalid utf-16 sequence")
}

fn decode_utf32(bytes: &[u8], unit: fn([u8; 4]) -> u32) -> Result<String> {
    if bytes.len() % 4 != 0 {
        bail!("truncated utf-32 input ({} bytes)", bytes.len());
    }
    bytes
        .chunks_exact(4)
        .map(|c| {
            let value = unit([c[0], c[1], c[2], c[3]]);
            char::from_u32(value).ok_or_else(|| eyre::eyre!("invalid utf-32 code point {value:#x}"))
        })
        .collect()
}

/// Code points for bytes 0x80..=0x9F; the rest of the page matches Latin-1.
const WINDOWS_1252_HIGH: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}', '\u{017D}', '\u{008F}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

fn decode_windows_1252(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x80..=0x9F => WINDOWS_1252_HIGH[(b - 0x80) as usize],
            _ => char::from(b),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_plain_utf8() {
        let src = decode_source("héllo".as_bytes()).unwrap();
        assert_eq!(src.text, "héllo");
        assert_eq!(src.encoding, SourceEncoding::Utf8 { bom: false });
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let src = decode_source(b"\xEF\xBB\xBF<p>hi</p>").unwrap();
        assert_eq!(src.text, "<p>hi</p>");
        assert_eq!(src.encoding, SourceEncoding::Utf8 { bom: true });
    }

    #[test]
    fn test_utf16_le_and_be() {
        let le = decode_source(&[0xFF, 0xFE, b'h', 0, b'i', 0]).unwrap();
        assert_eq!(le.text, "hi");
        assert_eq!(le.encoding, SourceEncoding::Utf16Le);

        let be = decode_source(&[0xFE, 0xFF, 0, b'h', 0, b'i']).unwrap();
        assert_eq!(be.text, "hi");
        assert_eq!(be.encoding, SourceEncoding::Utf16Be);
    }

    #[test]
    fn test_utf32_le() {
        let src = decode_source(&[0xFF, 0xFE, 0, 0, b'x', 0, 0, 0]).unwrap();
        assert_eq!(src.text, "x");
        assert_eq!(src.encoding, SourceEncoding::Utf32Le);
    }

    #[test]
    fn test_truncated_utf16_is_error() {
        assert!(decode_source(&[0xFF, 0xFE, b'h']).is_err());
    }

    #[test]
    fn test_fallback_code_page() {
        // 0x93/0x94 are curly quotes, 0xE9 is e-acute
        let src = decode_source(&[0x93, b'c', b'a', b'f', 0xE9, 0x94]).unwrap();
        assert_eq!(src.text, "\u{201C}caf\u{e9}\u{201D}");
        assert_eq!(src.encoding, SourceEncoding::Windows1252);
    }

    #[test]
    fn test_read_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let err = read_source(temp.path().join("missing.cshtml")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_read_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.cshtml");
        std::fs::write(&path, "<h1>@Title</h1>").unwrap();

        let src = read_source(&path).unwrap();
        assert_eq!(src.text, "<h1>@Title</h1>");
    }
}
