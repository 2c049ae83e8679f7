//! Text decoding for configuration files.
//!
//! Handles:
//! - BOM detection (UTF-8, UTF-16 LE/BE)
//! - UTF-8 fast-path with strict validation
//! - Fallback encoding detection using chardetng
//! - Replacement characters for undecodable sequences

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::path::Path;

/// Decode raw bytes into text, returning the content and the label of the
/// encoding used.
///
/// Strategy:
/// 1. A BOM wins (and is stripped)
/// 2. Strict UTF-8
/// 3. chardetng guess, decoded with replacement
pub fn decode_text(bytes: &[u8]) -> (String, &'static str) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (decoded, _had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return (decoded.into_owned(), encoding.name());
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return (text.to_string(), "UTF-8");
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let (decoded, _encoding_used, _had_errors) = encoding.decode(bytes);
    (decoded.into_owned(), encoding.name())
}

/// Read a file and decode it with [`decode_text`].
pub fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    let (content, encoding) = decode_text(&bytes);
    if encoding != "UTF-8" {
        tracing::debug!("Decoded '{}' as {}", path.display(), encoding);
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_decode_utf8() {
        let (content, encoding) = decode_text("key = valüe".as_bytes());
        assert_eq!(content, "key = valüe");
        assert_eq!(encoding, "UTF-8");
    }

    #[test]
    fn test_decode_strips_utf8_bom() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice(b"[flow_setup]");
        let (content, encoding) = decode_text(&bytes);
        assert_eq!(content, "[flow_setup]");
        assert_eq!(encoding, "UTF-8");
    }

    #[test]
    fn test_decode_utf16_le_bom() {
        let mut bytes = vec![0xff, 0xfe];
        for unit in "a=1".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let (content, encoding) = decode_text(&bytes);
        assert_eq!(content, "a=1");
        assert_eq!(encoding, "UTF-16LE");
    }

    #[test]
    fn test_read_text_latin1_fallback() {
        let mut file = NamedTempFile::new().unwrap();
        // "café" in windows-1252
        file.write_all(&[b'c', b'a', b'f', 0xe9]).unwrap();
        file.flush().unwrap();

        let content = read_text(file.path()).unwrap();
        assert!(content.starts_with("caf"));
        assert_eq!(content.chars().count(), 4);
    }
}
