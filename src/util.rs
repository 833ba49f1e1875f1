//! Byte decoding and small string helpers shared by the parsers.

use std::borrow::Cow;

/// Decode engine output to a string, never failing.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. Falls back to Windows-1252 (a superset of Latin-1, used by older modules)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
///
/// # Examples
///
/// ```
/// use sword_parse::decode_text;
///
/// assert_eq!(decode_text("Genesis 1:1".as_bytes()), "Genesis 1:1");
/// // 0xEB is 'ë' in Latin-1 and not valid UTF-8 on its own
/// assert_eq!(decode_text(b"Dani\xEBl"), "Daniël");
/// ```
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Truncate `text` to at most `max_chars` characters, appending `...` when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_borrows() {
        let decoded = decode_text("ἀγαπάω".as_bytes());
        assert!(matches!(decoded, Cow::Borrowed(_)));
        assert_eq!(decoded, "ἀγαπάω");
    }

    #[test]
    fn test_decode_latin1_fallback() {
        assert_eq!(decode_text(b"Haggai \xEF"), "Haggai ï");
    }

    #[test]
    fn test_decode_strips_bom() {
        assert_eq!(decode_text(b"\xEF\xBB\xBFJohn 3:16"), "John 3:16");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("ëëëë", 2), "ëë...");
    }
}
