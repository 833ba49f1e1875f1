//! Output normalization: markup stripping, entity decoding and whitespace.
//!
//! Engine output mixes plain text with OSIS/ThML/HTML fragments, depending on
//! the module and the render filter. The helpers here reduce a raw line to
//! display text. They never fail; anything they cannot interpret is passed
//! through as text.

use std::borrow::Cow;

use memchr::{memchr, memchr_iter};
use regex::NoExpand;

use crate::patterns::TAG_RE;

/// Longest entity body (between `&` and `;`) worth trying to decode.
const MAX_ENTITY_LEN: usize = 32;

/// Replace every markup tag with `replacement`.
///
/// A tag is `<` followed by an optional `/`, `!` or `?`, a letter, and
/// everything up to the next `>`. Comparison operators in prose are left
/// alone.
///
/// # Examples
///
/// ```
/// use sword_parse::markup::strip_tags;
///
/// assert_eq!(strip_tags("<b>God</b> is", ""), "God is");
/// assert_eq!(strip_tags("1 < 2", ""), "1 < 2");
/// ```
pub fn strip_tags<'a>(text: &'a str, replacement: &str) -> Cow<'a, str> {
    if memchr(b'<', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }
    TAG_RE.replace_all(text, NoExpand(replacement))
}

enum Entity {
    Char(char),
    Named(&'static str),
}

fn decode_entity(body: &str) -> Option<Entity> {
    if let Some(num) = body.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        if code == 0 {
            return None;
        }
        return char::from_u32(code).map(Entity::Char);
    }

    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    quick_xml::escape::resolve_html5_entity(body).map(Entity::Named)
}

/// Decode HTML/XML character references.
///
/// Handles the HTML5 named entities plus decimal (`&#233;`) and hexadecimal
/// (`&#xE9;`) references. Unknown or malformed references stay as written.
///
/// # Examples
///
/// ```
/// use sword_parse::markup::unescape_entities;
///
/// assert_eq!(unescape_entities("Dani&euml;l &amp; co"), "Daniël & co");
/// assert_eq!(unescape_entities("&#x3B8;&#949;"), "θε");
/// assert_eq!(unescape_entities("&bogus;"), "&bogus;");
/// ```
pub fn unescape_entities(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    if memchr(b'&', bytes).is_none() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for amp in memchr_iter(b'&', bytes) {
        if amp < last {
            continue;
        }
        let tail = &text[amp + 1..];
        let Some(semi) = tail
            .bytes()
            .take(MAX_ENTITY_LEN + 1)
            .position(|b| b == b';')
        else {
            continue;
        };
        let Some(entity) = decode_entity(&tail[..semi]) else {
            continue;
        };

        out.push_str(&text[last..amp]);
        match entity {
            Entity::Char(c) => out.push(c),
            Entity::Named(s) => out.push_str(s),
        }
        last = amp + 1 + semi + 1;
    }

    if last == 0 {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[last..]);
    Cow::Owned(out)
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether a line is only a parenthesized module name, e.g. `(KJV)`.
///
/// Module names are single identifiers, so `(And God said ...)` is text.
pub fn is_attribution_line(line: &str) -> bool {
    line.trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .is_some_and(|name| {
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '-'))
        })
}

fn clean_once(line: &str) -> String {
    let stripped = strip_tags(line, " ");
    let decoded = unescape_entities(&stripped);
    collapse_whitespace(&decoded)
}

/// Reduce one line (or any fragment) to plain display text.
///
/// Tags are replaced by spaces, entities decoded and whitespace collapsed.
/// Decoding can expose new markup (`&lt;b&gt;`), so the clean-up is repeated
/// until the text stops changing.
pub fn normalize_line(line: &str) -> String {
    // Every changing pass drops an `&` or `<` or shortens the text.
    let mut current = clean_once(line);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Normalize raw engine output into display lines.
///
/// Blank lines and module attribution lines are dropped; every remaining line
/// is passed through [`normalize_line`].
///
/// # Examples
///
/// ```
/// use sword_parse::markup::normalize_lines;
///
/// let raw = "Genesis 1:1: In the <i>beginning</i>\n\n(KJV)\n";
/// assert_eq!(normalize_lines(raw), vec!["Genesis 1:1: In the beginning"]);
/// ```
pub fn normalize_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(normalize_line)
        .filter(|line| !line.is_empty() && !is_attribution_line(line))
        .collect()
}

/// Collapse whitespace within each line and drop the empty lines.
///
/// Used where line structure carries meaning (definition senses), unlike
/// [`normalize_line`] which flattens everything onto one line.
pub fn tidy_lines(text: &str) -> String {
    text.lines()
        .map(collapse_whitespace)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_borrows_plain_text() {
        assert!(matches!(strip_tags("plain text", " "), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_tags_all_forms() {
        let raw = r#"<?xml version="1.0"?><!DOCTYPE x><w savlm="strong:G1">In</w><br/>"#;
        assert_eq!(strip_tags(raw, ""), "In");
    }

    #[test]
    fn test_strip_tags_replacement_is_literal() {
        assert_eq!(strip_tags("a<b>c", "$1"), "a$1c");
    }

    #[test]
    fn test_unescape_numeric() {
        assert_eq!(unescape_entities("&#65;&#x42;&#X43;"), "ABC");
        assert_eq!(unescape_entities("&#0;"), "&#0;");
        assert_eq!(unescape_entities("&#xD800;"), "&#xD800;");
    }

    #[test]
    fn test_unescape_leaves_loose_ampersands() {
        assert_eq!(unescape_entities("salt & light"), "salt & light");
        assert_eq!(unescape_entities("a &b c; d"), "a &b c; d");
        assert!(matches!(unescape_entities("a & b"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_unescape_adjacent() {
        assert_eq!(unescape_entities("&lt;&gt;&quot;&apos;"), "<>\"'");
        assert_eq!(unescape_entities("&&amp;"), "&&");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \t b\n\nc  "), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_attribution_lines() {
        assert!(is_attribution_line("(KJV)"));
        assert!(is_attribution_line(" (StrongsGreek) "));
        assert!(!is_attribution_line("(a) and (b)"));
        assert!(!is_attribution_line("Genesis 1:1 (KJV)"));
        assert!(!is_attribution_line("("));
        assert!(!is_attribution_line("()"));
        assert!(!is_attribution_line("(And God said, Let there be light.)"));
    }

    #[test]
    fn test_normalize_lines_keeps_parenthesized_prose() {
        let raw = "(And God said, Let there be light.)\n(KJV)";
        assert_eq!(normalize_lines(raw), vec!["(And God said, Let there be light.)"]);
    }

    #[test]
    fn test_normalize_line_reaches_fixed_point() {
        assert_eq!(normalize_line("&lt;b&gt;bold&lt;/b&gt;"), "bold");
        assert_eq!(normalize_line("&amp;amp;"), "&");

        let nested = format!("&{}lt;", "amp;".repeat(12));
        assert_eq!(normalize_line(&nested), "<");
    }

    #[test]
    fn test_normalize_lines_drops_attribution_after_markup() {
        let raw = "<p>(KJV)</p>\nJohn 3:16 For God so loved\r\n  \n";
        assert_eq!(normalize_lines(raw), vec!["John 3:16 For God so loved"]);
    }

    #[test]
    fn test_normalize_lines_is_idempotent() {
        let raw = "Gen 1:1 <w>In</w>&nbsp;the &amp;lt;beginning\n(KJV)\n  two   spaces ";
        let once = normalize_lines(raw);
        let twice = normalize_lines(&once.join("\n"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_tidy_lines() {
        assert_eq!(tidy_lines("1.  to  love\n\n   a. greatly \n"), "1. to love\na. greatly");
    }
}
