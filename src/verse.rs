//! Verse lookup output to verse segments.
//!
//! The engine prints one verse per line in one of two shapes:
//!
//! ```text
//! Genesis 1:1: In the beginning God created the heaven and the earth.
//! 2. And the earth was without form, and void;
//! ```
//!
//! Line shapes are recognized on the normalized line, but words are read
//! from the raw line so that inline `<w savlm="strong:...">` annotations
//! survive.

use memchr::memrchr;
use tracing::trace;

use crate::canon;
use crate::markup::{is_attribution_line, normalize_line};
use crate::model::{VerseSegment, Word};
use crate::patterns::{
    CHAPTER_VERSE_RE, LEADING_VERSE_RAW_RE, LEADING_VERSE_RE, LEXICON_NUMBER_RE, VERSE_LINE_RE,
    WORD_TAG_RE,
};

/// Parse a chapter/number string, rejecting 0 and values that overflow.
pub(crate) fn parse_number(s: &str) -> Option<u16> {
    s.trim().parse::<u16>().ok().filter(|&n| n > 0)
}

/// Book name printed on a verse line, resolved to its canonical name.
fn resolve_line_book(token: &str) -> Option<&'static str> {
    canon::from_engine_token(token).or_else(|| canon::resolve(token, true))
}

/// Whether byte offset `pos` of `raw` sits inside an unclosed `<...>`.
fn inside_tag(raw: &str, pos: usize) -> bool {
    let before = &raw.as_bytes()[..pos];
    match (memrchr(b'<', before), memrchr(b'>', before)) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    }
}

/// The raw text following the `chapter:verse` marker of a verse line.
fn raw_remainder(raw_line: &str, chapter: u16, verse: u16) -> Option<&str> {
    CHAPTER_VERSE_RE
        .captures_iter(raw_line)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let same = parse_number(&caps["chapter"]) == Some(chapter)
                && parse_number(&caps["verse"]) == Some(verse);
            (same && !inside_tag(raw_line, whole.start())).then(|| &raw_line[whole.end()..])
        })
        .next()
}

fn push_plain_words(fragment: &str, words: &mut Vec<Word>) {
    let clean = normalize_line(fragment);
    words.extend(clean.split_whitespace().map(Word::plain));
}

/// Split raw verse text into words, keeping lexicon annotations.
///
/// Text inside a `<w>` tag becomes one word carrying every `strong:` number
/// of the tag in order; text outside is split on whitespace into plain
/// words. Tags without usable text produce no word.
///
/// # Examples
///
/// ```
/// use sword_parse::verse::parse_words;
///
/// let words = parse_words(r#"<w savlm="strong:G1063">For</w> God so"#);
/// assert_eq!(words.len(), 3);
/// assert_eq!(words[0].lexicon_numbers, vec!["G1063"]);
/// assert!(words[2].lexicon_numbers.is_empty());
/// ```
pub fn parse_words(raw: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut last = 0;

    for caps in WORD_TAG_RE.captures_iter(raw) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push_plain_words(&raw[last..whole.start()], &mut words);

        let numbers: Vec<String> = LEXICON_NUMBER_RE
            .captures_iter(&caps["attr"])
            .map(|n| n[1].to_string())
            .collect();
        let text = normalize_line(&caps["text"]);
        if !text.is_empty() {
            words.push(Word::annotated(text, numbers));
        }

        last = whole.end();
    }

    push_plain_words(&raw[last..], &mut words);
    words
}

/// Parse the output of a verse, range or chapter lookup.
///
/// `book` and `chapter` are the ones requested; they apply to bare-numbered
/// lines and stand in when a line's own book token cannot be resolved.
/// Lines that match neither shape, or whose text is empty, are skipped.
///
/// # Examples
///
/// ```
/// use sword_parse::verse::parse_lookup;
///
/// let raw = "Genesis 1:1: In the beginning God created the heaven and the earth.\n(KJV)";
/// let verses = parse_lookup("Genesis", 1, raw);
/// assert_eq!(verses.len(), 1);
/// assert_eq!(verses[0].verse, 1);
/// assert_eq!(verses[0].text, "In the beginning God created the heaven and the earth.");
/// ```
pub fn parse_lookup(book: &str, chapter: u16, raw: &str) -> Vec<VerseSegment> {
    let mut segments = Vec::new();

    for raw_line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let normalized = normalize_line(raw_line);
        if normalized.is_empty() || is_attribution_line(&normalized) {
            continue;
        }

        if let Some(caps) = VERSE_LINE_RE.captures(&normalized) {
            let (Some(ch), Some(v)) = (parse_number(&caps["chapter"]), parse_number(&caps["verse"]))
            else {
                trace!("skipping verse line with bad numbers: {}", normalized);
                continue;
            };
            let line_book = resolve_line_book(caps["book"].trim()).unwrap_or(book);

            let words = match raw_remainder(raw_line, ch, v) {
                Some(rest) => parse_words(rest),
                None => caps["text"].split_whitespace().map(Word::plain).collect(),
            };
            if !words.is_empty() {
                segments.push(VerseSegment::from_words(line_book, ch, v, words));
            }
            continue;
        }

        if let Some(caps) = LEADING_VERSE_RE.captures(&normalized) {
            let Some(v) = parse_number(&caps["verse"]) else {
                trace!("skipping verse line with bad number: {}", normalized);
                continue;
            };

            let raw_rest = LEADING_VERSE_RAW_RE
                .captures(raw_line)
                .filter(|raw_caps| parse_number(&raw_caps["verse"]) == Some(v))
                .and_then(|raw_caps| raw_caps.get(0))
                .map(|m| &raw_line[m.end()..]);

            let words = match raw_rest {
                Some(rest) => parse_words(rest),
                None => caps["text"].split_whitespace().map(Word::plain).collect(),
            };
            if !words.is_empty() {
                segments.push(VerseSegment::from_words(book, chapter, v, words));
            }
            continue;
        }

        trace!("skipping unrecognized line: {}", normalized);
    }

    segments
}

/// Parse lookup output and return the requested verse, if present.
pub fn find_verse(book: &str, chapter: u16, verse: u16, raw: &str) -> Option<VerseSegment> {
    parse_lookup(book, chapter, raw)
        .into_iter()
        .find(|seg| seg.chapter == chapter && seg.verse == verse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_reference_line() {
        let segs = parse_lookup(
            "Genesis",
            1,
            "Genesis 1:1: In the beginning God created the heaven and the earth.",
        );
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].book, "Genesis");
        assert_eq!((segs[0].chapter, segs[0].verse), (1, 1));
        assert_eq!(segs[0].text, "In the beginning God created the heaven and the earth.");
    }

    #[test]
    fn test_engine_token_resolved() {
        let segs = parse_lookup("Genesis", 1, "I Kings 2:3 - Keep the charge");
        assert_eq!(segs[0].book, "1 Kings");
        assert_eq!(segs[0].text, "Keep the charge");

        let segs = parse_lookup("Psalms", 23, "Psalmen 23:1: De HEERE is mijn Herder");
        assert_eq!(segs[0].book, "Psalms");
    }

    #[test]
    fn test_unresolved_book_uses_default() {
        let segs = parse_lookup("Genesis", 1, "Qqq 1:2: text here");
        assert_eq!(segs[0].book, "Genesis");
    }

    #[test]
    fn test_leading_verse_number() {
        let raw = "1. In the beginning\n2 And the earth\nno number here\n";
        let segs = parse_lookup("Genesis", 1, raw);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[1].verse, 2);
        assert_eq!(segs[1].book, "Genesis");
        assert_eq!(segs[1].text, "And the earth");
    }

    #[test]
    fn test_zero_and_overflow_skipped() {
        let raw = "Genesis 1:0: nothing\nGenesis 1:70000: too big\n0. nothing";
        assert!(parse_lookup("Genesis", 1, raw).is_empty());
    }

    #[test]
    fn test_strongs_words_from_raw_line() {
        let raw = r#"John 3:16: <w savlm="strong:G3779">For</w> <w savlm="strong:G1063 strong:G2316">God</w> so &amp; loved"#;
        let segs = parse_lookup("John", 3, raw);
        let seg = &segs[0];
        assert_eq!(seg.text, "For God so & loved");
        assert_eq!(seg.words[1].lexicon_numbers, vec!["G1063", "G2316"]);
        assert_eq!(seg.words[2], Word::plain("so"));
    }

    #[test]
    fn test_marker_inside_attribute_ignored() {
        let raw = r#"<verse n="3:16">John 3:16: For God"#;
        let segs = parse_lookup("John", 3, raw);
        assert_eq!(segs[0].text, "For God");
    }

    #[test]
    fn test_empty_word_tag_skipped() {
        let words = parse_words(r#"<w savlm="strong:G3588"></w>the <w lemma="strong:H430">God</w>"#);
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].lexicon_numbers, vec!["H430"]);
    }

    #[test]
    fn test_find_verse() {
        let raw = "John 3:15: that whosoever\nJohn 3:16: For God so loved";
        assert_eq!(find_verse("John", 3, 16, raw).map(|s| s.text), Some("For God so loved".into()));
        assert!(find_verse("John", 3, 17, raw).is_none());
    }
}
