//! Cached regex patterns for engine output parsing.
//!
//! Uses LazyLock to compile patterns once on first use. Every pattern here is
//! a literal, so compilation cannot fail at runtime.

use regex::Regex;
use std::sync::LazyLock;

// === Markup ===

/// Matches a markup tag: `<` then optional `/`, `!` or `?`, a letter, up to `>`
pub static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[/!?]?[A-Za-z][^<>]*>").unwrap());

/// Matches `<br>`, `<br/>` and `<br />`
pub static BREAK_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

/// Matches opening and closing `<p>` tags
pub static PARAGRAPH_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?p(?:\s[^>]*)?>").unwrap());

/// Matches runs of three or more newlines
pub static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Matches runs of spaces and tabs
pub static SPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

// === Verse lines ===

/// Matches "Book Chapter:Verse[:-]? text" on a normalized line
pub static VERSE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<book>[\w\s]+?)\s+(?P<chapter>\d+):(?P<verse>\d+)\s*[:\-]?\s*(?P<text>.*)$")
        .unwrap()
});

/// Matches "N. text" or "N text" on a normalized line
pub static LEADING_VERSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<verse>\d+)[.:\s]+(?P<text>.*)$").unwrap());

/// Matches "Chapter:Verse" plus its separator inside a raw line
pub static CHAPTER_VERSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<chapter>\d+):(?P<verse>\d+)\s*[:\-]?\s*").unwrap());

/// Matches a leading verse number plus its separator at the start of a raw line
pub static LEADING_VERSE_RAW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?P<verse>\d+)[.:\s]+").unwrap());

/// Matches a "Book C:V:" header at the start of a text fragment
pub static VERSE_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[\w\s]+?\s+\d+:\d+\s*[:\-]?\s*").unwrap());

// === Word annotations ===

/// Matches `<w savlm="...">word</w>` (or `lemma=`), capturing attribute and text
pub static WORD_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<w\s[^>]*?\b(?:savlm|lemma)\s*=\s*"(?P<attr>[^"]*)"[^>]*>(?P<text>[^<]*)</w>"#)
        .unwrap()
});

/// Matches one `strong:G1234` token inside a word attribute
pub static LEXICON_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"strong:([GH]\d+)").unwrap());

// === Cross-references ===

/// Matches any tag carrying a `passage="..."` attribute
pub static PASSAGE_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<[A-Za-z][\w:]*\s[^>]*?\bpassage\s*=\s*"(?P<passage>[^"]*)"[^>]*>"#).unwrap()
});

/// Matches `<note type="crossReference">...</note>`, capturing the inner text
pub static XREF_NOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<note\b[^>]*\btype\s*=\s*"crossReference"[^>]*>(?P<inner>.*?)</note>"#)
        .unwrap()
});

/// Matches a free-floating reference like "1 Kron. 1:4" or "Song of Solomon 2:1-3"
pub static FREE_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<book>(?:[1-3]\s*)?\p{L}+(?:\s+of\s+\p{L}+)?)\.?\s*(?P<chapter>\d+)\s*:\s*(?P<verse>\d+)(?:\s*[-–]\s*(?P<end>\d+))?",
    )
    .unwrap()
});

/// Matches a fully stated passage-list entry, allowing `.` as separator
pub static PASSAGE_FULL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<book>(?:[1-3]\s*)?\p{L}+(?:\s+of\s+\p{L}+)?)\.?\s*(?P<chapter>\d+)\s*[:.]\s*(?P<verse>\d+)(?:\s*[-–]\s*(?P<end>\d+))?",
    )
    .unwrap()
});

/// Matches a passage-list entry that restates only chapter and verse
pub static PASSAGE_CHAPTER_VERSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<chapter>\d+)\s*[:.]\s*(?P<verse>\d+)(?:\s*[-–]\s*(?P<end>\d+))?").unwrap()
});

/// Matches a passage-list entry naming a book and at most a chapter
pub static PASSAGE_BOOK_CHAPTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<book>(?:[1-3]\s*)?\p{L}+(?:\s+of\s+\p{L}+)?)\.?(?:\s*\d+)?\s*$").unwrap()
});

/// Matches a passage-list entry that is only a verse or verse range
pub static PASSAGE_VERSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<verse>\d+)(?:\s*[-–]\s*(?P<end>\d+))?").unwrap());

/// Matches an opening (or self-closing) tag carrying an `osisRef` key
pub static TAGGED_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<(?P<tag>[A-Za-z][\w:]*)\b[^>]*?\bosisRef\s*=\s*"(?P<key>[^"]*)"[^>]*?(?P<selfclose>/)?>"#,
    )
    .unwrap()
});

// === Dictionary: structured dialect ===

/// Matches the `<entryFree>` wrapper
pub static ENTRY_FREE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<entryFree\b[^>]*>(?P<body>.*?)</entryFree>").unwrap());

/// Matches a `<title>` element
pub static TITLE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<title\b[^>]*>.*?</title>").unwrap());

/// Matches `<orth ...>word</orth>`, capturing attributes and text
pub static ORTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<orth\b(?P<attrs>[^>]*)>(?P<text>[^<]+)</orth>").unwrap());

/// Matches the transliteration flag on an `<orth>` tag
pub static TRANS_TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\btype\s*=\s*"trans""#).unwrap());

/// Matches `<foreign>word</foreign>`
pub static FOREIGN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<foreign\b[^>]*>(?P<text>[^<]+)</foreign>").unwrap());

/// Matches `<pron>...</pron>`
pub static PRON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<pron\b[^>]*>(?P<text>[^<]+)</pron>").unwrap());

/// Matches `<def>...</def>`, nested tags included
pub static DEF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<def\b[^>]*>(?P<body>.*?)</def>").unwrap());

/// Matches inline reference/highlight/foreign tags whose inner text is kept
pub static INLINE_TEXT_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(?:ref|hi|foreign|emph)\b[^>]*>(?P<text>[^<]*)</(?:ref|hi|foreign|emph)>")
        .unwrap()
});

/// Matches `<note>...</note>` footnotes
pub static NOTE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<note\b[^>]*>.*?</note>").unwrap());

/// Matches an opening or closing `<sense>` tag
pub static SENSE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(?P<close>/)?sense\b(?P<attrs>[^>]*)>").unwrap());

/// Matches an `n="..."` attribute
pub static N_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bn\s*=\s*"(?P<n>[^"]*)""#).unwrap());

/// Matches `<lb/>` line breaks
pub static LB_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<lb\b[^>]*>").unwrap());

// === Dictionary: loosely tagged dialect ===

/// Matches `<b>...</b>`
pub static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<b>(?P<text>.*?)</b>").unwrap());

/// Matches `<i>...</i>`
pub static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<i>(?P<text>.*?)</i>").unwrap());

/// Matches `<a ...>...</a>`
pub static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b[^>]*>(?P<text>.*?)</a>").unwrap());

/// Matches a `[bracketed]` token
pub static BRACKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(?P<text>[^\]]+)\]").unwrap());

/// Matches a `{curly}` token
pub static CURLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?P<text>[^}]+)\}").unwrap());

// === Dictionary: plain Strong's dialect ===

/// Matches "<id>: <number> '<transliteration>' <pronunciation>"
pub static PLAIN_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<id>[^:\s]+):\s*(?P<number>\d+)\s+'(?P<translit>[^']*)'\s*(?P<pron>.*)$")
        .unwrap()
});

/// Matches a lexicon key such as "G25", "H430" or "430"
pub static LEXICON_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<prefix>[GH])?(?P<number>\d+)$").unwrap());

// === Search listings ===

/// Matches one "Book Chapter:Verse" search reference
pub static SEARCH_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<book>[\w\s]+?)\s+(?P<chapter>\d+):(?P<verse>\d+)\s*$").unwrap()
});

/// Matches the "-- N matches total" footer
pub static SEARCH_TOTAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--\s*(?P<total>\d+)\s+match").unwrap());

// === User references ===

/// Matches "Book Chapter[:Verse[-End]]"
pub static PASSAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<book>[\w\s.]+?)\s*(?P<chapter>\d+)(?::(?P<verse>\d+)(?:\s*-\s*(?P<end>\d+))?)?$")
        .unwrap()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_ignores_bare_angle_brackets() {
        assert!(TAG_RE.is_match("<w savlm=\"strong:G1\">"));
        assert!(TAG_RE.is_match("</note>"));
        assert!(!TAG_RE.is_match("1 < 2 > 0"));
    }

    #[test]
    fn test_free_ref_multiword_book() {
        let caps = FREE_REF_RE.captures("see Song of Solomon 2:1-3").unwrap();
        assert_eq!(&caps["book"], "Song of Solomon");
        assert_eq!(&caps["end"], "3");
    }

    #[test]
    fn test_tagged_ref_self_closing() {
        let caps = TAGGED_REF_RE.captures(r#"<reference osisRef="Gen.1.1"/>"#).unwrap();
        assert_eq!(&caps["key"], "Gen.1.1");
        assert!(caps.name("selfclose").is_some());

        let caps = TAGGED_REF_RE.captures(r#"<reference osisRef="Gen.1.1">Ge 1:1</reference>"#).unwrap();
        assert!(caps.name("selfclose").is_none());
    }
}
