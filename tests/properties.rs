//! Property tests for the parsing invariants.

use proptest::prelude::*;

use sword_parse::canon::{self, BOOKS};
use sword_parse::markup::normalize_line;
use sword_parse::verse::parse_lookup;
use sword_parse::xref::{self, SourceKind};
use sword_parse::CrossReference;

fn book_name() -> impl Strategy<Value = &'static str> {
    (0..BOOKS.len()).prop_map(|i| BOOKS[i].name)
}

/// A verse word, optionally wrapped in a Strong's tag.
fn raw_word() -> impl Strategy<Value = String> {
    ("[A-Za-z;,.]{1,8}", proptest::option::of(1u32..6000)).prop_map(|(word, number)| match number {
        Some(n) => format!(r#"<w savlm="strong:G{n}">{word}</w>"#),
        None => word,
    })
}

#[test]
fn test_canon_identity() {
    for book in BOOKS.iter() {
        assert_eq!(canon::resolve(book.name, false), Some(book.name));
        assert_eq!(canon::resolve(book.abbr, false), Some(book.name));
        assert_eq!(canon::from_engine_token(canon::engine_token(book.name)), Some(book.name));
    }
}

proptest! {
    #[test]
    fn normalizer_is_idempotent(line in r"[a-z <>/&;#x0-9]{0,40}") {
        let once = normalize_line(&line);
        prop_assert_eq!(normalize_line(&once), once);
    }

    #[test]
    fn normalizer_handles_markup_fragments(
        parts in proptest::collection::vec(
            prop_oneof![
                Just("<b>".to_string()),
                Just("</i>".to_string()),
                Just("&amp;".to_string()),
                Just("&lt;b&gt;".to_string()),
                Just("&#233;".to_string()),
                "[a-z ]{1,6}",
            ],
            0..12,
        )
    ) {
        let line = parts.concat();
        let once = normalize_line(&line);
        prop_assert!(!once.contains("<b>"));
        prop_assert_eq!(normalize_line(&once), once);
    }

    #[test]
    fn verse_text_is_joined_words(words in proptest::collection::vec(raw_word(), 1..20)) {
        let raw = format!("Genesis 1:1: {}", words.join(" "));
        let segments = parse_lookup("Genesis", 1, &raw);
        prop_assert_eq!(segments.len(), 1);

        let seg = &segments[0];
        let joined: Vec<&str> = seg.words.iter().map(|w| w.text.as_str()).collect();
        prop_assert_eq!(&seg.text, &joined.join(" ").split_whitespace().collect::<Vec<_>>().join(" "));
        prop_assert_eq!(seg.words.len(), words.len());
    }

    #[test]
    fn reference_round_trips_through_notes(
        book in book_name(),
        chapter in 1u16..=150,
        verse in 1u16..=176,
        span in proptest::option::of(1u16..20),
    ) {
        let original = CrossReference::new(book, chapter, verse, span.map(|s| verse + s));
        let raw = format!(r#"<note type="crossReference">{}</note>"#, original.reference());

        let refs = xref::extract(&raw, SourceKind::BibleNotes);
        prop_assert_eq!(refs.len(), 1);
        prop_assert_eq!(refs[0].key(), original.key());
    }

    #[test]
    fn fuzzy_resolution_prefers_canon_order(len in 1usize..4, idx in 0..BOOKS.len()) {
        let name = BOOKS[idx].name.to_lowercase().replace(' ', "");
        let prefix: String = name.chars().take(len).collect();
        if let Some(found) = canon::resolve(&prefix, true) {
            let found_idx = canon::book_index(found).unwrap();
            prop_assert!(found_idx <= idx || canon::resolve(&prefix, false).is_some());
        }
    }
}
