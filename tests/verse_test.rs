//! Verse lookup tests.
//!
//! Parses captured verse and chapter lookups, with and without Strong's
//! word annotations.

use std::fs;

use sword_parse::verse::{find_verse, parse_lookup};
use sword_parse::{Engine, MemoryEngine, Passage, engine};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("{}/{}", FIXTURES_DIR, name)).unwrap()
}

// ============================================================================
// Annotated Lookups
// ============================================================================

#[test]
fn test_annotated_range() {
    let verses = parse_lookup("John", 3, &fixture("kjv_john_3_16_18.txt"));

    assert_eq!(verses.len(), 3);
    assert_eq!(
        verses.iter().map(|v| v.verse).collect::<Vec<_>>(),
        vec![16, 17, 18]
    );
    assert!(verses.iter().all(|v| v.book == "John" && v.chapter == 3));
}

#[test]
fn test_word_annotations_survive_normalization() {
    let verses = parse_lookup("John", 3, &fixture("kjv_john_3_16_18.txt"));
    let john_3_16 = &verses[0];

    let loved = &john_3_16.words[3];
    assert_eq!(loved.text, "loved");
    assert_eq!(loved.lexicon_numbers, vec!["G25"]);

    let the = &john_3_16.words[4];
    assert_eq!(the.text, "the");
    assert!(!the.is_annotated());

    assert_eq!(
        john_3_16.text,
        "For God so loved the world , that he gave his only begotten Son."
    );
}

#[test]
fn test_multi_number_word_and_entities() {
    let verses = parse_lookup("John", 3, &fixture("kjv_john_3_16_18.txt"));
    let john_3_18 = &verses[2];

    let believeth = john_3_18
        .words
        .iter()
        .find(|w| w.text == "believeth on")
        .unwrap();
    assert_eq!(believeth.lexicon_numbers, vec!["G4100", "G1519"]);
    assert_eq!(
        john_3_18.text,
        "He that believeth on him is not condemned: & he that believeth not is condemned already."
    );
}

#[test]
fn test_text_matches_words() {
    for seg in parse_lookup("John", 3, &fixture("kjv_john_3_16_18.txt")) {
        let joined: Vec<&str> = seg.words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(seg.text, joined.join(" "));
    }
}

// ============================================================================
// Bare-Numbered Lookups
// ============================================================================

#[test]
fn test_bare_numbered_chapter() {
    let verses = parse_lookup("Genesis", 1, &fixture("dutsvv_genesis_1.txt"));

    assert_eq!(verses.len(), 3);
    assert_eq!(verses[0].text, "In het begin schiep God den hemel en de aarde.");
    assert_eq!(verses[2].verse, 3);
    assert_eq!(verses[2].text, "En God zeide: Daar zij licht! en daar werd licht.");
    assert!(verses.iter().all(|v| v.book == "Genesis" && v.chapter == 1));
}

#[test]
fn test_find_verse() {
    let raw = fixture("dutsvv_genesis_1.txt");
    assert_eq!(find_verse("Genesis", 1, 2, &raw).unwrap().words.len(), 13);
    assert!(find_verse("Genesis", 1, 4, &raw).is_none());
}

// ============================================================================
// Engine-Backed Lookups
// ============================================================================

#[test]
fn test_lookup_passage_from_engine() {
    // The engine prints the surrounding verses too; only the range is kept.
    let engine = MemoryEngine::new().with("KJV", "John 3:17-18", fixture("kjv_john_3_16_18.txt"));
    let passage: Passage = "joh 3:17-18".parse().unwrap();

    let verses = engine::lookup_passage(&engine, "KJV", &passage).unwrap();
    assert_eq!(verses.iter().map(|v| v.verse).collect::<Vec<_>>(), vec![17, 18]);
}

#[test]
fn test_lookup_passage_missing_module() {
    let engine = MemoryEngine::new();
    let passage: Passage = "John 3".parse().unwrap();
    assert!(engine::lookup_passage(&engine, "KJV", &passage).is_err());
    assert!(engine.query_text("KJV", &passage.engine_key()).is_err());
}
