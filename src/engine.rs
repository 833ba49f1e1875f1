//! The text-retrieval engine, seen from the parsers.
//!
//! Running the engine (command lines, timeouts, retries) belongs to the
//! caller. The parsers only need something that answers "give me the raw
//! output of `key` in `module`", which is the [`Engine`] trait.

use std::collections::HashMap;

use crate::canon;
use crate::error::{Error, Result};
use crate::model::{Passage, VerseSegment};
use crate::util::decode_text;
use crate::verse;

/// A source of raw engine output.
///
/// Implementations must be safe to call from several threads at once if the
/// caller shares them; the parsers never hold on to returned buffers.
pub trait Engine {
    /// Raw output bytes for one lookup.
    fn query(&self, module: &str, key: &str) -> Result<Vec<u8>>;

    /// Like [`query`](Engine::query), decoded to text.
    fn query_text(&self, module: &str, key: &str) -> Result<String> {
        let bytes = self.query(module, key)?;
        Ok(decode_text(&bytes).into_owned())
    }
}

impl<E: Engine + ?Sized> Engine for &E {
    fn query(&self, module: &str, key: &str) -> Result<Vec<u8>> {
        (**self).query(module, key)
    }
}

/// An engine backed by canned responses, keyed by module and lookup key.
///
/// Useful for replaying captured output and for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryEngine {
    responses: HashMap<(String, String), Vec<u8>>,
}

impl MemoryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the output for `key` in `module`.
    pub fn insert(&mut self, module: &str, key: &str, output: impl Into<Vec<u8>>) {
        self.responses
            .insert((module.to_string(), key.to_string()), output.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, module: &str, key: &str, output: impl Into<Vec<u8>>) -> Self {
        self.insert(module, key, output);
        self
    }
}

impl Engine for MemoryEngine {
    fn query(&self, module: &str, key: &str) -> Result<Vec<u8>> {
        self.responses
            .get(&(module.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| Error::engine(module, format!("no output for key {key:?}")))
    }
}

/// The engine key for a single verse of a canonical book.
pub fn verse_key(book: &str, chapter: u16, verse: u16) -> String {
    format!("{} {chapter}:{verse}", canon::engine_token(book))
}

/// Fetch and parse a single verse.
///
/// `Ok(None)` means the engine answered but the verse was not in its output.
pub fn lookup_verse(
    engine: &dyn Engine,
    module: &str,
    book: &str,
    chapter: u16,
    verse: u16,
) -> Result<Option<VerseSegment>> {
    let raw = engine.query_text(module, &verse_key(book, chapter, verse))?;
    Ok(verse::find_verse(book, chapter, verse, &raw))
}

/// Fetch a passage and keep the verses inside its range.
///
/// A chapter-only passage keeps every verse of the chapter.
pub fn lookup_passage(engine: &dyn Engine, module: &str, passage: &Passage) -> Result<Vec<VerseSegment>> {
    let raw = engine.query_text(module, &passage.engine_key())?;
    let first = passage.verse.unwrap_or(1);
    let last = match passage.verse {
        Some(verse) => passage.verse_end.unwrap_or(verse),
        None => u16::MAX,
    };
    Ok(verse::parse_lookup(passage.book, passage.chapter, &raw)
        .into_iter()
        .filter(|seg| seg.book == passage.book && seg.chapter == passage.chapter)
        .filter(|seg| (first..=last).contains(&seg.verse))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_engine_decodes_latin1() {
        let engine = MemoryEngine::new().with("DutSVV", "Daniel 1:1", b"Dani\xEBl".to_vec());
        assert_eq!(engine.query_text("DutSVV", "Daniel 1:1").unwrap(), "Daniël");
    }

    #[test]
    fn test_memory_engine_missing_key() {
        let engine = MemoryEngine::new();
        let err = engine.query("KJV", "John 3:16").unwrap_err();
        assert!(matches!(err, Error::Engine { ref module, .. } if module == "KJV"));
    }

    #[test]
    fn test_lookup_verse_uses_engine_token() {
        let engine = MemoryEngine::new().with(
            "KJV",
            "1Samuel 3:10",
            "1Samuel 3:10: And the LORD came, and stood.\n(KJV)\n",
        );
        let seg = lookup_verse(&engine, "KJV", "1 Samuel", 3, 10).unwrap().unwrap();
        assert_eq!(seg.book, "1 Samuel");
        assert_eq!(seg.text, "And the LORD came, and stood.");
    }

    #[test]
    fn test_lookup_passage_filters_range() {
        let engine = MemoryEngine::new().with(
            "KJV",
            "John 3:16-17",
            "John 3:15: that whosoever\nJohn 3:16: For God so loved\nJohn 3:17: For God sent\n(KJV)\n",
        );
        let passage: Passage = "John 3:16-17".parse().unwrap();
        let verses = lookup_passage(&engine, "KJV", &passage).unwrap();
        assert_eq!(verses.iter().map(|s| s.verse).collect::<Vec<_>>(), vec![16, 17]);
    }

    #[test]
    fn test_lookup_verse_not_in_output() {
        let engine = MemoryEngine::new().with("KJV", "John 3:16", "(KJV)\n");
        assert_eq!(lookup_verse(&engine, "KJV", "John", 3, 16).unwrap(), None);
    }
}
