//! Verse text, annotated words and search hits.

/// One word of verse text with the lexicon numbers attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Word {
    pub text: String,
    /// Lexicon numbers such as `G25` or `H430`, in encounter order.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub lexicon_numbers: Vec<String>,
}

impl Word {
    /// A word with no annotation.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lexicon_numbers: Vec::new(),
        }
    }

    /// A word carrying lexicon numbers.
    pub fn annotated(text: impl Into<String>, lexicon_numbers: Vec<String>) -> Self {
        Self {
            text: text.into(),
            lexicon_numbers,
        }
    }

    pub fn is_annotated(&self) -> bool {
        !self.lexicon_numbers.is_empty()
    }
}

/// A single verse from a lookup.
///
/// `text` is always the space-joined text of `words`, so the two never
/// disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VerseSegment {
    /// Canonical book name.
    pub book: String,
    pub chapter: u16,
    pub verse: u16,
    pub text: String,
    pub words: Vec<Word>,
}

impl VerseSegment {
    /// Build a segment from its words, deriving `text`.
    pub fn from_words(book: impl Into<String>, chapter: u16, verse: u16, words: Vec<Word>) -> Self {
        let text = words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            book: book.into(),
            chapter,
            verse,
            text,
            words,
        }
    }

    /// `"{book} {chapter}:{verse}"`
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// One hit from a search listing.
///
/// `match_start..match_end` is a byte range into `snippet`; both are zero
/// when no snippet was fetched or the query text was not found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchHit {
    pub book: String,
    pub chapter: u16,
    pub verse: u16,
    pub snippet: String,
    pub match_start: usize,
    pub match_end: usize,
}

impl SearchHit {
    /// A hit with no snippet yet.
    pub fn new(book: impl Into<String>, chapter: u16, verse: u16) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
            snippet: String::new(),
            match_start: 0,
            match_end: 0,
        }
    }

    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }

    /// The matched part of the snippet, if any.
    pub fn matched_text(&self) -> Option<&str> {
        if self.match_end <= self.match_start {
            return None;
        }
        self.snippet.get(self.match_start..self.match_end)
    }
}
