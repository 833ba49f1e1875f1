//! Verse references: extracted cross-references and user-typed passages.

use std::fmt;
use std::str::FromStr;

use crate::canon;
use crate::error::Error;
use crate::patterns::PASSAGE_RE;

/// A pointer to a verse or verse range.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CrossReference {
    /// Canonical book name.
    pub book: String,
    pub chapter: u16,
    pub verse: u16,
    /// Last verse of a range. Always greater than `verse` when present.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub verse_end: Option<u16>,
    /// Start of the target verse text, filled in on request.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub preview: Option<String>,
}

impl CrossReference {
    /// Create a reference. A `verse_end` that does not extend past `verse`
    /// is dropped.
    pub fn new(book: impl Into<String>, chapter: u16, verse: u16, verse_end: Option<u16>) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
            verse_end: verse_end.filter(|&end| end > verse),
            preview: None,
        }
    }

    /// `"{book} {chapter}:{verse}"` or `"{book} {chapter}:{verse}-{end}"`.
    pub fn reference(&self) -> String {
        self.to_string()
    }

    /// Identity used for de-duplication.
    pub fn key(&self) -> (String, u16, u16, Option<u16>) {
        (self.book.clone(), self.chapter, self.verse, self.verse_end)
    }
}

impl fmt::Display for CrossReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)?;
        if let Some(end) = self.verse_end {
            write!(f, "-{end}")?;
        }
        Ok(())
    }
}

/// A topical label and the references filed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KeywordGroup {
    pub label: String,
    pub references: Vec<CrossReference>,
}

/// A passage typed by a user: `Book Chapter[:Verse[-End]]`.
///
/// # Examples
///
/// ```
/// use sword_parse::Passage;
///
/// let p: Passage = "1 kor 13:4-7".parse().unwrap();
/// assert_eq!(p.book, "1 Corinthians");
/// assert_eq!(p.to_string(), "1 Corinthians 13:4-7");
/// assert_eq!(p.engine_key(), "1Corinthians 13:4-7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Passage {
    pub book: &'static str,
    pub chapter: u16,
    pub verse: Option<u16>,
    pub verse_end: Option<u16>,
}

impl Passage {
    /// The key to hand the engine for this passage.
    pub fn engine_key(&self) -> String {
        format_passage(canon::engine_token(self.book), self)
    }
}

fn format_passage(book: &str, p: &Passage) -> String {
    let mut out = format!("{book} {}", p.chapter);
    if let Some(verse) = p.verse {
        out.push_str(&format!(":{verse}"));
        if let Some(end) = p.verse_end {
            out.push_str(&format!("-{end}"));
        }
    }
    out
}

impl fmt::Display for Passage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_passage(self.book, self))
    }
}

impl FromStr for Passage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = |why: &str| Error::InvalidReference(format!("{input}: {why}"));

        let caps = PASSAGE_RE
            .captures(input)
            .ok_or_else(|| invalid("expected Book Chapter[:Verse[-End]]"))?;

        let token = caps["book"].trim();
        if !token.chars().any(char::is_alphabetic) {
            return Err(invalid("missing book name"));
        }
        let book = canon::resolve_book(token, true).ok_or_else(|| invalid("unknown book"))?;

        let chapter: u16 = caps["chapter"].parse().map_err(|_| invalid("bad chapter"))?;
        if chapter == 0 || chapter > book.chapters {
            return Err(invalid("chapter out of range"));
        }

        let verse = match caps.name("verse") {
            Some(m) => Some(m.as_str().parse::<u16>().map_err(|_| invalid("bad verse"))?),
            None => None,
        };
        if verse == Some(0) {
            return Err(invalid("verse out of range"));
        }

        let verse_end = match caps.name("end") {
            Some(m) => Some(m.as_str().parse::<u16>().map_err(|_| invalid("bad verse"))?),
            None => None,
        };
        if let (Some(start), Some(end)) = (verse, verse_end)
            && end < start
        {
            return Err(invalid("range ends before it starts"));
        }

        Ok(Passage {
            book: book.name,
            chapter,
            verse,
            verse_end: verse_end.filter(|&end| Some(end) != verse),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_formatting() {
        assert_eq!(CrossReference::new("John", 3, 16, None).reference(), "John 3:16");
        assert_eq!(
            CrossReference::new("Romans", 5, 6, Some(8)).reference(),
            "Romans 5:6-8"
        );
    }

    #[test]
    fn test_degenerate_range_dropped() {
        assert_eq!(CrossReference::new("John", 3, 16, Some(16)).verse_end, None);
        assert_eq!(CrossReference::new("John", 3, 16, Some(2)).verse_end, None);
    }

    #[test]
    fn test_passage_forms() {
        let p: Passage = "Gen 1".parse().unwrap();
        assert_eq!((p.book, p.chapter, p.verse), ("Genesis", 1, None));

        let p: Passage = "psalmen 23:1".parse().unwrap();
        assert_eq!(p.to_string(), "Psalms 23:1");

        let p: Passage = "Joh 3:16-16".parse().unwrap();
        assert_eq!(p.verse_end, None);
    }

    #[test]
    fn test_passage_errors() {
        assert!("".parse::<Passage>().is_err());
        assert!("Xyzzy 1:1".parse::<Passage>().is_err());
        assert!("Jude 2:1".parse::<Passage>().is_err());
        assert!("Gen 0".parse::<Passage>().is_err());
        assert!("Gen 1:0".parse::<Passage>().is_err());
        assert!("Gen 1:5-3".parse::<Passage>().is_err());
        assert!("1 2".parse::<Passage>().is_err());
    }

    #[test]
    fn test_passage_engine_key() {
        let p: Passage = "Song 2:1".parse().unwrap();
        assert_eq!(p.engine_key(), "Song of Solomon 2:1");
        let p: Passage = "1 Sam 3".parse().unwrap();
        assert_eq!(p.engine_key(), "1Samuel 3");
    }
}
