//! Dictionary and lexicon entries.
//!
//! Lexicon modules emit one of three unrelated layouts for an entry:
//!
//! - [`Dialect::Structured`]: TEI-like markup inside `<entryFree>`
//! - [`Dialect::Tagged`]: loose `<b>`/`<i>`/`<br>` HTML
//! - [`Dialect::Plain`]: an untagged `id: number 'translit' pron'` header
//!   followed by definition lines
//!
//! Each dialect is a pure try-parse over the raw text. They are tried in
//! that order, and the first one that yields a headword or a definition
//! wins. If none does, the whole text is flattened into the definition.

mod key;
mod plain;
mod structured;
mod tagged;

use tracing::debug;

use crate::config::Heuristics;
use crate::markup::normalize_line;
use crate::model::DictionaryEntry;

pub use key::{LexiconKey, lookup_entries, lookup_entry, lookup_entry_with};

/// A raw entry layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Structured,
    Tagged,
    Plain,
}

/// Fields a dialect extracts from an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFields {
    pub headword: String,
    pub transliteration: String,
    pub pronunciation: String,
    pub definition: String,
}

impl EntryFields {
    fn has_content(&self) -> bool {
        !self.headword.is_empty() || !self.definition.is_empty()
    }
}

/// Outcome of trying one dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parse {
    Parsed(EntryFields),
    Unrecognized,
}

impl Dialect {
    /// Detection order.
    pub const ALL: [Dialect; 3] = [Dialect::Structured, Dialect::Tagged, Dialect::Plain];

    pub fn try_parse(self, raw: &str, heuristics: &Heuristics) -> Parse {
        match self {
            Dialect::Structured => structured::try_parse(raw),
            Dialect::Tagged => tagged::try_parse(raw, heuristics),
            Dialect::Plain => plain::try_parse(raw),
        }
    }
}

/// The first dialect that recognizes `raw` and extracts something from it.
pub fn detect(raw: &str, heuristics: &Heuristics) -> Option<(Dialect, EntryFields)> {
    Dialect::ALL.into_iter().find_map(|dialect| match dialect.try_parse(raw, heuristics) {
        Parse::Parsed(fields) if fields.has_content() => Some((dialect, fields)),
        _ => None,
    })
}

/// `"{key} - {headword} ({transliteration})"`, degrading to whichever part
/// is present, or the bare key.
pub fn synthesize_title(key: &str, headword: &str, transliteration: &str) -> String {
    match (headword.is_empty(), transliteration.is_empty()) {
        (false, false) => format!("{key} - {headword} ({transliteration})"),
        (false, true) => format!("{key} - {headword}"),
        (true, false) => format!("{key} - {transliteration}"),
        (true, true) => key.to_string(),
    }
}

/// Parse one raw entry with default heuristics.
///
/// # Examples
///
/// ```
/// use sword_parse::lexicon::parse_entry;
///
/// let raw = r#"<entryFree n="25"><title>G25</title><orth>ἀγαπάω</orth>
/// <orth type="trans">agapaō</orth><def><sense n="1">to love</sense></def></entryFree>"#;
/// let entry = parse_entry("StrongsRealGreek", "G25", raw);
/// assert_eq!(entry.title, "G25 - ἀγαπάω (agapaō)");
/// assert!(entry.definition.lines().any(|l| l == "1. to love"));
/// ```
pub fn parse_entry(module: &str, key: &str, raw: &str) -> DictionaryEntry {
    parse_entry_with(module, key, raw, &Heuristics::default())
}

/// Parse one raw entry.
pub fn parse_entry_with(module: &str, key: &str, raw: &str, heuristics: &Heuristics) -> DictionaryEntry {
    let fields = match detect(raw, heuristics) {
        Some((dialect, fields)) => {
            debug!("{} entry {} parsed as {:?}", module, key, dialect);
            fields
        }
        None => {
            debug!("{} entry {} matched no dialect, flattening", module, key);
            EntryFields {
                definition: normalize_line(raw),
                ..EntryFields::default()
            }
        }
    };

    DictionaryEntry {
        module: module.to_string(),
        key: key.to_string(),
        title: synthesize_title(key, &fields.headword, &fields.transliteration),
        headword: fields.headword,
        transliteration: fields.transliteration,
        pronunciation: fields.pronunciation,
        definition: fields.definition,
        raw_text: raw.to_string(),
    }
}
