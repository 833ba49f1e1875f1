//! Dictionary and commentary entries.

use super::{CrossReference, KeywordGroup};

/// One lexicon or dictionary entry, reduced to a single shape whatever
/// layout the module emitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DictionaryEntry {
    pub module: String,
    /// Key as requested, e.g. `G25`.
    pub key: String,
    pub title: String,
    /// The original-language word.
    pub headword: String,
    pub transliteration: String,
    pub pronunciation: String,
    pub definition: String,
    pub raw_text: String,
}

impl DictionaryEntry {
    /// Plain-text rendering: title, pronunciation line, blank line, body.
    pub fn formatted(&self) -> String {
        let mut lines = vec![self.title.clone()];
        if !self.pronunciation.is_empty() {
            lines.push(format!("Pronunciation: {}", self.pronunciation));
        }
        lines.push(String::new());
        lines.push(self.definition.clone());
        lines.join("\n")
    }
}

/// Commentary (or cross-reference module) output for one verse.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CommentaryEntry {
    pub module: String,
    pub book: String,
    pub chapter: u16,
    pub verse: u16,
    pub text: String,
    pub raw_text: String,
    pub cross_references: Vec<CrossReference>,
    /// Present only for modules whose output is keyword-grouped.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub keyword_groups: Option<Vec<KeywordGroup>>,
}

impl CommentaryEntry {
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_entry() {
        let entry = DictionaryEntry {
            title: "G25 - ἀγαπάω (agapaō)".into(),
            pronunciation: "ag-ap-ah'-o".into(),
            definition: "to love".into(),
            ..Default::default()
        };
        assert_eq!(
            entry.formatted(),
            "G25 - ἀγαπάω (agapaō)\nPronunciation: ag-ap-ah'-o\n\nto love"
        );
    }
}
