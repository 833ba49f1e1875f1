//! Tunable heuristic policies.
//!
//! Several parsers classify text with fixed heuristics (keyword-group labels,
//! betacode detection). The thresholds live here as named constants and as a
//! [`Heuristics`] value so they can be tuned or tested on their own.

/// Minimum alphabetic characters a gap needs to count as a group label.
pub const LABEL_MIN_LETTERS: usize = 3;

/// Character that must appear in a gap for it to count as a group label.
pub const LABEL_TERMINATOR: char = '.';

/// How far into a lexicon entry to look for a curly-braced transliteration
/// when the bracketed one turns out to be betacode.
pub const BETACODE_WINDOW: usize = 200;

/// Maximum characters of verse text kept as a cross-reference preview.
pub const PREVIEW_CHARS: usize = 100;

/// Heuristic thresholds used by the cross-reference and lexicon parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Heuristics {
    pub label_min_letters: usize,
    pub label_terminator: char,
    pub betacode_window: usize,
    pub preview_chars: usize,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            label_min_letters: LABEL_MIN_LETTERS,
            label_terminator: LABEL_TERMINATOR,
            betacode_window: BETACODE_WINDOW,
            preview_chars: PREVIEW_CHARS,
        }
    }
}

impl Heuristics {
    /// Whether a plain-text gap between tagged references is a group label.
    ///
    /// A label has at least `label_min_letters` alphabetic characters and
    /// contains the terminator. Separator punctuation (`"; "`, `", "`) and
    /// short outline fragments fail one test or the other.
    pub fn is_group_label(&self, gap: &str) -> bool {
        let letters = gap.chars().filter(|c| c.is_alphabetic()).count();
        letters >= self.label_min_letters && gap.contains(self.label_terminator)
    }

    /// Whether a bracketed transliteration token is really betacode.
    ///
    /// Betacode is written entirely in upper-case ASCII letters and
    /// punctuation (`A)GAPA/W`); a real transliteration has lower-case letters.
    pub fn is_betacode(&self, token: &str) -> bool {
        let token = token.trim();
        token.chars().any(|c| c.is_ascii_uppercase())
            && token
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_punctuation() || c.is_ascii_digit() || c == ' ')
    }
}
