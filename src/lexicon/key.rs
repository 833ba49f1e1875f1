//! Lexicon keys and engine-backed entry lookup.
//!
//! Strong's modules disagree on keys: some want `430`, others `H430`. A
//! lookup tries the bare number first and checks the returned title before
//! falling back to the prefixed form.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::config::Heuristics;
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::model::DictionaryEntry;
use crate::patterns::LEXICON_KEY_RE;

use super::parse_entry_with;

/// Marker the engine prints instead of an entry.
const NOT_FOUND: &str = "Entry not found";

/// A Strong's-style key: optional `G`/`H` prefix and a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LexiconKey {
    pub prefix: Option<char>,
    pub number: String,
}

impl LexiconKey {
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_ascii_uppercase();
        let caps = LEXICON_KEY_RE.captures(&input)?;
        Some(Self {
            prefix: caps
                .name("prefix")
                .and_then(|m| m.as_str().chars().next()),
            number: caps["number"].to_string(),
        })
    }

    /// Bare number, e.g. `430`.
    pub fn numeric(&self) -> &str {
        &self.number
    }

    /// Prefixed form, e.g. `H430` (the bare number when there is no prefix).
    pub fn prefixed(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LexiconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.prefix {
            write!(f, "{prefix}")?;
        }
        f.write_str(&self.number)
    }
}

impl FromStr for LexiconKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| Error::InvalidReference(format!("not a lexicon key: {s}")))
    }
}

fn usable(raw: &str) -> bool {
    !raw.trim().is_empty() && !raw.contains(NOT_FOUND)
}

/// Look up one key in one module.
///
/// `Ok(None)` means the module answered but has no such entry.
pub fn lookup_entry(engine: &dyn Engine, module: &str, key: &str) -> Result<Option<DictionaryEntry>> {
    lookup_entry_with(engine, module, key, &Heuristics::default())
}

/// [`lookup_entry`] with explicit heuristics.
pub fn lookup_entry_with(
    engine: &dyn Engine,
    module: &str,
    key: &str,
    heuristics: &Heuristics,
) -> Result<Option<DictionaryEntry>> {
    let key: LexiconKey = key.parse()?;
    let prefixed = key.prefixed();
    let parse = |raw: &str| parse_entry_with(module, &prefixed, raw.trim(), heuristics);

    let numeric = match engine.query_text(module, key.numeric()) {
        Ok(raw) => Some(raw),
        Err(e) => {
            debug!("numeric lookup of {} in {} failed: {}", prefixed, module, e);
            None
        }
    };
    let title_tag = format!("<title>{prefixed}</title>");
    if let Some(raw) = &numeric
        && usable(raw)
        && raw.contains(&title_tag)
    {
        return Ok(Some(parse(raw.as_str())));
    }

    if key.prefix.is_some() {
        match engine.query_text(module, &prefixed) {
            Ok(raw) if usable(&raw) => return Ok(Some(parse(raw.as_str()))),
            Ok(_) => {}
            Err(e) if numeric.is_none() => return Err(e),
            Err(e) => debug!("prefixed lookup of {} in {} failed: {}", prefixed, module, e),
        }
    }

    match numeric {
        Some(raw) if usable(&raw) => Ok(Some(parse(raw.as_str()))),
        Some(_) => Ok(None),
        None if key.prefix.is_none() => {
            Err(Error::engine(module, format!("lookup of {prefixed} failed")))
        }
        None => Ok(None),
    }
}

/// Look up one key in several modules, skipping modules that fail.
pub fn lookup_entries(engine: &dyn Engine, modules: &[&str], key: &str) -> Vec<DictionaryEntry> {
    modules
        .iter()
        .filter_map(|module| match lookup_entry(engine, module, key) {
            Ok(entry) => entry,
            Err(e) => {
                debug!("dictionary source {} failed: {}", module, e);
                None
            }
        })
        .collect()
}
