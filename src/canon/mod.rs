//! Canon table and book-name resolution.
//!
//! The canon is a fixed, ordered table of 66 books. Lookup indexes (alias map,
//! engine-token reverse map) are derived from it once, on first use, and are
//! never mutated afterwards.
//!
//! ```
//! use sword_parse::canon;
//!
//! assert_eq!(canon::resolve("gen", true), Some("Genesis"));
//! assert_eq!(canon::resolve("psalmen", true), Some("Psalms"));
//! assert_eq!(canon::resolve("psal", true), Some("Psalms"));
//! assert_eq!(canon::engine_token("1 Kings"), "1Kings");
//! assert_eq!(canon::from_engine_token("1Kings"), Some("1 Kings"));
//! ```

mod abbrev;
mod table;

use std::collections::HashMap;
use std::sync::LazyLock;

pub use abbrev::expand_abbreviation;
pub use table::{BOOKS, CanonBook};

use table::{DEFAULT_CHAPTER_VERSES, ENGINE_TOKENS, VERSE_COUNT_OVERRIDES};

/// Derived lookup structures over [`BOOKS`].
struct CanonIndex {
    by_name: HashMap<&'static str, usize>,
    /// Normalized name/abbreviation/alias -> book index.
    keys: HashMap<String, usize>,
    /// The same keys in insertion order, for deterministic prefix scans.
    ordered_keys: Vec<(String, usize)>,
    forward_tokens: HashMap<&'static str, &'static str>,
    reverse_tokens: HashMap<&'static str, &'static str>,
}

static INDEX: LazyLock<CanonIndex> = LazyLock::new(|| {
    let by_name = BOOKS
        .iter()
        .enumerate()
        .map(|(idx, book)| (book.name, idx))
        .collect();

    let mut keys = HashMap::new();
    let mut ordered_keys = Vec::new();
    let mut add = |key: String, idx: usize| {
        if !keys.contains_key(&key) {
            keys.insert(key.clone(), idx);
            ordered_keys.push((key, idx));
        }
    };

    // Names outrank abbreviations, which outrank aliases.
    for (idx, book) in BOOKS.iter().enumerate() {
        add(normalize_key(book.name), idx);
    }
    for (idx, book) in BOOKS.iter().enumerate() {
        add(normalize_key(book.abbr), idx);
    }
    for (idx, book) in BOOKS.iter().enumerate() {
        for alias in book.aliases {
            add(normalize_key(alias), idx);
        }
    }

    let forward_tokens: HashMap<_, _> = ENGINE_TOKENS.iter().copied().collect();
    let reverse_tokens = ENGINE_TOKENS
        .iter()
        .map(|&(name, token)| (token, name))
        .collect();

    CanonIndex {
        by_name,
        keys,
        ordered_keys,
        forward_tokens,
        reverse_tokens,
    }
});

/// Lower-case and drop periods and spaces: the form all alias keys are stored in.
pub(crate) fn normalize_key(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolve user or engine input to a canonical book name.
///
/// Exact matches against names, abbreviations and aliases are tried first.
/// With `fuzzy`, any key that starts with the normalized input matches, and
/// the earliest book in canon order wins ("jo" resolves to Joshua, not John).
/// Returns `None` when nothing matches.
pub fn resolve(input: &str, fuzzy: bool) -> Option<&'static str> {
    resolve_book(input, fuzzy).map(|book| book.name)
}

/// Like [`resolve`], returning the whole book record.
pub fn resolve_book(input: &str, fuzzy: bool) -> Option<&'static CanonBook> {
    let key = normalize_key(input);
    if key.is_empty() {
        return None;
    }

    if let Some(&idx) = INDEX.keys.get(&key) {
        return Some(&BOOKS[idx]);
    }

    if !fuzzy {
        return None;
    }

    INDEX
        .ordered_keys
        .iter()
        .filter(|(candidate, _)| candidate.starts_with(&key))
        .map(|&(_, idx)| idx)
        .min()
        .map(|idx| &BOOKS[idx])
}

/// Look up a book by its exact canonical name.
pub fn book(name: &str) -> Option<&'static CanonBook> {
    INDEX.by_name.get(name).map(|&idx| &BOOKS[idx])
}

/// Position of a book in canon order, or `None` if the name is not canonical.
pub fn book_index(name: &str) -> Option<usize> {
    INDEX.by_name.get(name).copied()
}

/// Number of chapters in a book, 0 for unknown names.
pub fn chapter_count(name: &str) -> u16 {
    book(name).map_or(0, |book| book.chapters)
}

/// Estimated number of verses in a chapter, 0 when the chapter does not exist.
pub fn chapter_verses(name: &str, chapter: u16) -> u16 {
    if chapter == 0 || chapter > chapter_count(name) {
        return 0;
    }
    VERSE_COUNT_OVERRIDES
        .iter()
        .find(|&&(book, ch, _)| book == name && ch == chapter)
        .map_or(DEFAULT_CHAPTER_VERSES, |&(_, _, verses)| verses)
}

/// The book after `name` in canon order.
pub fn next_book(name: &str) -> Option<&'static str> {
    let idx = book_index(name)?;
    BOOKS.get(idx + 1).map(|book| book.name)
}

/// The book before `name` in canon order.
pub fn prev_book(name: &str) -> Option<&'static str> {
    let idx = book_index(name)?;
    idx.checked_sub(1).map(|prev| BOOKS[prev].name)
}

/// Search books by name, abbreviation or alias.
///
/// Prefix matches rank ahead of substring matches; ties keep canon order. An
/// empty query returns the first `limit` books.
pub fn search_books(query: &str, limit: usize) -> Vec<&'static CanonBook> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return BOOKS.iter().take(limit).collect();
    }

    let haystack = |book: &CanonBook| -> Vec<String> {
        [book.name, book.abbr]
            .into_iter()
            .chain(book.aliases.iter().copied())
            .map(str::to_lowercase)
            .collect()
    };

    let mut prefix = Vec::new();
    let mut substring = Vec::new();
    for book in &BOOKS {
        let hay = haystack(book);
        if hay.iter().any(|h| h.starts_with(&needle)) {
            prefix.push(book);
        } else if hay.iter().any(|h| h.contains(&needle)) {
            substring.push(book);
        }
    }

    prefix.into_iter().chain(substring).take(limit).collect()
}

/// The engine's lookup token for a canonical name.
///
/// Falls back to the book's abbreviation when no token is mapped, and to the
/// input itself for names outside the canon.
pub fn engine_token(name: &str) -> &str {
    if let Some(&token) = INDEX.forward_tokens.get(name) {
        return token;
    }
    book(name).map_or(name, |book| book.abbr)
}

/// Map a book name as printed by the engine back to its canonical name.
///
/// Accepts the lookup tokens themselves and the Roman-numeral forms some
/// engine locales print ("I Samuel", "III John").
pub fn from_engine_token(token: &str) -> Option<&'static str> {
    let token = token.trim();
    if let Some(&name) = INDEX.reverse_tokens.get(token) {
        return Some(name);
    }
    let arabic = roman_prefix_to_arabic(token)?;
    INDEX.reverse_tokens.get(arabic.as_str()).copied()
}

fn roman_prefix_to_arabic(token: &str) -> Option<String> {
    let (numeral, rest) = token.split_once(' ')?;
    let digit = match numeral {
        "I" => '1',
        "II" => '2',
        "III" => '3',
        _ => return None,
    };
    Some(format!("{digit}{}", rest.trim()))
}

/// Resolve a book token found inside module text.
///
/// Priority: the fixed abbreviation table, then the alias resolver (fuzzy),
/// then the engine-token reverse table. The order matters for abbreviations
/// that exist in several tables with different expansions.
pub fn resolve_reference_book(token: &str) -> Option<&'static str> {
    let token = token.trim().trim_end_matches('.');
    if token.is_empty() {
        return None;
    }
    expand_abbreviation(token)
        .or_else(|| resolve(token, true))
        .or_else(|| from_engine_token(token))
}
