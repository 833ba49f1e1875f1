//! Fixed abbreviation table for references embedded in module text.
//!
//! Commentary and cross-reference modules abbreviate book names in their own
//! house styles ("Joh", "1Jo", "Ro"). Some of these collide with canon aliases
//! that expand differently ("Jo" is John here but a prefix of Joshua for the
//! fuzzy resolver), so this table is consulted first.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::normalize_key;

static ABBREVIATIONS: &[(&str, &str)] = &[
    ("Joh", "John"),
    ("Jo", "John"),
    ("Jn", "John"),
    ("1Jo", "1 John"),
    ("1Jn", "1 John"),
    ("2Jo", "2 John"),
    ("2Jn", "2 John"),
    ("3Jo", "3 John"),
    ("3Jn", "3 John"),
    ("Ro", "Romans"),
    ("Rom", "Romans"),
    ("1Co", "1 Corinthians"),
    ("1Cor", "1 Corinthians"),
    ("2Co", "2 Corinthians"),
    ("2Cor", "2 Corinthians"),
    ("Ga", "Galatians"),
    ("Gal", "Galatians"),
    ("Eph", "Ephesians"),
    ("Ep", "Ephesians"),
    ("Php", "Philippians"),
    ("Phil", "Philippians"),
    ("Col", "Colossians"),
    ("1Th", "1 Thessalonians"),
    ("1Thes", "1 Thessalonians"),
    ("2Th", "2 Thessalonians"),
    ("2Thes", "2 Thessalonians"),
    ("1Ti", "1 Timothy"),
    ("1Tim", "1 Timothy"),
    ("2Ti", "2 Timothy"),
    ("2Tim", "2 Timothy"),
    ("Tit", "Titus"),
    ("Phm", "Philemon"),
    ("Phlm", "Philemon"),
    ("Heb", "Hebrews"),
    ("Hebr", "Hebrews"),
    ("Jas", "James"),
    ("Jam", "James"),
    ("1Pe", "1 Peter"),
    ("1Pet", "1 Peter"),
    ("1Pt", "1 Peter"),
    ("2Pe", "2 Peter"),
    ("2Pet", "2 Peter"),
    ("2Pt", "2 Peter"),
    ("Jude", "Jude"),
    ("Jud", "Jude"),
    ("Re", "Revelation"),
    ("Rev", "Revelation"),
    ("Mt", "Matthew"),
    ("Matt", "Matthew"),
    ("Mat", "Matthew"),
    ("Mk", "Mark"),
    ("Mar", "Mark"),
    ("Lk", "Luke"),
    ("Luk", "Luke"),
    ("Lu", "Luke"),
    ("Ac", "Acts"),
    ("Act", "Acts"),
    ("Ge", "Genesis"),
    ("Gen", "Genesis"),
    ("Ex", "Exodus"),
    ("Exo", "Exodus"),
    ("Le", "Leviticus"),
    ("Lev", "Leviticus"),
    ("Nu", "Numbers"),
    ("Num", "Numbers"),
    ("De", "Deuteronomy"),
    ("Deu", "Deuteronomy"),
    ("Dt", "Deuteronomy"),
    ("Jos", "Joshua"),
    ("Josh", "Joshua"),
    ("Jdg", "Judges"),
    ("Judg", "Judges"),
    ("Ru", "Ruth"),
    ("1Sa", "1 Samuel"),
    ("1Sam", "1 Samuel"),
    ("2Sa", "2 Samuel"),
    ("2Sam", "2 Samuel"),
    ("1Ki", "1 Kings"),
    ("1Kg", "1 Kings"),
    ("2Ki", "2 Kings"),
    ("2Kg", "2 Kings"),
    ("1Ch", "1 Chronicles"),
    ("1Chr", "1 Chronicles"),
    ("2Ch", "2 Chronicles"),
    ("2Chr", "2 Chronicles"),
    ("Ezr", "Ezra"),
    ("Ne", "Nehemiah"),
    ("Neh", "Nehemiah"),
    ("Es", "Esther"),
    ("Est", "Esther"),
    ("Job", "Job"),
    ("Ps", "Psalms"),
    ("Psa", "Psalms"),
    ("Psalm", "Psalms"),
    ("Pr", "Proverbs"),
    ("Pro", "Proverbs"),
    ("Prov", "Proverbs"),
    ("Ec", "Ecclesiastes"),
    ("Ecc", "Ecclesiastes"),
    ("So", "Song of Solomon"),
    ("Song", "Song of Solomon"),
    ("SoS", "Song of Solomon"),
    ("Isa", "Isaiah"),
    ("Is", "Isaiah"),
    ("Jer", "Jeremiah"),
    ("Je", "Jeremiah"),
    ("La", "Lamentations"),
    ("Lam", "Lamentations"),
    ("Eze", "Ezekiel"),
    ("Ezk", "Ezekiel"),
    ("Ez", "Ezekiel"),
    ("Da", "Daniel"),
    ("Dan", "Daniel"),
    ("Ho", "Hosea"),
    ("Hos", "Hosea"),
    ("Joe", "Joel"),
    ("Am", "Amos"),
    ("Amo", "Amos"),
    ("Ob", "Obadiah"),
    ("Oba", "Obadiah"),
    ("Jon", "Jonah"),
    ("Mic", "Micah"),
    ("Mi", "Micah"),
    ("Na", "Nahum"),
    ("Nah", "Nahum"),
    ("Hab", "Habakkuk"),
    ("Zep", "Zephaniah"),
    ("Zeph", "Zephaniah"),
    ("Hag", "Haggai"),
    ("Zec", "Zechariah"),
    ("Zech", "Zechariah"),
    ("Mal", "Malachi"),
    ("1 Jo", "1 John"),
];

static ABBREVIATION_INDEX: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    for &(abbr, name) in ABBREVIATIONS {
        index.entry(normalize_key(abbr)).or_insert(name);
    }
    index
});

/// Expand a house-style abbreviation to its canonical book name.
pub fn expand_abbreviation(token: &str) -> Option<&'static str> {
    ABBREVIATION_INDEX.get(&normalize_key(token)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canon;

    #[test]
    fn test_every_expansion_is_canonical() {
        for &(_, name) in ABBREVIATIONS {
            assert!(canon::book(name).is_some(), "{name} is not a canon book");
        }
    }

    #[test]
    fn test_expansion_ignores_case_dots_and_spaces() {
        assert_eq!(expand_abbreviation("Joh"), Some("John"));
        assert_eq!(expand_abbreviation("1 Jo"), Some("1 John"));
        assert_eq!(expand_abbreviation("1jo."), Some("1 John"));
        assert_eq!(expand_abbreviation("Kron"), None);
    }

    #[test]
    fn test_table_overrides_fuzzy_prefix() {
        // The fuzzy resolver sends "jo" to Joshua; module text means John.
        assert_eq!(expand_abbreviation("Jo"), Some("John"));
        assert_eq!(canon::resolve("jo", true), Some("Joshua"));
    }
}
