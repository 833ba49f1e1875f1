//! The fixed 66-book canon.
//!
//! Abbreviations are the OSIS book identifiers. Aliases cover common English
//! abbreviations and the Dutch book names and numbering used by Dutch
//! translations ("1mo" for Genesis, "psalmen", "openbaring").

/// Metadata for one book of the canon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CanonBook {
    /// Canonical display name.
    pub name: &'static str,
    /// Standard abbreviation (the OSIS identifier).
    pub abbr: &'static str,
    /// Additional accepted spellings, lower-case.
    pub aliases: &'static [&'static str],
    /// Number of chapters.
    pub chapters: u16,
}

const fn book(
    name: &'static str,
    abbr: &'static str,
    aliases: &'static [&'static str],
    chapters: u16,
) -> CanonBook {
    CanonBook {
        name,
        abbr,
        aliases,
        chapters,
    }
}

/// All books in canon order.
pub static BOOKS: [CanonBook; 66] = [
    // Old Testament
    book("Genesis", "Gen", &["ge", "gn", "1mo", "1mos"], 50),
    book("Exodus", "Exod", &["exo", "ex", "2mo", "2mos"], 40),
    book("Leviticus", "Lev", &["le", "lv", "3mo", "3mos"], 27),
    book("Numbers", "Num", &["nu", "nm", "numeri", "4mo", "4mos"], 36),
    book("Deuteronomy", "Deut", &["de", "dt", "deuteronomium", "5mo", "5mos"], 34),
    book("Joshua", "Josh", &["jos", "jsh", "jozua", "joz"], 24),
    book("Judges", "Judg", &["jdg", "jg", "richteren", "richt", "ri"], 21),
    book("Ruth", "Ruth", &["ru", "rth"], 4),
    book("1 Samuel", "1Sam", &["1sa", "1sm", "1 samuël"], 31),
    book("2 Samuel", "2Sam", &["2sa", "2sm", "2 samuël"], 24),
    book("1 Kings", "1Kgs", &["1ki", "1kin", "1kon", "1 koningen"], 22),
    book("2 Kings", "2Kgs", &["2ki", "2kin", "2kon", "2 koningen"], 25),
    book("1 Chronicles", "1Chr", &["1ch", "1chron", "1kron", "1 kronieken"], 29),
    book("2 Chronicles", "2Chr", &["2ch", "2chron", "2kron", "2 kronieken"], 36),
    book("Ezra", "Ezra", &["ezr"], 10),
    book("Nehemiah", "Neh", &["ne", "nehemia"], 13),
    book("Esther", "Esth", &["est", "es"], 10),
    book("Job", "Job", &["jb"], 42),
    book("Psalms", "Ps", &["psa", "psalm", "pss", "psalmen"], 150),
    book("Proverbs", "Prov", &["pr", "pro", "prv", "spreuken", "spr"], 31),
    book("Ecclesiastes", "Eccl", &["ec", "ecc", "qoh", "prediker", "pred"], 12),
    book(
        "Song of Solomon",
        "Song",
        &["so", "sos", "song of songs", "canticles", "hooglied", "hoogl", "hl"],
        8,
    ),
    book("Isaiah", "Isa", &["is", "jesaja", "jes"], 66),
    book("Jeremiah", "Jer", &["je", "jr", "jeremia"], 52),
    book("Lamentations", "Lam", &["la", "klaagliederen", "klaagl"], 5),
    book("Ezekiel", "Ezek", &["eze", "ezk", "ez", "ezechiël", "ezechiel"], 48),
    book("Daniel", "Dan", &["da", "dn", "daniël"], 12),
    book("Hosea", "Hos", &["ho"], 14),
    book("Joel", "Joel", &["jl", "joël"], 3),
    book("Amos", "Amos", &["am"], 9),
    book("Obadiah", "Obad", &["ob", "oba", "obadja"], 1),
    book("Jonah", "Jonah", &["jon", "jona"], 4),
    book("Micah", "Mic", &["mi", "micha"], 7),
    book("Nahum", "Nah", &["na"], 3),
    book("Habakkuk", "Hab", &["hb", "habakuk"], 3),
    book("Zephaniah", "Zeph", &["zep", "zp", "zefanja", "zef"], 3),
    book("Haggai", "Hag", &["hg", "haggaï"], 2),
    book("Zechariah", "Zech", &["zec", "zc", "zacharia", "zach"], 14),
    book("Malachi", "Mal", &["ml", "maleachi"], 4),
    // New Testament
    book("Matthew", "Matt", &["mt", "mat", "mattheüs", "mattheus"], 28),
    book("Mark", "Mark", &["mk", "mr", "mar", "markus", "marcus"], 16),
    book("Luke", "Luke", &["lk", "lu", "luk", "lukas"], 24),
    book("John", "John", &["jn", "jhn", "joh", "johannes"], 21),
    book("Acts", "Acts", &["ac", "act", "handelingen", "hand"], 28),
    book("Romans", "Rom", &["ro", "rm", "romeinen"], 16),
    book("1 Corinthians", "1Cor", &["1co", "1kor", "1 korinthe"], 16),
    book("2 Corinthians", "2Cor", &["2co", "2kor", "2 korinthe"], 13),
    book("Galatians", "Gal", &["ga", "galaten"], 6),
    book("Ephesians", "Eph", &["ep", "efeze", "ef"], 6),
    book("Philippians", "Phil", &["php", "pp", "filippenzen", "fil"], 4),
    book("Colossians", "Col", &["kolossenzen", "kol"], 4),
    book("1 Thessalonians", "1Thess", &["1th", "1thes", "1 thessalonicenzen"], 5),
    book("2 Thessalonians", "2Thess", &["2th", "2thes", "2 thessalonicenzen"], 3),
    book("1 Timothy", "1Tim", &["1ti", "1 timotheüs", "1 timotheus"], 6),
    book("2 Timothy", "2Tim", &["2ti", "2 timotheüs", "2 timotheus"], 4),
    book("Titus", "Titus", &["tit", "ti"], 3),
    book("Philemon", "Phlm", &["phm", "philem", "filemon", "filem"], 1),
    book("Hebrews", "Heb", &["hebr", "hebreeën", "hebreeen"], 13),
    book("James", "Jas", &["jam", "jm", "jakobus", "jak"], 5),
    book("1 Peter", "1Pet", &["1pe", "1pt", "1 petrus"], 5),
    book("2 Peter", "2Pet", &["2pe", "2pt", "2 petrus"], 3),
    book("1 John", "1John", &["1jn", "1jo", "1joh", "1 johannes"], 5),
    book("2 John", "2John", &["2jn", "2jo", "2joh", "2 johannes"], 1),
    book("3 John", "3John", &["3jn", "3jo", "3joh", "3 johannes"], 1),
    book("Jude", "Jude", &["jud", "jd", "judas"], 1),
    book(
        "Revelation",
        "Rev",
        &["re", "rv", "apocalypse", "openbaring", "openb", "revelation of john"],
        22,
    ),
];

/// Book names as the engine's English locale expects them in lookup keys.
///
/// The reverse mapping is derived from this table at initialization.
pub static ENGINE_TOKENS: [(&str, &str); 66] = [
    ("Genesis", "Genesis"),
    ("Exodus", "Exodus"),
    ("Leviticus", "Leviticus"),
    ("Numbers", "Numbers"),
    ("Deuteronomy", "Deuteronomy"),
    ("Joshua", "Joshua"),
    ("Judges", "Judges"),
    ("Ruth", "Ruth"),
    ("1 Samuel", "1Samuel"),
    ("2 Samuel", "2Samuel"),
    ("1 Kings", "1Kings"),
    ("2 Kings", "2Kings"),
    ("1 Chronicles", "1Chronicles"),
    ("2 Chronicles", "2Chronicles"),
    ("Ezra", "Ezra"),
    ("Nehemiah", "Nehemiah"),
    ("Esther", "Esther"),
    ("Job", "Job"),
    ("Psalms", "Psalms"),
    ("Proverbs", "Proverbs"),
    ("Ecclesiastes", "Ecclesiastes"),
    ("Song of Solomon", "Song of Solomon"),
    ("Isaiah", "Isaiah"),
    ("Jeremiah", "Jeremiah"),
    ("Lamentations", "Lamentations"),
    ("Ezekiel", "Ezekiel"),
    ("Daniel", "Daniel"),
    ("Hosea", "Hosea"),
    ("Joel", "Joel"),
    ("Amos", "Amos"),
    ("Obadiah", "Obadiah"),
    ("Jonah", "Jonah"),
    ("Micah", "Micah"),
    ("Nahum", "Nahum"),
    ("Habakkuk", "Habakkuk"),
    ("Zephaniah", "Zephaniah"),
    ("Haggai", "Haggai"),
    ("Zechariah", "Zechariah"),
    ("Malachi", "Malachi"),
    ("Matthew", "Matthew"),
    ("Mark", "Mark"),
    ("Luke", "Luke"),
    ("John", "John"),
    ("Acts", "Acts"),
    ("Romans", "Romans"),
    ("1 Corinthians", "1Corinthians"),
    ("2 Corinthians", "2Corinthians"),
    ("Galatians", "Galatians"),
    ("Ephesians", "Ephesians"),
    ("Philippians", "Philippians"),
    ("Colossians", "Colossians"),
    ("1 Thessalonians", "1Thessalonians"),
    ("2 Thessalonians", "2Thessalonians"),
    ("1 Timothy", "1Timothy"),
    ("2 Timothy", "2Timothy"),
    ("Titus", "Titus"),
    ("Philemon", "Philemon"),
    ("Hebrews", "Hebrews"),
    ("James", "James"),
    ("1 Peter", "1Peter"),
    ("2 Peter", "2Peter"),
    ("1 John", "1John"),
    ("2 John", "2John"),
    ("3 John", "3John"),
    ("Jude", "Jude"),
    ("Revelation", "Revelation"),
];

/// Known verse counts where the default estimate is wrong.
pub static VERSE_COUNT_OVERRIDES: [(&str, u16, u16); 6] = [
    ("Genesis", 1, 31),
    ("Genesis", 10, 32),
    ("Psalms", 23, 6),
    ("Psalms", 119, 176),
    ("John", 3, 36),
    ("Romans", 8, 39),
];

/// Verse count assumed for chapters without an override.
pub const DEFAULT_CHAPTER_VERSES: u16 = 30;
