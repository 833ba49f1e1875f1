//! Passage lists from `passage="..."` attributes.
//!
//! A list like `"Joh 11:51,52, 1Jo 2:2, Ro 5:6,8; 8:32"` states book and
//! chapter once; later entries restate only what changes.

use tracing::debug;

use crate::canon::resolve_reference_book;
use crate::model::CrossReference;
use crate::patterns::{
    PASSAGE_BOOK_CHAPTER_RE, PASSAGE_CHAPTER_VERSE_RE, PASSAGE_FULL_RE, PASSAGE_VERSE_RE,
};
use crate::verse::parse_number;

fn parse_end(m: Option<regex::Match<'_>>) -> Option<u16> {
    m.and_then(|m| parse_number(m.as_str()))
}

/// Expand a passage list into references.
///
/// Entries are separated by `,` or `;`. An entry with a book starts a new
/// context, `C:V` changes the chapter, and a bare `V` or `V-E` reuses both.
/// An entry whose book cannot be resolved is dropped together with the
/// entries that inherit from it.
///
/// # Examples
///
/// ```
/// use sword_parse::xref::parse_passage_list;
///
/// let refs = parse_passage_list("John 11:51,52, 1 John 2:2");
/// let refs: Vec<String> = refs.iter().map(|r| r.reference()).collect();
/// assert_eq!(refs, ["John 11:51", "John 11:52", "1 John 2:2"]);
/// ```
pub fn parse_passage_list(passage: &str) -> Vec<CrossReference> {
    let mut refs = Vec::new();
    let mut book: Option<&'static str> = None;
    let mut chapter: Option<u16> = None;

    for part in passage.split([',', ';']).map(str::trim).filter(|p| !p.is_empty()) {
        if let Some(caps) = PASSAGE_FULL_RE.captures(part) {
            let token = &caps["book"];
            let numbers = (parse_number(&caps["chapter"]), parse_number(&caps["verse"]));
            match (resolve_reference_book(token), numbers) {
                (Some(name), (Some(ch), Some(v))) => {
                    book = Some(name);
                    chapter = Some(ch);
                    refs.push(CrossReference::new(name, ch, v, parse_end(caps.name("end"))));
                }
                (None, _) => {
                    debug!("dropping passage entry with unknown book: {}", part);
                    book = None;
                    chapter = None;
                }
                _ => debug!("dropping passage entry with bad numbers: {}", part),
            }
            continue;
        }

        // "Ps 23" names no verse but still changes the book.
        if let Some(caps) = PASSAGE_BOOK_CHAPTER_RE.captures(part) {
            debug!("dropping passage entry without a verse: {}", part);
            book = resolve_reference_book(&caps["book"]);
            chapter = None;
            continue;
        }

        let Some(current) = book else {
            debug!("dropping passage entry without a book: {}", part);
            continue;
        };

        if let Some(caps) = PASSAGE_CHAPTER_VERSE_RE.captures(part) {
            if let (Some(ch), Some(v)) = (parse_number(&caps["chapter"]), parse_number(&caps["verse"])) {
                chapter = Some(ch);
                refs.push(CrossReference::new(current, ch, v, parse_end(caps.name("end"))));
            }
            continue;
        }

        if let (Some(ch), Some(caps)) = (chapter, PASSAGE_VERSE_RE.captures(part))
            && let Some(v) = parse_number(&caps["verse"])
        {
            refs.push(CrossReference::new(current, ch, v, parse_end(caps.name("end"))));
            continue;
        }

        debug!("dropping unrecognized passage entry: {}", part);
    }

    refs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(passage: &str) -> Vec<String> {
        parse_passage_list(passage)
            .iter()
            .map(CrossReference::reference)
            .collect()
    }

    #[test]
    fn test_trailing_entries_inherit() {
        assert_eq!(
            refs("John 11:51,52, Rom 5:6,8"),
            ["John 11:51", "John 11:52", "Romans 5:6", "Romans 5:8"]
        );
    }

    #[test]
    fn test_abbreviations_and_chapter_change() {
        assert_eq!(
            refs("Joh 11:51,52, 1Jo 2:2, Ro 5:6,8; 8:32"),
            ["John 11:51", "John 11:52", "1 John 2:2", "Romans 5:6", "Romans 5:8", "Romans 8:32"]
        );
    }

    #[test]
    fn test_dotted_and_ranges() {
        assert_eq!(refs("John.3.16"), ["John 3:16"]);
        assert_eq!(refs("Ps 23:1-3, 5-6"), ["Psalms 23:1-3", "Psalms 23:5-6"]);
    }

    #[test]
    fn test_unknown_book_drops_its_entries() {
        assert_eq!(refs("Xyz 1:2, 3, Gen 1:1"), ["Genesis 1:1"]);
    }

    #[test]
    fn test_chapter_only_entry_resets_context() {
        assert_eq!(refs("Gen 1:1, Ps 23, 5"), ["Genesis 1:1"]);
        assert_eq!(refs("Gen 1:1, Ps 23, 24:1"), ["Genesis 1:1", "Psalms 24:1"]);
        assert_eq!(refs("Gen 1:1, Xyz 2, 3:4"), ["Genesis 1:1"]);
    }

    #[test]
    fn test_no_context() {
        assert!(refs("3, 4:5").is_empty());
        assert!(refs("").is_empty());
    }
}
