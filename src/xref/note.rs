//! Free-floating references in note text.

use tracing::debug;

use crate::canon::resolve_reference_book;
use crate::markup::normalize_line;
use crate::model::CrossReference;
use crate::patterns::{FREE_REF_RE, PASSAGE_ATTR_RE, XREF_NOTE_RE};
use crate::verse::parse_number;

use super::passage::parse_passage_list;

/// Find every `Book C:V[-E]` reference in plain text.
///
/// # Examples
///
/// ```
/// use sword_parse::xref::scan_references;
///
/// let refs = scan_references("zie 1 Kron. 1:4 en Gen 5:3-5");
/// assert_eq!(refs[0].reference(), "1 Chronicles 1:4");
/// assert_eq!(refs[1].reference(), "Genesis 5:3-5");
/// ```
pub fn scan_references(text: &str) -> Vec<CrossReference> {
    FREE_REF_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let token = &caps["book"];
            let Some(book) = resolve_reference_book(token) else {
                debug!("dropping reference with unknown book: {}", &caps[0]);
                return None;
            };
            let chapter = parse_number(&caps["chapter"])?;
            let verse = parse_number(&caps["verse"])?;
            let end = caps.name("end").and_then(|m| parse_number(m.as_str()));
            Some(CrossReference::new(book, chapter, verse, end))
        })
        .collect()
}

/// References inside `<note type="crossReference">` elements.
///
/// The note's text is scanned for free-floating references; `passage`
/// attributes nested in the note are expanded as passage lists.
pub fn extract_notes(raw: &str) -> Vec<CrossReference> {
    let mut refs = Vec::new();
    for caps in XREF_NOTE_RE.captures_iter(raw) {
        let inner = &caps["inner"];
        refs.extend(scan_references(&normalize_line(inner)));
        for attr in PASSAGE_ATTR_RE.captures_iter(inner) {
            refs.extend(parse_passage_list(&attr["passage"]));
        }
    }
    refs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_multiword_book() {
        let refs = scan_references("cf. Song of Solomon 2:1 and Rev 22:21");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].book, "Song of Solomon");
        assert_eq!(refs[1].book, "Revelation");
    }

    #[test]
    fn test_scan_drops_unknown_book_only() {
        let refs = scan_references("Qwerty 1:1; Gen 1:1");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].reference(), "Genesis 1:1");
    }

    #[test]
    fn test_note_inner_text_with_markup() {
        let raw = r#"In the beginning<note type="crossReference" n="a"><reference>Ps 33:6</reference>; Joh 1:1-3</note> God"#;
        let refs = extract_notes(raw);
        let refs: Vec<String> = refs.iter().map(|r| r.reference()).collect();
        assert_eq!(refs, ["Psalms 33:6", "John 1:1-3"]);
    }

    #[test]
    fn test_other_notes_ignored() {
        let raw = r#"<note type="study">Gen 1:1</note>"#;
        assert!(extract_notes(raw).is_empty());
    }

    #[test]
    fn test_passage_attr_inside_note() {
        let raw = r#"<note type="crossReference"><scripRef passage="Rom 5:6,8"/></note>"#;
        assert_eq!(extract_notes(raw).len(), 2);
    }
}
