//! Commentary output for a single verse.
//!
//! Ordinary commentaries are cleaned to readable prose and mined for
//! `passage` lists and cross-reference notes. Dedicated cross-reference
//! modules carry almost no prose, so their text is rebuilt from the keyword
//! groups instead.

use tracing::debug;

use crate::markup::{is_attribution_line, strip_tags, unescape_entities};
use crate::model::{CommentaryEntry, KeywordGroup};
use crate::patterns::{BLANK_RUN_RE, BREAK_TAG_RE, PARAGRAPH_TAG_RE, SPACE_RUN_RE};
use crate::xref::{self, SourceKind};

/// Commentary text to display text.
///
/// Drops a trailing `(Module)` line, turns paragraph and line-break tags into
/// newlines, strips other markup and squeezes blank lines and space runs.
pub fn clean_text(raw: &str) -> String {
    let text = BREAK_TAG_RE.replace_all(raw, "\n");
    let text = PARAGRAPH_TAG_RE.replace_all(&text, "\n");
    let text = strip_tags(&text, "");
    let text = unescape_entities(&text);
    let text = SPACE_RUN_RE.replace_all(&text, " ");

    let mut lines: Vec<&str> = text.lines().map(str::trim).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    if lines.last().is_some_and(|line| is_attribution_line(line)) {
        lines.pop();
    }

    BLANK_RUN_RE
        .replace_all(&lines.join("\n"), "\n\n")
        .trim()
        .to_string()
}

/// Label line, then one indented line per reference, groups separated by a
/// blank line.
pub fn render_groups(groups: &[KeywordGroup]) -> String {
    groups
        .iter()
        .map(|group| {
            let mut block = group.label.clone();
            for r in &group.references {
                block.push_str("\n  ");
                block.push_str(&r.reference());
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Parse one verse of commentary, deriving the source kind from the module
/// name.
///
/// # Examples
///
/// ```
/// use sword_parse::commentary;
///
/// let raw = r#"love. <ref osisRef="John.3.16"/>; <ref osisRef="Rom.5.8"/>"#;
/// let entry = commentary::parse("TSK", "John", 3, 16, raw);
/// assert_eq!(entry.text, "love\n  John 3:16\n  Romans 5:8");
/// assert_eq!(entry.keyword_groups.map(|g| g.len()), Some(1));
/// ```
pub fn parse(module: &str, book: &str, chapter: u16, verse: u16, raw: &str) -> CommentaryEntry {
    parse_with_kind(module, SourceKind::for_module(module), book, chapter, verse, raw)
}

/// [`parse`] with an explicit source kind, e.g. one taken from
/// [`ModuleInfo::source_kind`](crate::model::ModuleInfo::source_kind).
pub fn parse_with_kind(
    module: &str,
    kind: SourceKind,
    book: &str,
    chapter: u16,
    verse: u16,
    raw: &str,
) -> CommentaryEntry {
    let cross_references = xref::extract(raw, kind);

    let (text, keyword_groups) = if kind.is_grouped() {
        let groups = xref::extract_grouped(raw);
        let text = if groups.is_empty() {
            debug!("{} {} {}:{} has no keyword groups", module, book, chapter, verse);
            clean_text(raw)
        } else {
            render_groups(&groups)
        };
        (text, Some(groups))
    } else {
        (clean_text(raw), None)
    };

    CommentaryEntry {
        module: module.to_string(),
        book: book.to_string(),
        chapter,
        verse,
        text,
        raw_text: raw.to_string(),
        cross_references,
        keyword_groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        let raw = "<p>In the  beginning</p><p>God &amp; the<br/>earth</p>\n\n\n\n(DutKant)\n";
        assert_eq!(clean_text(raw), "In the beginning\n\nGod & the\nearth");
    }

    #[test]
    fn test_clean_text_only_attribution() {
        assert_eq!(clean_text("(MHC)"), "");
    }

    #[test]
    fn test_commentary_module() {
        let raw = r#"Zie <scripRef passage="Joh 11:51,52">Joh 11</scripRef>.<br>(DutKant)"#;
        let entry = parse("DutKant", "John", 3, 16, raw);
        assert_eq!(entry.text, "Zie Joh 11.");
        assert_eq!(entry.cross_references.len(), 2);
        assert_eq!(entry.keyword_groups, None);
        assert_eq!(entry.reference(), "John 3:16");
    }

    #[test]
    fn test_grouped_rendering() {
        let raw = concat!(
            r#"beginning. <ref osisRef="John.1.1"/>, <ref osisRef="Heb.1.10"/> "#,
            r#"God. <ref osisRef="Ps.33.6"/>"#,
        );
        let entry = parse("tsk", "Genesis", 1, 1, raw);
        assert_eq!(
            entry.text,
            "beginning\n  John 1:1\n  Hebrews 1:10\n\nGod\n  Psalms 33:6"
        );
        assert_eq!(entry.cross_references.len(), 3);
        assert_eq!(entry.keyword_groups.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_grouped_module_without_groups() {
        let entry = parse_with_kind(
            "Cross",
            SourceKind::CrossReferenceModule,
            "Genesis",
            1,
            1,
            "See Jn 1:1.\n(Cross)",
        );
        assert_eq!(entry.text, "See Jn 1:1.");
        assert_eq!(entry.keyword_groups, Some(Vec::new()));
        assert_eq!(entry.cross_references[0].reference(), "John 1:1");
    }
}
