//! Structured `osisRef` references and keyword grouping.
//!
//! Dedicated cross-reference modules emit every reference as a tag with a
//! `Book.Chapter.Verse` key, separated by plain text. Topical labels sit in
//! that plain text:
//!
//! ```text
//! the beginning. <reference osisRef="John.1.1"/>; <reference osisRef="Heb.1.10"/>
//! God. <reference osisRef="Exod.20.3">Ex 20:3</reference>
//! ```

use tracing::debug;

use crate::canon::resolve_reference_book;
use crate::config::Heuristics;
use crate::markup::normalize_line;
use crate::model::{CrossReference, KeywordGroup};
use crate::patterns::{TAGGED_REF_RE, VERSE_HEADER_RE};
use crate::verse::parse_number;

/// A reference tag and the plain text between it and the previous one.
pub(crate) struct TaggedRef<'a> {
    pub gap: &'a str,
    pub references: Vec<CrossReference>,
}

struct KeyPoint<'a> {
    book: Option<&'a str>,
    chapter: Option<&'a str>,
    verse: &'a str,
}

fn split_point(point: &str) -> Option<KeyPoint<'_>> {
    let parts: Vec<&str> = point.split('.').collect();
    let (book, chapter, verse) = match parts.as_slice() {
        [book, chapter, verse] => (Some(*book), Some(*chapter), *verse),
        [chapter, verse] => (None, Some(*chapter), *verse),
        [verse] => (None, None, *verse),
        _ => return None,
    };
    Some(KeyPoint {
        book,
        chapter,
        verse,
    })
}

/// Drop a work prefix, e.g. "KJV:Gen.1.1".
fn strip_work(point: &str) -> &str {
    point.split_once(':').map_or(point, |(_, rest)| rest)
}

/// Parse one structured key: `Gen.1.1`, `Gen.1.1-Gen.1.3`, `Gen.1.1-3`.
fn parse_key(key: &str) -> Option<CrossReference> {
    let (start, end) = match key.split_once('-') {
        Some((start, end)) => (strip_work(start), Some(strip_work(end))),
        None => (strip_work(key), None),
    };

    let parts: Vec<&str> = start.split('.').collect();
    let [book_token, chapter, verse] = parts.as_slice() else {
        debug!("dropping partial reference key: {}", key);
        return None;
    };
    let Some(book) = resolve_reference_book(book_token) else {
        debug!("dropping reference key with unknown book: {}", key);
        return None;
    };
    let chapter = parse_number(chapter)?;
    let verse = parse_number(verse)?;

    let verse_end = end.and_then(split_point).and_then(|point| {
        let same_book = point
            .book
            .is_none_or(|b| resolve_reference_book(b) == Some(book));
        let same_chapter = point.chapter.is_none_or(|c| parse_number(c) == Some(chapter));
        if same_book && same_chapter {
            parse_number(point.verse)
        } else {
            None
        }
    });

    Some(CrossReference::new(book, chapter, verse, verse_end))
}

/// References named by an `osisRef` value (one or more keys).
pub fn parse_tagged_key(value: &str) -> Vec<CrossReference> {
    value.split_whitespace().filter_map(parse_key).collect()
}

/// Walk the reference tags in document order.
///
/// For paired tags the element content is skipped, so a gap never contains
/// the display text of a reference.
pub(crate) fn walk(raw: &str) -> Vec<TaggedRef<'_>> {
    let mut items = Vec::new();
    let mut pos = 0;

    while let Some(caps) = TAGGED_REF_RE.captures_at(raw, pos) {
        let Some(whole) = caps.get(0) else {
            break;
        };
        let mut next = whole.end();
        if caps.name("selfclose").is_none() {
            let close = format!("</{}>", &caps["tag"]);
            if let Some(offset) = raw[next..].find(&close) {
                next += offset + close.len();
            }
        }

        items.push(TaggedRef {
            gap: &raw[pos..whole.start()],
            references: parse_tagged_key(&caps["key"]),
        });
        pos = next;
    }

    items
}

/// Turn a label gap into a label: drop a leading `Book C:V:` header,
/// separator punctuation and the terminator.
fn clean_label(gap: &str, heuristics: &Heuristics) -> String {
    let text = VERSE_HEADER_RE.replace(gap, "");
    let text = text
        .trim_start_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .trim_end();
    let text = text.strip_suffix(heuristics.label_terminator).unwrap_or(text);
    text.trim_end().to_string()
}

/// Group references under the labels found in the gaps between them.
///
/// References before the first label belong to no group and are left out.
pub fn extract_grouped_with(raw: &str, heuristics: &Heuristics) -> Vec<KeywordGroup> {
    let mut groups = Vec::new();
    let mut current: Option<KeywordGroup> = None;
    let mut orphans = 0;

    for item in walk(raw) {
        let gap = normalize_line(item.gap);
        if heuristics.is_group_label(&gap) {
            if let Some(group) = current.take()
                && !group.references.is_empty()
            {
                groups.push(group);
            }
            current = Some(KeywordGroup {
                label: clean_label(&gap, heuristics),
                references: Vec::new(),
            });
        }

        match current.as_mut() {
            Some(group) => group.references.extend(item.references),
            None => orphans += item.references.len(),
        }
    }

    if let Some(group) = current
        && !group.references.is_empty()
    {
        groups.push(group);
    }
    if orphans > 0 {
        debug!("{} references before the first label left ungrouped", orphans);
    }

    groups
}
