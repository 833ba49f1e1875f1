//! Cross-reference extraction.
//!
//! Modules encode references in three incompatible ways:
//!
//! - `passage="..."` attribute lists in commentaries ([`parse_passage_list`])
//! - free text inside `<note type="crossReference">` in Bible texts
//!   ([`scan_references`])
//! - `osisRef` tags, optionally under topical labels, in dedicated
//!   cross-reference modules ([`extract_grouped`])
//!
//! [`extract`] picks the right readers for a [`SourceKind`]. Book tokens in
//! every notation go through [`canon::resolve_reference_book`]; a reference
//! whose book cannot be resolved is dropped on its own.
//!
//! [`canon::resolve_reference_book`]: crate::canon::resolve_reference_book

mod note;
mod passage;
mod tagged;

use std::collections::HashSet;

use tracing::debug;

use crate::config::Heuristics;
use crate::engine::{self, Engine};
use crate::markup::normalize_line;
use crate::model::{CrossReference, KeywordGroup};
use crate::patterns::PASSAGE_ATTR_RE;
use crate::util::truncate_chars;

pub use note::{extract_notes, scan_references};
pub use passage::parse_passage_list;
pub use tagged::{extract_grouped_with, parse_tagged_key};

/// Modules whose output is keyword-grouped `osisRef` markup.
pub const CROSS_REFERENCE_MODULES: &[&str] = &["TSK", "Cross", "CrossRef"];

/// Which notations to read from a module's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SourceKind {
    /// Commentary text: `passage` attribute lists and cross-reference notes.
    Commentary,
    /// Bible text rendered with notes: cross-reference notes only.
    BibleNotes,
    /// Dedicated cross-reference module: structured tags, keyword-grouped.
    CrossReferenceModule,
}

impl SourceKind {
    /// Kind implied by a commentary module's name.
    pub fn for_module(module: &str) -> Self {
        if CROSS_REFERENCE_MODULES
            .iter()
            .any(|name| name.eq_ignore_ascii_case(module))
        {
            SourceKind::CrossReferenceModule
        } else {
            SourceKind::Commentary
        }
    }

    pub fn is_grouped(self) -> bool {
        self == SourceKind::CrossReferenceModule
    }
}

/// Drop repeated references, keeping the first occurrence of each
/// `(book, chapter, verse, verse_end)`.
pub fn dedup_references(refs: impl IntoIterator<Item = CrossReference>) -> Vec<CrossReference> {
    let mut seen = HashSet::new();
    refs.into_iter()
        .filter(|r| seen.insert(r.key()))
        .collect()
}

fn extract_passage_attrs(raw: &str) -> Vec<CrossReference> {
    PASSAGE_ATTR_RE
        .captures_iter(raw)
        .flat_map(|caps| parse_passage_list(&caps["passage"]))
        .collect()
}

/// Extract the flat, de-duplicated reference list from one module's output.
///
/// # Examples
///
/// ```
/// use sword_parse::xref::{extract, SourceKind};
///
/// let raw = r#"Zie <scripRef passage="Joh 11:51,52, 1Jo 2:2">hier</scripRef>."#;
/// let refs = extract(raw, SourceKind::Commentary);
/// assert_eq!(refs.len(), 3);
/// assert_eq!(refs[2].reference(), "1 John 2:2");
/// ```
pub fn extract(raw: &str, kind: SourceKind) -> Vec<CrossReference> {
    let refs = match kind {
        SourceKind::Commentary => {
            let mut refs = extract_passage_attrs(raw);
            refs.extend(extract_notes(raw));
            refs
        }
        SourceKind::BibleNotes => extract_notes(raw),
        SourceKind::CrossReferenceModule => {
            let listed = extract_passage_attrs(raw);
            if !listed.is_empty() {
                return dedup_references(listed);
            }
            let items = tagged::walk(raw);
            if items.is_empty() {
                debug!("no structured references, scanning plain text");
                scan_references(&normalize_line(raw))
            } else {
                items.into_iter().flat_map(|item| item.references).collect()
            }
        }
    };
    dedup_references(refs)
}

/// Keyword groups from a dedicated cross-reference module's output.
///
/// # Examples
///
/// ```
/// use sword_parse::xref::extract_grouped;
///
/// let raw = r#"love. <ref osisRef="John.3.16"/>, <ref osisRef="Rom.5.8"/>; <ref osisRef="1John.4.9"/>"#;
/// let groups = extract_grouped(raw);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].label, "love");
/// assert_eq!(groups[0].references.len(), 3);
/// ```
pub fn extract_grouped(raw: &str) -> Vec<KeywordGroup> {
    extract_grouped_with(raw, &Heuristics::default())
}

/// Query several modules for one verse and merge their references.
///
/// Each reference is paired with the first module that produced it. A module
/// that fails to answer is skipped; the others still contribute.
pub fn merge_sources(
    engine: &dyn Engine,
    sources: &[(&str, SourceKind)],
    book: &str,
    chapter: u16,
    verse: u16,
) -> Vec<(CrossReference, String)> {
    let key = engine::verse_key(book, chapter, verse);
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for &(module, kind) in sources {
        let raw = match engine.query_text(module, &key) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("cross-reference source {} failed: {}", module, e);
                continue;
            }
        };
        for r in extract(&raw, kind) {
            if seen.insert(r.key()) {
                merged.push((r, module.to_string()));
            }
        }
    }

    merged
}

/// Fill each reference's preview with the start of its target verse.
pub fn attach_previews(engine: &dyn Engine, bible_module: &str, refs: &mut [CrossReference]) {
    attach_previews_with(engine, bible_module, refs, &Heuristics::default());
}

/// [`attach_previews`] with explicit heuristics.
///
/// References whose verse cannot be fetched keep `preview: None`.
pub fn attach_previews_with(
    engine: &dyn Engine,
    bible_module: &str,
    refs: &mut [CrossReference],
    heuristics: &Heuristics,
) {
    for r in refs.iter_mut() {
        match engine::lookup_verse(engine, bible_module, &r.book, r.chapter, r.verse) {
            Ok(Some(seg)) => r.preview = Some(truncate_chars(&seg.text, heuristics.preview_chars)),
            Ok(None) => debug!("no preview text for {}", r),
            Err(e) => debug!("preview lookup for {} failed: {}", r, e),
        }
    }
}
