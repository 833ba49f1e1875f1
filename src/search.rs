//! Search listings.
//!
//! The engine answers a search with a header, the matching references
//! separated by `" ; "`, and a footer:
//!
//! ```text
//! Entries containing "faith"-- Hebrews 11:1 ; Hebrews 11:3
//! James 2:17 ; James 2:26
//! -- 4 matches total (KJV)
//! ```

use regex::RegexBuilder;
use tracing::{debug, trace};

use crate::canon;
use crate::engine::{self, Engine};
use crate::model::SearchHit;
use crate::patterns::{SEARCH_REF_RE, SEARCH_TOTAL_RE};
use crate::verse::parse_number;

const MARKER: &str = "--";
const SEPARATOR: &str = " ; ";

/// The part of a line that may hold references, or `None` for the footer.
///
/// The header's wording depends on the engine's locale; only its `--`
/// marker is relied on. References never contain the marker.
fn listing_part(line: &str) -> Option<&str> {
    if line.starts_with(MARKER) {
        return None;
    }
    match line.split_once(MARKER) {
        Some((_, rest)) => Some(rest.trim()),
        None => Some(line),
    }
}

fn parse_reference(token: &str) -> Option<SearchHit> {
    let caps = SEARCH_REF_RE.captures(token)?;
    let raw_book = caps["book"].trim();
    let chapter = parse_number(&caps["chapter"])?;
    let verse = parse_number(&caps["verse"])?;

    let book = canon::from_engine_token(raw_book)
        .or_else(|| canon::resolve(raw_book, true))
        .unwrap_or_else(|| {
            debug!("search hit book {:?} not in canon, keeping as is", raw_book);
            raw_book
        });
    Some(SearchHit::new(book, chapter, verse))
}

/// Parse a search listing into hits, without snippets.
///
/// `query` is accepted for symmetry with [`fill_snippets`]; the listing
/// itself carries everything needed.
///
/// # Examples
///
/// ```
/// use sword_parse::search;
///
/// let raw = "Entries containing \"faith\"-- Hebrews 11:1 ; Hebrews 11:3\n\
///            James 2:17\n\
///            -- 3 matches total (KJV)\n";
/// let hits = search::parse(raw, "faith");
/// assert_eq!(hits.len(), 3);
/// assert_eq!(hits[2].reference(), "James 2:17");
/// assert_eq!(search::reported_total(raw), Some(3));
/// ```
pub fn parse(raw: &str, query: &str) -> Vec<SearchHit> {
    trace!("parsing search listing for {:?}", query);
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(listing_part)
        .flat_map(|part| part.split(SEPARATOR))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let hit = parse_reference(token);
            if hit.is_none() {
                trace!("skipping search token {:?}", token);
            }
            hit
        })
        .collect()
}

/// The `N` of a `-- N matches total` footer.
pub fn reported_total(raw: &str) -> Option<usize> {
    raw.lines()
        .map(str::trim)
        .find_map(|line| SEARCH_TOTAL_RE.captures(line))
        .and_then(|caps| caps["total"].parse().ok())
}

/// Byte range of the first case-insensitive occurrence of `query` in `text`.
pub fn find_match(text: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }
    let re = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()?;
    re.find(text).map(|m| (m.start(), m.end()))
}

/// Fetch each hit's verse text from `module` and locate `query` in it.
///
/// Hits whose verse cannot be fetched keep an empty snippet. A snippet that
/// does not contain the query keeps zero offsets.
pub fn fill_snippets(engine: &dyn Engine, module: &str, hits: &mut [SearchHit], query: &str) {
    for hit in hits.iter_mut() {
        let seg = match engine::lookup_verse(engine, module, &hit.book, hit.chapter, hit.verse) {
            Ok(Some(seg)) => seg,
            Ok(None) => {
                debug!("no verse text for search hit {}", hit.reference());
                continue;
            }
            Err(e) => {
                debug!("snippet lookup for {} failed: {}", hit.reference(), e);
                continue;
            }
        };
        let (start, end) = find_match(&seg.text, query).unwrap_or((0, 0));
        hit.snippet = seg.text;
        hit.match_start = start;
        hit.match_end = end;
    }
}
