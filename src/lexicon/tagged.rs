//! Loosely tagged HTML-ish entries.
//!
//! ```text
//! <b>25</b> <b>ἀγαπάω</b> [A)GAPA/W] {agapaō}<br/> <i>ag-ap-ah'-o</i><br/>
//! to love (in a social or moral sense)<br/>(StrongsRealGreek)
//! ```

use crate::config::Heuristics;
use crate::markup::{
    is_attribution_line, normalize_line, strip_tags, tidy_lines, unescape_entities,
};
use crate::patterns::{ANCHOR_RE, BOLD_RE, BRACKET_RE, BREAK_TAG_RE, CURLY_RE, ITALIC_RE};

use super::{EntryFields, Parse};

/// First `max_chars` characters of `text`.
fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Headword and the byte offset where the header line ends.
fn headword(raw: &str) -> (String, usize) {
    for caps in BOLD_RE.captures_iter(raw) {
        let text = normalize_line(&caps["text"]);
        if text.is_empty() || text.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        let bold_end = caps.get(0).map_or(0, |m| m.end());
        let header_end = BREAK_TAG_RE
            .find_at(raw, bold_end)
            .map_or(bold_end, |m| m.end());
        return (text, header_end);
    }

    let mut breaks = BREAK_TAG_RE.find_iter(raw);
    if let (Some(first), Some(second)) = (breaks.next(), breaks.next()) {
        let text = normalize_line(&raw[first.end()..second.start()]);
        return (text, second.end());
    }

    (String::new(), 0)
}

fn transliteration(raw: &str, heuristics: &Heuristics) -> String {
    let Some(caps) = BRACKET_RE.captures(raw) else {
        return String::new();
    };
    let bracketed = normalize_line(&caps["text"]);
    if !heuristics.is_betacode(&bracketed) {
        return bracketed;
    }
    CURLY_RE
        .captures(char_prefix(raw, heuristics.betacode_window))
        .map(|caps| normalize_line(&caps["text"]))
        .unwrap_or_default()
}

fn clean_definition(body: &str) -> String {
    let body = BREAK_TAG_RE.replace_all(body, "\n");
    let body = ANCHOR_RE.replace_all(&body, "$text");
    let body = strip_tags(&body, " ");
    let text = tidy_lines(&unescape_entities(&body));

    // The module tag, when present, is the whole last line.
    match text.rsplit_once('\n') {
        Some((rest, last)) if is_attribution_line(last) => rest.to_string(),
        None if is_attribution_line(&text) => String::new(),
        _ => text,
    }
}

pub(crate) fn try_parse(raw: &str, heuristics: &Heuristics) -> Parse {
    if !BOLD_RE.is_match(raw) && !BREAK_TAG_RE.is_match(raw) {
        return Parse::Unrecognized;
    }

    let (headword, mut header_end) = headword(raw);
    let transliteration = transliteration(raw, heuristics);

    let mut pronunciation = String::new();
    if let Some(caps) = ITALIC_RE.captures(raw) {
        pronunciation = normalize_line(&caps["text"]);
        if let Some(m) = caps.get(0) {
            header_end = header_end.max(m.end());
        }
    }

    Parse::Parsed(EntryFields {
        headword,
        transliteration,
        pronunciation,
        definition: clean_definition(&raw[header_end..]),
    })
}
