//! TEI-style entries wrapped in `<entryFree>`.
//!
//! ```text
//! <entryFree n="25"><title>G25</title><orth>ἀγαπάω</orth>
//! <orth type="trans">agapaō</orth><pron>ag-ap-ah'-o</pron>
//! <def><sense n="1">to love</sense></def></entryFree>
//! ```

use std::borrow::Cow;

use crate::markup::{normalize_line, strip_tags, tidy_lines, unescape_entities};
use crate::patterns::{
    DEF_RE, ENTRY_FREE_RE, FOREIGN_RE, INLINE_TEXT_TAG_RE, LB_TAG_RE, N_ATTR_RE, NOTE_TAG_RE,
    ORTH_RE, PRON_RE, SENSE_TAG_RE, TITLE_TAG_RE, TRANS_TYPE_RE,
};

use super::{EntryFields, Parse};

/// Stands in for sub-sense indentation until whitespace has been collapsed.
const INDENT_MARK: char = '\u{1F}';

/// Passes over nested inline tags (`<hi><ref>..</ref></hi>`).
const MAX_INLINE_DEPTH: usize = 4;

fn sense_prefix(attrs: &str) -> String {
    let n = N_ATTR_RE
        .captures(attrs)
        .map(|caps| caps["n"].trim().to_string())
        .unwrap_or_default();

    if !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()) {
        format!("\n{n}. ")
    } else if n.len() == 1 && n.chars().all(|c| c.is_ascii_alphabetic()) {
        format!("\n{INDENT_MARK}{n}. ")
    } else {
        "\n• ".to_string()
    }
}

/// Definition markup to readable text, one sense per line.
pub(crate) fn clean_definition(raw: &str) -> String {
    let mut text: Cow<'_, str> = Cow::Owned(raw.replace(INDENT_MARK, ""));

    for _ in 0..MAX_INLINE_DEPTH {
        let next = INLINE_TEXT_TAG_RE.replace_all(&text, "$text").into_owned();
        if next == *text {
            break;
        }
        text = Cow::Owned(next);
    }

    let text = NOTE_TAG_RE.replace_all(&text, "");
    let text = SENSE_TAG_RE.replace_all(&text, |caps: &regex::Captures<'_>| {
        if caps.name("close").is_some() {
            " ".to_string()
        } else {
            sense_prefix(&caps["attrs"])
        }
    });
    let text = LB_TAG_RE.replace_all(&text, "\n");
    let text = strip_tags(&text, " ");
    let text = unescape_entities(&text);

    let lines: Vec<String> = tidy_lines(&text)
        .lines()
        .map(|line| line.replace(". . ", ". "))
        .filter(|line| line != ".")
        .collect();

    lines.join("\n").replace(INDENT_MARK, "   ")
}

pub(crate) fn try_parse(raw: &str) -> Parse {
    let Some(caps) = ENTRY_FREE_RE.captures(raw) else {
        return Parse::Unrecognized;
    };
    let body = &caps["body"];

    let mut headword = String::new();
    let mut transliteration = String::new();
    for orth in ORTH_RE.captures_iter(body) {
        let text = normalize_line(&orth["text"]);
        if TRANS_TYPE_RE.is_match(&orth["attrs"]) {
            if transliteration.is_empty() {
                transliteration = text;
            }
        } else if headword.is_empty() {
            headword = text;
        }
    }
    if headword.is_empty()
        && let Some(foreign) = FOREIGN_RE.captures(body)
    {
        headword = normalize_line(&foreign["text"]);
    }

    let pronunciation = PRON_RE
        .captures(body)
        .map(|caps| normalize_line(&caps["text"]))
        .unwrap_or_default();

    let mut definition = match DEF_RE.captures(body) {
        Some(def) => clean_definition(&def["body"]),
        None => clean_definition(&TITLE_TAG_RE.replace_all(body, "")),
    };
    if !headword.is_empty()
        && let Some(rest) = definition.strip_prefix(headword.as_str())
    {
        definition = rest.trim_start().to_string();
    }

    Parse::Parsed(EntryFields {
        headword,
        transliteration,
        pronunciation,
        definition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(raw: &str) -> EntryFields {
        match try_parse(raw) {
            Parse::Parsed(fields) => fields,
            Parse::Unrecognized => panic!("not recognized: {raw}"),
        }
    }

    #[test]
    fn test_unwrapped_is_unrecognized() {
        assert!(matches!(try_parse("<b>ἀγαπάω</b>"), Parse::Unrecognized));
    }

    #[test]
    fn test_fields() {
        let f = parsed(concat!(
            r#"<entryFree n="25"><title>G25</title><orth>ἀγαπάω</orth> "#,
            r#"<orth type="trans" rend="bold">agapaō</orth> <pron>ag-ap-ah'-o</pron>"#,
            r#"<def><sense n="1">to love</sense></def></entryFree>"#,
        ));
        assert_eq!(f.headword, "ἀγαπάω");
        assert_eq!(f.transliteration, "agapaō");
        assert_eq!(f.pronunciation, "ag-ap-ah'-o");
        assert_eq!(f.definition, "1. to love");
    }

    #[test]
    fn test_foreign_headword_and_body_definition() {
        let f = parsed(concat!(
            r#"<entryFree><title>H430</title><foreign xml:lang="heb">אֱלֹהִים</foreign> "#,
            r#"<sense n="1">rulers, judges</sense><sense n="a">divine ones</sense>"#,
            r#"<sense n="1a">God</sense></entryFree>"#,
        ));
        assert_eq!(f.headword, "אֱלֹהִים");
        assert_eq!(f.definition, "1. rulers, judges\n   a. divine ones\n• God");
    }

    #[test]
    fn test_definition_cleanup() {
        let def = clean_definition(concat!(
            r#"<hi rend="italic"><ref target="H433">H433</ref></hi> plural"#,
            r#"<note type="x">editorial</note><lb/>see also &amp; compare"#,
            r#"<sense n="2">. gods</sense>"#,
        ));
        assert_eq!(def, "H433 plural\nsee also & compare\n2. gods");
    }

    #[test]
    fn test_headword_echo_removed() {
        let f = parsed(r#"<entryFree><orth>λόγος</orth> <sense n="1">word</sense></entryFree>"#);
        assert_eq!(f.definition, "1. word");
    }
}
