//! Untagged Strong's entries.
//!
//! ```text
//! 25: 25 'agapao' ag-ap-ah'-o'
//!  perhaps from agan (much); to love (in a social or moral sense)
//! (StrongsGreek)
//! ```

use memchr::memchr;

use crate::markup::{collapse_whitespace, is_attribution_line};
use crate::patterns::PLAIN_HEADER_RE;

use super::{EntryFields, Parse};

pub(crate) fn try_parse(raw: &str) -> Parse {
    if memchr(b'<', raw.as_bytes()).is_some() {
        return Parse::Unrecognized;
    }

    let mut lines = raw.lines().map(str::trim).filter(|l| !l.is_empty());
    let Some(caps) = lines.next().and_then(|first| PLAIN_HEADER_RE.captures(first)) else {
        return Parse::Unrecognized;
    };

    let id = caps["id"].trim();
    let headword = if id.chars().all(|c| c.is_ascii_digit()) {
        String::new()
    } else {
        id.to_string()
    };

    let pron = caps["pron"].trim();
    let pronunciation = pron.strip_suffix('\'').unwrap_or(pron).trim_end();

    let definition: Vec<&str> = lines.filter(|line| !is_attribution_line(line)).collect();

    Parse::Parsed(EntryFields {
        headword,
        transliteration: caps["translit"].trim().to_string(),
        pronunciation: pronunciation.to_string(),
        definition: collapse_whitespace(&definition.join(" ")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_entry() {
        let raw = "25: 25 'agapao' ag-ap-ah'-o'\n perhaps from agan (much);\n to love\n(StrongsGreek)\n";
        let Parse::Parsed(f) = try_parse(raw) else {
            panic!("not recognized");
        };
        assert_eq!(f.headword, "");
        assert_eq!(f.transliteration, "agapao");
        assert_eq!(f.pronunciation, "ag-ap-ah'-o");
        assert_eq!(f.definition, "perhaps from agan (much); to love");
    }

    #[test]
    fn test_word_id_is_headword() {
        let Parse::Parsed(f) = try_parse("λόγος: 3056 'logos' log'-os'") else {
            panic!("not recognized");
        };
        assert_eq!(f.headword, "λόγος");
        assert_eq!(f.definition, "");
    }

    #[test]
    fn test_rejects_markup_and_other_shapes() {
        assert!(matches!(try_parse("<b>25</b>"), Parse::Unrecognized));
        assert!(matches!(try_parse("just some text"), Parse::Unrecognized));
    }
}
