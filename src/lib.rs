//! # sword-parse
//!
//! Structural parsing of SWORD engine output into typed scripture data.
//!
//! The engine (normally `diatheke`) answers lookups with loosely structured
//! text whose markup differs from module to module. This crate turns that
//! text into a small, stable data model and never fails on malformed input:
//! unrecognized lines are skipped and unrecognized entries fall back to
//! cleaned text.
//!
//! ## Features
//!
//! - 66-book canon with English and Dutch aliases and fuzzy resolution
//! - Verse lookups with per-word lexicon numbers
//! - Cross-references from `passage` lists, reference notes and `osisRef`
//!   tags, including keyword-grouped cross-reference modules
//! - Lexicon entries in three unrelated layouts, auto-detected
//! - Commentary, search listings and the module list
//!
//! ## Quick Start
//!
//! ```
//! use sword_parse::{canon, verse, xref};
//!
//! assert_eq!(canon::resolve("1 kor", true), Some("1 Corinthians"));
//!
//! let raw = "Genesis 1:1: In the beginning God created the heaven and the earth.\n(KJV)\n";
//! let verses = verse::parse_lookup("Genesis", 1, raw);
//! assert_eq!(verses[0].text, "In the beginning God created the heaven and the earth.");
//!
//! let refs = xref::parse_passage_list("John 11:51,52, 1 John 2:2");
//! assert_eq!(refs.len(), 3);
//! ```
//!
//! ## Talking to the engine
//!
//! Running the engine is left to the caller. Helpers that need to fetch more
//! output (lexicon key fallback, search snippets, reference previews) take an
//! [`Engine`]; [`MemoryEngine`] replays canned responses.
//!
//! ```
//! use sword_parse::{lexicon, MemoryEngine};
//!
//! let engine = MemoryEngine::new().with(
//!     "StrongsGreek",
//!     "25",
//!     "25: 25 'agapao' ag-ap-ah'-o'\n to love\n(StrongsGreek)\n",
//! );
//! let entry = lexicon::lookup_entry(&engine, "StrongsGreek", "G25").unwrap().unwrap();
//! assert_eq!(entry.title, "G25 - agapao");
//! assert_eq!(entry.definition, "to love");
//! ```

pub mod canon;
pub mod commentary;
pub mod config;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod markup;
pub mod model;
pub mod modules;
pub(crate) mod patterns;
pub mod search;
pub(crate) mod util;
pub mod verse;
pub mod xref;

pub use config::Heuristics;
pub use engine::{Engine, MemoryEngine};
pub use error::{Error, Result};
pub use model::{
    CommentaryEntry, CrossReference, DictionaryEntry, KeywordGroup, ModuleCategory, ModuleInfo,
    Passage, SearchHit, VerseSegment, Word,
};
pub use util::decode_text;
