//! Parsed value types.
//!
//! This module contains:
//! - Verse text and word-level lexicon annotations
//! - Cross-references, keyword groups and user passages
//! - Dictionary and commentary entries
//! - Search hits
//! - Installed-module descriptions
//!
//! Every value is built fresh by a parser call and never mutated by this
//! crate afterwards.

mod entry;
mod module;
mod reference;
mod verse;

pub use entry::{CommentaryEntry, DictionaryEntry};
pub use module::{ModuleCategory, ModuleInfo};
pub use reference::{CrossReference, KeywordGroup, Passage};
pub use verse::{SearchHit, VerseSegment, Word};
