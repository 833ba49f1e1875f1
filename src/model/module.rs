//! Installed-module descriptions from the engine's module listing.

use std::fmt;

use crate::xref::SourceKind;

/// Section of the module listing a module was found under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ModuleCategory {
    BiblicalTexts,
    Commentaries,
    Lexicons,
    GenericBooks,
    /// Any other header, verbatim.
    Other(String),
}

impl ModuleCategory {
    /// Classify a listing header (without its trailing colon).
    pub fn from_header(header: &str) -> Self {
        let header = header.trim();
        match header.to_ascii_lowercase().as_str() {
            "biblical texts" => Self::BiblicalTexts,
            "commentaries" => Self::Commentaries,
            "lexicons / dictionaries" | "lexicons" | "dictionaries" => Self::Lexicons,
            "generic books" => Self::GenericBooks,
            _ => Self::Other(header.to_string()),
        }
    }
}

impl fmt::Display for ModuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BiblicalTexts => f.write_str("Biblical Texts"),
            Self::Commentaries => f.write_str("Commentaries"),
            Self::Lexicons => f.write_str("Lexicons / Dictionaries"),
            Self::GenericBooks => f.write_str("Generic Books"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// One installed module.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModuleInfo {
    pub name: String,
    pub description: String,
    pub category: ModuleCategory,
}

impl ModuleInfo {
    /// How cross-references should be read from this module's output, or
    /// `None` for modules that carry none (lexicons, generic books).
    pub fn source_kind(&self) -> Option<SourceKind> {
        match &self.category {
            ModuleCategory::BiblicalTexts => Some(SourceKind::BibleNotes),
            ModuleCategory::Commentaries => Some(SourceKind::for_module(&self.name)),
            ModuleCategory::Other(name) if name.eq_ignore_ascii_case("cross references") => {
                Some(SourceKind::CrossReferenceModule)
            }
            _ => None,
        }
    }
}
