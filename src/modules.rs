//! The engine's installed-module listing.
//!
//! ```text
//! Biblical Texts:
//!   KJV : King James Version
//! Commentaries:
//!   TSK : Treasury of Scripture Knowledge
//! ```

use tracing::trace;

use crate::model::{ModuleCategory, ModuleInfo};

/// Category used for entries listed before any header.
const UNKNOWN_CATEGORY: &str = "Unknown";

const ENTRY_SEPARATOR: &str = " : ";

/// Parse the module listing.
///
/// Headers are unindented lines ending in `:`; entries are `NAME : Description`
/// lines. Anything else is skipped.
pub fn parse_module_list(text: &str) -> Vec<ModuleInfo> {
    let mut category = ModuleCategory::Other(UNKNOWN_CATEGORY.to_string());
    let mut modules = Vec::new();

    for line in text.lines().map(str::trim_end) {
        if line.is_empty() {
            continue;
        }
        if !line.starts_with(char::is_whitespace)
            && let Some(header) = line.strip_suffix(':')
        {
            category = ModuleCategory::from_header(header);
            continue;
        }
        match line.trim().split_once(ENTRY_SEPARATOR) {
            Some((name, description)) if !name.trim().is_empty() => modules.push(ModuleInfo {
                name: name.trim().to_string(),
                description: description.trim().to_string(),
                category: category.clone(),
            }),
            _ => trace!("skipping module list line {:?}", line),
        }
    }

    modules
}

/// Modules of one category, in listing order.
pub fn in_category<'a>(
    modules: &'a [ModuleInfo],
    category: &'a ModuleCategory,
) -> impl Iterator<Item = &'a ModuleInfo> + 'a {
    modules.iter().filter(move |m| &m.category == category)
}
