//! Narrative identifiers (slugs).
//!
//! An identifier is the content file's name with its extension removed, case
//! preserved. Lookups build a path from a caller-supplied identifier, so it
//! is checked with [`is_safe`] before any path is formed. Discovery applies
//! the same check, so every listed identifier can be looked up again.

use std::path::Path;

/// Characters that would let an identifier leave the content directory.
const FORBIDDEN_CHARS: [char; 3] = ['/', '\\', '\0'];

/// Derives the identifier for a content file.
///
/// Returns `None` when the path has no UTF-8 stem or its extension does not
/// equal `extension` exactly.
#[must_use]
pub fn from_path(path: &Path, extension: &str) -> Option<String> {
    if path.extension()?.to_str()? != extension {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() {
        return None;
    }
    Some(stem.to_string())
}

/// Returns `true` if `identifier` is safe to turn into a file name.
///
/// Rejects the empty string, path separators, NUL, and a leading dot (which
/// covers `.`, `..`, and hidden files). Anything else a file stem can hold,
/// spaces and non-ASCII letters included, is accepted.
#[must_use]
pub fn is_safe(identifier: &str) -> bool {
    !identifier.is_empty()
        && !identifier.starts_with('.')
        && !identifier.contains(FORBIDDEN_CHARS)
}

/// File name for `identifier` under the given extension.
#[must_use]
pub fn file_name(identifier: &str, extension: &str) -> String {
    format!("{identifier}.{extension}")
}
