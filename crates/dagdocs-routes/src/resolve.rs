//! Path normalization and resolution against a flattened page list.

use crate::error::NotFound;
use crate::flatten::FlattenedPage;
use crate::node::{SEPARATOR, SEPARATORS};

/// Normalize a requested path to the form used by [`FlattenedPage::path`].
///
/// Backslashes count as separators, repeated separators collapse, a single
/// leading separator is enforced and a trailing one is dropped. The root
/// (`""` or `"/"`) normalizes to the empty string.
///
/// ```
/// use dagdocs_routes::normalize_path;
///
/// assert_eq!(normalize_path("getting-started//setup/"), "/getting-started/setup");
/// assert_eq!(normalize_path("/"), "");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len() + 1);
    for part in path.split(SEPARATORS).filter(|p| !p.is_empty()) {
        normalized.push(SEPARATOR);
        normalized.push_str(part);
    }
    normalized
}

/// Join URL slug segments (e.g. from a catch-all route) into a normalized path.
#[must_use]
pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    let mut joined = String::new();
    for segment in segments {
        joined.push(SEPARATOR);
        joined.push_str(segment.as_ref());
    }
    normalize_path(&joined)
}

/// Find the index of the page matching `requested`.
///
/// Matching is exact after normalization. No prefix or fuzzy matching.
///
/// # Errors
///
/// Returns [`NotFound`] if no page has the normalized path.
pub fn resolve(pages: &[FlattenedPage], requested: &str) -> Result<usize, NotFound> {
    let path = normalize_path(requested);
    pages
        .iter()
        .position(|page| page.path == path)
        .ok_or(NotFound { path })
}
