//! Error types for route tree loading and path resolution.

/// Configuration error in an authored route tree.
///
/// Detected while flattening. A tree that produces one of these must not be
/// served.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Node title is empty or whitespace only.
    #[error("Route at '{path}' has a blank title")]
    BlankTitle {
        /// Full path of the offending node.
        path: String,
    },

    /// Non-navigable section node without children.
    #[error("Section '{path}' is not navigable and has no children")]
    EmptySection {
        /// Full path of the offending node.
        path: String,
    },

    /// Path segment is empty (below the root) or contains a separator.
    #[error("Route under '{path}' has invalid segment '{segment}'")]
    InvalidSegment {
        /// Full path of the parent node.
        path: String,
        /// Segment as authored.
        segment: String,
    },

    /// Two navigable nodes compose the same full path.
    #[error("Duplicate route path '{path}' (titles '{first}' and '{second}')")]
    DuplicatePath {
        /// The colliding full path.
        path: String,
        /// Title of the first page registered at this path.
        first: String,
        /// Title of the page that collided with it.
        second: String,
    },
}

/// Requested path does not match any navigable page.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Page not found: {path}")]
pub struct NotFound {
    /// Normalized requested path.
    pub path: String,
}

impl NotFound {
    /// Create a not found error for a path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}
