//! Content source trait and document types.
//!
//! # Path Convention
//!
//! Paths passed to [`ContentSource::load`] are full route paths as produced
//! by route flattening: `""` for a namespace index, `"/getting-started/setup"`
//! for a nested page.

use std::path::PathBuf;

use dagdocs_routes::OutlineEntry;
use serde::{Deserialize, Serialize};

use crate::frontmatter::FrontmatterError;

/// Page metadata from the document's frontmatter block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Page title.
    pub title: String,
    /// Short description shown under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A rendered document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Route path the document was loaded for.
    pub path: String,
    /// Frontmatter metadata.
    pub frontmatter: Frontmatter,
    /// Rendered HTML body.
    pub html: String,
    /// Headings in document order.
    pub outline: Vec<OutlineEntry>,
}

/// Content retrieval error.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Reading the backing file failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Frontmatter is missing or malformed.
    #[error("Invalid frontmatter in {}: {source}", path.display())]
    Frontmatter {
        /// File with the bad frontmatter.
        path: PathBuf,
        /// Parse failure.
        source: FrontmatterError,
    },

    /// Requested path escapes the content root or is otherwise unusable.
    #[error("Invalid content path: {0}")]
    InvalidPath(String),
}

/// Source of rendered documents, keyed by route path.
///
/// Implementations must be safe to share between request handlers.
pub trait ContentSource: Send + Sync {
    /// Load the document for a resolved route path.
    ///
    /// Returns `Ok(None)` when no document exists for the path. Callers treat
    /// this the same as a path that does not resolve.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the document exists but cannot be loaded.
    fn load(&self, path: &str) -> Result<Option<Document>, ContentError>;
}
