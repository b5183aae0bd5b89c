//! In-memory content source for testing.

use std::collections::HashMap;

use dagdocs_routes::normalize_path;

use crate::markdown;
use crate::source::{ContentError, ContentSource, Document, Frontmatter};

/// Content source backed by a map of documents.
///
/// # Example
///
/// ```ignore
/// use dagdocs_content::{ContentSource, MockContentSource};
///
/// let source = MockContentSource::new()
///     .with_page("/getting-started/setup", "Setup", "## Install\n");
///
/// let doc = source.load("/getting-started/setup").unwrap().unwrap();
/// assert_eq!(doc.outline[0].anchor, "install");
/// ```
#[derive(Debug, Default)]
pub struct MockContentSource {
    documents: HashMap<String, Document>,
}

impl MockContentSource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page rendered from a markdown body.
    #[must_use]
    pub fn with_page(self, path: &str, title: impl Into<String>, markdown_body: &str) -> Self {
        let (html, outline) = markdown::render(markdown_body);
        let path = normalize_path(path);
        self.with_document(Document {
            path,
            frontmatter: Frontmatter {
                title: title.into(),
                description: None,
            },
            html,
            outline,
        })
    }

    /// Add a prepared document under its own path.
    #[must_use]
    pub fn with_document(mut self, document: Document) -> Self {
        self.documents.insert(document.path.clone(), document);
        self
    }
}

impl ContentSource for MockContentSource {
    fn load(&self, path: &str) -> Result<Option<Document>, ContentError> {
        Ok(self.documents.get(&normalize_path(path)).cloned())
    }
}
