//! Page assembly.
//!
//! [`Site`] joins per-request navigation context with the document returned
//! by each namespace's content source. Paths in everything it returns carry
//! the namespace prefix, so they can be used as links directly.

use std::sync::Arc;

use dagdocs_content::{ContentError, ContentSource, Frontmatter};
use dagdocs_routes::{FlattenedPage, NavItem, NavigationContext};

use crate::namespace::Namespace;
use crate::navigators::Navigators;

/// Page lookup error.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Namespace name is not known.
    #[error("Unknown namespace: {0}")]
    UnknownNamespace(String),

    /// No page at the requested URL.
    #[error("Page not found: {0}")]
    NotFound(String),

    /// The content source failed to load a resolved page.
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// A resolved page with its navigation context.
#[derive(Debug)]
pub struct PageView {
    /// Namespace the page belongs to.
    pub namespace: Namespace,
    /// Document metadata.
    pub frontmatter: Frontmatter,
    /// Rendered HTML body.
    pub html: String,
    /// Breadcrumbs, pagination and outline, with prefixed paths.
    pub context: NavigationContext,
}

/// Documentation site over both namespaces.
pub struct Site {
    navigators: Arc<Navigators>,
    docs: Arc<dyn ContentSource>,
    examples: Arc<dyn ContentSource>,
}

impl Site {
    /// Create a site from navigators and one content source per namespace.
    #[must_use]
    pub fn new(
        navigators: Arc<Navigators>,
        docs: Arc<dyn ContentSource>,
        examples: Arc<dyn ContentSource>,
    ) -> Self {
        Self {
            navigators,
            docs,
            examples,
        }
    }

    fn source(&self, namespace: Namespace) -> &dyn ContentSource {
        match namespace {
            Namespace::Docs => self.docs.as_ref(),
            Namespace::Examples => self.examples.as_ref(),
        }
    }

    /// Resolve and load a page.
    ///
    /// Navigation is resolved first; the content source is only asked for
    /// paths that resolve. A missing document is reported the same way as a
    /// path that does not resolve.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::NotFound`] if the path does not resolve or has no
    /// document, [`PageError::Content`] if loading fails.
    pub fn page(&self, namespace: Namespace, path: &str) -> Result<PageView, PageError> {
        let context = self
            .navigators
            .get(namespace)
            .context(path)
            .map_err(|err| PageError::NotFound(namespace.url(&err.path)))?;

        let Some(document) = self.source(namespace).load(&context.path)? else {
            tracing::warn!(
                namespace = %namespace,
                path = %context.path,
                "Route resolved but content source has no document"
            );
            return Err(PageError::NotFound(namespace.url(&context.path)));
        };

        Ok(PageView {
            namespace,
            frontmatter: document.frontmatter,
            html: document.html,
            context: prefix_context(namespace, context.with_outline(document.outline)),
        })
    }

    /// Resolve and load a page from a prefixed URL (`/docs/...`, `/examples/...`).
    ///
    /// # Errors
    ///
    /// Returns [`PageError::NotFound`] if the URL has no namespace prefix,
    /// otherwise the errors of [`Site::page`].
    pub fn page_by_url(&self, url: &str) -> Result<PageView, PageError> {
        let (namespace, path) =
            Namespace::split_url(url).ok_or_else(|| PageError::NotFound(url.to_owned()))?;
        self.page(namespace, &path)
    }

    /// Sidebar tree of a namespace.
    #[must_use]
    pub fn menu(&self, namespace: Namespace) -> Vec<NavItem> {
        let mut items = self.navigators.get(namespace).menu();
        for item in &mut items {
            prefix_nav_item(namespace, item);
        }
        items
    }

    /// Pages of a namespace in pagination order.
    #[must_use]
    pub fn pages(&self, namespace: Namespace) -> Vec<FlattenedPage> {
        self.navigators
            .get(namespace)
            .pages()
            .iter()
            .cloned()
            .map(|page| prefix_page(namespace, page))
            .collect()
    }
}

fn prefix_page(namespace: Namespace, page: FlattenedPage) -> FlattenedPage {
    FlattenedPage {
        path: namespace.url(&page.path),
        ..page
    }
}

fn prefix_nav_item(namespace: Namespace, item: &mut NavItem) {
    item.path = namespace.url(&item.path);
    for child in &mut item.children {
        prefix_nav_item(namespace, child);
    }
}

fn prefix_context(namespace: Namespace, mut context: NavigationContext) -> NavigationContext {
    context.path = namespace.url(&context.path);
    for item in &mut context.breadcrumbs {
        item.path = namespace.url(&item.path);
    }
    context.previous = context.previous.map(|page| prefix_page(namespace, page));
    context.next = context.next.map(|page| prefix_page(namespace, page));
    context
}
