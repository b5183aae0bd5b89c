//! Per-request navigation context.

use serde::Serialize;

use crate::breadcrumb::{BreadcrumbItem, breadcrumbs};
use crate::error::NotFound;
use crate::flatten::FlattenedPage;
use crate::node::RouteNode;
use crate::resolve::resolve;

/// In-page heading descriptor.
///
/// Produced by the content source for a resolved document and passed through
/// unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text.
    pub text: String,
    /// Anchor ID for linking.
    pub anchor: String,
}

/// Navigation data for one resolved page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationContext {
    /// Resolved full path.
    pub path: String,
    /// Ancestors from the root down to the resolved page.
    pub breadcrumbs: Vec<BreadcrumbItem>,
    /// Preceding page in flattened order.
    pub previous: Option<FlattenedPage>,
    /// Following page in flattened order.
    pub next: Option<FlattenedPage>,
    /// Document outline, empty until attached with [`Self::with_outline`].
    pub outline: Vec<OutlineEntry>,
}

impl NavigationContext {
    /// Attach the outline returned by the content source.
    #[must_use]
    pub fn with_outline(mut self, outline: Vec<OutlineEntry>) -> Self {
        self.outline = outline;
        self
    }
}

/// Build the navigation context for `requested`.
///
/// `pages` must be the flattened form of `root`. Nothing is computed when
/// resolution fails.
///
/// # Errors
///
/// Returns [`NotFound`] if `requested` does not match any page.
pub fn build_context(
    root: &RouteNode,
    pages: &[FlattenedPage],
    requested: &str,
) -> Result<NavigationContext, NotFound> {
    let index = resolve(pages, requested)?;
    Ok(context_at(root, pages, index))
}

/// Build the context for a page already resolved to `index`.
pub(crate) fn context_at(
    root: &RouteNode,
    pages: &[FlattenedPage],
    index: usize,
) -> NavigationContext {
    let page = &pages[index];
    NavigationContext {
        path: page.path.clone(),
        breadcrumbs: breadcrumbs(root, &page.path),
        previous: index.checked_sub(1).and_then(|i| pages.get(i)).cloned(),
        next: pages.get(index + 1).cloned(),
        outline: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::flatten::flatten;
    use crate::testing::{arb_tree, getting_started};

    #[test]
    fn test_build_context_last_page() {
        let tree = getting_started();
        let pages = flatten(&tree).unwrap();

        let context = build_context(&tree, &pages, "/getting-started/setup").unwrap();

        assert_eq!(context.path, "/getting-started/setup");
        assert_eq!(
            context.previous,
            Some(FlattenedPage {
                title: "Introduction".to_owned(),
                path: "/getting-started/introduction".to_owned(),
            })
        );
        assert_eq!(context.next, None);
        assert_eq!(
            context.breadcrumbs,
            vec![
                BreadcrumbItem {
                    title: "Getting Started".to_owned(),
                    path: "/getting-started".to_owned(),
                },
                BreadcrumbItem {
                    title: "Setup".to_owned(),
                    path: "/getting-started/setup".to_owned(),
                },
            ]
        );
        assert!(context.outline.is_empty());
    }

    #[test]
    fn test_build_context_first_page() {
        let tree = getting_started();
        let pages = flatten(&tree).unwrap();

        let context = build_context(&tree, &pages, "getting-started/introduction/").unwrap();

        assert_eq!(context.path, "/getting-started/introduction");
        assert_eq!(context.previous, None);
        assert_eq!(context.next.map(|p| p.title), Some("Setup".to_owned()));
    }

    #[test]
    fn test_build_context_not_found() {
        let tree = getting_started();
        let pages = flatten(&tree).unwrap();

        let result = build_context(&tree, &pages, "/nonexistent");

        assert_eq!(result, Err(NotFound::new("/nonexistent")));
    }

    #[test]
    fn test_with_outline_attaches_entries() {
        let tree = getting_started();
        let pages = flatten(&tree).unwrap();
        let outline = vec![OutlineEntry {
            level: 2,
            text: "Install".to_owned(),
            anchor: "install".to_owned(),
        }];

        let context = build_context(&tree, &pages, "/getting-started/setup")
            .unwrap()
            .with_outline(outline.clone());

        assert_eq!(context.outline, outline);
    }

    proptest! {
        #[test]
        fn prop_pagination_links_neighbors(tree in arb_tree()) {
            let pages = flatten(&tree).unwrap();
            let last = pages.len().saturating_sub(1);
            for (i, page) in pages.iter().enumerate() {
                let context = build_context(&tree, &pages, &page.path).unwrap();
                if i == 0 {
                    prop_assert!(context.previous.is_none());
                } else {
                    prop_assert_eq!(context.previous.as_ref(), Some(&pages[i - 1]));
                }
                if i == last {
                    prop_assert!(context.next.is_none());
                } else {
                    prop_assert_eq!(context.next.as_ref(), Some(&pages[i + 1]));
                }
            }
        }
    }
}
