//! Immutable navigator over one route tree.

use std::collections::HashMap;

use crate::context::{NavigationContext, context_at};
use crate::error::{NotFound, RouteError};
use crate::flatten::{FlattenedPage, flatten};
use crate::menu::{NavItem, build_menu};
use crate::node::RouteNode;
use crate::resolve::normalize_path;

/// A validated route tree with its flattened pages and a path index.
///
/// Built once from static configuration and then only read, so it can be
/// shared across threads without locking.
#[derive(Debug)]
pub struct Navigator {
    tree: RouteNode,
    pages: Vec<FlattenedPage>,
    path_index: HashMap<String, usize>,
}

impl Navigator {
    /// Validate and flatten `tree`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] if the tree is misconfigured.
    pub fn new(tree: RouteNode) -> Result<Self, RouteError> {
        let pages = flatten(&tree)?;
        let path_index = pages
            .iter()
            .enumerate()
            .map(|(i, page)| (page.path.clone(), i))
            .collect();

        Ok(Self {
            tree,
            pages,
            path_index,
        })
    }

    /// Pages in pagination order.
    #[must_use]
    pub fn pages(&self) -> &[FlattenedPage] {
        &self.pages
    }

    /// Index of the page matching `requested`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if no page matches.
    pub fn resolve(&self, requested: &str) -> Result<usize, NotFound> {
        let path = normalize_path(requested);
        if let Some(&index) = self.path_index.get(&path) {
            Ok(index)
        } else {
            tracing::debug!(path = %path, "No route matches requested path");
            Err(NotFound { path })
        }
    }

    /// Page matching `requested`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if no page matches.
    pub fn page(&self, requested: &str) -> Result<&FlattenedPage, NotFound> {
        self.resolve(requested).map(|index| &self.pages[index])
    }

    /// Breadcrumbs and pagination for `requested`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if no page matches. No partial context is built.
    pub fn context(&self, requested: &str) -> Result<NavigationContext, NotFound> {
        let index = self.resolve(requested)?;
        Ok(context_at(&self.tree, &self.pages, index))
    }

    /// Sidebar tree.
    #[must_use]
    pub fn menu(&self) -> Vec<NavItem> {
        build_menu(&self.tree)
    }
}
