//! Process-wide navigators for both namespaces.

use std::sync::{Arc, LazyLock};

use dagdocs_routes::{Navigator, RouteError, RouteNode};

use crate::namespace::Namespace;
use crate::routes::{docs_routes, example_routes};

static BUILTIN: LazyLock<Result<Arc<Navigators>, RouteError>> =
    LazyLock::new(|| Navigators::new(docs_routes(), example_routes()).map(Arc::new));

/// One validated [`Navigator`] per namespace.
#[derive(Debug)]
pub struct Navigators {
    docs: Navigator,
    examples: Navigator,
}

impl Navigators {
    /// Validate and flatten both route trees.
    ///
    /// # Errors
    ///
    /// Returns the first [`RouteError`] found in either tree.
    pub fn new(docs: RouteNode, examples: RouteNode) -> Result<Self, RouteError> {
        let navigators = Self {
            docs: Navigator::new(docs)?,
            examples: Navigator::new(examples)?,
        };
        tracing::debug!(
            docs = navigators.docs.pages().len(),
            examples = navigators.examples.pages().len(),
            "Route trees loaded"
        );
        Ok(navigators)
    }

    /// Navigator for a namespace.
    #[must_use]
    pub fn get(&self, namespace: Namespace) -> &Navigator {
        match namespace {
            Namespace::Docs => &self.docs,
            Namespace::Examples => &self.examples,
        }
    }
}

/// Navigators for the built-in route trees.
///
/// Derived on first call and shared for the rest of the process.
///
/// # Errors
///
/// Returns the [`RouteError`] of a misconfigured built-in tree. Every call
/// returns the same error.
pub fn builtin_navigators() -> Result<Arc<Navigators>, RouteError> {
    BUILTIN.as_ref().map(Arc::clone).map_err(Clone::clone)
}
