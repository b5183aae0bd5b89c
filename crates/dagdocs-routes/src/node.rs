//! Route node model.
//!
//! A route tree is authored as nested [`RouteNode`] literals. The top node
//! of a tree is its synthetic root: it carries an empty segment and is never
//! shown in breadcrumbs. Every other node contributes one path segment.
//!
//! ```
//! use dagdocs_routes::RouteNode;
//!
//! let tree = RouteNode::root(
//!     "Docs",
//!     vec![RouteNode::section(
//!         "Getting Started",
//!         "/getting-started",
//!         vec![RouteNode::page("Introduction", "/introduction")],
//!     )],
//! );
//! assert_eq!(tree.children()[0].segment(), "/getting-started");
//! ```

use crate::error::RouteError;

/// Path separator used in segments and full paths.
pub const SEPARATOR: char = '/';

/// Characters read as path separators in requested paths.
pub(crate) const SEPARATORS: [char; 2] = [SEPARATOR, '\\'];

/// One entry in an authored navigation outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteNode {
    title: String,
    segment: String,
    navigable: bool,
    children: Vec<RouteNode>,
}

impl RouteNode {
    /// Create a navigable page node.
    ///
    /// The segment may be written with or without its leading slash
    /// (`"/setup"` and `"setup"` are equivalent).
    #[must_use]
    pub fn page(title: impl Into<String>, segment: &str) -> Self {
        Self {
            title: title.into(),
            segment: normalize_segment(segment),
            navigable: true,
            children: Vec::new(),
        }
    }

    /// Create a non-navigable section grouping `children` under a label.
    #[must_use]
    pub fn section(title: impl Into<String>, segment: &str, children: Vec<RouteNode>) -> Self {
        Self {
            title: title.into(),
            segment: normalize_segment(segment),
            navigable: false,
            children,
        }
    }

    /// Create a synthetic, non-navigable tree root.
    #[must_use]
    pub fn root(title: impl Into<String>, children: Vec<RouteNode>) -> Self {
        Self {
            title: title.into(),
            segment: String::new(),
            navigable: false,
            children,
        }
    }

    /// Create a navigable tree root, addressable at the empty path.
    #[must_use]
    pub fn index(title: impl Into<String>, children: Vec<RouteNode>) -> Self {
        Self {
            navigable: true,
            ..Self::root(title, children)
        }
    }

    /// Replace the children of this node.
    #[must_use]
    pub fn with_children(mut self, children: Vec<RouteNode>) -> Self {
        self.children = children;
        self
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Normalized segment (`"/name"`, or `""` for the root).
    #[must_use]
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Whether this node is a resolvable destination.
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        self.navigable
    }

    /// Child nodes in declared order.
    #[must_use]
    pub fn children(&self) -> &[RouteNode] {
        &self.children
    }

    /// Check this node's own structure.
    ///
    /// `parent_path` is the accumulated path of the parent, used to locate
    /// the node in error messages. Children are not visited.
    pub(crate) fn validate(&self, parent_path: &str, is_root: bool) -> Result<(), RouteError> {
        let path = join_path(parent_path, &self.segment);

        if !is_root && !is_valid_segment(&self.segment) {
            return Err(RouteError::InvalidSegment {
                path: parent_path.to_owned(),
                segment: self.segment.clone(),
            });
        }
        if self.title.trim().is_empty() {
            return Err(RouteError::BlankTitle { path });
        }
        if !self.navigable && self.children.is_empty() {
            return Err(RouteError::EmptySection { path });
        }
        Ok(())
    }
}

/// Normalize an authored segment to `"/name"` form.
///
/// Leading and trailing separators are stripped; an empty result stays empty.
fn normalize_segment(segment: &str) -> String {
    let trimmed = segment.trim().trim_matches(SEPARATORS);
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{SEPARATOR}{trimmed}")
    }
}

/// A non-root segment is a separator followed by one non-empty name.
///
/// The name may not contain any character [`normalize_path`] splits on,
/// otherwise the flattened path could never be requested.
///
/// [`normalize_path`]: crate::normalize_path
fn is_valid_segment(segment: &str) -> bool {
    segment
        .strip_prefix(SEPARATOR)
        .is_some_and(|name| !name.is_empty() && !name.contains(SEPARATORS))
}

/// Concatenate a parent path and a normalized segment.
pub(crate) fn join_path(parent: &str, segment: &str) -> String {
    let mut path = String::with_capacity(parent.len() + segment.len());
    path.push_str(parent);
    path.push_str(segment);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_normalizes_segment() {
        assert_eq!(RouteNode::page("Setup", "/setup").segment(), "/setup");
        assert_eq!(RouteNode::page("Setup", "setup").segment(), "/setup");
        assert_eq!(RouteNode::page("Setup", "/setup/").segment(), "/setup");
    }

    #[test]
    fn test_root_has_empty_segment() {
        let root = RouteNode::root("Docs", vec![RouteNode::page("A", "/a")]);

        assert_eq!(root.segment(), "");
        assert!(!root.is_navigable());
    }

    #[test]
    fn test_index_is_navigable() {
        let root = RouteNode::index("Home", Vec::new());

        assert_eq!(root.segment(), "");
        assert!(root.is_navigable());
    }

    #[test]
    fn test_with_children_replaces_children() {
        let node = RouteNode::page("Components", "/components")
            .with_children(vec![RouteNode::page("Node", "/node")]);

        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].title(), "Node");
        assert!(node.is_navigable());
    }

    #[test]
    fn test_validate_blank_title() {
        let node = RouteNode::page("   ", "/blank");

        let err = node.validate("/parent", false).unwrap_err();

        assert_eq!(
            err,
            RouteError::BlankTitle {
                path: "/parent/blank".to_owned()
            }
        );
    }

    #[test]
    fn test_validate_empty_section() {
        let node = RouteNode::section("Empty", "/empty", Vec::new());

        let err = node.validate("", false).unwrap_err();

        assert_eq!(
            err,
            RouteError::EmptySection {
                path: "/empty".to_owned()
            }
        );
    }

    #[test]
    fn test_validate_empty_segment_below_root() {
        let node = RouteNode::page("Nameless", "/");

        let err = node.validate("/guide", false).unwrap_err();

        assert!(matches!(err, RouteError::InvalidSegment { ref path, .. } if path == "/guide"));
    }

    #[test]
    fn test_validate_nested_segment_rejected() {
        let node = RouteNode::page("Deep", "/a/b");

        assert!(matches!(
            node.validate("", false),
            Err(RouteError::InvalidSegment { .. })
        ));
    }

    #[test]
    fn test_validate_backslash_segment_rejected() {
        let node = RouteNode::page("Windows", "a\\b");

        let err = node.validate("/guide", false).unwrap_err();

        assert_eq!(
            err,
            RouteError::InvalidSegment {
                path: "/guide".to_owned(),
                segment: "/a\\b".to_owned(),
            }
        );
    }

    #[test]
    fn test_page_strips_backslash_edges() {
        assert_eq!(RouteNode::page("Setup", "\\setup\\").segment(), "/setup");
    }

    #[test]
    fn test_validate_root_with_children_ok() {
        let root = RouteNode::root("Docs", vec![RouteNode::page("A", "/a")]);

        assert!(root.validate("", true).is_ok());
    }

    #[test]
    fn test_validate_empty_synthetic_root_is_dead_end() {
        let root = RouteNode::root("Docs", Vec::new());

        assert!(matches!(
            root.validate("", true),
            Err(RouteError::EmptySection { .. })
        ));
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", "/a"), "/a");
        assert_eq!(join_path("/a", "/b"), "/a/b");
        assert_eq!(join_path("", ""), "");
    }
}
