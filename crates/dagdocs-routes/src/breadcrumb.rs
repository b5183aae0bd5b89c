//! Breadcrumb derivation by walking the route tree.
//!
//! Breadcrumbs are computed from the tree, not from the flattened page list,
//! because non-navigable sections must still appear as ancestors.

use serde::Serialize;

use crate::node::{RouteNode, SEPARATOR};
use crate::resolve::normalize_path;

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Display title.
    pub title: String,
    /// Cumulative path up to and including this node.
    pub path: String,
}

/// Build breadcrumbs for `requested`, root to leaf.
///
/// One item per path segment that matches a node in the tree. The synthetic
/// root is excluded. When sibling nodes share a segment, the walk backtracks
/// and prefers the branch that matches the whole path and ends on a
/// navigable node; otherwise the deepest partial match is returned.
#[must_use]
pub fn breadcrumbs(root: &RouteNode, requested: &str) -> Vec<BreadcrumbItem> {
    let path = normalize_path(requested);
    let names: Vec<&str> = path.split(SEPARATOR).skip(1).collect();

    let mut trail = Vec::with_capacity(names.len());
    let mut deepest = Vec::new();
    walk(root.children(), &names, &mut trail, &mut deepest);

    let mut cumulative = String::with_capacity(path.len());
    deepest
        .into_iter()
        .map(|node| {
            cumulative.push_str(node.segment());
            BreadcrumbItem {
                title: node.title().to_owned(),
                path: cumulative.clone(),
            }
        })
        .collect()
}

/// Depth-first match of `names` against the tree. Returns `true` on a full match.
fn walk<'a>(
    children: &'a [RouteNode],
    names: &[&str],
    trail: &mut Vec<&'a RouteNode>,
    deepest: &mut Vec<&'a RouteNode>,
) -> bool {
    if trail.len() > deepest.len() {
        deepest.clone_from(trail);
    }

    let Some((name, rest)) = names.split_first() else {
        let complete = trail.last().is_none_or(|node| node.is_navigable());
        if complete {
            deepest.clone_from(trail);
        }
        return complete;
    };

    for child in children {
        if child.segment().strip_prefix(SEPARATOR) != Some(*name) {
            continue;
        }
        trail.push(child);
        if walk(child.children(), rest, trail, deepest) {
            return true;
        }
        trail.pop();
    }
    false
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::flatten::flatten;
    use crate::testing::{arb_tree, getting_started};

    fn crumb(title: &str, path: &str) -> BreadcrumbItem {
        BreadcrumbItem {
            title: title.to_owned(),
            path: path.to_owned(),
        }
    }

    #[test]
    fn test_breadcrumbs_include_section_ancestor() {
        let crumbs = breadcrumbs(&getting_started(), "/getting-started/setup");

        assert_eq!(
            crumbs,
            vec![
                crumb("Getting Started", "/getting-started"),
                crumb("Setup", "/getting-started/setup"),
            ]
        );
    }

    #[test]
    fn test_breadcrumbs_empty_path() {
        assert!(breadcrumbs(&getting_started(), "").is_empty());
        assert!(breadcrumbs(&getting_started(), "/").is_empty());
    }

    #[test]
    fn test_breadcrumbs_unknown_path_stops_at_last_match() {
        let crumbs = breadcrumbs(&getting_started(), "/getting-started/missing");

        assert_eq!(crumbs, vec![crumb("Getting Started", "/getting-started")]);
    }

    #[test]
    fn test_breadcrumbs_unknown_root_segment() {
        assert!(breadcrumbs(&getting_started(), "/nonexistent").is_empty());
    }

    #[test]
    fn test_breadcrumbs_backtrack_over_shared_segment() {
        let tree = RouteNode::root(
            "Docs",
            vec![
                RouteNode::section("Guide Section", "/guide", vec![RouteNode::page("A", "/a")]),
                RouteNode::page("Guide", "/guide")
                    .with_children(vec![RouteNode::page("B", "/b")]),
            ],
        );

        assert_eq!(
            breadcrumbs(&tree, "/guide/b"),
            vec![crumb("Guide", "/guide"), crumb("B", "/guide/b")]
        );
        assert_eq!(breadcrumbs(&tree, "/guide"), vec![crumb("Guide", "/guide")]);
        assert_eq!(
            breadcrumbs(&tree, "/guide/a"),
            vec![crumb("Guide Section", "/guide"), crumb("A", "/guide/a")]
        );
    }

    proptest! {
        #[test]
        fn prop_breadcrumbs_follow_segments(tree in arb_tree()) {
            for page in flatten(&tree).unwrap() {
                let crumbs = breadcrumbs(&tree, &page.path);
                let segment_count = page.path.matches(SEPARATOR).count();
                prop_assert_eq!(crumbs.len(), segment_count);

                let mut previous = String::new();
                for item in &crumbs {
                    prop_assert!(item.path.len() > previous.len());
                    prop_assert!(item.path.starts_with(&previous));
                    previous.clone_from(&item.path);
                }
                prop_assert_eq!(previous, page.path.clone());
                prop_assert_eq!(&crumbs.last().unwrap().title, &page.title);
            }
        }
    }
}
