//! Route tree flattening.
//!
//! Produces the ordered list of addressable pages that defines pagination
//! order. Traversal is pre-order: a navigable node is emitted before any of
//! its children, and children are visited in declared order. Sections are
//! never emitted but their descendants are.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;

use crate::error::RouteError;
use crate::node::{RouteNode, join_path};

/// A resolvable destination derived from a navigable [`RouteNode`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FlattenedPage {
    /// Title copied from the route node.
    pub title: String,
    /// Concatenated segments from the root (e.g. `/getting-started/setup`).
    pub path: String,
}

/// Flatten a route tree into its ordered list of pages.
///
/// `root` is treated as the tree's synthetic root. Every node is validated on
/// the way down, and duplicate full paths are rejected.
///
/// # Errors
///
/// Returns [`RouteError`] naming the offending path if the tree contains a
/// blank title, an empty section, an invalid segment, or a duplicate path.
pub fn flatten(root: &RouteNode) -> Result<Vec<FlattenedPage>, RouteError> {
    let mut pages = Vec::new();
    let mut seen = HashMap::new();

    collect(root, "", true, &mut pages, &mut seen)?;

    tracing::debug!(root = root.title(), pages = pages.len(), "Flattened route tree");
    Ok(pages)
}

fn collect(
    node: &RouteNode,
    parent_path: &str,
    is_root: bool,
    pages: &mut Vec<FlattenedPage>,
    seen: &mut HashMap<String, usize>,
) -> Result<(), RouteError> {
    node.validate(parent_path, is_root)?;
    let path = join_path(parent_path, node.segment());

    if node.is_navigable() {
        match seen.entry(path.clone()) {
            Entry::Occupied(first) => {
                return Err(RouteError::DuplicatePath {
                    path,
                    first: pages[*first.get()].title.clone(),
                    second: node.title().to_owned(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(pages.len());
            }
        }
        pages.push(FlattenedPage {
            title: node.title().to_owned(),
            path: path.clone(),
        });
    }

    for child in node.children() {
        collect(child, &path, false, pages, seen)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::testing::{arb_tree, getting_started};

    fn page(title: &str, path: &str) -> FlattenedPage {
        FlattenedPage {
            title: title.to_owned(),
            path: path.to_owned(),
        }
    }

    #[test]
    fn test_flatten_section_exposes_children_only() {
        let pages = flatten(&getting_started()).unwrap();

        assert_eq!(
            pages,
            vec![
                page("Introduction", "/getting-started/introduction"),
                page("Setup", "/getting-started/setup"),
            ]
        );
    }

    #[test]
    fn test_flatten_is_preorder() {
        let tree = RouteNode::root(
            "Docs",
            vec![
                RouteNode::page("A", "/a").with_children(vec![
                    RouteNode::page("B", "/b")
                        .with_children(vec![RouteNode::page("C", "/c")]),
                    RouteNode::page("D", "/d"),
                ]),
                RouteNode::page("E", "/e"),
            ],
        );

        let pages = flatten(&tree).unwrap();
        let paths: Vec<&str> = pages.iter().map(|p| p.path.as_str()).collect();

        assert_eq!(paths, vec!["/a", "/a/b", "/a/b/c", "/a/d", "/e"]);
    }

    #[test]
    fn test_flatten_nested_sections() {
        let tree = RouteNode::root(
            "Docs",
            vec![RouteNode::section(
                "Outer",
                "/outer",
                vec![RouteNode::section(
                    "Inner",
                    "/inner",
                    vec![RouteNode::page("Leaf", "/leaf")],
                )],
            )],
        );

        let pages = flatten(&tree).unwrap();

        assert_eq!(pages, vec![page("Leaf", "/outer/inner/leaf")]);
    }

    #[test]
    fn test_flatten_navigable_root_has_empty_path() {
        let tree = RouteNode::index("Home", vec![RouteNode::page("Guide", "/guide")]);

        let pages = flatten(&tree).unwrap();

        assert_eq!(pages, vec![page("Home", ""), page("Guide", "/guide")]);
    }

    #[test]
    fn test_flatten_duplicate_path_fails() {
        let tree = RouteNode::root(
            "Docs",
            vec![
                RouteNode::page("Setup", "/setup"),
                RouteNode::page("Setup Again", "setup/"),
            ],
        );

        let err = flatten(&tree).unwrap_err();

        assert_eq!(
            err,
            RouteError::DuplicatePath {
                path: "/setup".to_owned(),
                first: "Setup".to_owned(),
                second: "Setup Again".to_owned(),
            }
        );
    }

    #[test]
    fn test_flatten_rejects_backslash_segment_shadowing_nested_page() {
        let tree = RouteNode::root(
            "Docs",
            vec![
                RouteNode::page("A-backslash-B", "a\\b"),
                RouteNode::page("A", "/a").with_children(vec![RouteNode::page("B", "/b")]),
            ],
        );

        let err = flatten(&tree).unwrap_err();

        assert_eq!(
            err,
            RouteError::InvalidSegment {
                path: String::new(),
                segment: "/a\\b".to_owned(),
            }
        );
    }

    #[test]
    fn test_flatten_duplicate_across_section_and_page() {
        let tree = RouteNode::root(
            "Docs",
            vec![
                RouteNode::section("Guide", "/guide", vec![RouteNode::page("A", "/a")]),
                RouteNode::page("Guide A", "/guide").with_children(vec![RouteNode::page(
                    "Also A", "/a",
                )]),
            ],
        );

        let err = flatten(&tree).unwrap_err();

        assert!(matches!(err, RouteError::DuplicatePath { ref path, .. } if path == "/guide/a"));
    }

    #[test]
    fn test_flatten_reports_nested_empty_section() {
        let tree = RouteNode::root(
            "Docs",
            vec![RouteNode::page("Components", "/components").with_children(vec![
                RouteNode::section("Advanced", "/advanced", Vec::new()),
            ])],
        );

        let err = flatten(&tree).unwrap_err();

        assert_eq!(
            err,
            RouteError::EmptySection {
                path: "/components/advanced".to_owned()
            }
        );
    }

    #[test]
    fn test_flatten_reports_blank_title() {
        let tree = RouteNode::root("Docs", vec![RouteNode::page("", "/nameless")]);

        assert_eq!(
            flatten(&tree).unwrap_err(),
            RouteError::BlankTitle {
                path: "/nameless".to_owned()
            }
        );
    }

    proptest! {
        #[test]
        fn prop_flatten_is_deterministic(tree in arb_tree()) {
            let first = flatten(&tree).unwrap();
            let second = flatten(&tree).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_flattened_paths_are_unique(tree in arb_tree()) {
            let pages = flatten(&tree).unwrap();
            let mut paths: Vec<&str> = pages.iter().map(|p| p.path.as_str()).collect();
            paths.sort_unstable();
            paths.dedup();
            prop_assert_eq!(paths.len(), pages.len());
        }
    }
}
