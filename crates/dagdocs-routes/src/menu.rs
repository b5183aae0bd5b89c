//! Sidebar menu tree.

use serde::Serialize;

use crate::node::{RouteNode, join_path};

/// Navigation item with children for the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Full path of the node.
    pub path: String,
    /// False for section labels that cannot be opened.
    pub navigable: bool,
    /// Child navigation items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// Build the sidebar tree for a route tree.
///
/// Top-level items are the root's children. A navigable root is listed first
/// as a leaf so the index page stays reachable.
#[must_use]
pub fn build_menu(root: &RouteNode) -> Vec<NavItem> {
    let mut items = Vec::with_capacity(root.children().len() + 1);
    if root.is_navigable() {
        items.push(NavItem {
            title: root.title().to_owned(),
            path: String::new(),
            navigable: true,
            children: Vec::new(),
        });
    }
    items.extend(root.children().iter().map(|child| build_item(child, "")));
    items
}

fn build_item(node: &RouteNode, parent_path: &str) -> NavItem {
    let path = join_path(parent_path, node.segment());
    let children = node
        .children()
        .iter()
        .map(|child| build_item(child, &path))
        .collect();

    NavItem {
        title: node.title().to_owned(),
        path,
        navigable: node.is_navigable(),
        children,
    }
}
