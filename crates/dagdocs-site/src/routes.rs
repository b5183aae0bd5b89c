//! Authored route trees for the two namespaces.
//!
//! Declaration order is pagination order.

use dagdocs_routes::RouteNode;

/// Route tree of the general documentation.
#[must_use]
pub fn docs_routes() -> RouteNode {
    RouteNode::root(
        "Documentation",
        vec![RouteNode::section(
            "Getting Started",
            "/getting-started",
            vec![
                RouteNode::page("Introduction", "/introduction"),
                RouteNode::page("Setup", "/setup"),
                RouteNode::page("Components", "/components").with_children(vec![
                    RouteNode::page("Project Structure", "/project-structure"),
                    RouteNode::page("Node", "/node"),
                    RouteNode::page("Connection", "/connection"),
                    RouteNode::page("Graph", "/graph"),
                    RouteNode::page("Parser", "/parser"),
                    RouteNode::page("Advanced features", "/advanced-features").with_children(
                        vec![
                            RouteNode::page("Conditional Execution", "/conditional-execution"),
                            RouteNode::page("Loop Subgraph", "/loop-subgraph"),
                            RouteNode::page("Send & Recv without id", "/send-recv-without-id"),
                            RouteNode::page("Typed Action", "/typed-action"),
                        ],
                    ),
                ]),
            ],
        )],
    )
}

/// Route tree of the example walkthroughs.
#[must_use]
pub fn example_routes() -> RouteNode {
    RouteNode::root(
        "Examples",
        vec![
            RouteNode::page("Example - hello-dagrs", "/hello-dagrs"),
            RouteNode::page("Example - custom-node", "/custom-node"),
            RouteNode::page("Example - macro `auto-node`", "/macro-auto-node"),
            RouteNode::page("Example - macro `dependencies!`", "/macro-auto-relay"),
            RouteNode::page("Example - compute dag", "/compute-dag"),
            RouteNode::page("Example - Conditional Execution", "/conditional-execution"),
            RouteNode::page("Example - Dynamic Router", "/dynamic-router"),
            RouteNode::page("Example - Loop Subgraph", "/loop-subgraph"),
            RouteNode::page("Example - Loop Node", "/loop-node"),
            RouteNode::page("Example - Checkpoint", "/checkpoint"),
            RouteNode::page("Example - Execution Hooks", "/execution-hooks"),
            RouteNode::page("Example - State Subscription", "/state-subscription"),
            RouteNode::page(
                "Example - receive any & broadcast & typed action",
                "/receive-any-typed-action",
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use dagdocs_routes::flatten;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_docs_routes_flatten_in_declared_order() {
        let pages = flatten(&docs_routes()).unwrap();
        let paths: Vec<&str> = pages.iter().map(|p| p.path.as_str()).collect();

        assert_eq!(
            paths,
            vec![
                "/getting-started/introduction",
                "/getting-started/setup",
                "/getting-started/components",
                "/getting-started/components/project-structure",
                "/getting-started/components/node",
                "/getting-started/components/connection",
                "/getting-started/components/graph",
                "/getting-started/components/parser",
                "/getting-started/components/advanced-features",
                "/getting-started/components/advanced-features/conditional-execution",
                "/getting-started/components/advanced-features/loop-subgraph",
                "/getting-started/components/advanced-features/send-recv-without-id",
                "/getting-started/components/advanced-features/typed-action",
            ]
        );
    }

    #[test]
    fn test_example_routes_are_flat() {
        let pages = flatten(&example_routes()).unwrap();

        assert_eq!(pages.len(), 13);
        assert_eq!(pages[0].path, "/hello-dagrs");
        assert_eq!(pages[12].path, "/receive-any-typed-action");
    }
}
