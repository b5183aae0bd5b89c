//! Shared fixtures and generators for unit tests.

use proptest::prelude::*;

use crate::node::RouteNode;

/// The "Getting Started" section with two pages.
pub(crate) fn getting_started() -> RouteNode {
    RouteNode::root(
        "Docs",
        vec![RouteNode::section(
            "Getting Started",
            "/getting-started",
            vec![
                RouteNode::page("Introduction", "/introduction"),
                RouteNode::page("Setup", "/setup"),
            ],
        )],
    )
}

#[derive(Clone, Debug)]
enum Shape {
    Leaf,
    Page(Vec<Shape>),
    Section(Vec<Shape>),
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    Just(Shape::Leaf).prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Shape::Page),
            prop::collection::vec(inner, 1..4).prop_map(Shape::Section),
        ]
    })
}

fn build(shape: &Shape, position: usize) -> RouteNode {
    let title = format!("Title {position}");
    let segment = format!("/n{position}");
    let build_children =
        |shapes: &[Shape]| shapes.iter().enumerate().map(|(i, s)| build(s, i)).collect();

    match shape {
        Shape::Leaf => RouteNode::page(title, &segment),
        Shape::Page(children) => {
            RouteNode::page(title, &segment).with_children(build_children(children))
        }
        Shape::Section(children) => RouteNode::section(title, &segment, build_children(children)),
    }
}

/// Valid route trees: sibling segments are distinct, so full paths are unique.
pub(crate) fn arb_tree() -> impl Strategy<Value = RouteNode> {
    prop::collection::vec(arb_shape(), 1..5).prop_map(|shapes| {
        RouteNode::root(
            "Root",
            shapes.iter().enumerate().map(|(i, s)| build(s, i)).collect(),
        )
    })
}
