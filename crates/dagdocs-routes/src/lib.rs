//! Route tree flattening and navigation context for dagdocs.
//!
//! This crate provides:
//! - [`RouteNode`]: the authored, nested navigation outline
//! - [`flatten`]: pre-order flattening into addressable [`FlattenedPage`]s
//! - [`resolve`]: exact path lookup in the flattened list
//! - [`build_context`]: breadcrumbs and previous/next links for a page
//! - [`Navigator`]: all of the above precomputed for one tree
//!
//! # Quick Start
//!
//! ```
//! use dagdocs_routes::{Navigator, RouteNode};
//!
//! let tree = RouteNode::root(
//!     "Docs",
//!     vec![RouteNode::section(
//!         "Getting Started",
//!         "/getting-started",
//!         vec![
//!             RouteNode::page("Introduction", "/introduction"),
//!             RouteNode::page("Setup", "/setup"),
//!         ],
//!     )],
//! );
//! let navigator = Navigator::new(tree).unwrap();
//!
//! let context = navigator.context("/getting-started/setup").unwrap();
//! assert_eq!(context.previous.unwrap().title, "Introduction");
//! assert!(context.next.is_none());
//! assert_eq!(context.breadcrumbs[0].title, "Getting Started");
//! ```

mod breadcrumb;
mod context;
mod error;
mod flatten;
mod menu;
mod navigator;
mod node;
mod resolve;
#[cfg(test)]
mod testing;

pub use breadcrumb::{BreadcrumbItem, breadcrumbs};
pub use context::{NavigationContext, OutlineEntry, build_context};
pub use error::{NotFound, RouteError};
pub use flatten::{FlattenedPage, flatten};
pub use menu::{NavItem, build_menu};
pub use navigator::Navigator;
pub use node::{RouteNode, SEPARATOR};
pub use resolve::{join_segments, normalize_path, resolve};
