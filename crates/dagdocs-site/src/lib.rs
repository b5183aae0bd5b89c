//! Documentation namespaces and page assembly for dagdocs.
//!
//! This crate provides:
//! - [`Namespace`]: the `docs` and `examples` namespaces and their URL prefixes
//! - [`docs_routes`] / [`example_routes`]: the authored route trees
//! - [`builtin_navigators`]: navigators derived once per process
//! - [`Site`]: navigation context joined with content
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use dagdocs_content::FsContentSource;
//! use dagdocs_site::{Namespace, Site, builtin_navigators};
//!
//! let site = Site::new(
//!     builtin_navigators()?,
//!     Arc::new(FsContentSource::new("contents/docs")),
//!     Arc::new(FsContentSource::new("contents/examples")),
//! );
//!
//! let page = site.page(Namespace::Docs, "/getting-started/setup")?;
//! println!("{}", page.frontmatter.title);
//! # Ok(())
//! # }
//! ```

mod namespace;
mod navigators;
mod routes;
mod site;

pub use namespace::Namespace;
pub use navigators::{Navigators, builtin_navigators};
pub use routes::{docs_routes, example_routes};
pub use site::{PageError, PageView, Site};
