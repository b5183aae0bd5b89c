//! Content retrieval for dagdocs pages.
//!
//! Navigation resolves a path; this crate turns a resolved path into a
//! rendered document with frontmatter metadata and an outline.
//!
//! - [`ContentSource`]: the retrieval trait
//! - [`FsContentSource`]: markdown files with YAML frontmatter
//! - `MockContentSource`: in-memory source (with the `mock` feature)

mod frontmatter;
mod fs;
mod markdown;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod source;

pub use frontmatter::FrontmatterError;
pub use fs::FsContentSource;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockContentSource;
pub use source::{ContentError, ContentSource, Document, Frontmatter};
