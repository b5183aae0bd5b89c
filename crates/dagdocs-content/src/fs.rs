//! Filesystem content source.
//!
//! Maps route paths to markdown files under a content root:
//!
//! | Route path | Candidates (first existing wins) |
//! |---|---|
//! | `""` | `index.md`, `index.mdx` |
//! | `/a/b` | `a/b.md`, `a/b.mdx`, `a/b/index.md`, `a/b/index.mdx` |

use std::path::PathBuf;

use dagdocs_routes::{SEPARATOR, normalize_path};

use crate::frontmatter;
use crate::markdown;
use crate::source::{ContentError, ContentSource, Document};

const EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Content source reading markdown files from a directory.
#[derive(Clone, Debug)]
pub struct FsContentSource {
    root: PathBuf,
}

impl FsContentSource {
    /// Create a source rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Candidate files for a normalized route path, in lookup order.
    fn candidates(&self, path: &str) -> Result<Vec<PathBuf>, ContentError> {
        let mut relative = PathBuf::new();
        for name in path.split(SEPARATOR).filter(|n| !n.is_empty()) {
            if name == "." || name == ".." {
                return Err(ContentError::InvalidPath(path.to_owned()));
            }
            relative.push(name);
        }

        let mut candidates = Vec::with_capacity(EXTENSIONS.len() * 2);
        if relative.as_os_str().is_empty() {
            for ext in EXTENSIONS {
                candidates.push(self.root.join(format!("index.{ext}")));
            }
        } else {
            let base = self.root.join(&relative);
            for ext in EXTENSIONS {
                let mut file = base.clone().into_os_string();
                file.push(".");
                file.push(ext);
                candidates.push(PathBuf::from(file));
            }
            for ext in EXTENSIONS {
                candidates.push(base.join(format!("index.{ext}")));
            }
        }
        Ok(candidates)
    }
}

impl ContentSource for FsContentSource {
    fn load(&self, path: &str) -> Result<Option<Document>, ContentError> {
        let path = normalize_path(path);
        let Some(file) = self
            .candidates(&path)?
            .into_iter()
            .find(|candidate| candidate.is_file())
        else {
            tracing::debug!(path = %path, root = %self.root.display(), "No content file for path");
            return Ok(None);
        };

        let raw = std::fs::read_to_string(&file).map_err(|source| ContentError::Io {
            path: file.clone(),
            source,
        })?;
        let (frontmatter, body) = frontmatter::parse(&raw).map_err(|source| {
            ContentError::Frontmatter {
                path: file.clone(),
                source,
            }
        })?;
        let (html, outline) = markdown::render(body);

        Ok(Some(Document {
            path,
            frontmatter,
            html,
            outline,
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write(dir: &TempDir, relative: &str, content: &str) {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_load_nested_index_mdx() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "getting-started/setup/index.mdx",
            "---\ntitle: Setup\ndescription: Install it\n---\n\n## Cargo\n\nAdd the crate.\n",
        );
        let source = FsContentSource::new(dir.path());

        let doc = source.load("/getting-started/setup/").unwrap().unwrap();

        assert_eq!(doc.path, "/getting-started/setup");
        assert_eq!(doc.frontmatter.title, "Setup");
        assert_eq!(doc.frontmatter.description.as_deref(), Some("Install it"));
        assert_eq!(doc.outline.len(), 1);
        assert_eq!(doc.outline[0].anchor, "cargo");
        assert!(doc.html.contains("<p>Add the crate.</p>"));
    }

    #[test]
    fn test_load_prefers_plain_file() {
        let dir = TempDir::new().unwrap();
        write(&dir, "node.md", "---\ntitle: Node File\n---\n");
        write(&dir, "node/index.md", "---\ntitle: Node Dir\n---\n");
        let source = FsContentSource::new(dir.path());

        let doc = source.load("/node").unwrap().unwrap();

        assert_eq!(doc.frontmatter.title, "Node File");
    }

    #[test]
    fn test_load_root_index() {
        let dir = TempDir::new().unwrap();
        write(&dir, "index.md", "---\ntitle: Home\n---\n");
        let source = FsContentSource::new(dir.path());

        let doc = source.load("").unwrap().unwrap();

        assert_eq!(doc.path, "");
        assert_eq!(doc.frontmatter.title, "Home");
    }

    #[test]
    fn test_load_missing_returns_none() {
        let dir = TempDir::new().unwrap();
        let source = FsContentSource::new(dir.path());

        assert!(source.load("/nonexistent").unwrap().is_none());
    }

    #[test]
    fn test_load_rejects_parent_segments() {
        let dir = TempDir::new().unwrap();
        let source = FsContentSource::new(dir.path());

        assert!(matches!(
            source.load("/../secret"),
            Err(ContentError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_load_bad_frontmatter() {
        let dir = TempDir::new().unwrap();
        write(&dir, "graph.md", "# No frontmatter\n");
        let source = FsContentSource::new(dir.path());

        let err = source.load("/graph").unwrap_err();

        assert!(matches!(err, ContentError::Frontmatter { .. }));
        assert!(err.to_string().contains("graph.md"));
    }
}
