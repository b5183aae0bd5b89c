//! YAML frontmatter parsing.
//!
//! Documents start with a block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Setup
//! description: Installing the library
//! ---
//!
//! # Body
//! ```

use crate::source::Frontmatter;

const FENCE: &str = "---";

/// Frontmatter parse failure.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    /// Document does not start with a `---` line.
    #[error("document has no frontmatter block")]
    Missing,
    /// Opening `---` without a closing one.
    #[error("frontmatter block is not terminated")]
    Unterminated,
    /// YAML is invalid or lacks a title.
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Split `raw` into parsed frontmatter and the markdown body.
pub(crate) fn parse(raw: &str) -> Result<(Frontmatter, &str), FrontmatterError> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut lines = raw.split_inclusive('\n');

    let first = lines.next().ok_or(FrontmatterError::Missing)?;
    if first.trim_end() != FENCE {
        return Err(FrontmatterError::Missing);
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == FENCE {
            let frontmatter: Frontmatter = serde_yaml::from_str(&raw[start..offset])?;
            return Ok((frontmatter, &raw[offset + line.len()..]));
        }
        offset += line.len();
    }
    Err(FrontmatterError::Unterminated)
}
