//! Documentation namespaces.
//!
//! Each namespace owns an independent route tree and is addressed by a
//! top-level URL prefix.

use std::fmt;
use std::str::FromStr;

use dagdocs_routes::normalize_path;
use serde::Serialize;

use crate::site::PageError;

/// Top-level documentation namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    /// General documentation.
    Docs,
    /// Example walkthroughs.
    Examples,
}

impl Namespace {
    /// All namespaces in display order.
    pub const ALL: [Self; 2] = [Self::Docs, Self::Examples];

    /// Name used in API routes (`docs`, `examples`).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Docs => "docs",
            Self::Examples => "examples",
        }
    }

    /// URL prefix of the namespace (`/docs`, `/examples`).
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Docs => "/docs",
            Self::Examples => "/examples",
        }
    }

    /// Public URL for a route path within this namespace.
    #[must_use]
    pub fn url(self, path: &str) -> String {
        format!("{}{path}", self.prefix())
    }

    /// Split a public URL into its namespace and route path.
    ///
    /// ```
    /// use dagdocs_site::Namespace;
    ///
    /// assert_eq!(
    ///     Namespace::split_url("/examples/hello-dagrs/"),
    ///     Some((Namespace::Examples, "/hello-dagrs".to_owned()))
    /// );
    /// assert_eq!(Namespace::split_url("/docsx/a"), None);
    /// ```
    #[must_use]
    pub fn split_url(url: &str) -> Option<(Self, String)> {
        let url = normalize_path(url);
        Self::ALL.into_iter().find_map(|namespace| {
            let rest = url.strip_prefix(namespace.prefix())?;
            (rest.is_empty() || rest.starts_with('/')).then(|| (namespace, rest.to_owned()))
        })
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Namespace {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|namespace| namespace.name() == s)
            .ok_or_else(|| PageError::UnknownNamespace(s.to_owned()))
    }
}
