//! HTTP request handlers.

pub(crate) mod navigation;
pub(crate) mod pages;

use dagdocs_site::Namespace;

use crate::error::ServerError;

/// Parse the `{namespace}` path parameter.
pub(crate) fn parse_namespace(name: &str) -> Result<Namespace, ServerError> {
    name.parse::<Namespace>().map_err(ServerError::from)
}
