//! CLI error types.

use dagdocs_config::ConfigError;
use dagdocs_routes::RouteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Invalid route tree: {0}")]
    Routes(#[from] RouteError),

    #[error("{0}")]
    Server(String),
}
