//! `dagdocs routes` command implementation.

use clap::Args;
use dagdocs_site::{Namespace, builtin_navigators};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Namespace to list (`docs` or `examples`); lists both when omitted.
    #[arg(value_parser = parse_namespace)]
    namespace: Option<Namespace>,
}

fn parse_namespace(value: &str) -> Result<Namespace, String> {
    value.parse().map_err(|e: dagdocs_site::PageError| e.to_string())
}

impl RoutesArgs {
    /// Print pages in reading order.
    ///
    /// # Errors
    ///
    /// Returns the route error of the first invalid tree.
    pub(crate) fn execute(&self) -> Result<(), CliError> {
        let output = Output::new();
        let navigators = builtin_navigators()?;
        let namespaces = match self.namespace {
            Some(namespace) => vec![namespace],
            None => Namespace::ALL.to_vec(),
        };

        for namespace in namespaces {
            output.highlight(namespace.prefix());
            for page in navigators.get(namespace).pages() {
                output.row(&namespace.url(&page.path), &page.title);
            }
        }
        Ok(())
    }
}
