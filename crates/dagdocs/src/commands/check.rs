//! `dagdocs check` command implementation.

use dagdocs_site::{Namespace, builtin_navigators};

use crate::error::CliError;
use crate::output::Output;

/// Validate both route trees and report their page counts.
///
/// # Errors
///
/// Returns the route error of the first invalid tree.
pub(crate) fn execute() -> Result<(), CliError> {
    let output = Output::new();
    let navigators = builtin_navigators()?;

    for namespace in Namespace::ALL {
        let pages = navigators.get(namespace).pages().len();
        output.info(&format!("{}: {pages} pages", namespace.prefix()));
    }
    output.success("Route trees are valid");
    Ok(())
}
