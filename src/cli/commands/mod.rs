//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod list;
pub mod routes;
pub mod show;
pub mod validate;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::content::{Catalog, CatalogLoader};
use crate::error::StarsiteError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli) -> Result<(), StarsiteError> {
    let loader = CatalogLoader::new(cli.content.loader_options());

    match cli.command {
        Commands::List(args) => list::run(&args, &loader).await,
        Commands::Show(args) => show::run(&args, &loader).await,
        Commands::Routes(args) => routes::run(&args, &loader).await,
        Commands::Validate(args) => validate::run(&args, &loader).await,
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

/// Loads the full catalog, logging any failure at error level.
///
/// A failed full load is where authoring mistakes surface, so it is never
/// downgraded to an empty listing.
pub(crate) async fn load_catalog(loader: &CatalogLoader) -> Result<Catalog, StarsiteError> {
    let root = loader.options().content_root.display().to_string();
    tracing::info!(root = %root, "loading narratives");

    match loader.load_all().await {
        Ok(catalog) => {
            for warning in catalog.warnings() {
                tracing::warn!(
                    narrative = %warning.identifier,
                    field = %warning.issue.path,
                    "{}",
                    warning.issue.message
                );
            }
            Ok(catalog)
        }
        Err(err) => {
            tracing::error!(
                root = %root,
                narrative = err.identifier().unwrap_or("<none>"),
                error = %err,
                "failed to load narratives"
            );
            Err(err.into())
        }
    }
}
