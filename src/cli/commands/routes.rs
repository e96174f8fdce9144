//! Prerender route listing for static export.

use crate::cli::args::{OutputFormat, RoutesArgs};
use crate::cli::commands::load_catalog;
use crate::content::CatalogLoader;
use crate::error::StarsiteError;
use crate::routes::PrerenderManifest;

/// Print every route a static export has to render.
///
/// # Errors
///
/// Returns the catalog load error, or a JSON error when serializing output.
pub async fn run(args: &RoutesArgs, loader: &CatalogLoader) -> Result<(), StarsiteError> {
    let catalog = load_catalog(loader).await?;
    let manifest = PrerenderManifest::from_catalog(&catalog, &args.prefix);
    tracing::info!(
        routes = manifest.detail_routes().count(),
        "prerender manifest built"
    );

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&manifest)?),
        OutputFormat::Human => {
            for entry in &manifest.entries {
                println!("{entry}");
            }
        }
    }
    Ok(())
}
