//! Content validation
//!
//! Runs a full catalog load and reports the outcome, so authoring mistakes
//! show up before a build.

use serde::Serialize;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::cli::commands::load_catalog;
use crate::content::{Catalog, CatalogLoader};
use crate::error::StarsiteError;

#[derive(Debug, Serialize)]
struct Report<'a> {
    valid: bool,
    narratives: usize,
    published: usize,
    tags: usize,
    warnings: Vec<WarningEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct WarningEntry<'a> {
    narrative: &'a str,
    field: &'a str,
    message: &'a str,
}

/// Validate every narrative in the content directory.
///
/// # Errors
///
/// Returns the catalog load error, or [`StarsiteError::StrictWarnings`] when
/// `--strict` is set and any warning was raised.
pub async fn run(args: &ValidateArgs, loader: &CatalogLoader) -> Result<(), StarsiteError> {
    let catalog = match load_catalog(loader).await {
        Ok(catalog) => catalog,
        Err(err) => {
            if args.format == OutputFormat::Json {
                let failure = serde_json::json!({
                    "valid": false,
                    "error": err.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&failure)?);
            }
            return Err(err);
        }
    };

    let warning_count = catalog.warnings().len();
    let valid = !(args.strict && warning_count > 0);

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report(&catalog, valid))?);
        }
        OutputFormat::Human => {
            for warning in catalog.warnings() {
                println!("{warning}");
            }
            println!(
                "{} narrative(s), {} published, {} tag(s), {} warning(s)",
                catalog.len(),
                catalog.published().count(),
                catalog.tags().len(),
                warning_count
            );
        }
    }

    if valid {
        tracing::info!(narratives = catalog.len(), "content valid");
        Ok(())
    } else {
        Err(StarsiteError::StrictWarnings {
            count: warning_count,
        })
    }
}

fn report(catalog: &Catalog, valid: bool) -> Report<'_> {
    Report {
        valid,
        narratives: catalog.len(),
        published: catalog.published().count(),
        tags: catalog.tags().len(),
        warnings: catalog
            .warnings()
            .iter()
            .map(|w| WarningEntry {
                narrative: &w.identifier,
                field: &w.issue.path,
                message: &w.issue.message,
            })
            .collect(),
    }
}
