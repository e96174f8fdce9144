//! Detail view: one published narrative.

use crate::cli::args::{OutputFormat, ShowArgs};
use crate::content::{CatalogLoader, NarrativeRecord};
use crate::error::StarsiteError;

/// Print a single published narrative.
///
/// # Errors
///
/// Returns [`crate::error::NotFound`] for anything the loader cannot show,
/// unsafe identifiers included, and a JSON error when serializing output.
pub async fn run(args: &ShowArgs, loader: &CatalogLoader) -> Result<(), StarsiteError> {
    let record = loader.load_one(&args.identifier).await?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        OutputFormat::Human => print!("{}", render(&record)),
    }
    Ok(())
}

fn render(record: &NarrativeRecord) -> String {
    let mut out = format!("{}\n{}\n", record.title, "=".repeat(record.title.chars().count()));
    out.push_str(&format!("Date: {}\n", record.date));
    if !record.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", record.tags.join(", ")));
    }

    let sections = [
        ("Situation", &record.short_summary_situation, &record.situation),
        ("Task", &record.short_summary_task, &record.task),
        ("Action", &record.short_summary_action, &record.action),
        ("Result", &record.short_summary_result, &record.result),
    ];
    for (heading, summary, body) in sections {
        if body.is_empty() && summary.is_none() {
            continue;
        }
        out.push_str(&format!("\n## {heading}\n"));
        if let Some(summary) = summary {
            out.push_str(&format!("> {summary}\n"));
        }
        if !body.is_empty() {
            out.push_str(body.trim_end());
            out.push('\n');
        }
    }
    out
}
