//! Listing view: every narrative plus the tag index.

use std::cmp::Ordering;

use serde::Serialize;

use crate::cli::args::{ListArgs, OutputFormat, SortOrder};
use crate::cli::commands::load_catalog;
use crate::content::{CatalogLoader, NarrativeRecord, TagIndex};
use crate::error::StarsiteError;

/// JSON shape consumed by the index page.
#[derive(Debug, Serialize)]
struct Listing<'a> {
    narratives: Vec<&'a NarrativeRecord>,
    #[serde(rename = "allTags")]
    all_tags: TagIndex,
}

/// Print the narrative listing.
///
/// # Errors
///
/// Returns the catalog load error, or a JSON error when serializing output.
pub async fn run(args: &ListArgs, loader: &CatalogLoader) -> Result<(), StarsiteError> {
    let catalog = load_catalog(loader).await?;

    // The tag index stays unfiltered by --tag so it can drive a tag picker.
    let all_tags = if args.published_only {
        TagIndex::from_records(catalog.published())
    } else {
        catalog.tags().clone()
    };

    let mut narratives: Vec<&NarrativeRecord> = catalog
        .records()
        .iter()
        .filter(|r| !args.published_only || r.published)
        .filter(|r| args.tag.as_deref().is_none_or(|tag| r.has_tag(tag)))
        .collect();
    sort_records(&mut narratives, args.sort);

    match args.format {
        OutputFormat::Json => {
            let listing = Listing {
                narratives,
                all_tags,
            };
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Human => {
            if narratives.is_empty() {
                println!(
                    "No narratives found in {}",
                    loader.options().content_root.display()
                );
            }
            for record in &narratives {
                println!("{}", format_line(record));
            }
            if !all_tags.is_empty() {
                println!();
                println!("Tags: {}", all_tags.iter().collect::<Vec<_>>().join(", "));
            }
        }
    }

    Ok(())
}

/// Orders records in place. Ties fall back to identifier order.
pub fn sort_records(records: &mut [&NarrativeRecord], order: SortOrder) {
    match order {
        SortOrder::Slug => records.sort_by(|a, b| a.identifier.cmp(&b.identifier)),
        SortOrder::Title => records.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.identifier.cmp(&b.identifier))
        }),
        SortOrder::Date => records.sort_by(|a, b| {
            let by_date = match (a.parsed_date(), b.parsed_date()) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            by_date.then_with(|| a.identifier.cmp(&b.identifier))
        }),
    }
}

fn format_line(record: &NarrativeRecord) -> String {
    let status = if record.published { "published" } else { "draft" };
    let mut line = format!(
        "{:<24} {:<10} {:<9} {}",
        record.identifier, record.date, status, record.title
    );
    if !record.tags.is_empty() {
        line.push_str(&format!(" [{}]", record.tags.join(", ")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str, date: &str) -> NarrativeRecord {
        NarrativeRecord {
            identifier: id.to_string(),
            title: title.to_string(),
            tags: vec!["go".to_string()],
            situation: String::new(),
            task: String::new(),
            action: String::new(),
            result: String::new(),
            short_summary_situation: None,
            short_summary_task: None,
            short_summary_action: None,
            short_summary_result: None,
            published: true,
            date: date.to_string(),
        }
    }

    fn ids(records: &[&NarrativeRecord]) -> Vec<String> {
        records.iter().map(|r| r.identifier.clone()).collect()
    }

    #[test]
    fn sort_by_date_newest_first_unknown_last() {
        let a = record("a", "A", "2023-01-01");
        let b = record("b", "B", "2024-06-01");
        let c = record("c", "C", "someday");
        let mut records = vec![&c, &a, &b];
        sort_records(&mut records, SortOrder::Date);
        assert_eq!(ids(&records), vec!["b", "a", "c"]);
    }

    #[test]
    fn sort_by_title_case_insensitive() {
        let a = record("a", "zeta", "2024-01-01");
        let b = record("b", "Alpha", "2024-01-01");
        let mut records = vec![&a, &b];
        sort_records(&mut records, SortOrder::Title);
        assert_eq!(ids(&records), vec!["b", "a"]);
    }

    #[test]
    fn sort_by_slug() {
        let a = record("a", "A", "2024-01-01");
        let b = record("b", "B", "2024-01-01");
        let mut records = vec![&b, &a];
        sort_records(&mut records, SortOrder::Slug);
        assert_eq!(ids(&records), vec!["a", "b"]);
    }

    #[test]
    fn format_line_shows_status_and_tags() {
        let mut r = record("alpha", "Alpha", "2024-01-01");
        r.published = false;
        let line = format_line(&r);
        assert!(line.starts_with("alpha"));
        assert!(line.contains("draft"));
        assert!(line.ends_with("Alpha [go]"));
    }
}
