//! The in-memory catalog produced by a full load.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::content::schema::NarrativeRecord;
use crate::error::ValidationIssue;

// ============================================================================
// Tag Index
// ============================================================================

/// Distinct tags across a set of records, sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagIndex(Vec<String>);

impl TagIndex {
    /// Computes the sorted, deduplicated union of every record's tags.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a NarrativeRecord>) -> Self {
        let tags: BTreeSet<&str> = records
            .into_iter()
            .flat_map(|r| r.tags.iter().map(String::as_str))
            .collect();
        Self(tags.into_iter().map(str::to_string).collect())
    }

    /// Tags in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns `true` if `tag` appears on any record.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0
            .binary_search_by(|probe| probe.as_str().cmp(tag))
            .is_ok()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// A non-fatal problem noticed while loading one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// Identifier of the record the warning belongs to.
    pub identifier: String,

    /// The underlying validation issue.
    pub issue: ValidationIssue,
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.identifier, self.issue)
    }
}

/// Every narrative in the content directory plus the derived tag index.
///
/// All records are present regardless of `published`; use
/// [`Catalog::published`] for the public subset.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<NarrativeRecord>,
    tags: TagIndex,
    warnings: Vec<LoadWarning>,
}

impl Catalog {
    /// Builds a catalog, computing the tag index from `records`.
    #[must_use]
    pub fn new(records: Vec<NarrativeRecord>, warnings: Vec<LoadWarning>) -> Self {
        let tags = TagIndex::from_records(&records);
        Self {
            records,
            tags,
            warnings,
        }
    }

    /// Records ordered by identifier.
    #[must_use]
    pub fn records(&self) -> &[NarrativeRecord] {
        &self.records
    }

    #[must_use]
    pub const fn tags(&self) -> &TagIndex {
        &self.tags
    }

    /// Warnings collected while loading. Never fatal.
    #[must_use]
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// Looks up a record by identifier, published or not.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&NarrativeRecord> {
        self.records.iter().find(|r| r.identifier == identifier)
    }

    /// Records with `published: true`.
    pub fn published(&self) -> impl Iterator<Item = &NarrativeRecord> {
        self.records.iter().filter(|r| r.published)
    }

    /// Records carrying `tag`.
    pub fn with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a NarrativeRecord> {
        self.records.iter().filter(move |r| r.has_tag(tag))
    }

    /// Identifiers of every record, in catalog order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.identifier.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, tags: &[&str], published: bool) -> NarrativeRecord {
        NarrativeRecord {
            identifier: id.to_string(),
            title: id.to_uppercase(),
            tags: tags.iter().map(ToString::to_string).collect(),
            situation: String::new(),
            task: String::new(),
            action: String::new(),
            result: String::new(),
            short_summary_situation: None,
            short_summary_task: None,
            short_summary_action: None,
            short_summary_result: None,
            published,
            date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_tag_index_union_sorted() {
        let records = [
            record("a", &["go", "cli"], true),
            record("b", &["go", "web"], false),
        ];
        let index = TagIndex::from_records(&records);
        assert_eq!(index.as_slice(), ["cli", "go", "web"]);
        assert!(index.contains("web"));
        assert!(!index.contains("rust"));
    }

    #[test]
    fn test_tag_index_empty() {
        let index = TagIndex::from_records(&[]);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_tag_index_serializes_as_array() {
        let index = TagIndex::from_records(&[record("a", &["y", "x"], true)]);
        assert_eq!(serde_json::to_string(&index).unwrap(), r#"["x","y"]"#);
    }

    #[test]
    fn test_catalog_queries() {
        let catalog = Catalog::new(
            vec![
                record("alpha", &["x", "y"], true),
                record("beta", &["y", "z"], false),
            ],
            Vec::new(),
        );
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.tags().as_slice(), ["x", "y", "z"]);
        assert_eq!(
            catalog.published().map(|r| r.identifier.as_str()).collect::<Vec<_>>(),
            vec!["alpha"]
        );
        assert_eq!(catalog.with_tag("y").count(), 2);
        assert_eq!(catalog.with_tag("z").count(), 1);
        assert!(catalog.get("beta").is_some());
        assert!(catalog.get("gamma").is_none());
        assert_eq!(catalog.identifiers().collect::<Vec<_>>(), vec!["alpha", "beta"]);
    }
}
