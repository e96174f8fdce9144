//! Narrative record types.
//!
//! [`RawNarrative`] mirrors the frontmatter keys as written by authors and is
//! only deserialized after validation has passed. [`NarrativeRecord`] is the
//! fully-typed catalog entry handed to the listing and detail views.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// Frontmatter Keys
// ============================================================================

/// Required string key.
pub const TITLE: &str = "title";
/// Required boolean key.
pub const PUBLISHED: &str = "published";
/// Required date-like string key.
pub const DATE: &str = "date";
/// Optional list of strings.
pub const TAGS: &str = "tags";

/// Long-text STAR keys. Absent values become empty strings.
pub const STAR_FIELDS: [&str; 4] = ["situation", "task", "action", "result"];

/// Optional short-summary keys.
pub const SUMMARY_FIELDS: [&str; 4] = [
    "short_summary_situation",
    "short_summary_task",
    "short_summary_action",
    "short_summary_result",
];

/// Returns `true` if `key` is part of the narrative frontmatter schema.
#[must_use]
pub fn is_known_field(key: &str) -> bool {
    matches!(key, TITLE | PUBLISHED | DATE | TAGS)
        || STAR_FIELDS.contains(&key)
        || SUMMARY_FIELDS.contains(&key)
}

// ============================================================================
// Raw Frontmatter
// ============================================================================

/// Frontmatter exactly as authored. Every key is optional at this stage.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNarrative {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub situation: Option<String>,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub short_summary_situation: Option<String>,
    #[serde(default)]
    pub short_summary_task: Option<String>,
    #[serde(default)]
    pub short_summary_action: Option<String>,
    #[serde(default)]
    pub short_summary_result: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(default)]
    pub date: Option<String>,
}

// ============================================================================
// Narrative Record
// ============================================================================

/// One STAR-format narrative in the catalog.
///
/// The identifier is derived from the content file name and serialized as
/// `slug`, the key the site templates expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeRecord {
    #[serde(rename = "slug")]
    pub identifier: String,
    pub title: String,
    pub tags: Vec<String>,
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_summary_situation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_summary_task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_summary_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_summary_result: Option<String>,
    pub published: bool,
    pub date: String,
}

impl NarrativeRecord {
    /// Builds a record from validated frontmatter.
    ///
    /// Returns `None` if a required field is absent, which validation rules
    /// out before this is called. Repeated tags keep their first occurrence.
    #[must_use]
    pub fn from_raw(identifier: String, raw: RawNarrative) -> Option<Self> {
        let mut tags: Vec<String> = Vec::new();
        for tag in raw.tags.unwrap_or_default() {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Some(Self {
            identifier,
            title: raw.title?,
            tags,
            situation: raw.situation.unwrap_or_default(),
            task: raw.task.unwrap_or_default(),
            action: raw.action.unwrap_or_default(),
            result: raw.result.unwrap_or_default(),
            short_summary_situation: raw.short_summary_situation,
            short_summary_task: raw.short_summary_task,
            short_summary_action: raw.short_summary_action,
            short_summary_result: raw.short_summary_result,
            published: raw.published?,
            date: raw.date?,
        })
    }

    /// The `date` field as a calendar date, if it is recognisable as one.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// Returns `true` if the record carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Parses a date-like string.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and any string whose first ten
/// characters form a `YYYY-MM-DD` date (e.g. `2024-03-01 09:00`).
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.date_naive());
    }
    value
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}
