//! Frontmatter validation.
//!
//! Runs on the structurally-parsed mapping, before it is trusted to
//! deserialize into a [`RawNarrative`](crate::content::schema::RawNarrative).
//! Validation collects ALL issues instead of stopping at the first, so an
//! author sees every problem in a file at once.

use std::collections::HashSet;

use serde_yaml::{Mapping, Value};

use crate::content::frontmatter::value_kind;
use crate::content::schema::{
    self, DATE, PUBLISHED, STAR_FIELDS, SUMMARY_FIELDS, TAGS, TITLE, is_known_field,
};
use crate::error::ValidationIssue;

// ============================================================================
// Public API
// ============================================================================

/// Result of frontmatter validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (reject the record).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Frontmatter validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a frontmatter mapping and returns every issue found.
    pub fn validate(&mut self, map: &Mapping) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_keys(map);
        self.validate_title(map);
        self.validate_published(map);
        self.validate_date(map);
        self.validate_tags(map);

        for key in STAR_FIELDS.iter().chain(SUMMARY_FIELDS.iter()) {
            self.validate_optional_text(map, key);
        }

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ========================================================================
    // Field checks
    // ========================================================================

    fn validate_keys(&mut self, map: &Mapping) {
        for key in map.keys() {
            match key {
                Value::String(name) if is_known_field(name) => {}
                Value::String(name) => {
                    self.add_warning(name, format!("unknown field '{name}' is ignored"));
                }
                other => {
                    self.add_warning(
                        "<root>",
                        format!("non-string key ({}) is ignored", value_kind(other)),
                    );
                }
            }
        }
    }

    fn validate_title(&mut self, map: &Mapping) {
        if let Some(title) = self.required(map, TITLE, |v| v.as_str().is_some(), "a string") {
            if title.as_str().is_some_and(|t| t.trim().is_empty()) {
                self.add_warning(TITLE, "title is empty");
            }
        }
    }

    fn validate_published(&mut self, map: &Mapping) {
        self.required(map, PUBLISHED, |v| v.as_bool().is_some(), "a boolean");
    }

    fn validate_date(&mut self, map: &Mapping) {
        if let Some(Value::String(date)) =
            self.required(map, DATE, |v| v.as_str().is_some(), "a date string")
        {
            if schema::parse_date(date).is_none() {
                self.add_warning(
                    DATE,
                    format!("'{date}' is not a recognisable YYYY-MM-DD date"),
                );
            }
        }
    }

    fn validate_tags(&mut self, map: &Mapping) {
        let tags = match map.get(TAGS) {
            None | Some(Value::Null) => return,
            Some(Value::Sequence(tags)) => tags,
            Some(other) => {
                self.add_error(
                    TAGS,
                    format!("expected a list of strings, found {}", value_kind(other)),
                );
                return;
            }
        };

        let mut seen = HashSet::new();
        for (i, tag) in tags.iter().enumerate() {
            let path = format!("{TAGS}[{i}]");
            match tag {
                Value::String(tag) => {
                    if tag.trim().is_empty() {
                        self.add_warning(&path, "tag is blank");
                    } else if !seen.insert(tag.as_str()) {
                        self.add_warning(&path, format!("duplicate tag '{tag}'"));
                    }
                }
                other => {
                    self.add_error(
                        &path,
                        format!("expected a string, found {}", value_kind(other)),
                    );
                }
            }
        }
    }

    fn validate_optional_text(&mut self, map: &Mapping, key: &str) {
        match map.get(key) {
            None | Some(Value::Null | Value::String(_)) => {}
            Some(other) => {
                self.add_error(
                    key,
                    format!("expected a string, found {}", value_kind(other)),
                );
            }
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Checks that `key` is present, non-null, and accepted by `is_type`.
    ///
    /// Returns the value when it passed.
    fn required<'m>(
        &mut self,
        map: &'m Mapping,
        key: &str,
        is_type: impl Fn(&Value) -> bool,
        expected: &str,
    ) -> Option<&'m Value> {
        match map.get(key) {
            None | Some(Value::Null) => {
                self.add_error(key, "missing required field");
                None
            }
            Some(value) if is_type(value) => Some(value),
            Some(other) => {
                self.add_error(
                    key,
                    format!("expected {expected}, found {}", value_kind(other)),
                );
                None
            }
        }
    }

    fn add_error(&mut self, path: &str, message: impl Into<String>) {
        self.errors.push(ValidationIssue::error(path, message));
    }

    fn add_warning(&mut self, path: &str, message: impl Into<String>) {
        self.warnings.push(ValidationIssue::warning(path, message));
    }
}
