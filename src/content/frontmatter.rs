//! Frontmatter extraction.
//!
//! A content file carries its structured data between the first two lines
//! consisting of [`DELIMITER`]. Everything before the opening line and after
//! the closing line belongs to the rendering layer and is ignored here.

use serde_yaml::{Mapping, Value};

use crate::error::ParseFailureReason;

/// Marker line that opens and closes the frontmatter block.
pub const DELIMITER: &str = "---";

/// The raw frontmatter region of a content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    /// Text strictly between the two delimiter lines.
    pub block: &'a str,

    /// 1-based line number (in the source file) of the first block line.
    pub first_line: usize,
}

/// Locates the frontmatter block in `source`.
///
/// Delimiter lines may carry trailing whitespace or a `\r`. A leading UTF-8
/// BOM is ignored. Returns `None` when fewer than two delimiter lines exist.
#[must_use]
pub fn split(source: &str) -> Option<Frontmatter<'_>> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let mut open: Option<(usize, usize)> = None;
    let mut offset = 0usize;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        if line.trim_end() == DELIMITER {
            match open {
                None => open = Some((offset + line.len(), index + 2)),
                Some((start, first_line)) => {
                    return Some(Frontmatter {
                        block: &source[start..offset],
                        first_line,
                    });
                }
            }
        }
        offset += line.len();
    }

    None
}

/// Parses a frontmatter block into a YAML mapping.
///
/// This is the structural stage only: it checks that the block is YAML and
/// that its top level is a mapping. Field-level checks happen in validation.
///
/// # Errors
///
/// Returns [`ParseFailureReason::Malformed`] for YAML syntax errors, an empty
/// block, or a top-level value that is not a mapping.
pub fn parse(frontmatter: &Frontmatter<'_>) -> Result<Mapping, ParseFailureReason> {
    let value: Value =
        serde_yaml::from_str(frontmatter.block).map_err(|e| ParseFailureReason::Malformed {
            line: e
                .location()
                .map(|l| l.line() + frontmatter.first_line - 1),
            message: e.to_string(),
        })?;

    match value {
        Value::Mapping(map) => Ok(map),
        Value::Null => Err(ParseFailureReason::Malformed {
            line: None,
            message: "frontmatter block is empty".to_string(),
        }),
        other => Err(ParseFailureReason::Malformed {
            line: Some(frontmatter.first_line),
            message: format!(
                "frontmatter must be a mapping of keys to values, found {}",
                value_kind(&other)
            ),
        }),
    }
}

/// Splits and parses in one step.
///
/// # Errors
///
/// Returns [`ParseFailureReason::MissingFrontmatter`] if no block exists, or
/// the errors of [`parse`].
pub fn extract(source: &str) -> Result<Mapping, ParseFailureReason> {
    let frontmatter = split(source).ok_or(ParseFailureReason::MissingFrontmatter)?;
    parse(&frontmatter)
}

/// Short name of a YAML value's type, for error messages.
#[must_use]
pub const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
