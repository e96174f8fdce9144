//! Error types for `starsite`
//!
//! Loading is strict and fails the whole catalog on the first bad file,
//! while single-item lookups degrade every failure into [`NotFound`].

use std::fmt::Write as _;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `starsite` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Content error (malformed frontmatter, validation failure)
    pub const CONTENT_ERROR: i32 = 2;

    /// I/O error (directory missing, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Requested narrative is absent, unpublished, or unreadable
    pub const NOT_FOUND: i32 = 4;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `starsite` operations.
#[derive(Debug, Error)]
pub enum StarsiteError {
    /// Catalog loading failed
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Detail lookup found nothing to show
    #[error(transparent)]
    NotFound(#[from] NotFound),

    /// Strict validation rejected a catalog that only had warnings
    #[error("validation produced {count} warning(s) in strict mode")]
    StrictWarnings {
        /// Number of warnings that were promoted to errors
        count: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StarsiteError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Load(LoadError::DirectoryUnreadable { .. } | LoadError::FileUnreadable { .. })
            | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Load(LoadError::ParseFailure { .. }) | Self::StrictWarnings { .. } => {
                ExitCode::CONTENT_ERROR
            }
            Self::NotFound(_) => ExitCode::NOT_FOUND,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Catalog Load Errors
// ============================================================================

/// Fatal failures of a full catalog load.
///
/// Any one of these aborts the whole load; a caller never sees a partially
/// populated catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The content root could not be enumerated
    #[error("content directory {path} is unreadable: {source}")]
    DirectoryUnreadable {
        /// Configured content root
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A discovered content file could not be read
    #[error("narrative file {path} is unreadable: {source}")]
    FileUnreadable {
        /// Path of the file that failed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Frontmatter was absent, malformed, or failed validation
    #[error("failed to parse narrative '{identifier}' ({path}): {reason}")]
    ParseFailure {
        /// Identifier derived from the offending file name
        identifier: String,
        /// Path of the offending file
        path: PathBuf,
        /// What went wrong
        reason: ParseFailureReason,
    },
}

impl LoadError {
    /// Identifier of the offending record, when the failure is tied to one.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::ParseFailure { identifier, .. } => Some(identifier),
            Self::DirectoryUnreadable { .. } | Self::FileUnreadable { .. } => None,
        }
    }
}

/// Why a single file's frontmatter was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseFailureReason {
    /// Fewer than two delimiter lines were found
    #[error("frontmatter block is missing")]
    MissingFrontmatter,

    /// The block is not a YAML mapping
    #[error("malformed frontmatter{}: {message}", fmt_line(.line))]
    Malformed {
        /// Line in the source file, when the YAML parser reported one
        line: Option<usize>,
        /// Parser message
        message: String,
    },

    /// The block parsed but does not describe a valid narrative
    #[error("invalid frontmatter: {}", fmt_issues(.issues))]
    Invalid {
        /// Every error-severity issue the validator found
        issues: Vec<ValidationIssue>,
    },
}

#[allow(clippy::ref_option)]
fn fmt_line(line: &Option<usize>) -> String {
    line.map_or_else(String::new, |l| format!(" at line {l}"))
}

fn fmt_issues(issues: &[ValidationIssue]) -> String {
    let mut out = String::new();
    for (i, issue) in issues.iter().enumerate() {
        if i > 0 {
            out.push_str("; ");
        }
        let _ = write!(out, "{} ({})", issue.message, issue.path);
    }
    out
}

// ============================================================================
// Detail Lookup
// ============================================================================

/// A detail lookup produced nothing.
///
/// Missing, unreadable, malformed, and unpublished narratives are all reported
/// the same way, so callers cannot tell them apart.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("narrative not found: {identifier}")]
pub struct NotFound {
    /// Identifier that was requested
    pub identifier: String,
}

impl NotFound {
    /// Creates a not-found result for `identifier`.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single issue found while validating a frontmatter block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Frontmatter key the issue refers to (e.g. "tags[2]")
    pub path: String,
    /// Description of the issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl ValidationIssue {
    /// Creates an error-severity issue.
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Creates a warning-severity issue.
    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Rejects the record
    Error,
    /// Reported, but the record still loads
    Warning,
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `starsite` operations.
pub type Result<T> = std::result::Result<T, StarsiteError>;

// ============================================================================
// Tests
// ============================================================================
