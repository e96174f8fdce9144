//! Catalog loader
//!
//! Each content file goes through the same pipeline:
//! 1. Read the file (UTF-8)
//! 2. Split out the frontmatter block
//! 3. YAML parsing into a mapping
//! 4. Validation (collects every issue)
//! 5. Deserialization into a typed `NarrativeRecord`
//!
//! `load_all` runs the pipeline for every file concurrently and is
//! all-or-nothing. `load_one` runs it for a single file and reports every
//! failure as `NotFound`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tokio::task::JoinSet;

use crate::content::catalog::{Catalog, LoadWarning};
use crate::content::frontmatter;
use crate::content::schema::{NarrativeRecord, RawNarrative, is_known_field};
use crate::content::validation::Validator;
use crate::error::{LoadError, NotFound, ParseFailureReason, ValidationIssue};
use crate::identifier;

// ============================================================================
// Public API
// ============================================================================

/// Default content directory, relative to the site root.
pub const DEFAULT_CONTENT_ROOT: &str = "src/lib/narratives";

/// Default content file extension.
pub const DEFAULT_EXTENSION: &str = "md";

/// Options for the catalog loader.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Directory holding one content file per narrative.
    pub content_root: PathBuf,

    /// Extension of content files, without the dot.
    pub extension: String,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from(DEFAULT_CONTENT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// A narrative that passed validation, with its non-fatal issues.
#[derive(Debug, Clone)]
pub struct ParsedNarrative {
    /// The typed record.
    pub record: NarrativeRecord,

    /// Warning-severity issues found during validation.
    pub warnings: Vec<ValidationIssue>,
}

/// Loads narratives from a content directory.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    options: LoaderOptions,
}

impl CatalogLoader {
    /// Creates a loader over the given content directory.
    #[must_use]
    pub const fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Creates a loader with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LoaderOptions::default())
    }

    #[must_use]
    pub const fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Path of the content file for `identifier`.
    #[must_use]
    pub fn path_for(&self, identifier: &str) -> PathBuf {
        self.options
            .content_root
            .join(identifier::file_name(identifier, &self.options.extension))
    }

    /// Loads every narrative in the content directory.
    ///
    /// Records come back ordered by identifier, whatever their `published`
    /// flag. An empty directory yields an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns the first failure encountered; remaining reads are cancelled:
    /// - [`LoadError::DirectoryUnreadable`] if the directory cannot be listed
    /// - [`LoadError::FileUnreadable`] if a content file cannot be read, or
    ///   its name is not UTF-8 or cannot be looked up as an identifier
    /// - [`LoadError::ParseFailure`] if any file's frontmatter is rejected
    pub async fn load_all(&self) -> Result<Catalog, LoadError> {
        let entries = self.discover().await?;
        tracing::debug!(
            root = %self.options.content_root.display(),
            files = entries.len(),
            "discovered narrative files"
        );

        let mut tasks = JoinSet::new();
        let mut task_paths = HashMap::new();
        let count = entries.len();

        for (index, (identifier, path)) in entries.into_iter().enumerate() {
            let task_path = path.clone();
            let handle = tasks.spawn(async move {
                let parsed = read_and_parse(&identifier, &path).await;
                (index, parsed)
            });
            task_paths.insert(handle.id(), task_path);
        }

        let mut slots: Vec<Option<ParsedNarrative>> = (0..count).map(|_| None).collect();

        while let Some(joined) = tasks.join_next_with_id().await {
            let outcome = match joined {
                Ok((_, (index, outcome))) => outcome.map(|parsed| (index, parsed)),
                Err(err) => Err(LoadError::FileUnreadable {
                    path: task_paths.remove(&err.id()).unwrap_or_default(),
                    source: std::io::Error::other(err.to_string()),
                }),
            };

            match outcome {
                Ok((index, parsed)) => slots[index] = Some(parsed),
                Err(err) => {
                    tasks.abort_all();
                    tracing::debug!(error = %err, "aborting catalog load");
                    return Err(err);
                }
            }
        }

        let mut records = Vec::with_capacity(count);
        let mut warnings = Vec::new();
        for parsed in slots.into_iter().flatten() {
            warnings.extend(parsed.warnings.into_iter().map(|issue| LoadWarning {
                identifier: parsed.record.identifier.clone(),
                issue,
            }));
            records.push(parsed.record);
        }

        let catalog = Catalog::new(records, warnings);
        tracing::debug!(
            records = catalog.len(),
            tags = catalog.tags().len(),
            warnings = catalog.warnings().len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Loads a single published narrative.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if the identifier is unsafe, the file is absent or
    /// unreadable, its frontmatter is rejected, or it is unpublished. The
    /// cause is only logged at debug level.
    pub async fn load_one(&self, identifier: &str) -> Result<NarrativeRecord, NotFound> {
        if !identifier::is_safe(identifier) {
            tracing::debug!(identifier, "rejected unsafe identifier");
            return Err(NotFound::new(identifier));
        }

        let path = self.path_for(identifier);
        match read_and_parse(identifier, &path).await {
            Ok(parsed) if parsed.record.published => Ok(parsed.record),
            Ok(_) => {
                tracing::debug!(identifier, "narrative is not published");
                Err(NotFound::new(identifier))
            }
            Err(err) => {
                tracing::debug!(identifier, error = %err, "narrative lookup failed");
                Err(NotFound::new(identifier))
            }
        }
    }

    /// Lists content files as `(identifier, path)`, sorted by identifier.
    async fn discover(&self) -> Result<Vec<(String, PathBuf)>, LoadError> {
        let root = &self.options.content_root;
        let unreadable = |source| LoadError::DirectoryUnreadable {
            path: root.clone(),
            source,
        };

        let mut dir = tokio::fs::read_dir(root).await.map_err(unreadable)?;
        let mut entries = Vec::new();
        let extension = &self.options.extension;

        while let Some(entry) = dir.next_entry().await.map_err(unreadable)? {
            let path = entry.path();
            // Hidden files are editor droppings (e.g. `.#draft.md`), not content.
            if entry.file_name().as_encoded_bytes().starts_with(b".")
                || !has_extension(&path, extension)
            {
                continue;
            }

            // Follows symlinks; FIFOs and sockets would block a read forever.
            let metadata = tokio::fs::metadata(&path)
                .await
                .map_err(|source| LoadError::FileUnreadable {
                    path: path.clone(),
                    source,
                })?;
            if !metadata.is_file() {
                tracing::debug!(path = %path.display(), "skipping non-regular entry");
                continue;
            }

            match identifier::from_path(&path, extension).filter(|id| identifier::is_safe(id)) {
                Some(id) => entries.push((id, path)),
                None => {
                    return Err(LoadError::FileUnreadable {
                        path,
                        source: std::io::Error::new(
                            std::io::ErrorKind::InvalidData,
                            "file name does not form a usable identifier",
                        ),
                    });
                }
            }
        }

        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }
}

// ============================================================================
// Per-file pipeline
// ============================================================================

async fn read_and_parse(identifier: &str, path: &Path) -> Result<ParsedNarrative, LoadError> {
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

    parse_narrative(identifier, &source).map_err(|reason| LoadError::ParseFailure {
        identifier: identifier.to_string(),
        path: path.to_path_buf(),
        reason,
    })
}

/// Runs the parse and validation stages on one file's text.
///
/// # Errors
///
/// Returns a [`ParseFailureReason`] when the frontmatter is missing,
/// malformed, or fails validation.
pub fn parse_narrative(
    identifier: &str,
    source: &str,
) -> Result<ParsedNarrative, ParseFailureReason> {
    let mut map = frontmatter::extract(source)?;

    let validation = Validator::new().validate(&map);
    if validation.has_errors() {
        return Err(ParseFailureReason::Invalid {
            issues: validation.errors,
        });
    }

    // Unknown keys were reported as warnings; keep them out of deserialization.
    map.retain(|key, _| key.as_str().is_some_and(is_known_field));

    let raw: RawNarrative =
        serde_yaml::from_value(Value::Mapping(map)).map_err(|e| ParseFailureReason::Malformed {
            line: None,
            message: format!("failed to deserialize frontmatter: {e}"),
        })?;

    let record = NarrativeRecord::from_raw(identifier.to_string(), raw).ok_or_else(|| {
        ParseFailureReason::Invalid {
            issues: vec![ValidationIssue::error("<root>", "missing required field")],
        }
    })?;

    Ok(ParsedNarrative {
        record,
        warnings: validation.warnings,
    })
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .is_some_and(|ext| ext.as_encoded_bytes() == extension.as_bytes())
}
