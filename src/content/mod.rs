//! Content module
//!
//! Turns a directory of markdown files with YAML frontmatter into a validated
//! in-memory catalog of narratives.

pub mod catalog;
pub mod frontmatter;
pub mod loader;
pub mod schema;
pub mod validation;

pub use catalog::{Catalog, LoadWarning, TagIndex};
pub use loader::{CatalogLoader, LoaderOptions, ParsedNarrative, parse_narrative};
pub use schema::NarrativeRecord;
pub use validation::{ValidationResult, Validator};
