//! `starsite` - content catalog for a static personal site
//!
//! Reads a directory of markdown files whose YAML frontmatter describes
//! STAR-format career narratives, validates them, and exposes the listing
//! view, the detail lookup, and the routes a static export prerenders.

pub mod cli;
pub mod content;
pub mod error;
pub mod identifier;
pub mod observability;
pub mod routes;

pub use content::{Catalog, CatalogLoader, LoaderOptions, NarrativeRecord, TagIndex};
pub use error::{LoadError, NotFound, StarsiteError};
