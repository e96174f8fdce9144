//! Prerender route manifest.
//!
//! A static export has to know every detail page up front. The manifest lists
//! the crawl root plus one detail route per narrative, published or not;
//! unpublished pages render as the detail view's not-found page.

use serde::Serialize;

use crate::content::Catalog;

/// Crawl entry that tells the exporter to follow links from the index.
pub const CRAWL_ROOT: &str = "*";

/// Default URL prefix for detail pages.
pub const DEFAULT_PREFIX: &str = "/narrative";

/// Entries a static exporter must render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrerenderManifest {
    /// Crawl root first, then detail routes in catalog order.
    pub entries: Vec<String>,
}

impl PrerenderManifest {
    /// Builds the manifest for every record in `catalog`.
    ///
    /// `prefix` is normalized to start with `/` and not end with one.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog, prefix: &str) -> Self {
        let prefix = normalize_prefix(prefix);
        let mut entries = Vec::with_capacity(catalog.len() + 1);
        entries.push(CRAWL_ROOT.to_string());
        entries.extend(catalog.identifiers().map(|id| format!("{prefix}/{id}")));
        Self { entries }
    }

    /// Detail routes only, without the crawl root.
    pub fn detail_routes(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(String::as_str)
            .filter(|e| *e != CRAWL_ROOT)
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
