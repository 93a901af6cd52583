//! Guides index — narrative documentation for Hack and HHVM.
//!
//! The index lists every guide page by product, guide and page identifier.
//! A query matches a page when the term appears (case-insensitively) in the
//! guide or page identifier.

use crate::error::SearchError;
use crate::provider::SearchProvider;
use crate::result_set::SearchResultSet;
use crate::types::GuideProduct;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::api_index::name_matches;

/// One guide page in the guides index file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideIndexEntry {
    /// Product the guide documents.
    pub product: GuideProduct,
    /// Guide identifier (URL segment).
    pub guide: String,
    /// Page identifier within the guide (URL segment).
    pub page: String,
}

/// Provider answering from the guides index.
pub struct GuidesIndexProvider {
    entries: Vec<GuideIndexEntry>,
}

impl GuidesIndexProvider {
    /// Builds a provider from already-parsed entries.
    pub fn from_entries(entries: Vec<GuideIndexEntry>) -> Result<Self, SearchError> {
        for entry in &entries {
            if entry.guide.is_empty() || entry.page.is_empty() {
                return Err(SearchError::Index(
                    "guides index entry with empty guide or page".into(),
                ));
            }
        }
        Ok(Self { entries })
    }

    /// Loads and parses the JSON index file at `path`.
    pub async fn load(path: &Path) -> Result<Self, SearchError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            SearchError::Index(format!("failed to read guides index {}: {e}", path.display()))
        })?;
        let entries: Vec<GuideIndexEntry> = serde_json::from_str(&raw).map_err(|e| {
            SearchError::Index(format!("failed to parse guides index {}: {e}", path.display()))
        })?;
        tracing::debug!(count = entries.len(), path = %path.display(), "guides index loaded");
        Self::from_entries(entries)
    }
}

#[async_trait]
impl SearchProvider for GuidesIndexProvider {
    async fn search(&self, term: &str) -> Result<SearchResultSet, SearchError> {
        tracing::trace!(term, "guides index search");
        let term_lower = term.to_lowercase();
        let mut results = SearchResultSet::new();

        for entry in &self.entries {
            if name_matches(&entry.guide, &term_lower) || name_matches(&entry.page, &term_lower) {
                results.add_guide_result(entry.product, &entry.guide, &entry.page);
            }
        }

        Ok(results)
    }

    fn name(&self) -> &'static str {
        "guides-index"
    }
}
