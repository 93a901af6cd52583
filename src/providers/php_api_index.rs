//! Imported php.net reference index.
//!
//! Symbols documented upstream on php.net that the site mirrors. Separate
//! from the site's own API index because the import pipeline produces a
//! simpler record: classes and functions only, no traits or interfaces.

use crate::error::SearchError;
use crate::provider::SearchProvider;
use crate::result_set::SearchResultSet;
use crate::types::ResultCategory;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::api_index::name_matches;

/// Kind of imported PHP symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhpApiKind {
    /// A class reference page.
    Class,
    /// A function reference page.
    Function,
}

impl PhpApiKind {
    fn category(self) -> ResultCategory {
        match self {
            Self::Class => ResultCategory::PhpClasses,
            Self::Function => ResultCategory::PhpFunctions,
        }
    }
}

/// One symbol in the imported PHP reference index file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhpApiIndexEntry {
    /// Symbol name as displayed.
    pub name: String,
    /// Symbol kind.
    pub kind: PhpApiKind,
    /// Site-relative URL path of the mirrored reference page.
    pub path: String,
}

/// Provider answering from the imported php.net reference index.
pub struct PhpApiIndexProvider {
    entries: Vec<PhpApiIndexEntry>,
}

impl PhpApiIndexProvider {
    /// Builds a provider from already-parsed entries.
    pub fn from_entries(entries: Vec<PhpApiIndexEntry>) -> Result<Self, SearchError> {
        for entry in &entries {
            if entry.name.is_empty() {
                return Err(SearchError::Index("PHP index entry with empty name".into()));
            }
        }
        Ok(Self { entries })
    }

    /// Loads and parses the JSON index file at `path`.
    pub async fn load(path: &Path) -> Result<Self, SearchError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            SearchError::Index(format!("failed to read PHP index {}: {e}", path.display()))
        })?;
        let entries: Vec<PhpApiIndexEntry> = serde_json::from_str(&raw).map_err(|e| {
            SearchError::Index(format!("failed to parse PHP index {}: {e}", path.display()))
        })?;
        tracing::debug!(count = entries.len(), path = %path.display(), "PHP index loaded");
        Self::from_entries(entries)
    }
}

#[async_trait]
impl SearchProvider for PhpApiIndexProvider {
    async fn search(&self, term: &str) -> Result<SearchResultSet, SearchError> {
        tracing::trace!(term, "PHP index search");
        let term_lower = term.to_lowercase();
        let mut results = SearchResultSet::new();

        for entry in &self.entries {
            if name_matches(&entry.name, &term_lower) {
                results.add(entry.kind.category(), entry.name.clone(), entry.path.clone());
            }
        }

        Ok(results)
    }

    fn name(&self) -> &'static str {
        "php-api-index"
    }
}
