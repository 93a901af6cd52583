//! Site API reference index — Hack and PHP symbols documented on the site.
//!
//! The index is a JSON array of entries produced by the docs build, loaded
//! once at startup and searched in memory with a case-insensitive substring
//! match against symbol names.

use crate::error::SearchError;
use crate::provider::SearchProvider;
use crate::result_set::SearchResultSet;
use crate::types::ResultCategory;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Kind of API symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKind {
    /// A class definition.
    Class,
    /// A trait definition (Hack only).
    Trait,
    /// An interface definition (Hack only).
    Interface,
    /// A top-level function.
    Function,
}

/// Which language the symbol belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiLanguage {
    /// Hack.
    Hack,
    /// PHP.
    Php,
}

/// One symbol in the API reference index file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiIndexEntry {
    /// Fully qualified symbol name as displayed.
    pub name: String,
    /// Symbol kind.
    pub kind: ApiKind,
    /// Symbol language.
    pub language: ApiLanguage,
    /// Site-relative URL path of the reference page.
    pub path: String,
}

/// Maps a (language, kind) pair to its display category.
///
/// Traits and interfaces only exist for Hack; a PHP entry with one of those
/// kinds is an index-build bug and is rejected at load time.
fn category_for(language: ApiLanguage, kind: ApiKind) -> Result<ResultCategory, SearchError> {
    match (language, kind) {
        (ApiLanguage::Hack, ApiKind::Class) => Ok(ResultCategory::HackClasses),
        (ApiLanguage::Hack, ApiKind::Trait) => Ok(ResultCategory::HackTraits),
        (ApiLanguage::Hack, ApiKind::Interface) => Ok(ResultCategory::HackInterfaces),
        (ApiLanguage::Hack, ApiKind::Function) => Ok(ResultCategory::HackFunctions),
        (ApiLanguage::Php, ApiKind::Class) => Ok(ResultCategory::PhpClasses),
        (ApiLanguage::Php, ApiKind::Function) => Ok(ResultCategory::PhpFunctions),
        (ApiLanguage::Php, kind) => Err(SearchError::Index(format!(
            "PHP entries cannot have kind {kind:?}"
        ))),
    }
}

/// Provider answering from the site's API reference index.
pub struct ApiIndexProvider {
    entries: Vec<ApiIndexEntry>,
}

impl ApiIndexProvider {
    /// Builds a provider from already-parsed entries, validating each one.
    pub fn from_entries(entries: Vec<ApiIndexEntry>) -> Result<Self, SearchError> {
        for entry in &entries {
            category_for(entry.language, entry.kind)?;
            if entry.name.is_empty() {
                return Err(SearchError::Index("API index entry with empty name".into()));
            }
        }
        Ok(Self { entries })
    }

    /// Loads and parses the JSON index file at `path`.
    pub async fn load(path: &Path) -> Result<Self, SearchError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            SearchError::Index(format!("failed to read API index {}: {e}", path.display()))
        })?;
        let entries: Vec<ApiIndexEntry> = serde_json::from_str(&raw).map_err(|e| {
            SearchError::Index(format!("failed to parse API index {}: {e}", path.display()))
        })?;
        tracing::debug!(count = entries.len(), path = %path.display(), "API index loaded");
        Self::from_entries(entries)
    }

    /// Number of symbols in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the index holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Case-insensitive substring match of the term against a symbol name.
pub(crate) fn name_matches(name: &str, term_lower: &str) -> bool {
    !term_lower.is_empty() && name.to_lowercase().contains(term_lower)
}

#[async_trait]
impl SearchProvider for ApiIndexProvider {
    async fn search(&self, term: &str) -> Result<SearchResultSet, SearchError> {
        tracing::trace!(term, "API index search");
        let term_lower = term.to_lowercase();
        let mut results = SearchResultSet::new();

        for entry in &self.entries {
            if name_matches(&entry.name, &term_lower) {
                let category = category_for(entry.language, entry.kind)?;
                results.add(category, entry.name.clone(), entry.path.clone());
            }
        }

        Ok(results)
    }

    fn name(&self) -> &'static str {
        "api-index"
    }
}
