//! Aggregated search results, grouped by category.
//!
//! A [`SearchResultSet`] maps each [`ResultCategory`] to a name → URL-path
//! mapping. Sets from multiple providers are merged additively with
//! [`SearchResultSet::add_all`]; on a name collision within a category the
//! later addition wins, so the merge order of providers decides collisions
//! deterministically.

use crate::types::{GuideProduct, ResultCategory};
use std::collections::BTreeMap;

/// Search results grouped under the eight fixed categories.
///
/// Constructed fresh per request and discarded after rendering. Entries
/// within a category are kept sorted by display name.
#[derive(Debug, Clone, Default)]
pub struct SearchResultSet {
    categories: BTreeMap<ResultCategory, BTreeMap<String, String>>,
}

impl SearchResultSet {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one entry to a category. A same-name entry already present in
    /// the category is replaced.
    pub fn add(&mut self, category: ResultCategory, name: impl Into<String>, path: impl Into<String>) {
        self.categories
            .entry(category)
            .or_default()
            .insert(name.into(), path.into());
    }

    /// Adds a guide entry under its product's guide category.
    ///
    /// The display name is `"{guide}: {page}"` and the path is
    /// `"/{product}/{guide}/{page}"`, matching the site's guide URL scheme.
    pub fn add_guide_result(&mut self, product: GuideProduct, guide: &str, page: &str) {
        self.add(
            product.category(),
            format!("{guide}: {page}"),
            format!("/{}/{guide}/{page}", product.slug()),
        );
    }

    /// Merges another result set into this one.
    ///
    /// Per category the union is taken; where both sets carry the same name,
    /// `other`'s path wins.
    pub fn add_all(&mut self, other: SearchResultSet) {
        for (category, entries) in other.categories {
            self.categories.entry(category).or_default().extend(entries);
        }
    }

    /// Returns the name → path mapping for one category.
    ///
    /// Empty categories yield an empty mapping rather than `None`, so the
    /// renderer can iterate all eight categories uniformly.
    pub fn category(&self, category: ResultCategory) -> &BTreeMap<String, String> {
        static EMPTY: BTreeMap<String, String> = BTreeMap::new();
        self.categories.get(&category).unwrap_or(&EMPTY)
    }

    /// Returns true iff every category is empty.
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(BTreeMap::is_empty)
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }
}
