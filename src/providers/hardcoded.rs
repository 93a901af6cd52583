//! Hardcoded keyword lookups for terms the indices answer poorly.
//!
//! Searching for a Hack collection type name ("vec", "Map", "keyset", …)
//! should surface the collections guide, not just the class reference, so
//! those keywords are mapped to the guide directly.

use crate::error::SearchError;
use crate::provider::SearchProvider;
use crate::result_set::SearchResultSet;
use crate::types::GuideProduct;
use async_trait::async_trait;

/// Keywords that map straight to the Hack arrays/collections guide.
/// Matched exactly against the lowercased term, never as a substring.
const HACK_ARRAY_KEYWORDS: &[&str] = &[
    "vec",
    "dict",
    "keyset",
    "vector",
    "immvector",
    "constvector",
    "map",
    "immmap",
    "constmap",
    "set",
    "immset",
    "constset",
];

/// Provider answering from the fixed keyword table. Local and synchronous.
pub struct HardcodedProvider;

#[async_trait]
impl SearchProvider for HardcodedProvider {
    async fn search(&self, term: &str) -> Result<SearchResultSet, SearchError> {
        let term = term.to_lowercase();
        let mut results = SearchResultSet::new();

        if HACK_ARRAY_KEYWORDS.contains(&term.as_str()) {
            results.add_guide_result(GuideProduct::Hack, "collections", "hack-arrays");
        }

        Ok(results)
    }

    fn name(&self) -> &'static str {
        "hardcoded"
    }
}
