//! Trait definition for pluggable search providers.
//!
//! Each provider (hardcoded keyword table, API index, guides index, PHP API
//! index) implements [`SearchProvider`] so the aggregator can fan a query
//! out to all of them uniformly.

use crate::error::SearchError;
use crate::result_set::SearchResultSet;
use async_trait::async_trait;

/// A pluggable search backend contributing results for some categories.
///
/// Implementations receive the raw search term as typed by the user; any
/// normalisation (lowercasing, trimming) is the provider's own business.
/// All implementations must be `Send + Sync` so queries can run
/// concurrently behind shared server state.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Searches for `term` and returns this provider's contribution.
    ///
    /// An empty [`SearchResultSet`] is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the provider's backing index cannot answer
    /// the query. The aggregator treats any provider error as fatal for the
    /// whole request.
    async fn search(&self, term: &str) -> Result<SearchResultSet, SearchError>;

    /// Short provider name used in logs.
    fn name(&self) -> &'static str;
}
