//! Query fan-out and deterministic merge across providers.
//!
//! All providers are queried concurrently; their contributions are then
//! merged in provider registration order, so the final set does not depend
//! on which backend answered first. Each provider's set is merged whole, so
//! a category is never left half-merged.

use crate::error::SearchError;
use crate::provider::SearchProvider;
use crate::result_set::SearchResultSet;
use std::sync::Arc;

/// Queries every provider for `term` and merges the contributions.
///
/// On a name collision within a category, the provider registered later
/// wins. Any provider error fails the whole aggregation; partial results
/// from the other providers are discarded rather than rendered as a
/// silently incomplete page.
///
/// # Errors
///
/// Returns the first failing provider's [`SearchError`], in registration
/// order.
pub async fn aggregate(
    term: &str,
    providers: &[Arc<dyn SearchProvider>],
) -> Result<SearchResultSet, SearchError> {
    let futures: Vec<_> = providers
        .iter()
        .map(|provider| {
            let provider = Arc::clone(provider);
            let term = term.to_string();
            async move { provider.search(&term).await }
        })
        .collect();

    let outcomes = futures::future::join_all(futures).await;

    let mut merged = SearchResultSet::new();
    for (provider, outcome) in providers.iter().zip(outcomes) {
        match outcome {
            Ok(contribution) => {
                tracing::debug!(
                    provider = provider.name(),
                    count = contribution.len(),
                    "provider returned results"
                );
                merged.add_all(contribution);
            }
            Err(err) => {
                tracing::warn!(provider = provider.name(), error = %err, "provider query failed");
                return Err(err);
            }
        }
    }

    Ok(merged)
}
