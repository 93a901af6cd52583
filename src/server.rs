//! HTTP front end for the search page.
//!
//! One content route (`GET /search?term=…`) plus a health probe. The `term`
//! parameter is required; requests without it are rejected by the query
//! extractor with a 400-class response before the handler runs. Slashes in
//! the value arrive intact since it is a query-string parameter.

use crate::aggregator;
use crate::config::SiteConfig;
use crate::page::{escape_html, SearchPage};
use crate::provider::SearchProvider;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

/// Shared server state: the provider list in fixed merge order.
#[derive(Clone)]
pub struct AppState {
    providers: Arc<Vec<Arc<dyn SearchProvider>>>,
}

impl AppState {
    /// Creates server state over a provider list.
    ///
    /// The list order is the merge order: on a same-name collision within a
    /// category, later providers win.
    pub fn new(providers: Vec<Arc<dyn SearchProvider>>) -> Self {
        Self {
            providers: Arc::new(providers),
        }
    }
}

#[derive(serde::Deserialize)]
struct SearchParams {
    term: String,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", get(search_page))
        .route("/health", get(health))
        .with_state(state)
}

/// Binds to the configured address and serves until shutdown.
pub async fn run_server(
    config: &SiteConfig,
    providers: Vec<Arc<dyn SearchProvider>>,
) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    let app = router(AppState::new(providers));

    tracing::info!("docsearch listening on http://{local_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok"
    }))
}

async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    match aggregator::aggregate(&params.term, &state.providers).await {
        Ok(results) => {
            let page = SearchPage::new(params.term, results);
            Html(render_shell(&page)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "search request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<p>Something went wrong. Please try again.</p>".to_string()),
            )
                .into_response()
        }
    }
}

/// Wraps a rendered page in the minimal outer shell.
fn render_shell(page: &SearchPage) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(&page.title()),
        page.body(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result_set::SearchResultSet;
    use crate::types::ResultCategory;
    use async_trait::async_trait;
    use crate::error::SearchError;

    struct OneHitProvider;

    #[async_trait]
    impl SearchProvider for OneHitProvider {
        async fn search(&self, term: &str) -> Result<SearchResultSet, SearchError> {
            let mut set = SearchResultSet::new();
            if term == "vector" {
                set.add(ResultCategory::HackClasses, "Vector", "/hack/class/Vector");
            }
            Ok(set)
        }

        fn name(&self) -> &'static str {
            "one-hit"
        }
    }

    struct BrokenProvider;

    #[async_trait]
    impl SearchProvider for BrokenProvider {
        async fn search(&self, _term: &str) -> Result<SearchResultSet, SearchError> {
            Err(SearchError::Provider("boom".into()))
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    fn state_with(providers: Vec<Arc<dyn SearchProvider>>) -> AppState {
        AppState::new(providers)
    }

    #[tokio::test]
    async fn search_handler_renders_result_page() {
        let state = state_with(vec![Arc::new(OneHitProvider)]);
        let response = search_page(
            State(state),
            Query(SearchParams {
                term: "vector".into(),
            }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let html = String::from_utf8(body.to_vec()).expect("utf8");
        assert!(html.contains("<title>Search results for &#39;vector&#39;:</title>"));
        assert!(html.contains("<h1>Hack Classes</h1>"));
        assert!(html.contains("href=\"/hack/class/Vector\""));
    }

    #[tokio::test]
    async fn search_handler_renders_no_results_page() {
        let state = state_with(vec![Arc::new(OneHitProvider)]);
        let response = search_page(
            State(state),
            Query(SearchParams {
                term: "nothing-here".into(),
            }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let html = String::from_utf8(body.to_vec()).expect("utf8");
        assert!(html.contains("<p>No results found.</p>"));
        assert!(!html.contains("<h1>"));
    }

    #[tokio::test]
    async fn provider_failure_maps_to_500() {
        let state = state_with(vec![Arc::new(OneHitProvider), Arc::new(BrokenProvider)]);
        let response = search_page(
            State(state),
            Query(SearchParams {
                term: "vector".into(),
            }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn term_with_slashes_is_preserved() {
        let state = state_with(vec![Arc::new(OneHitProvider)]);
        let response = search_page(
            State(state),
            Query(SearchParams {
                term: "HH/Lib/Vec".into(),
            }),
        )
        .await
        .into_response();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let html = String::from_utf8(body.to_vec()).expect("utf8");
        assert!(html.contains("Search results for &#39;HH/Lib/Vec&#39;:"));
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
