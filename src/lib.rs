//! # docsearch
//!
//! Search service for a documentation website. Aggregates matches from
//! several pre-built indices — narrative guides, the site's own API
//! reference for two languages, an imported php.net reference, and a small
//! hardcoded keyword table — and renders them as grouped HTML lists under
//! eight fixed category headings.
//!
//! ## Design
//!
//! - Providers implement [`SearchProvider`] and are queried concurrently;
//!   contributions are merged in provider registration order so output is
//!   deterministic regardless of which backend answers first
//! - Index-backed providers load their JSON index once at startup and
//!   answer case-insensitive substring queries in memory
//! - Rendering escapes all user-controlled text; the term flows raw through
//!   search and title construction until then
//! - A failing provider fails the whole request — no silently partial pages
//!
//! ## Example
//!
//! ```
//! # async fn example() -> docsearch::Result<()> {
//! use std::sync::Arc;
//! use docsearch::provider::SearchProvider;
//! use docsearch::providers::HardcodedProvider;
//!
//! let providers: Vec<Arc<dyn SearchProvider>> = vec![Arc::new(HardcodedProvider)];
//! let results = docsearch::aggregator::aggregate("vec", &providers).await?;
//! let page = docsearch::page::SearchPage::new("vec", results);
//! assert_eq!(page.title(), "Search results for 'vec':");
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod config;
pub mod error;
pub mod page;
pub mod provider;
pub mod providers;
pub mod result_set;
pub mod server;
pub mod types;

pub use config::SiteConfig;
pub use error::{Result, SearchError};
pub use page::SearchPage;
pub use provider::SearchProvider;
pub use result_set::SearchResultSet;
pub use types::{GuideProduct, ResultCategory};
