//! Concrete search provider implementations.
//!
//! One module per backend: the hardcoded keyword table, the site's own API
//! reference index (Hack and PHP), the guides index, and the imported
//! php.net reference index.

pub mod api_index;
pub mod guides_index;
pub mod hardcoded;
pub mod php_api_index;

pub use api_index::ApiIndexProvider;
pub use guides_index::GuidesIndexProvider;
pub use hardcoded::HardcodedProvider;
pub use php_api_index::PhpApiIndexProvider;
