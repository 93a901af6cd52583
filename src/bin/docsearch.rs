//! Search service binary: load config and indices, register providers in
//! the fixed merge order, serve.

use docsearch::provider::SearchProvider;
use docsearch::providers::{
    ApiIndexProvider, GuidesIndexProvider, HardcodedProvider, PhpApiIndexProvider,
};
use docsearch::{server, SiteConfig};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config_path = config_path_from_args()?;
    tracing::info!(path = %config_path.display(), "loading config");
    let config = SiteConfig::load(&config_path).await?;

    let api = ApiIndexProvider::load(&config.indices.api).await?;
    let guides = GuidesIndexProvider::load(&config.indices.guides).await?;
    let php_api = PhpApiIndexProvider::load(&config.indices.php_api).await?;

    // Registration order is merge order; keep it stable.
    let providers: Vec<Arc<dyn SearchProvider>> = vec![
        Arc::new(HardcodedProvider),
        Arc::new(api),
        Arc::new(guides),
        Arc::new(php_api),
    ];

    server::run_server(&config, providers).await.map_err(|e| {
        tracing::error!(error = %e, "docsearch exited with error");
        anyhow::anyhow!("docsearch failed: {e}")
    })
}

fn config_path_from_args() -> anyhow::Result<PathBuf> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None => Ok(PathBuf::from("docsearch.toml")),
        Some("--config") => args
            .next()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("--config requires a path")),
        Some(other) => Err(anyhow::anyhow!("unknown argument: {other}")),
    }
}
