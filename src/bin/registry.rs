use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use asset_tracker::config::RegistryConfig;
use asset_tracker::store::AssetStore;
use asset_tracker::{registry_router, seed, RegistryState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,asset_tracker=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = RegistryConfig::from_env()?;

    let store = AssetStore::new(seed::seed_assets());
    info!(assets = store.len(), "Seeded asset registry");

    let state = RegistryState {
        store: Arc::new(RwLock::new(store)),
    };

    let app = registry_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Registry service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
