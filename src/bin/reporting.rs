use tracing::info;

use asset_tracker::client::RegistryClient;
use asset_tracker::config::ReportingConfig;
use asset_tracker::{reporting_router, ReportingState};

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

    let config = ReportingConfig::from_env()?;

    info!("Proxying to registry at {}", config.registry_url);

    let state = ReportingState {
        registry: RegistryClient::new(config.registry_url),
    };

    let app = reporting_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Reporting service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
