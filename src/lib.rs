use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod store;

use crate::client::RegistryClient;
use crate::store::AssetStore;

/// Shared state of the registry service — cheap to clone (heap behind Arc).
#[derive(Clone)]
pub struct RegistryState {
    pub store: Arc<RwLock<AssetStore>>,
}

/// Shared state of the reporting service. It keeps no data of its own, only
/// the client it proxies through.
#[derive(Clone)]
pub struct ReportingState {
    pub registry: RegistryClient,
}

pub fn registry_router(state: RegistryState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::registry::health))

        // ── Assets ──────────────────────────────────────────────────────────
        .route("/techs", get(handlers::registry::list_assets))
        .route("/techs/:invnumber", post(handlers::registry::update_asset_status))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn reporting_router(state: ReportingState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::reporting::health))

        // ── Derived views over the registry ─────────────────────────────────
        .route("/in_use", get(handlers::reporting::list_in_use))
        .route("/decommissioned", get(handlers::reporting::list_decommissioned))
        .route("/send-to-dump/:invnumber", post(handlers::reporting::send_to_dump))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
