use axum::http::StatusCode;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{TechAsset, UpdateStatus};

/// Result of asking the registry to change an asset's status. "Not found" is
/// a normal outcome here, not an error — transport failures and unexpected
/// upstream statuses travel in the `Err` channel as their own `AppError`
/// variants, so callers can never conflate the cases.
#[derive(Debug)]
pub enum UpdateOutcome {
    Updated(TechAsset),
    NotFound,
}

/// HTTP client for the registry service. Calls are synchronous from the
/// caller's point of view: no timeout, no retry.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: String,
}

impl RegistryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// GET /techs?status=... — the registry answers 200 with a JSON array for
    /// any status string, so anything else is an unexpected-status failure.
    pub async fn list_by_status(&self, status: &str) -> AppResult<Vec<TechAsset>> {
        let response = self
            .http
            .get(format!("{}/techs", self.base_url))
            .query(&[("status", status)])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(AppError::UpstreamStatus(response.status()));
        }

        let assets: Vec<TechAsset> = response.json().await?;
        debug!(status, count = assets.len(), "Fetched assets from registry");
        Ok(assets)
    }

    /// POST /techs/{invnumber} with `{"status": ...}`.
    pub async fn update_status(&self, invnumber: i64, status: &str) -> AppResult<UpdateOutcome> {
        let response = self
            .http
            .post(format!("{}/techs/{}", self.base_url, invnumber))
            .json(&UpdateStatus { status: status.to_string() })
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(UpdateOutcome::Updated(response.json().await?)),
            StatusCode::NOT_FOUND => Ok(UpdateOutcome::NotFound),
            other => Err(AppError::UpstreamStatus(other)),
        }
    }
}
