use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// The registry could not be reached, or its response could not be read.
    #[error("registry request failed: {0}")]
    UpstreamUnreachable(#[from] reqwest::Error),

    /// The registry answered with a status the client does not handle
    /// (anything other than 200 or 404).
    #[error("registry returned unexpected status {0}")]
    UpstreamStatus(StatusCode),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::UpstreamUnreachable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "UPSTREAM_UNREACHABLE")
            }
            AppError::UpstreamStatus(_) => (StatusCode::INTERNAL_SERVER_ERROR, "UPSTREAM_STATUS"),
        };

        if status.is_server_error() {
            error!(code, "{}", self);
        }

        (status, Json(json!({ "error": self.to_string(), "code": code }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn bad_request_maps_to_400() {
        let (status, json) = error_to_response(AppError::BadRequest("bad body".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "BAD_REQUEST");
        assert_eq!(json["error"], "bad body");
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let (status, json) =
            error_to_response(AppError::NotFound("asset 42 not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["error"], "asset 42 not found");
    }

    #[tokio::test]
    async fn unexpected_upstream_status_maps_to_500_with_distinct_code() {
        let (status, json) =
            error_to_response(AppError::UpstreamStatus(StatusCode::SERVICE_UNAVAILABLE)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "UPSTREAM_STATUS");
        assert_eq!(json["error"], "registry returned unexpected status 503 Service Unavailable");
    }
}
