//! Custom error types for the poster server

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Error returned by calls against the Jellyfin API
#[derive(Error, Debug)]
pub enum JellyfinError {
    /// Transport failure, timeout, or undecodable body
    #[error("Jellyfin request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Jellyfin returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Error surfaced to HTTP consumers
#[derive(Error, Debug)]
pub enum ApiError {
    /// Nothing playing and no fallback item could be fetched
    #[error("No data available")]
    NoData,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NoData => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "No data available".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_data_maps_to_500_with_error_body() {
        let response = ApiError::NoData.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "No data available");
    }
}
