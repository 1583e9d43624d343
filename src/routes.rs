//! Poster server routes

use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use serde_json::json;

use crate::{error::ApiError, selection, state::AppState};

/// Create the router for the poster server
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/next", get(next_poster))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Serve the front-end poster page
async fn index() -> Html<&'static str> {
    Html(include_str!("../static/poster.html"))
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "jellyfin-poster"
    }))
}

/// Resolve the next record to display
async fn next_poster(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let record = selection::next_display(&state)
        .await
        .ok_or(ApiError::NoData)?;
    Ok(Json(record))
}
