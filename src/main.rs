use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

mod config;
mod error;
mod extract;
mod format;
mod jellyfin;
mod models;
mod routes;
mod selection;
mod state;

use tokio::net::TcpListener;

use crate::{config::Config, jellyfin::JellyfinClient, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Missing JELLYFIN_URL / JELLYFIN_API_KEY aborts here, before binding
    let config = Config::from_env()?;

    // Initialize logging
    let level = if config.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting poster server");
    info!("Target media server: {}", config.base_url);

    let client = JellyfinClient::new(&config.base_url, &config.api_key);
    let state = AppState::new(client);

    // Warm the user id cache; a failure here is retried lazily per request
    match state.user_id().await {
        Some(id) => info!("User ID detected: {id}"),
        None => warn!("Could not detect a user ID; will retry on demand"),
    }

    let app = routes::create_router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Poster server listening on 0.0.0.0:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
