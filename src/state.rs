//! Application state shared across handlers

use std::sync::{Arc, OnceLock};

use crate::jellyfin::JellyfinClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub client: JellyfinClient,
    // Populated on first successful lookup, then reused for the life of the
    // process. Racing writers would store the same value, so a lost set is
    // harmless.
    user_id: Arc<OnceLock<String>>,
}

impl AppState {
    pub fn new(client: JellyfinClient) -> Self {
        Self {
            client,
            user_id: Arc::new(OnceLock::new()),
        }
    }

    /// Resolve the user id for library queries, fetching and caching the
    /// server's first user on first use. Returns `None` when the server is
    /// unreachable or has no users; the cache stays empty so a later request
    /// can retry.
    pub async fn user_id(&self) -> Option<String> {
        if let Some(id) = self.user_id.get() {
            return Some(id.clone());
        }

        match self.client.list_users().await {
            Ok(users) => {
                let user = users.into_iter().next()?;
                let _ = self.user_id.set(user.id);
                self.user_id.get().cloned()
            }
            Err(e) => {
                tracing::error!("Failed to look up users: {e}");
                None
            }
        }
    }
}
