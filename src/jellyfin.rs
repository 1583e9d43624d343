//! HTTP client for the Jellyfin server API

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::JellyfinError;
use crate::models::{ItemsPage, User};

/// Timeout for lightweight lookups (users, sessions)
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);
/// Timeout for the heavier item listing call
const LISTING_TIMEOUT: Duration = Duration::from_secs(10);

/// Item metadata requested alongside the fallback movie listing
const ITEM_FIELDS: &str =
    "Overview,Taglines,MediaSources,OfficialRating,RunTimeTicks,ProductionYear";

/// Authenticated client for the Jellyfin HTTP API
#[derive(Clone)]
pub struct JellyfinClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl JellyfinClient {
    /// Create a new client against `base_url`, forwarding `api_key` as the
    /// `X-Emby-Token` header on every request
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Base URL of the server, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<T, JellyfinError> {
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .header("X-Emby-Token", &self.api_key)
            .query(query)
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(JellyfinError::Status(status));
        }

        Ok(response.json().await?)
    }

    /// List the server's users
    pub async fn list_users(&self) -> Result<Vec<User>, JellyfinError> {
        self.get_json("/Users", &[], LOOKUP_TIMEOUT).await
    }

    /// List active sessions; records are raw JSON since most session fields
    /// are optional and only a handful matter here
    pub async fn list_sessions(&self) -> Result<Vec<Value>, JellyfinError> {
        self.get_json("/Sessions", &[], LOOKUP_TIMEOUT).await
    }

    /// Fetch up to `limit` random movies from `user_id`'s library
    pub async fn list_random_movies(
        &self,
        user_id: &str,
        limit: u32,
    ) -> Result<Vec<Value>, JellyfinError> {
        let limit = limit.to_string();
        let query = [
            ("IncludeItemTypes", "Movie"),
            ("Recursive", "true"),
            ("Fields", ITEM_FIELDS),
            ("SortBy", "Random"),
            ("Limit", limit.as_str()),
            ("ImageTypes", "Primary"),
        ];

        let page: ItemsPage = self
            .get_json(
                &format!("/Users/{user_id}/Items"),
                &query,
                LISTING_TIMEOUT,
            )
            .await?;
        Ok(page.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = JellyfinClient::new("http://jellyfin:8096/", "key");
        assert_eq!(client.base_url(), "http://jellyfin:8096");

        let client = JellyfinClient::new("http://jellyfin:8096", "key");
        assert_eq!(client.base_url(), "http://jellyfin:8096");
    }
}
