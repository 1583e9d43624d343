//! Data types exchanged with the Jellyfin server and the front-end

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Jellyfin user, as returned by `GET /Users`
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    #[serde(rename = "Id")]
    pub id: String,
}

/// Envelope for `GET /Users/{id}/Items`
///
/// Item records are kept as raw JSON: the formatter traverses them with
/// defaults instead of rejecting partially-populated metadata.
#[derive(Debug, Deserialize)]
pub struct ItemsPage {
    #[serde(rename = "Items", default)]
    pub items: Vec<Value>,
}

/// Whether the record describes an active playback or a random pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Playing,
    Random,
}

/// The normalized record consumed by the front-end poster view
#[derive(Debug, Clone, Serialize)]
pub struct DisplayRecord {
    pub mode: DisplayMode,
    pub title: String,
    pub year: Option<i64>,
    pub tagline: String,
    pub overview: String,
    pub rating: String,
    pub duration_badge: String,
    pub resolution: String,
    pub audio: String,
    pub image_url: String,
    pub progress_percent: f64,
    pub time_current: String,
    pub time_total: String,
}
