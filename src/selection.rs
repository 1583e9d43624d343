//! Decides what the poster view should show next
//!
//! An active playback always wins; otherwise a random movie from the library
//! fills in. Every upstream failure along the way degrades to "no data"
//! rather than surfacing an error detail to the front-end.

use rand::seq::SliceRandom;
use serde_json::Value;

use crate::extract::{Step, i64_at};
use crate::format::{Progress, display_record};
use crate::models::DisplayRecord;
use crate::state::AppState;

/// Number of candidate movies fetched for the random fallback
const RANDOM_POOL_SIZE: u32 = 20;

/// Produce the next record for the poster view, or `None` when neither a
/// session nor a fallback item is available.
pub async fn next_display(state: &AppState) -> Option<DisplayRecord> {
    if let Some(record) = now_playing(state).await {
        return Some(record);
    }
    random_pick(state).await
}

async fn now_playing(state: &AppState) -> Option<DisplayRecord> {
    let sessions = match state.client.list_sessions().await {
        Ok(sessions) => sessions,
        Err(e) => {
            tracing::error!("Session lookup failed: {e}");
            return None;
        }
    };
    pick_now_playing(state.client.base_url(), &sessions)
}

async fn random_pick(state: &AppState) -> Option<DisplayRecord> {
    let user_id = state.user_id().await?;

    let items = match state.client.list_random_movies(&user_id, RANDOM_POOL_SIZE).await {
        Ok(items) => items,
        Err(e) => {
            tracing::error!("Item listing failed: {e}");
            return None;
        }
    };
    pick_random(state.client.base_url(), &items)
}

/// First session with something playing becomes the record, with progress
/// derived from the session's play state.
fn pick_now_playing(base_url: &str, sessions: &[Value]) -> Option<DisplayRecord> {
    for session in sessions {
        let item = match session.get("NowPlayingItem") {
            Some(item) if item.as_object().is_some_and(|o| !o.is_empty()) => item,
            _ => continue,
        };

        let position_ticks = i64_at(session, &[Step::Key("PlayState"), Step::Key("PositionTicks")], 0);
        // Default 1 keeps the percentage division well-defined
        let duration_ticks = i64_at(item, &[Step::Key("RunTimeTicks")], 1);
        let percent = if duration_ticks > 0 {
            position_ticks as f64 / duration_ticks as f64 * 100.0
        } else {
            0.0
        };

        tracing::info!(
            "Now playing: {}",
            item.get("Name").and_then(serde_json::Value::as_str).unwrap_or("?")
        );
        let progress = Progress {
            percent,
            position_ticks,
            duration_ticks,
        };
        return Some(display_record(base_url, item, Some(progress)));
    }
    None
}

/// Uniform random pick out of the fetched candidates
fn pick_random(base_url: &str, items: &[Value]) -> Option<DisplayRecord> {
    let item = items.choose(&mut rand::thread_rng())?;
    Some(display_record(base_url, item, None))
}
