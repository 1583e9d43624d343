//! Turns raw Jellyfin item records into display-ready poster data

use serde_json::Value;

use crate::extract::{Step, i64_at, safe_get, str_at};
use crate::models::{DisplayMode, DisplayRecord};

/// Ticks per second in Jellyfin timestamps
pub const TICKS_PER_SECOND: i64 = 10_000_000;

const TICKS_PER_MINUTE: i64 = 60 * TICKS_PER_SECOND;

/// Playback position attached to a record in playing mode
#[derive(Debug, Clone, Copy, Default)]
pub struct Progress {
    /// Completion percentage, 0-100
    pub percent: f64,
    /// Elapsed position in ticks
    pub position_ticks: i64,
    /// Total runtime in ticks
    pub duration_ticks: i64,
}

/// Build the front-end record for `item`.
///
/// `progress` carries the playback state for the now-playing case; `None`
/// marks a random pick with all time fields zeroed.
pub fn display_record(base_url: &str, item: &Value, progress: Option<Progress>) -> DisplayRecord {
    let mode = if progress.is_some() {
        DisplayMode::Playing
    } else {
        DisplayMode::Random
    };
    let progress = progress.unwrap_or_default();

    let width = i64_at(
        item,
        &[
            Step::Key("MediaSources"),
            Step::Index(0),
            Step::Key("MediaStreams"),
            Step::Index(0),
            Step::Key("Width"),
        ],
        0,
    );

    let item_id = str_at(item, &[Step::Key("Id")], "");

    DisplayRecord {
        mode,
        title: str_at(item, &[Step::Key("Name")], "Untitled").to_string(),
        year: safe_get(item, &[Step::Key("ProductionYear")]).and_then(Value::as_i64),
        tagline: str_at(item, &[Step::Key("Taglines"), Step::Index(0)], "").to_string(),
        overview: str_at(item, &[Step::Key("Overview")], "").to_string(),
        rating: str_at(item, &[Step::Key("OfficialRating")], "NR").to_string(),
        duration_badge: duration_badge(i64_at(item, &[Step::Key("RunTimeTicks")], 0)),
        resolution: resolution_tier(width).to_string(),
        audio: audio_label(item),
        image_url: format!("{base_url}/Items/{item_id}/Images/Primary?maxHeight=3840&quality=90"),
        progress_percent: progress.percent,
        time_current: ticks_to_clock(progress.position_ticks),
        time_total: ticks_to_clock(progress.duration_ticks),
    }
}

/// Render ticks as a clock string: "H:MM:SS" past the hour mark, "M:SS"
/// below it, "0:00" for zero or missing durations.
pub fn ticks_to_clock(ticks: i64) -> String {
    if ticks <= 0 {
        return "0:00".to_string();
    }
    let seconds = ticks / TICKS_PER_SECOND;
    let (minutes, seconds) = (seconds / 60, seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// "XhYm" badge from a total runtime in ticks
fn duration_badge(run_time_ticks: i64) -> String {
    let minutes = run_time_ticks / TICKS_PER_MINUTE;
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Resolution label from the video stream's pixel width
fn resolution_tier(width: i64) -> &'static str {
    if width >= 3800 {
        "4K UHD"
    } else if width >= 1900 {
        "1080p"
    } else if width >= 1200 {
        "720p"
    } else if width > 0 {
        "HD"
    } else {
        "SD"
    }
}

/// First token of the first audio stream's display title, e.g. "DTS-HD"
/// out of "DTS-HD MA 5.1"
fn audio_label(item: &Value) -> String {
    let streams = safe_get(
        item,
        &[
            Step::Key("MediaSources"),
            Step::Index(0),
            Step::Key("MediaStreams"),
        ],
    )
    .and_then(Value::as_array);

    let Some(streams) = streams else {
        return "Stereo".to_string();
    };

    for stream in streams {
        if str_at(stream, &[Step::Key("Type")], "") == "Audio" {
            let title = str_at(stream, &[Step::Key("DisplayTitle")], "Stereo");
            return title.split(' ').next().unwrap_or("Stereo").to_string();
        }
    }
    "Stereo".to_string()
}
