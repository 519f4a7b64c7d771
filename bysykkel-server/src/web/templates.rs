//! Askama templates for the board.

use askama::Template;
use chrono::DateTime;

use crate::availability::BoardOutcome;
use crate::config::DisplayZone;
use crate::domain::AvailabilitySnapshot;
use crate::locale::{Locale, Messages};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Standalone page: the widget with its title.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub lang: &'static str,
    pub widget: WidgetTemplate,
}

// ============================================================================
// Fragment Templates (embeddable, no base.html)
// ============================================================================

/// The embeddable board: inline styles plus one box per station, or a
/// single message when the board can't be shown.
#[derive(Template)]
#[template(path = "widget.html")]
pub struct WidgetTemplate {
    /// Set when the board failed; replaces the station list.
    pub message: Option<&'static str>,
    pub stations: Vec<StationView>,
    pub updated_at: Option<String>,
    pub labels: &'static Messages,
}

impl WidgetTemplate {
    /// Build the fragment for a render outcome.
    pub fn from_outcome(outcome: &BoardOutcome, locale: Locale, zone: &DisplayZone) -> Self {
        let labels = locale.messages();

        match outcome {
            BoardOutcome::Unavailable => Self::message(labels.unavailable, labels),
            BoardOutcome::StationsNotFound => Self::message(labels.stations_not_found, labels),
            BoardOutcome::Available {
                snapshots,
                last_updated,
            } => Self {
                message: None,
                stations: snapshots.iter().map(StationView::from_snapshot).collect(),
                updated_at: last_updated.and_then(|ts| format_update_time(ts, zone)),
                labels,
            },
        }
    }

    fn message(message: &'static str, labels: &'static Messages) -> Self {
        Self {
            message: Some(message),
            stations: Vec::new(),
            updated_at: None,
            labels,
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One station box.
#[derive(Debug, Clone)]
pub struct StationView {
    pub name: String,
    pub bikes_available: u32,
    pub docks_available: u32,
    /// `low`, `medium` or `high`
    pub bikes_status: &'static str,
    pub docks_status: &'static str,
}

impl StationView {
    pub fn from_snapshot(snapshot: &AvailabilitySnapshot) -> Self {
        Self {
            name: snapshot.station_name.clone(),
            bikes_available: snapshot.bikes_available,
            docks_available: snapshot.docks_available,
            bikes_status: snapshot.bikes_status.as_str(),
            docks_status: snapshot.docks_status.as_str(),
        }
    }
}

const UPDATE_TIME_FORMAT: &str = "%H:%M:%S";

/// Format a unix timestamp as `HH:MM:SS` in `zone`.
///
/// Returns `None` for timestamps chrono can't represent.
pub fn format_update_time(timestamp: i64, zone: &DisplayZone) -> Option<String> {
    let utc = DateTime::from_timestamp(timestamp, 0)?;
    let formatted = match zone {
        DisplayZone::Fixed(offset) => utc.with_timezone(offset).format(UPDATE_TIME_FORMAT).to_string(),
        DisplayZone::Named(tz) => utc.with_timezone(tz).format(UPDATE_TIME_FORMAT).to_string(),
    };
    Some(formatted)
}
