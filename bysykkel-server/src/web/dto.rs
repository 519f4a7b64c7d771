//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::availability::BoardOutcome;
use crate::domain::AvailabilitySnapshot;
use crate::locale::Messages;

/// Query parameters accepted by the board endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    /// Language tag (`en`, `nb`); unknown values fall back to the default
    pub lang: Option<String>,
}

/// Overall state of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardStatus {
    Ok,
    Unavailable,
    StationsNotFound,
}

/// Response for the availability API.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub status: BoardStatus,

    /// Human-readable reason when `status` is not `ok`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Stations in board order
    pub stations: Vec<AvailabilitySnapshot>,

    /// Status feed `last_updated`, unix seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<i64>,
}

impl AvailabilityResponse {
    /// Create from a board outcome, with messages in the request's language.
    pub fn from_outcome(outcome: &BoardOutcome, messages: &Messages) -> Self {
        match outcome {
            BoardOutcome::Unavailable => Self::failed(BoardStatus::Unavailable, messages.unavailable),
            BoardOutcome::StationsNotFound => {
                Self::failed(BoardStatus::StationsNotFound, messages.stations_not_found)
            }
            BoardOutcome::Available {
                snapshots,
                last_updated,
            } => Self {
                status: BoardStatus::Ok,
                message: None,
                stations: snapshots.clone(),
                last_updated: *last_updated,
            },
        }
    }

    fn failed(status: BoardStatus, message: &str) -> Self {
        Self {
            status,
            message: Some(message.to_string()),
            stations: Vec::new(),
            last_updated: None,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
