//! The availability board: fetch, resolve, match, classify.

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::AvailabilitySnapshot;
use crate::gbfs::FeedProvider;
use crate::gbfs::feed::last_updated;

use super::resolve::{TargetStations, resolve};
use super::status::match_status;

/// Result of one render of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardOutcome {
    /// At least one feed could not be fetched.
    Unavailable,

    /// Both feeds arrived but none of the target names is in them.
    StationsNotFound,

    /// Snapshots for every target that resolved and has a status record,
    /// in target order.
    Available {
        snapshots: Vec<AvailabilitySnapshot>,
        /// `last_updated` of the status feed, unix seconds
        last_updated: Option<i64>,
    },
}

/// Renders station availability from a feed provider.
///
/// Holds no state between renders; every call refetches both feeds.
#[derive(Debug, Clone)]
pub struct Board<P> {
    provider: P,
    targets: TargetStations,
}

impl<P: FeedProvider> Board<P> {
    /// Create a board for the given targets.
    pub fn new(provider: P, targets: TargetStations) -> Self {
        Self { provider, targets }
    }

    /// The stations this board shows.
    pub fn targets(&self) -> &TargetStations {
        &self.targets
    }

    /// Fetch both feeds concurrently and build the board.
    ///
    /// A failure of either fetch ends the render as `Unavailable`. Nothing
    /// is retried. The live client logs each failed request with its URL.
    pub async fn render(&self) -> BoardOutcome {
        let (information, status) = futures::join!(
            self.provider.station_information(),
            self.provider.station_status()
        );

        match (information, status) {
            (Ok(information), Ok(status)) => assemble(&information, &status, &self.targets),
            (information, status) => {
                warn!(
                    information_ok = information.is_ok(),
                    status_ok = status.is_ok(),
                    "station feeds unavailable"
                );
                BoardOutcome::Unavailable
            }
        }
    }
}

/// Build the board from two already-fetched payloads.
///
/// Targets that don't resolve are skipped without a status lookup; targets
/// that resolve but have no status record are skipped too.
pub fn assemble(information: &Value, status: &Value, targets: &TargetStations) -> BoardOutcome {
    let resolution = resolve(information, targets);

    if resolution.is_empty() {
        debug!(targets = ?targets.names(), "no target station found in feed");
        return BoardOutcome::StationsNotFound;
    }

    let snapshots = resolution
        .iter()
        .filter_map(|(name, id)| {
            let Some(id) = id else {
                debug!(station = name, "station not in information feed");
                return None;
            };
            let Some(record) = match_status(status, id) else {
                debug!(station = name, %id, "station has no status record");
                return None;
            };
            Some(AvailabilitySnapshot::from_status(name, &record))
        })
        .collect();

    BoardOutcome::Available {
        snapshots,
        last_updated: last_updated(status),
    }
}
