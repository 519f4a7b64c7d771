//! Domain types for the bike-share availability board.
//!
//! Feed records are decoded leniently (ids may be strings or numbers,
//! missing counts read as zero); everything derived from them is
//! recomputed on each render.

mod level;
mod snapshot;
mod station;

pub use level::StatusLevel;
pub use snapshot::AvailabilitySnapshot;
pub use station::{StationId, StationInfo, StationStatus};
