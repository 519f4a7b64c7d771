//! Per-render availability of one target station.

use serde::Serialize;

use super::level::StatusLevel;
use super::station::StationStatus;

/// What the board shows for one station.
///
/// Built fresh on every render from a matched [`StationStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilitySnapshot {
    /// Display name as configured, not as spelled in the feed.
    pub station_name: String,
    pub bikes_available: u32,
    pub docks_available: u32,
    pub bikes_status: StatusLevel,
    pub docks_status: StatusLevel,
}

impl AvailabilitySnapshot {
    /// Classify bikes and docks against their combined capacity.
    pub fn from_status(station_name: impl Into<String>, status: &StationStatus) -> Self {
        let total = status.total_capacity();

        Self {
            station_name: station_name.into(),
            bikes_available: status.num_bikes_available,
            docks_available: status.num_docks_available,
            bikes_status: StatusLevel::classify(status.num_bikes_available, total),
            docks_status: StatusLevel::classify(status.num_docks_available, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn status(bikes: u32, docks: u32) -> StationStatus {
        StationStatus {
            station_id: StationId::new("1"),
            num_bikes_available: bikes,
            num_docks_available: docks,
        }
    }

    #[test]
    fn nearly_empty_station() {
        let snapshot = AvailabilitySnapshot::from_status("Nykirken", &status(1, 9));
        assert_eq!(snapshot.station_name, "Nykirken");
        assert_eq!(snapshot.bikes_available, 1);
        assert_eq!(snapshot.docks_available, 9);
        assert_eq!(snapshot.bikes_status, StatusLevel::Low);
        assert_eq!(snapshot.docks_status, StatusLevel::High);
    }

    #[test]
    fn balanced_station() {
        let snapshot = AvailabilitySnapshot::from_status("St. Jakobs Plass", &status(3, 7));
        assert_eq!(snapshot.bikes_status, StatusLevel::Medium);
        assert_eq!(snapshot.docks_status, StatusLevel::High);
    }

    #[test]
    fn station_reporting_nothing_is_low_on_both() {
        let snapshot = AvailabilitySnapshot::from_status("Nykirken", &status(0, 0));
        assert_eq!(snapshot.bikes_status, StatusLevel::Low);
        assert_eq!(snapshot.docks_status, StatusLevel::Low);
    }
}
