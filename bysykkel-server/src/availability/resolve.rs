//! Target station name resolution.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::domain::{StationId, StationInfo};
use crate::gbfs::feed::{decode_entry, station_entries};

/// The stations shown on the board, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetStations {
    names: Vec<String>,
}

impl TargetStations {
    /// Create a target list. Repeated names are kept once, first position wins.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self { names: unique }
    }

    /// Display names in board order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of distinct target names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when there is nothing to look up; such a board always reports
    /// its stations as not found.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for TargetStations {
    fn default() -> Self {
        Self::new(["Nykirken", "St. Jakobs Plass"])
    }
}

/// Outcome of matching target names against a station information feed.
///
/// Every target has an entry, in target order; unresolved targets map to
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    entries: Vec<(String, Option<StationId>)>,
}

impl Resolution {
    fn unresolved(targets: &TargetStations) -> Self {
        Self {
            entries: targets.names().iter().map(|n| (n.clone(), None)).collect(),
        }
    }

    /// The station id resolved for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&StationId> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, id)| id.as_ref())
    }

    /// All targets with their resolved ids, in target order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&StationId>)> {
        self.entries.iter().map(|(n, id)| (n.as_str(), id.as_ref()))
    }

    /// Number of targets that resolved to an id.
    pub fn resolved_count(&self) -> usize {
        self.entries.iter().filter(|(_, id)| id.is_some()).count()
    }

    /// True when no target resolved.
    pub fn is_empty(&self) -> bool {
        self.resolved_count() == 0
    }
}

/// Find the station id of each target name in a `station_information` payload.
///
/// One pass over the feed with a constant-time name lookup per station.
/// Names match exactly. When a name appears more than once the first id
/// wins. A payload without a `data.stations` list leaves every target
/// unresolved rather than failing.
pub fn resolve(payload: &Value, targets: &TargetStations) -> Resolution {
    let mut resolution = Resolution::unresolved(targets);

    let Some(entries) = station_entries(payload) else {
        debug!("station information has no station list");
        return resolution;
    };

    let slots: HashMap<&str, usize> = targets
        .names()
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    for station in entries.iter().filter_map(decode_entry::<StationInfo>) {
        let Some(&slot) = slots.get(station.name.as_str()) else {
            continue;
        };

        let current = &mut resolution.entries[slot].1;
        if let Some(existing) = current.as_ref() {
            if *existing != station.station_id {
                debug!(
                    name = %station.name,
                    kept = %existing,
                    ignored = %station.station_id,
                    "duplicate station name in feed"
                );
            }
        } else {
            *current = Some(station.station_id);
        }
    }

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feed(stations: Value) -> Value {
        json!({ "last_updated": 1_700_000_000, "data": { "stations": stations } })
    }

    #[test]
    fn default_targets() {
        let targets = TargetStations::default();
        assert_eq!(targets.names(), ["Nykirken", "St. Jakobs Plass"]);
    }

    #[test]
    fn targets_deduplicate_preserving_order() {
        let targets = TargetStations::new(["B", "A", "B"]);
        assert_eq!(targets.names(), ["B", "A"]);
        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn resolves_present_names() {
        let payload = feed(json!([
            { "station_id": "7", "name": "Festplassen" },
            { "station_id": "1", "name": "Nykirken" },
            { "station_id": "217", "name": "St. Jakobs Plass" }
        ]));

        let resolution = resolve(&payload, &TargetStations::default());
        assert_eq!(resolution.get("Nykirken"), Some(&StationId::new("1")));
        assert_eq!(resolution.get("St. Jakobs Plass"), Some(&StationId::new("217")));
        assert_eq!(resolution.resolved_count(), 2);
    }

    #[test]
    fn absent_name_is_unresolved() {
        let payload = feed(json!([{ "station_id": "1", "name": "Nykirken" }]));

        let resolution = resolve(&payload, &TargetStations::default());
        assert_eq!(resolution.get("St. Jakobs Plass"), None);
        assert_eq!(resolution.resolved_count(), 1);
        assert!(!resolution.is_empty());
    }

    #[test]
    fn iter_follows_target_order() {
        let payload = feed(json!([
            { "station_id": "217", "name": "St. Jakobs Plass" },
            { "station_id": "1", "name": "Nykirken" }
        ]));

        let resolution = resolve(&payload, &TargetStations::default());
        let names: Vec<&str> = resolution.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Nykirken", "St. Jakobs Plass"]);
    }

    #[test]
    fn first_duplicate_wins() {
        let payload = feed(json!([
            { "station_id": "1", "name": "Nykirken" },
            { "station_id": "99", "name": "Nykirken" }
        ]));

        let resolution = resolve(&payload, &TargetStations::default());
        assert_eq!(resolution.get("Nykirken"), Some(&StationId::new("1")));
    }

    #[test]
    fn names_match_exactly() {
        let payload = feed(json!([
            { "station_id": "1", "name": "nykirken" },
            { "station_id": "2", "name": "Nykirken " }
        ]));

        assert!(resolve(&payload, &TargetStations::default()).is_empty());
    }

    #[test]
    fn numeric_ids_resolve() {
        let payload = feed(json!([{ "station_id": 1, "name": "Nykirken" }]));

        let resolution = resolve(&payload, &TargetStations::default());
        assert_eq!(resolution.get("Nykirken"), Some(&StationId::new("1")));
    }

    #[test]
    fn bad_entries_are_skipped() {
        let payload = feed(json!([
            { "name": "Nykirken" },
            "not a station",
            { "station_id": "217", "name": "St. Jakobs Plass" }
        ]));

        let resolution = resolve(&payload, &TargetStations::default());
        assert_eq!(resolution.get("Nykirken"), None);
        assert_eq!(resolution.get("St. Jakobs Plass"), Some(&StationId::new("217")));
    }

    #[test]
    fn malformed_payload_fails_closed() {
        let targets = TargetStations::default();
        for payload in [
            json!({}),
            json!({ "data": null }),
            json!({ "data": { "stations": "none" } }),
            json!("station_information"),
        ] {
            let resolution = resolve(&payload, &targets);
            assert!(resolution.is_empty());
            assert_eq!(resolution.iter().count(), 2);
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let payload = feed(json!([
            { "station_id": "1", "name": "Nykirken" },
            { "station_id": "217", "name": "St. Jakobs Plass" }
        ]));
        let targets = TargetStations::default();

        assert_eq!(resolve(&payload, &targets), resolve(&payload, &targets));
    }
}
