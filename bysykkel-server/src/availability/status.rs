//! Station status lookup.

use serde_json::Value;

use crate::domain::{StationId, StationStatus};
use crate::gbfs::feed::{decode_entry, station_entries};

/// Find the status record for `id` in a `station_status` payload.
///
/// Linear scan on `station_id` alone; the first record with that id wins
/// even if its counts are junk (they read as zero). A malformed payload
/// and a missing id both read as `None`: the two feeds drift, and a
/// station missing from one of them is expected.
pub fn match_status(payload: &Value, id: &StationId) -> Option<StationStatus> {
    station_entries(payload)?
        .iter()
        .find(|entry| {
            entry
                .get("station_id")
                .and_then(decode_entry::<StationId>)
                .is_some_and(|entry_id| &entry_id == id)
        })
        .and_then(decode_entry::<StationStatus>)
}
