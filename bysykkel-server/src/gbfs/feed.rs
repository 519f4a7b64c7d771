//! Helpers for reading GBFS payloads.
//!
//! GBFS feeds share one envelope:
//! `{ "last_updated": <unix secs>, "ttl": <secs>, "data": { "stations": [...] } }`.
//! These helpers read it from untyped JSON so that a malformed envelope or
//! a single bad entry never aborts a render.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::trace;

/// The `data.stations` array of a feed, or `None` if the envelope is malformed.
pub fn station_entries(payload: &Value) -> Option<&[Value]> {
    payload
        .get("data")?
        .get("stations")?
        .as_array()
        .map(Vec::as_slice)
}

/// Decode one station entry, skipping it if it doesn't fit `T`.
pub fn decode_entry<T: DeserializeOwned>(entry: &Value) -> Option<T> {
    match <T as serde::Deserialize>::deserialize(entry) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            trace!(error = %e, "skipping undecodable station entry");
            None
        }
    }
}

/// The feed's `last_updated` unix timestamp, if it is present and an integer.
pub fn last_updated(payload: &Value) -> Option<i64> {
    payload.get("last_updated")?.as_i64()
}
