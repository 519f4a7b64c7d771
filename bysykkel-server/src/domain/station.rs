//! Station identity and feed records.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A GBFS station identifier.
///
/// GBFS publishes ids as strings, but some feeds emit bare numbers. Both
/// decode to the same `StationId`, so `"1"` and `1` compare equal.
///
/// # Examples
///
/// ```
/// use bysykkel_server::domain::StationId;
///
/// let from_text: StationId = serde_json::from_str("\"217\"").unwrap();
/// let from_number: StationId = serde_json::from_str("217").unwrap();
/// assert_eq!(from_text, from_number);
/// assert_eq!(from_text.as_str(), "217");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Create a station id from its textual form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StationId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => StationId(s),
            RawId::Number(n) => StationId(n.to_string()),
        })
    }
}

/// One entry of the `station_information` feed.
///
/// Only the fields the board needs are decoded; the rest of the GBFS
/// record (coordinates, address, capacity) is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StationInfo {
    pub station_id: StationId,
    pub name: String,
}

/// One entry of the `station_status` feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StationStatus {
    pub station_id: StationId,

    /// Missing, `null` and non-numeric counts are read as zero.
    #[serde(default, deserialize_with = "lenient_count")]
    pub num_bikes_available: u32,

    #[serde(default, deserialize_with = "lenient_count")]
    pub num_docks_available: u32,
}

/// Read a count the way an integer cast would: floats truncate, numeric
/// strings parse their leading integer, anything else is zero. Negative
/// values clamp to zero and huge ones to `u32::MAX`.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(count_from_value(&raw))
}

fn count_from_value(raw: &serde_json::Value) -> u32 {
    use serde_json::Value;

    let n: i64 = match raw {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => leading_integer(s),
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    };
    u32::try_from(n.max(0)).unwrap_or(u32::MAX)
}

/// `" 12abc"` is 12, `"-3"` is -3, `"many"` is 0.
fn leading_integer(s: &str) -> i64 {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end]
        .parse::<i64>()
        .map(|n| sign * n)
        .unwrap_or(if end > 0 { i64::MAX * sign } else { 0 })
}

impl StationStatus {
    /// Bikes plus free docks: the denominator for both status levels.
    pub fn total_capacity(&self) -> u32 {
        self.num_bikes_available
            .saturating_add(self.num_docks_available)
    }
}
