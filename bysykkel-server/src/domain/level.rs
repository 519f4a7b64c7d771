//! Three-tier availability classification.

use std::fmt;

use serde::Serialize;

/// Below this share of capacity a resource is `Low`.
const LOW_BELOW_PERCENT: u64 = 20;

/// Below this share of capacity a resource is `Medium`; at or above, `High`.
const MEDIUM_BELOW_PERCENT: u64 = 50;

/// How much of a resource (bikes or docks) a station has left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Low,
    Medium,
    High,
}

impl StatusLevel {
    /// Classify `available` out of `total`.
    ///
    /// The share is `available / total * 100`, taken as 0 when `total` is
    /// zero, so an empty station is always `Low`. Bounds are half-open:
    /// exactly 20% is `Medium` and exactly 50% is `High`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bysykkel_server::domain::StatusLevel;
    ///
    /// assert_eq!(StatusLevel::classify(1, 10), StatusLevel::Low);
    /// assert_eq!(StatusLevel::classify(2, 10), StatusLevel::Medium);
    /// assert_eq!(StatusLevel::classify(9, 10), StatusLevel::High);
    /// assert_eq!(StatusLevel::classify(3, 0), StatusLevel::Low);
    /// ```
    pub fn classify(available: u32, total: u32) -> Self {
        if total == 0 {
            return StatusLevel::Low;
        }

        // Compare available/total against p/100 without floating point.
        let scaled = u64::from(available) * 100;
        let total = u64::from(total);

        if scaled < LOW_BELOW_PERCENT * total {
            StatusLevel::Low
        } else if scaled < MEDIUM_BELOW_PERCENT * total {
            StatusLevel::Medium
        } else {
            StatusLevel::High
        }
    }

    /// Lowercase name, used as the `status-*` CSS class suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            StatusLevel::Low => "low",
            StatusLevel::Medium => "medium",
            StatusLevel::High => "high",
        }
    }
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(StatusLevel::classify(0, 10), StatusLevel::Low);
        assert_eq!(StatusLevel::classify(1, 10), StatusLevel::Low);
        assert_eq!(StatusLevel::classify(2, 10), StatusLevel::Medium);
        assert_eq!(StatusLevel::classify(4, 10), StatusLevel::Medium);
        assert_eq!(StatusLevel::classify(6, 10), StatusLevel::High);
        assert_eq!(StatusLevel::classify(10, 10), StatusLevel::High);
    }

    #[test]
    fn half_is_high() {
        assert_eq!(StatusLevel::classify(5, 10), StatusLevel::High);
        assert_eq!(StatusLevel::classify(1, 2), StatusLevel::High);
    }

    #[test]
    fn just_under_boundaries() {
        // 19/100 and 49/100
        assert_eq!(StatusLevel::classify(19, 100), StatusLevel::Low);
        assert_eq!(StatusLevel::classify(49, 100), StatusLevel::Medium);
        // 1/3 is 33.3%
        assert_eq!(StatusLevel::classify(1, 3), StatusLevel::Medium);
    }

    #[test]
    fn zero_total_is_low() {
        assert_eq!(StatusLevel::classify(0, 0), StatusLevel::Low);
        assert_eq!(StatusLevel::classify(7, 0), StatusLevel::Low);
    }

    #[test]
    fn large_counts_do_not_overflow() {
        assert_eq!(StatusLevel::classify(u32::MAX, u32::MAX), StatusLevel::High);
        assert_eq!(StatusLevel::classify(0, u32::MAX), StatusLevel::Low);
    }

    #[test]
    fn display_matches_css_suffix() {
        assert_eq!(StatusLevel::Low.to_string(), "low");
        assert_eq!(StatusLevel::Medium.to_string(), "medium");
        assert_eq!(StatusLevel::High.to_string(), "high");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&StatusLevel::Medium).unwrap(),
            "\"medium\""
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// An empty station is always `Low`, whatever is reported available.
        #[test]
        fn zero_total_always_low(available in any::<u32>()) {
            prop_assert_eq!(StatusLevel::classify(available, 0), StatusLevel::Low);
        }

        /// More of a resource never lowers the level.
        #[test]
        fn monotonic_in_available(total in 1u32..10_000, a in 0u32..10_000, b in 0u32..10_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo = lo.min(total);
            let hi = hi.min(total);
            prop_assert!(StatusLevel::classify(lo, total) <= StatusLevel::classify(hi, total));
        }

        /// Integer classification agrees with the percentage rule wherever the
        /// float percentage is not within rounding distance of a boundary.
        #[test]
        fn agrees_with_percentage(total in 1u32..10_000, available in 0u32..10_000) {
            let available = available.min(total);
            let percentage = f64::from(available) / f64::from(total) * 100.0;
            prop_assume!((percentage - 20.0).abs() > 1e-9 && (percentage - 50.0).abs() > 1e-9);

            let expected = if percentage < 20.0 {
                StatusLevel::Low
            } else if percentage < 50.0 {
                StatusLevel::Medium
            } else {
                StatusLevel::High
            };
            prop_assert_eq!(StatusLevel::classify(available, total), expected);
        }

        /// Bikes and docks of a full station cannot both be `Low`.
        #[test]
        fn bikes_and_docks_not_both_low(bikes in 0u32..1000, docks in 0u32..1000) {
            prop_assume!(bikes + docks > 0);
            let total = bikes + docks;
            let both_low = StatusLevel::classify(bikes, total) == StatusLevel::Low
                && StatusLevel::classify(docks, total) == StatusLevel::Low;
            prop_assert!(!both_low);
        }
    }
}
