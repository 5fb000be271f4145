//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A whole-number value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Expresses `part / whole` as a percentage rounded to the nearest
    /// whole number, halves rounding up.
    ///
    /// # Edge Cases
    /// - `whole == 0`: Returns 0%
    /// - `part > whole`: Clamped to 100%
    pub fn from_ratio(part: u32, whole: u32) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }

        let part = u64::from(part);
        let whole = u64::from(whole);
        let rounded = (part * 200 + whole) / (2 * whole);

        Self(rounded.min(100) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ratio_handles_bounds() {
        assert_eq!(Percentage::from_ratio(0, 15), Percentage::ZERO);
        assert_eq!(Percentage::from_ratio(15, 15), Percentage::HUNDRED);
    }

    #[test]
    fn from_ratio_rounds_to_nearest() {
        // 1/15 = 6.67%
        assert_eq!(Percentage::from_ratio(1, 15).value(), 7);
        // 2/15 = 13.33%
        assert_eq!(Percentage::from_ratio(2, 15).value(), 13);
        // 7/15 = 46.67%
        assert_eq!(Percentage::from_ratio(7, 15).value(), 47);
        // 8/15 = 53.33%
        assert_eq!(Percentage::from_ratio(8, 15).value(), 53);
    }

    #[test]
    fn from_ratio_rounds_half_up() {
        assert_eq!(Percentage::from_ratio(1, 8).value(), 13); // 12.5%
        assert_eq!(Percentage::from_ratio(1, 200).value(), 1); // 0.5%
    }

    #[test]
    fn from_ratio_with_zero_whole_is_zero() {
        assert_eq!(Percentage::from_ratio(5, 0), Percentage::ZERO);
    }

    #[test]
    fn from_ratio_clamps_overflowing_parts() {
        assert_eq!(Percentage::from_ratio(30, 15), Percentage::HUNDRED);
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::from_ratio(3, 4)), "75%");
        assert_eq!(format!("{}", Percentage::ZERO), "0%");
    }

    #[test]
    fn percentage_serializes_as_bare_number() {
        let json = serde_json::to_string(&Percentage::from_ratio(42, 100)).unwrap();
        assert_eq!(json, "42");
    }
}
