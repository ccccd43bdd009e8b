//! Unit conversion and lumber rounding rules
//!
//! All bounding-box extents arrive in centimeters (the CAD host's internal
//! length unit) and are converted here. Displayed dimensions are snapped to a
//! stock fraction of an inch; board lengths are ordered in even foot counts
//! with a 2 ft trim margin.

use std::fmt;
use std::str::FromStr;

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Inches per foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Extra feet added to every order length to allow for end trimming.
pub const ORDER_MARGIN_FT: u32 = 2;

/// Stock fraction used when snapping displayed dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Snap to 1/8 inch
    Eighth,
    /// Snap to 1/4 inch
    Quarter,
}

impl Resolution {
    /// The snapping interval in inches
    pub fn inches(&self) -> f64 {
        match self {
            Resolution::Eighth => 0.125,
            Resolution::Quarter => 0.25,
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::Eighth
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Eighth => write!(f, "eighth"),
            Resolution::Quarter => write!(f, "quarter"),
        }
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eighth" | "1/8" => Ok(Resolution::Eighth),
            "quarter" | "1/4" => Ok(Resolution::Quarter),
            _ => Err(format!(
                "Invalid resolution: {}. Use 'eighth' or 'quarter'",
                s
            )),
        }
    }
}

/// Convert centimeters to inches
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Round to the nearest integer, ties to even.
///
/// Not `f64::round`: that rounds ties away from zero.
pub fn round_half_even(value: f64) -> f64 {
    let floor = value.floor();
    let diff = value - floor;
    if diff > 0.5 {
        floor + 1.0
    } else if diff < 0.5 {
        floor
    } else if floor % 2.0 == 0.0 {
        floor
    } else {
        floor + 1.0
    }
}

/// Snap `value` to the nearest multiple of `resolution`.
///
/// Ties on the quotient go to the even multiple. This is the single source
/// of truth for every displayed fractional dimension.
pub fn round_partial(value: f64, resolution: f64) -> f64 {
    round_half_even(value / resolution) * resolution
}

/// Round to one decimal place, ties to even on the tenths digit.
///
/// Goes through the formatter rather than scaling by 10: the multiply can
/// land exactly on a midpoint the true value was not on (48.85 stores as
/// 48.8500...014, which must round up, but 48.85 * 10.0 is exactly 488.5).
/// Fixed-precision float formatting rounds the exact value correctly.
pub fn round_tenths(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Round a foot count up to the next even integer.
///
/// Even integers map to themselves; everything else rounds up past the next
/// odd integer (8.0 -> 8, 8.01 -> 10, 7.2 -> 8).
pub fn round_up_to_even(feet: f64) -> u32 {
    let n = feet.ceil() as u32;
    if n % 2 == 0 {
        n
    } else {
        n + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_to_inches() {
        assert_eq!(cm_to_inches(2.54), 1.0);
        assert_eq!(cm_to_inches(243.84), 96.0);
    }

    #[test]
    fn test_round_half_even_ties() {
        assert_eq!(round_half_even(0.5), 0.0);
        assert_eq!(round_half_even(1.5), 2.0);
        assert_eq!(round_half_even(2.5), 2.0);
        assert_eq!(round_half_even(-0.5), 0.0);
        assert_eq!(round_half_even(-1.5), -2.0);
        assert_eq!(round_half_even(-2.5), -2.0);
    }

    #[test]
    fn test_round_half_even_off_ties() {
        assert_eq!(round_half_even(0.49), 0.0);
        assert_eq!(round_half_even(0.51), 1.0);
        assert_eq!(round_half_even(6.2), 6.0);
        assert_eq!(round_half_even(-6.2), -6.0);
    }

    #[test]
    fn test_round_partial_eighths() {
        assert_eq!(round_partial(6.1875, 0.125), 6.25);
        assert_eq!(round_partial(6.31, 0.125), 6.25);
        assert_eq!(round_partial(96.0, 0.125), 96.0);
        // ties on the quotient go to the even multiple
        assert_eq!(round_partial(0.0625, 0.125), 0.0);
        assert_eq!(round_partial(0.1875, 0.125), 0.25);
    }

    #[test]
    fn test_round_partial_is_idempotent() {
        for resolution in [0.125, 0.25] {
            for value in [0.03, 1.57, 6.1875, 48.9, 96.0, 243.84 / 2.54] {
                let once = round_partial(value, resolution);
                assert_eq!(round_partial(once, resolution), once);
            }
        }
    }

    #[test]
    fn test_round_tenths() {
        // 48.85 stores as 48.8500...014, strictly above the midpoint
        assert_eq!(round_tenths(48.85), 48.9);
        assert_eq!(round_tenths(0.977 * 50000.0 / 1000.0), 48.9);
        assert_eq!(round_tenths(38.0), 38.0);
        assert_eq!(round_tenths(1.24), 1.2);
        // an exact midpoint goes to the even tenth
        assert_eq!(round_tenths(0.25), 0.2);
    }

    #[test]
    fn test_round_up_to_even() {
        assert_eq!(round_up_to_even(7.2), 8);
        assert_eq!(round_up_to_even(8.0), 8);
        assert_eq!(round_up_to_even(8.01), 10);
        assert_eq!(round_up_to_even(0.5), 2);
        assert_eq!(round_up_to_even(0.0), 0);
    }

    #[test]
    fn test_round_up_to_even_fixes_even_integers() {
        for n in [0u32, 2, 4, 8, 16, 24] {
            assert_eq!(round_up_to_even(n as f64), n);
        }
    }

    #[test]
    fn test_round_up_to_even_bound() {
        // for non-even inputs the result exceeds the input by at most 2 ft
        for value in [0.1, 1.0, 3.0, 5.5, 7.99, 9.01] {
            let rounded = round_up_to_even(value) as f64;
            assert!(rounded - value > 0.0);
            assert!(rounded - value <= 2.0);
        }
    }

    #[test]
    fn test_resolution_parse() {
        assert_eq!("eighth".parse::<Resolution>().unwrap(), Resolution::Eighth);
        assert_eq!("1/4".parse::<Resolution>().unwrap(), Resolution::Quarter);
        assert!("sixteenth".parse::<Resolution>().is_err());
    }
}
