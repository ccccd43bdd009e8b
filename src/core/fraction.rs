//! Exact mixed-number rendering for lumber dimensions
//!
//! Dimensions that have been snapped to a stock fraction are rendered as
//! proper mixed numbers ("6 3/8") by decomposing the f64 into its exact
//! rational value, not by approximating the decimal. A snapped value always
//! has a small power-of-two denominator, so the reduction is exact.

use std::fmt;
use thiserror::Error;

/// Errors from converting a float to its exact rational form
#[derive(Debug, Error, PartialEq)]
pub enum FractionError {
    /// NaN and infinities have no rational form (zero denominator)
    #[error("cannot express non-finite value as a fraction")]
    NonFinite,

    /// The exact denominator exceeds what u64 arithmetic can hold
    #[error("exact denominator of {value} is too large to reduce")]
    DenominatorOverflow { value: f64 },

    /// The exact numerator exceeds what u64 arithmetic can hold
    #[error("exact numerator of {value} is too large to reduce")]
    NumeratorOverflow { value: f64 },
}

/// A signed mixed number: `sign (whole + numerator/denominator)`.
///
/// The numerator is always strictly less than the denominator; integral
/// values carry a zero numerator and denominator 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixedNumber {
    negative: bool,
    whole: u64,
    numerator: u64,
    denominator: u64,
}

impl MixedNumber {
    /// Whether the value is a whole number
    pub fn is_integral(&self) -> bool {
        self.numerator == 0
    }

    /// Reconstruct the f64 this mixed number was reduced from.
    ///
    /// Exact for any value produced by `proper_fraction`.
    pub fn value(&self) -> f64 {
        let magnitude = self.whole as f64 + self.numerator as f64 / self.denominator as f64;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl fmt::Display for MixedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        if self.numerator == 0 {
            write!(f, "{}{}", sign, self.whole)
        } else {
            write!(
                f,
                "{}{} {}/{}",
                sign, self.whole, self.numerator, self.denominator
            )
        }
    }
}

/// Reduce a finite f64 to its exact proper-fraction form.
///
/// The sign is carried once on the whole value, never on the parts.
pub fn proper_fraction(value: f64) -> Result<MixedNumber, FractionError> {
    if !value.is_finite() {
        return Err(FractionError::NonFinite);
    }

    let negative = value < 0.0;
    let (numerator, denominator) = exact_ratio(value.abs())?;

    Ok(MixedNumber {
        negative,
        whole: numerator / denominator,
        numerator: numerator % denominator,
        denominator,
    })
}

/// Decompose a non-negative finite f64 into an exact reduced num/den pair.
fn exact_ratio(value: f64) -> Result<(u64, u64), FractionError> {
    let bits = value.to_bits();
    let exponent_bits = ((bits >> 52) & 0x7ff) as i64;
    let fraction_bits = bits & ((1u64 << 52) - 1);

    // value = mantissa * 2^exponent, exactly
    let (mut mantissa, mut exponent) = if exponent_bits == 0 {
        // subnormal (or zero): no implicit leading bit
        (fraction_bits, -1074i64)
    } else {
        (fraction_bits | (1u64 << 52), exponent_bits - 1075)
    };

    if mantissa == 0 {
        return Ok((0, 1));
    }

    // reduce: the only common factor with a power-of-two denominator is 2
    if exponent < 0 {
        let shift = (mantissa.trailing_zeros() as i64).min(-exponent);
        mantissa >>= shift;
        exponent += shift;
    }

    if exponent >= 0 {
        // checked_shl only guards the shift amount, not bits lost off the top
        if exponent as u32 > mantissa.leading_zeros() {
            return Err(FractionError::NumeratorOverflow { value });
        }
        Ok((mantissa << exponent, 1))
    } else {
        if -exponent > 63 {
            return Err(FractionError::DenominatorOverflow { value });
        }
        Ok((mantissa, 1u64 << -exponent))
    }
}
