//! Exact decimal numbers using dashu
//!
//! Uses dashu-float (DBig) so currency cells keep their decimal digits
//! until the moment they are rounded for display.

use dashu_float::DBig;
use dashu_int::IBig;
use dashu_int::ops::BitTest;
use serde::{Deserialize, Serialize, Serializer, Deserializer};
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Overflow: value out of range")]
    Overflow,
}

/// Default precision for parsed values (decimal digits)
const DEFAULT_PRECISION: usize = 50;

/// Largest decimal exponent a parsed value may carry
const MAX_EXPONENT: isize = 1000;

/// Arbitrary precision decimal number
///
/// Built on dashu-float's DBig. All operations return Results or new
/// Numbers - never panic.
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    // ========== Construction ==========

    fn with_work_precision(val: DBig) -> DBig {
        val.with_precision(DEFAULT_PRECISION).value()
    }

    /// Create from string representation
    /// Supports: "123", "3.14", "-42", "+7", "1.5e10", "602214076e15"
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();
        let s = s.strip_prefix('+').unwrap_or(s);
        if s.is_empty() {
            return Err(NumberError::ParseError(s.to_string()));
        }

        // Scientific notation with integer mantissa: "602214076e15"
        if (s.contains('e') || s.contains('E')) && !s.contains('.') {
            let s_lower = s.to_lowercase();
            let parts: Vec<&str> = s_lower.split('e').collect();
            if parts.len() == 2 {
                let mantissa: IBig = parts[0].parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;
                let exp: isize = parts[1].parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;
                let result = DBig::from_parts(mantissa, exp);
                return Self::bounded(Self::with_work_precision(result));
            }
        }

        let inner: DBig = s.parse()
            .map_err(|_| NumberError::ParseError(s.to_string()))?;

        Self::bounded(Self::with_work_precision(inner))
    }

    /// Keep the decimal exponent within `MAX_EXPONENT`. Larger values
    /// overflow; smaller ones are below any displayable digit and become zero.
    fn bounded(inner: DBig) -> Result<Self, NumberError> {
        let (_, exponent) = inner.clone().into_repr().into_parts();
        if exponent > MAX_EXPONENT {
            return Err(NumberError::Overflow);
        }
        if exponent < -MAX_EXPONENT {
            return Ok(Self { inner: DBig::ZERO });
        }
        Ok(Self { inner })
    }

    /// Create from i64 with working precision
    pub fn from_i64(n: i64) -> Self {
        Self { inner: Self::with_work_precision(DBig::from(n)) }
    }

    // ========== Rounding ==========

    /// Round to the nearest integer, ties away from zero.
    ///
    /// This is the rounding applied by the whole-unit display patterns.
    pub fn round_half_away(&self) -> IBig {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        if exponent >= 0 {
            return significand * IBig::from(10).pow(exponent as usize);
        }

        let negative = significand < IBig::ZERO;
        let magnitude = if negative { -significand } else { significand };
        let divisor = IBig::from(10).pow(exponent.unsigned_abs());
        let mut quotient = &magnitude / &divisor;
        let remainder = &magnitude % &divisor;
        if remainder * IBig::from(2) >= divisor {
            quotient += IBig::ONE;
        }

        if negative { -quotient } else { quotient }
    }

    // ========== Conversion ==========

    /// Convert to f64 (may lose precision)
    pub fn to_f64(&self) -> Option<f64> {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();

        let sig_f64: f64 = if significand.bit_len() <= 63 {
            let i: i64 = significand.try_into().ok()?;
            i as f64
        } else {
            // Shift down to 53 bits and scale back up
            let extra_bits = significand.bit_len() - 53;
            let shifted = &significand >> extra_bits;
            let shifted_i64: i64 = shifted.try_into().ok()?;
            (shifted_i64 as f64) * 2_f64.powi(extra_bits as i32)
        };

        let result = if exponent >= 0 {
            if exponent > 308 {
                return None;
            }
            sig_f64 * 10_f64.powi(exponent as i32)
        } else {
            // Divide in steps so tiny values underflow to zero
            let mut scaled = sig_f64;
            let mut remaining = exponent.unsigned_abs();
            while remaining > 0 && scaled != 0.0 {
                let step = remaining.min(300);
                scaled /= 10_f64.powi(step as i32);
                remaining -= step;
            }
            scaled
        };

        if result.is_finite() {
            Some(result)
        } else {
            None
        }
    }

    /// Exact decimal digits, trailing fractional zeros removed
    pub fn to_plain_string(&self) -> String {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        let negative = significand < IBig::ZERO;
        let magnitude = if negative { -significand } else { significand };
        let mut digits = magnitude.to_string();

        let body = if exponent >= 0 {
            if magnitude != IBig::ZERO {
                digits.push_str(&"0".repeat(exponent as usize));
            }
            digits
        } else {
            let scale = exponent.unsigned_abs();
            if digits.len() <= scale {
                digits = format!("{}{}", "0".repeat(scale - digits.len() + 1), digits);
            }
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            let frac_part = frac_part.trim_end_matches('0');
            if frac_part.is_empty() {
                int_part.to_string()
            } else {
                format!("{}.{}", int_part, frac_part)
            }
        };

        if negative && body.chars().any(|c| c != '0' && c != '.') {
            format!("-{}", body)
        } else {
            body
        }
    }
}

/// Insert `separator` every three digits of an unsigned digit string,
/// left-padding with zeros up to `min_digits`.
pub fn group_digits(digits: &str, separator: char, min_digits: usize) -> String {
    let padded = if digits.len() < min_digits {
        format!("{}{}", "0".repeat(min_digits - digits.len()), digits)
    } else {
        digits.to_string()
    };

    let len = padded.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in padded.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

// ========== Trait Implementations ==========

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.partial_cmp(&other.inner).unwrap_or(std::cmp::Ordering::Equal)
    }
}
