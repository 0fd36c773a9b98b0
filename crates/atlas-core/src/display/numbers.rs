//! Numeric display wrappers: population, exchange rates and measurements.
//!
//! Output follows the report's fixed locale: digit groups are separated by
//! `.` and money is shown with exactly two decimal places.

use std::fmt::{self, Write};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::CurrencyRates;

/// Population count with `.` as the thousands separator (`1.234.567`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Population(pub u64);

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let len = digits.len();
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                f.write_char('.')?;
            }
            f.write_char(digit)?;
        }
        Ok(())
    }
}

/// A money amount rounded half away from zero to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money(pub Decimal);

impl Money {
    /// Returns the amount rounded to kopecks, always carrying two decimals.
    pub fn rounded(&self) -> Decimal {
        let mut value = self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(2);
        value
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}

/// Exchange rates as `USD = 92.51 руб., EUR = 99.87 руб.` in source order.
pub struct Rates<'a>(pub &'a CurrencyRates);

impl<'a> fmt::Display for Rates<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (code, rate)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{code} = {} руб.", Money(rate))?;
        }
        Ok(())
    }
}

/// Decimal exponents outside this range switch a [`Measure`] to exponent form.
const FIXED_NOTATION_EXPONENTS: std::ops::Range<i32> = -4..16;

/// A physical quantity; whole values keep a trailing `.0` (`17098242.0`).
///
/// Very large or very small magnitudes use exponent form with a signed,
/// two-digit exponent: `1e+20`, `2.5e-05`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure(pub f64);

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scientific = format!("{:e}", self.0);
        if let Some((mantissa, exponent)) = scientific.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                if self.0 != 0.0 && !FIXED_NOTATION_EXPONENTS.contains(&exponent) {
                    let sign = if exponent < 0 { '-' } else { '+' };
                    return write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs());
                }
            }
        }
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Latitude/longitude pair shown as `(lat, lon)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", Measure(self.latitude), Measure(self.longitude))
    }
}
