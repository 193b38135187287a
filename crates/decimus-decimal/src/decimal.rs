//! Arbitrary precision decimal numbers.
//!
//! This module provides a wrapper around `dashu::float::DBig` with the
//! operations needed for finite-difference calculus and polynomial
//! arithmetic: closed addition, subtraction, multiplication, division,
//! negation, absolute value, integer powers and total ordering.

use dashu::float::DBig;
use dashu::integer::IBig;
use num_traits::float::FloatCore;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

use crate::context::DEFAULT_PRECISION;

/// Errors produced when constructing a [`Decimal`].
#[derive(Debug, Error)]
pub enum DecimalError {
    /// The textual input was not a valid decimal literal.
    #[error("invalid decimal literal: {0}")]
    Parse(#[from] dashu::base::error::ParseError),
    /// The floating-point input was NaN or infinite.
    #[error("value is not finite")]
    NotFinite,
}

/// An immutable arbitrary precision decimal number.
///
/// Every value carries a significant-digit precision. Binary operations
/// align both operands to the larger finite precision of the pair before
/// computing, so results are deterministic and division always rounds
/// instead of failing on an inexact quotient.
#[derive(Clone, PartialEq, Eq)]
pub struct Decimal(DBig);

/// Rounds `value` to `precision` significant digits.
///
/// Precision 0 is `dashu`'s unbounded marker and leaves the value untouched.
fn limit(value: DBig, precision: usize) -> DBig {
    if precision == 0 {
        value
    } else {
        value.with_precision(precision).value()
    }
}

/// Brings two operands to a common working precision.
///
/// The common precision is the larger finite one, or [`DEFAULT_PRECISION`]
/// when neither side is bounded. An inexact quotient of two unbounded
/// operands would otherwise abort inside `dashu`.
fn aligned(lhs: &DBig, rhs: &DBig) -> (DBig, DBig) {
    let precision = match (lhs.precision(), rhs.precision()) {
        (0, 0) => DEFAULT_PRECISION,
        (0, p) | (p, 0) => p,
        (p, q) => p.max(q),
    };
    (limit(lhs.clone(), precision), limit(rhs.clone(), precision))
}

impl Decimal {
    /// Creates a decimal from an i64 at the given precision.
    #[must_use]
    pub fn from_i64(value: i64, precision: usize) -> Self {
        Self(limit(DBig::from(IBig::from(value)), precision))
    }

    /// Parses a decimal literal (`"2.5"`, `"-0.125"`, `"1e-7"`) at the
    /// given precision.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::Parse`] if the text is not a valid decimal
    /// literal.
    pub fn parse(text: &str, precision: usize) -> Result<Self, DecimalError> {
        let raw = DBig::from_str(text)?;
        Ok(Self(limit(raw, precision)))
    }

    /// Converts a binary floating-point value exactly, then rounds to the
    /// given precision.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::NotFinite`] for NaN or infinite inputs.
    pub fn from_f64(value: f64, precision: usize) -> Result<Self, DecimalError> {
        if !value.is_finite() {
            return Err(DecimalError::NotFinite);
        }
        let (mantissa, exponent, sign) = FloatCore::integer_decode(value);
        #[allow(clippy::cast_possible_wrap)]
        let mut result = Self::from_i64(mantissa as i64, precision);
        let scale = Self::from_i64(2, precision).powi(u32::from(exponent.unsigned_abs()));
        result = if exponent >= 0 {
            &result * &scale
        } else {
            &result / &scale
        };
        if sign < 0 {
            result = -result;
        }
        Ok(result)
    }

    /// Returns the significant-digit precision (0 means unbounded).
    #[must_use]
    pub fn precision(&self) -> usize {
        self.0.precision()
    }

    /// Rounds to the given precision.
    #[must_use]
    pub fn with_precision(self, precision: usize) -> Self {
        Self(limit(self.0, precision))
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Returns true if this value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < DBig::ZERO
    }

    /// Computes self^exp for non-negative exp by binary exponentiation.
    ///
    /// `exp = 0` yields 1 at this value's precision.
    #[must_use]
    pub fn powi(&self, exp: u32) -> Self {
        let mut result = Self(limit(DBig::ONE, self.precision()));
        let mut base = self.clone();
        let mut exp = exp;

        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            exp >>= 1;
        }

        result
    }

    /// Multiplies by a machine integer at this value's precision.
    #[must_use]
    pub fn mul_int(&self, n: i64) -> Self {
        self * &Self::from_i64(n, self.working_precision())
    }

    /// Divides by a machine integer at this value's precision.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn div_int(&self, n: i64) -> Self {
        self / &Self::from_i64(n, self.working_precision())
    }

    /// Multiplies by an unsigned machine integer at this value's precision.
    #[must_use]
    pub fn mul_uint(&self, n: u128) -> Self {
        let rhs = Self(limit(DBig::from(IBig::from(n)), self.working_precision()));
        self * &rhs
    }

    /// Returns the inner `dashu` float.
    #[must_use]
    pub fn into_inner(self) -> DBig {
        self.0
    }

    /// Returns a reference to the inner `dashu` float.
    #[must_use]
    pub fn as_inner(&self) -> &DBig {
        &self.0
    }

    /// The precision used when deriving fresh scalars from this value.
    fn working_precision(&self) -> usize {
        match self.precision() {
            0 => DEFAULT_PRECISION,
            p => p,
        }
    }
}

impl Zero for Decimal {
    fn zero() -> Self {
        Self(DBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == DBig::ZERO
    }
}

impl One for Decimal {
    fn one() -> Self {
        Self(DBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == DBig::ONE
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self.0)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic operations
impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: Self) -> Self::Output {
        let (a, b) = aligned(&self.0, &rhs.0);
        Decimal(a + b)
    }
}

impl Add for Decimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Decimal> for Decimal {
    type Output = Self;

    fn add(self, rhs: &Decimal) -> Self::Output {
        &self + rhs
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Self) -> Self::Output {
        let (a, b) = aligned(&self.0, &rhs.0);
        Decimal(a - b)
    }
}

impl Sub for Decimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Decimal> for Decimal {
    type Output = Self;

    fn sub(self, rhs: &Decimal) -> Self::Output {
        &self - rhs
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Self) -> Self::Output {
        let (a, b) = aligned(&self.0, &rhs.0);
        Decimal(a * b)
    }
}

impl Mul for Decimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Decimal> for Decimal {
    type Output = Self;

    fn mul(self, rhs: &Decimal) -> Self::Output {
        &self * rhs
    }
}

impl Div for &Decimal {
    type Output = Decimal;

    fn div(self, rhs: Self) -> Self::Output {
        let (a, b) = aligned(&self.0, &rhs.0);
        Decimal(a / b)
    }
}

impl Div for Decimal {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div<&Decimal> for Decimal {
    type Output = Self;

    fn div(self, rhs: &Decimal) -> Self::Output {
        &self / rhs
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Self::Output {
        Decimal(-self.0.clone())
    }
}
