//! Dense univariate polynomials over [`Decimal`] coefficients.

use decimus_decimal::Decimal;
use num_traits::{One, Zero};
use std::fmt;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order: index 0 is the
/// constant term. Trailing zeros are not stripped; the coefficient vector's
/// length is the maximum representable degree plus one, and operations
/// produce the exact lengths documented on each method. Callers comparing
/// polynomials as functions must tolerate different nominal lengths.
///
/// Values are immutable: every operation returns a new polynomial.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Polynomial {
    /// Coefficients in ascending degree order.
    coeffs: Vec<Decimal>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients.
    ///
    /// An empty vector is replaced by the zero polynomial `[0]`:
    /// zero-length polynomials are invalid inputs to every operation.
    #[must_use]
    pub fn new(coeffs: Vec<Decimal>) -> Self {
        if coeffs.is_empty() {
            return Self::zero();
        }
        Self { coeffs }
    }

    /// Creates the zero polynomial `[0]`.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![Decimal::zero()],
        }
    }

    /// Creates the constant polynomial `[1]`.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![Decimal::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: Decimal) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Returns the coefficient of x^i, or zero past the nominal length.
    #[must_use]
    pub fn coeff(&self, i: usize) -> Decimal {
        self.coeffs.get(i).cloned().unwrap_or_else(Decimal::zero)
    }

    /// Returns all coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[Decimal] {
        &self.coeffs
    }

    /// Returns the nominal length (maximum representable degree + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns the nominal degree (length − 1, counting trailing zeros).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Zero::is_zero)
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &Decimal) -> Decimal {
        let mut iter = self.coeffs.iter().rev();
        let mut result = iter.next().cloned().unwrap_or_else(Decimal::zero);
        for c in iter {
            result = result * x + c;
        }
        result
    }

    /// Adds two polynomials, padding the shorter with implicit zeros.
    ///
    /// Result length = max of the operand lengths.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);

        for i in 0..len {
            let a = self.coeff(i);
            let b = other.coeff(i);
            result.push(a + b);
        }

        Self { coeffs: result }
    }

    /// Sums any number of polynomials.
    ///
    /// Result length = max of the operand lengths; no operands → `[0]`.
    #[must_use]
    pub fn sum(polynomials: &[Self]) -> Self {
        polynomials
            .iter()
            .fold(Self::zero(), |acc, p| acc.add(p))
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c).collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &Decimal) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|x| x * c).collect(),
        }
    }

    /// Multiplies two polynomials by schoolbook convolution.
    ///
    /// Result length = `len(self) + len(other) − 1`, trailing zeros
    /// included.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![Decimal::zero(); n + m - 1];

        for i in 0..n {
            for j in 0..m {
                result[i + j] = result[i + j].clone() + &self.coeffs[i] * &other.coeffs[j];
            }
        }

        Self { coeffs: result }
    }

    /// Multiplies any number of polynomials by a left fold.
    ///
    /// No operands → `[0]`.
    #[must_use]
    pub fn product(polynomials: &[Self]) -> Self {
        let mut iter = polynomials.iter();
        let Some(first) = iter.next() else {
            return Self::zero();
        };
        iter.fold(first.clone(), |acc, p| acc.mul(p))
    }

    /// Raises the polynomial to a non-negative integer power by repeated
    /// multiplication.
    ///
    /// `n = 0` yields the constant polynomial `[1]`. The exponent is
    /// expected to be small, so the naive O(n) schedule is used rather
    /// than squaring.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = self.clone();
        for _ in 1..n {
            result = result.mul(self);
        }
        result
    }

    /// Computes the formal derivative by the power rule.
    ///
    /// Result length = `len − 1`; the derivative of a constant is `[0]`.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() == 1 {
            return Self::zero();
        }

        let mut result = Vec::with_capacity(self.coeffs.len() - 1);
        for (i, c) in self.coeffs.iter().skip(1).enumerate() {
            #[allow(clippy::cast_possible_wrap)]
            result.push(c.mul_int(i as i64 + 1));
        }

        Self { coeffs: result }
    }

    /// Computes the indefinite integral with the constant of integration
    /// fixed to zero.
    ///
    /// Result length = `len + 1`.
    #[must_use]
    pub fn integral(&self) -> Self {
        let mut result = Vec::with_capacity(self.coeffs.len() + 1);
        result.push(Decimal::zero());
        for (i, c) in self.coeffs.iter().enumerate() {
            #[allow(clippy::cast_possible_wrap)]
            result.push(c.div_int(i as i64 + 1));
        }

        Self { coeffs: result }
    }

    /// Returns a closure evaluating this polynomial, for use where an
    /// opaque scalar function is expected.
    pub fn to_function(&self) -> impl Fn(&Decimal) -> Decimal + '_ {
        move |x| self.eval(x)
    }
}

impl fmt::Display for Polynomial {
    /// Renders descending powers: zero terms are skipped, unit
    /// coefficients are elided except on the constant term, and the zero
    /// polynomial renders as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        for i in (0..self.coeffs.len()).rev() {
            let c = &self.coeffs[i];
            if c.is_zero() {
                continue;
            }

            if out.is_empty() {
                if !c.is_one() || i == 0 {
                    out.push_str(&c.to_string());
                }
            } else {
                out.push_str(if c.is_negative() { " - " } else { " + " });
                if !c.is_one() && !(-c).is_one() || i == 0 {
                    out.push_str(&c.abs().to_string());
                }
            }

            if i != 0 {
                out.push('x');
                if i > 1 {
                    out.push('^');
                    out.push_str(&i.to_string());
                }
            }
        }

        if out.is_empty() {
            out.push('0');
        }
        write!(f, "{out}")
    }
}
