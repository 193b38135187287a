//! Numeric configuration shared by every Decimus routine.
//!
//! A [`NumericContext`] is built once at startup and passed by reference
//! into the differentiation engine, the solvers and the reconstruction
//! routine. It carries the significant-digit precision and the family of
//! constants derived from the finite-difference step size ε. Changing ε
//! changes the precision/stability tradeoff of every finite-difference and
//! polynomial-solving operation built on top of it.

use crate::decimal::{Decimal, DecimalError};

/// Default significant-digit precision of a context.
pub const DEFAULT_PRECISION: usize = 100;

/// Denominator of the default finite-difference step: ε = 1 / 10⁷.
const DEFAULT_STEP_DENOMINATOR: i64 = 10_000_000;

/// Exponent of the Newton convergence threshold ε¹⁰.
const CONVERGENCE_EXPONENT: u32 = 10;

/// Immutable precision and step-size configuration.
///
/// The ε family is precomputed at construction and never changes for the
/// lifetime of the context. All [`Decimal`] values produced by a context
/// carry its precision.
#[derive(Clone, Debug)]
pub struct NumericContext {
    precision: usize,
    epsilon: Decimal,
    epsilon_squared: Decimal,
    epsilon_cubed: Decimal,
    epsilon_max: Decimal,
    two_epsilon: Decimal,
    three_epsilon: Decimal,
    over_epsilon: Decimal,
    over_epsilon_squared: Decimal,
    over_epsilon_cubed: Decimal,
}

impl NumericContext {
    /// Creates a context with [`DEFAULT_PRECISION`] digits and ε = 10⁻⁷.
    #[must_use]
    pub fn new() -> Self {
        Self::with_precision(DEFAULT_PRECISION)
    }

    /// Creates a context with the given precision and ε = 10⁻⁷.
    #[must_use]
    pub fn with_precision(precision: usize) -> Self {
        let epsilon = Decimal::from_i64(1, precision).div_int(DEFAULT_STEP_DENOMINATOR);
        Self::with_epsilon(precision, epsilon)
    }

    /// Creates a context with the given precision and step size.
    ///
    /// A larger ε trades accuracy for stability in every finite-difference
    /// stencil; a smaller ε requires enough precision to absorb the
    /// cancellation in `f(x + ε) − f(x)`.
    #[must_use]
    pub fn with_epsilon(precision: usize, epsilon: Decimal) -> Self {
        let epsilon = epsilon.with_precision(precision);
        let over_epsilon = &Decimal::from_i64(1, precision) / &epsilon;
        Self {
            precision,
            epsilon_squared: epsilon.powi(2),
            epsilon_cubed: epsilon.powi(3),
            epsilon_max: epsilon.powi(CONVERGENCE_EXPONENT),
            two_epsilon: epsilon.mul_int(2),
            three_epsilon: epsilon.mul_int(3),
            over_epsilon_squared: over_epsilon.powi(2),
            over_epsilon_cubed: over_epsilon.powi(3),
            over_epsilon,
            epsilon,
        }
    }

    /// The significant-digit precision of this context.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// The finite-difference step size ε.
    #[must_use]
    pub fn epsilon(&self) -> &Decimal {
        &self.epsilon
    }

    /// ε².
    #[must_use]
    pub fn epsilon_squared(&self) -> &Decimal {
        &self.epsilon_squared
    }

    /// ε³, also the divisor substituted for an exactly-zero derivative in
    /// the Newton solvers.
    #[must_use]
    pub fn epsilon_cubed(&self) -> &Decimal {
        &self.epsilon_cubed
    }

    /// ε¹⁰, the absolute-value convergence threshold of the Newton solvers.
    #[must_use]
    pub fn epsilon_max(&self) -> &Decimal {
        &self.epsilon_max
    }

    /// 2ε.
    #[must_use]
    pub fn two_epsilon(&self) -> &Decimal {
        &self.two_epsilon
    }

    /// 3ε.
    #[must_use]
    pub fn three_epsilon(&self) -> &Decimal {
        &self.three_epsilon
    }

    /// 1/ε.
    #[must_use]
    pub fn over_epsilon(&self) -> &Decimal {
        &self.over_epsilon
    }

    /// 1/ε².
    #[must_use]
    pub fn over_epsilon_squared(&self) -> &Decimal {
        &self.over_epsilon_squared
    }

    /// 1/ε³.
    #[must_use]
    pub fn over_epsilon_cubed(&self) -> &Decimal {
        &self.over_epsilon_cubed
    }

    /// The decimal 0 at this context's precision.
    #[must_use]
    pub fn zero(&self) -> Decimal {
        Decimal::from_i64(0, self.precision)
    }

    /// The decimal 1 at this context's precision.
    #[must_use]
    pub fn one(&self) -> Decimal {
        Decimal::from_i64(1, self.precision)
    }

    /// Creates a decimal from a machine integer at this context's precision.
    #[must_use]
    pub fn from_i64(&self, value: i64) -> Decimal {
        Decimal::from_i64(value, self.precision)
    }

    /// Converts a binary floating-point value at this context's precision.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::NotFinite`] for NaN or infinite inputs.
    pub fn from_f64(&self, value: f64) -> Result<Decimal, DecimalError> {
        Decimal::from_f64(value, self.precision)
    }

    /// Parses a decimal literal at this context's precision.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::Parse`] if the text is not a valid decimal
    /// literal.
    pub fn parse(&self, text: &str) -> Result<Decimal, DecimalError> {
        Decimal::parse(text, self.precision)
    }
}

impl Default for NumericContext {
    fn default() -> Self {
        Self::new()
    }
}
