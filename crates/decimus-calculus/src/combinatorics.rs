//! Integer combinatorics.
//!
//! Plain machine-integer operations consumed by the finite-difference
//! engine's coefficient generation. No [`decimus_decimal::Decimal`]
//! involvement.

use thiserror::Error;

/// Errors produced by the checked combinatorial operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CombinatoricsError {
    /// More items were selected than are available.
    #[error("cannot select {b} items out of {a}")]
    InvalidArgument {
        /// Number of available items.
        a: u128,
        /// Number of selected items.
        b: u128,
    },
}

/// Computes n! as the product of 1..=n; `factorial(0)` is 1.
#[must_use]
pub fn factorial(n: u128) -> u128 {
    let mut product = 1;
    for i in 2..=n {
        product *= i;
    }
    product
}

/// Computes 1/n! by iterative division.
///
/// Dividing term by term never materializes the full factorial, so the
/// scalar stays representable well past the point where n! itself would
/// overflow. It is still a machine float, which bounds the degree a
/// Maclaurin reconstruction can reach before the coefficient scalar loses
/// precision.
#[must_use]
pub fn one_over_factorial(n: u32) -> f64 {
    let mut product = 1.0;
    for i in 2..=n {
        product /= f64::from(i);
    }
    product
}

/// Counts ordered selections of `b` items out of `a`.
///
/// `b = 0` yields 1; `a = b` yields `factorial(a)`; otherwise the product
/// of the `b` consecutive integers ending at `a`.
///
/// # Errors
///
/// Returns [`CombinatoricsError::InvalidArgument`] when `a < b`.
pub fn permutation(a: u128, b: u128) -> Result<u128, CombinatoricsError> {
    if a < b {
        return Err(CombinatoricsError::InvalidArgument { a, b });
    }
    if b == 0 {
        return Ok(1);
    }
    if a == b {
        return Ok(factorial(a));
    }

    let mut product = 1;
    // 6, 2 -> 5 * 6
    for i in (a - b + 1)..=a {
        product *= i;
    }
    Ok(product)
}

/// Counts unordered selections of `b` items out of `a`.
///
/// Applies the symmetry `C(a, b) = C(a, a−b)` to keep the work
/// proportional to `min(b, a−b)`.
///
/// # Errors
///
/// Returns [`CombinatoricsError::InvalidArgument`] when `a < b`.
pub fn combination(a: u128, b: u128) -> Result<u128, CombinatoricsError> {
    if a < b {
        return Err(CombinatoricsError::InvalidArgument { a, b });
    }
    Ok(binomial(a, b))
}

/// Binomial coefficient for arguments already known to satisfy `b <= a`.
///
/// The finite-difference engine generates `(n, i)` pairs with `i <= n` by
/// construction, so it skips the checked wrapper.
pub(crate) fn binomial(a: u128, b: u128) -> u128 {
    if a == b || b == 0 {
        return 1;
    }

    let b = if b > a / 2 { a - b } else { b };
    if b == 1 {
        return a;
    }

    let mut product = 1;
    for i in (a - b + 1)..=a {
        product *= i;
    }
    product / factorial(b)
}
