//! # Decimus
//!
//! A numerical-analysis toolkit over arbitrary precision decimals.
//!
//! Decimus approximates derivatives and roots of arbitrary scalar
//! functions, and reconstructs functions as polynomials, without binary
//! floating-point cancellation: every routine operates on decimal values
//! whose precision is configured once per [`decimal::NumericContext`].
//!
//! ## Features
//!
//! - **Polynomial algebra**: evaluation, addition, multiplication,
//!   powers, derivatives, integrals, parsing and display
//! - **Finite differences**: n-th derivative approximation of any scalar
//!   function at a point
//! - **Root finding**: Newton's method, generic and
//!   polynomial-specialized
//! - **Reconstruction**: truncated Maclaurin expansion of a function
//!
//! ## Quick start
//!
//! ```
//! use decimus::prelude::*;
//!
//! let ctx = NumericContext::new();
//! let p = Polynomial::parse("x^2 - 4", &ctx).unwrap();
//!
//! let result = solve_polynomial(
//!     &ctx,
//!     &p,
//!     &SolveOptions::new().with_starting_point(ctx.from_i64(1)),
//! );
//! assert!(result.converged);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use decimus_calculus as calculus;
pub use decimus_decimal as decimal;
pub use decimus_poly as poly;
pub use decimus_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use decimus_calculus::{
        combination, factorial, maclaurin_polynomial, nth_derivative, permutation,
        CombinatoricsError,
    };
    pub use decimus_decimal::{Decimal, DecimalError, NumericContext};
    pub use decimus_poly::{ParseError, Polynomial};
    pub use decimus_solve::{solve_function, solve_polynomial, SolveOptions, SolveResult};
}
