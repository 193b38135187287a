//! # decimus-solve
//!
//! Newton's-method root finding over arbitrary precision decimals.
//!
//! This crate provides two solvers:
//! - [`solve_function`]: for arbitrary scalar functions, with the
//!   derivative approximated by an inlined forward difference
//! - [`solve_polynomial`]: for polynomials, with the exact formal
//!   derivative — more stable and cheaper per iteration
//!
//! Both iterate `x ← x − f(x)/f′(x)` from a configurable starting point
//! until `|f(x)|` drops below the context's ε¹⁰ threshold or the
//! iteration budget runs out. Non-convergence is not an error: the last
//! estimate is returned with [`SolveResult::converged`] set to `false`,
//! and callers that care must validate the root themselves.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod newton;

pub use newton::{
    solve_function, solve_polynomial, SolveOptions, SolveResult, DEFAULT_MAX_ITERATIONS,
};
