//! # decimus-calculus
//!
//! Numerical differentiation for arbitrary scalar functions over
//! arbitrary precision decimals.
//!
//! This crate provides:
//! - Integer combinatorics (factorial, permutation, combination) feeding
//!   coefficient generation
//! - A finite-difference engine approximating derivatives of any order
//! - Reconstruction of a function as a truncated Maclaurin polynomial
//!
//! Everything is synchronous and pure: functions are evaluated as plain
//! calls, results are fresh immutable values, and the only configuration
//! is the [`decimus_decimal::NumericContext`] passed into each routine.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod combinatorics;
pub mod finite_diff;
pub mod maclaurin;

pub use combinatorics::{
    combination, factorial, one_over_factorial, permutation, CombinatoricsError,
};
pub use finite_diff::{first_derivative, nth_derivative, second_derivative, third_derivative};
pub use maclaurin::maclaurin_polynomial;
