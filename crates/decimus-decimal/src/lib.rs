//! # decimus-decimal
//!
//! Arbitrary precision decimal arithmetic for the Decimus toolkit.
//!
//! This crate provides:
//! - [`Decimal`]: an immutable arbitrary precision decimal number
//! - [`NumericContext`]: the precision and step-size configuration shared by
//!   every numerical routine in the workspace
//!
//! All other Decimus crates operate exclusively on [`Decimal`] values so that
//! finite-difference stencils with tiny step sizes do not lose significance
//! to binary floating-point cancellation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod decimal;

pub use context::{NumericContext, DEFAULT_PRECISION};
pub use decimal::{Decimal, DecimalError};
