//! Finite-difference approximation of derivatives.
//!
//! Approximates the n-th derivative of an arbitrary scalar function at a
//! point with the forward stencil
//!
//! ```text
//! f⁽ⁿ⁾(x) ≈ (−1/ε)ⁿ · Σ_{i=0}^{n} (−1)ⁱ · C(n,i) · f(x + iε)
//! ```
//!
//! Orders 1 to 3 use the hand-expanded stencils; higher orders evaluate
//! the summation directly, generating one binomial coefficient per term
//! and evaluating `f` at `n + 1` points. Accuracy is bounded by the
//! context's ε and precision — there is no adaptive refinement, and the
//! step size is shared by every caller holding the same context.
//!
//! Functions must be referentially transparent (same input, same output,
//! no observable side effects); the engine does not verify this.

use decimus_decimal::{Decimal, NumericContext};

use crate::combinatorics::binomial;

/// Forward-difference slope `(f(x+ε) − f(x)) / ε`.
pub fn first_derivative<F>(ctx: &NumericContext, f: &F, at: &Decimal) -> Decimal
where
    F: Fn(&Decimal) -> Decimal,
{
    (f(&(at + ctx.epsilon())) - f(at)) * ctx.over_epsilon()
}

/// Second-order stencil `(f(x+2ε) − 2f(x+ε) + f(x)) / ε²`.
pub fn second_derivative<F>(ctx: &NumericContext, f: &F, at: &Decimal) -> Decimal
where
    F: Fn(&Decimal) -> Decimal,
{
    let fx = f(at);
    let f1 = f(&(at + ctx.epsilon()));
    let f2 = f(&(at + ctx.two_epsilon()));
    (f2 - f1.mul_int(2) + fx) * ctx.over_epsilon_squared()
}

/// Third-order stencil `(f(x+3ε) − 3f(x+2ε) + 3f(x+ε) − f(x)) / ε³`.
pub fn third_derivative<F>(ctx: &NumericContext, f: &F, at: &Decimal) -> Decimal
where
    F: Fn(&Decimal) -> Decimal,
{
    let fx = f(at);
    let f1 = f(&(at + ctx.epsilon()));
    let f2 = f(&(at + ctx.two_epsilon()));
    let f3 = f(&(at + ctx.three_epsilon()));
    (f3 - f2.mul_int(3) + f1.mul_int(3) - fx) * ctx.over_epsilon_cubed()
}

/// Approximates the n-th derivative of `f` at `at`.
///
/// Order 0 returns `f(at)` directly; orders 1 to 3 dispatch to the
/// dedicated stencils; higher orders run the general summation.
pub fn nth_derivative<F>(ctx: &NumericContext, f: &F, n: usize, at: &Decimal) -> Decimal
where
    F: Fn(&Decimal) -> Decimal,
{
    match n {
        0 => f(at),
        1 => first_derivative(ctx, f, at),
        2 => second_derivative(ctx, f, at),
        3 => third_derivative(ctx, f, at),
        _ => nth_derivative_general(ctx, f, n, at),
    }
}

/// The general summation for orders the dedicated stencils do not cover.
#[allow(clippy::cast_possible_truncation)]
fn nth_derivative_general<F>(ctx: &NumericContext, f: &F, n: usize, at: &Decimal) -> Decimal
where
    F: Fn(&Decimal) -> Decimal,
{
    // The (−1)ⁿ sign is folded into the leading (1/ε)ⁿ factor.
    let mut constant = ctx.over_epsilon().powi(n as u32);
    if n % 2 == 1 {
        constant = -constant;
    }

    let mut sum = ctx.zero();
    for i in 0..=n {
        let offset = ctx.epsilon().mul_uint(i as u128);
        let term = f(&(at + &offset)).mul_uint(binomial(n as u128, i as u128));
        sum = if i % 2 == 1 { sum - term } else { sum + term };
    }

    sum * constant
}
