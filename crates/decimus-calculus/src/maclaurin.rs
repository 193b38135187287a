//! Reconstruction of scalar functions as truncated Maclaurin polynomials.
//!
//! ```text
//! f(x) ≈ Σ_{n=0}^{d} (f⁽ⁿ⁾(0) / n!) · xⁿ
//! ```

use decimus_decimal::{Decimal, NumericContext};
use decimus_poly::Polynomial;

use crate::combinatorics::one_over_factorial;
use crate::finite_diff::nth_derivative;

/// Builds the degree-`degree` Maclaurin polynomial approximating `f`.
///
/// Coefficient n is `f⁽ⁿ⁾(0) · (1/n!)`: the derivative comes from the
/// finite-difference engine and the factorial scalar from
/// [`one_over_factorial`]. Coefficient n needs `n + 1` evaluations of
/// `f`, so a degree-d reconstruction costs O(d²) evaluations in total.
#[allow(clippy::cast_possible_truncation)]
pub fn maclaurin_polynomial<F>(ctx: &NumericContext, f: &F, degree: usize) -> Polynomial
where
    F: Fn(&Decimal) -> Decimal,
{
    let origin = ctx.zero();
    let mut coeffs = Vec::with_capacity(degree + 1);

    for n in 0..=degree {
        let derivative = nth_derivative(ctx, f, n, &origin);
        let scale = ctx
            .from_f64(one_over_factorial(n as u32))
            .expect("1/n! is finite");
        coeffs.push(derivative * scale);
    }

    Polynomial::new(coeffs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: &Decimal, b: &Decimal, tol: &Decimal) -> bool {
        (a - b).abs() < *tol
    }

    #[test]
    fn test_square_reconstructs() {
        let ctx = NumericContext::new();
        let square = |x: &Decimal| x.powi(2);
        let p = maclaurin_polynomial(&ctx, &square, 2);
        let tol = ctx.parse("1e-5").unwrap();

        assert_eq!(p.len(), 3);
        assert!(close(&p.coeff(0), &ctx.zero(), &tol));
        assert!(close(&p.coeff(1), &ctx.zero(), &tol));
        assert!(close(&p.coeff(2), &ctx.one(), &tol));
    }

    #[test]
    fn test_shifted_cube_reconstructs() {
        let ctx = NumericContext::new();
        // (1 + x)^3 = 1 + 3x + 3x^2 + x^3
        let f = |x: &Decimal| (ctx.one() + x).powi(3);
        let p = maclaurin_polynomial(&ctx, &f, 3);
        let tol = ctx.parse("1e-5").unwrap();

        assert!(close(&p.coeff(0), &ctx.one(), &tol));
        assert!(close(&p.coeff(1), &ctx.from_i64(3), &tol));
        assert!(close(&p.coeff(2), &ctx.from_i64(3), &tol));
        assert!(close(&p.coeff(3), &ctx.one(), &tol));
    }

    #[test]
    fn test_reconstruction_evaluates_near_original() {
        let ctx = NumericContext::new();
        let square = |x: &Decimal| x.powi(2);
        let p = maclaurin_polynomial(&ctx, &square, 2);

        let at = ctx.from_i64(7);
        let tol = ctx.parse("1e-3").unwrap();
        assert!(close(&p.eval(&at), &square(&at), &tol));
    }
}
