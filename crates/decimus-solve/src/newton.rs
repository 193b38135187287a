//! Newton's method.
//!
//! ```text
//! x_{n+1} = x_n − f(x_n) / f′(x_n)
//! ```
//!
//! The function variant replaces f′ with the forward-difference slope,
//! inlined so each step costs exactly two function evaluations:
//!
//! ```text
//! x_{n+1} = x_n − f(x_n)·ε / (f(x_n + ε) − f(x_n))
//! ```

use decimus_decimal::{Decimal, NumericContext};
use decimus_poly::Polynomial;
use num_traits::Zero;
use tracing::{debug, trace};

/// Default iteration budget of both solvers.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Options controlling a Newton's-method search.
#[derive(Clone, Debug)]
pub struct SolveOptions {
    /// Where the iteration starts; the context's zero when absent.
    pub starting_point: Option<Decimal>,
    /// Maximum number of iterations before giving up.
    pub max_iterations: usize,
}

impl SolveOptions {
    /// Creates the default options: start at zero, budget of
    /// [`DEFAULT_MAX_ITERATIONS`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            starting_point: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Sets the starting point of the search.
    #[must_use]
    pub fn with_starting_point(mut self, x: Decimal) -> Self {
        self.starting_point = Some(x);
        self
    }

    /// Sets the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a Newton's-method search.
///
/// A search that exhausts its budget still yields its best estimate;
/// `converged` records whether the threshold was actually reached.
#[derive(Clone, Debug)]
pub struct SolveResult {
    /// The best root estimate found.
    pub root: Decimal,
    /// Whether `|f(root)|` dropped below the context's ε¹⁰ threshold.
    pub converged: bool,
    /// Number of iterations consumed.
    pub iterations: usize,
}

/// Searches for a root of an arbitrary scalar function.
///
/// The derivative is approximated by the forward-difference slope at
/// each step. A slope of exactly zero is replaced by ε³ so the iteration
/// stays finite instead of dividing by zero; this is a stability
/// fallback, not a rigorous recovery, and such a step usually flings the
/// estimate far from the flat region.
pub fn solve_function<F>(ctx: &NumericContext, f: &F, options: &SolveOptions) -> SolveResult
where
    F: Fn(&Decimal) -> Decimal,
{
    let mut x = options.starting_point.clone().unwrap_or_else(|| ctx.zero());

    for iteration in 0..options.max_iterations {
        let fx = f(&x);
        if fx.abs() < *ctx.epsilon_max() {
            debug!(iteration, root = %x, "converged");
            return SolveResult {
                root: x,
                converged: true,
                iterations: iteration,
            };
        }

        let mut slope = f(&(&x + ctx.epsilon())) - &fx;
        if slope.is_zero() {
            slope = ctx.epsilon_cubed().clone();
        }
        x = x - (fx * ctx.epsilon()) / slope;
        trace!(iteration, x = %x, "step");
    }

    debug!(iterations = options.max_iterations, root = %x, "iteration budget exhausted");
    SolveResult {
        root: x,
        converged: false,
        iterations: options.max_iterations,
    }
}

/// Searches for a root of a polynomial.
///
/// The formal derivative is computed once up front and evaluated
/// exactly at each step. A derivative value of exactly zero is replaced
/// by ε³, the same stability fallback as [`solve_function`].
pub fn solve_polynomial(
    ctx: &NumericContext,
    polynomial: &Polynomial,
    options: &SolveOptions,
) -> SolveResult {
    let derivative = polynomial.derivative();
    let mut x = options.starting_point.clone().unwrap_or_else(|| ctx.zero());

    for iteration in 0..options.max_iterations {
        let fx = polynomial.eval(&x);
        if fx.abs() < *ctx.epsilon_max() {
            debug!(iteration, root = %x, "converged");
            return SolveResult {
                root: x,
                converged: true,
                iterations: iteration,
            };
        }

        let dfx = derivative.eval(&x);
        let divisor = if dfx.is_zero() {
            ctx.epsilon_cubed().clone()
        } else {
            dfx
        };
        x = x - fx / divisor;
        trace!(iteration, x = %x, "step");
    }

    debug!(iterations = options.max_iterations, root = %x, "iteration budget exhausted");
    SolveResult {
        root: x,
        converged: false,
        iterations: options.max_iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: &Decimal, b: &Decimal, tol: &Decimal) -> bool {
        (a - b).abs() < *tol
    }

    fn x_squared_minus_four(ctx: &NumericContext) -> Polynomial {
        Polynomial::new(vec![ctx.from_i64(-4), ctx.zero(), ctx.one()])
    }

    #[test]
    fn test_solve_polynomial_from_positive_start() {
        let ctx = NumericContext::new();
        let p = x_squared_minus_four(&ctx);
        let options = SolveOptions::new().with_starting_point(ctx.from_i64(1));
        let result = solve_polynomial(&ctx, &p, &options);

        let tol = ctx.parse("1e-42").unwrap();
        assert!(result.converged);
        assert!(close(&result.root, &ctx.from_i64(2), &tol), "root {}", result.root);
    }

    #[test]
    fn test_solve_polynomial_from_negative_start() {
        let ctx = NumericContext::new();
        let p = x_squared_minus_four(&ctx);
        let options = SolveOptions::new().with_starting_point(ctx.from_i64(-1));
        let result = solve_polynomial(&ctx, &p, &options);

        let tol = ctx.parse("1e-42").unwrap();
        assert!(result.converged);
        assert!(close(&result.root, &ctx.from_i64(-2), &tol), "root {}", result.root);
    }

    #[test]
    fn test_solve_polynomial_escapes_flat_derivative() {
        let ctx = NumericContext::new();
        let p = x_squared_minus_four(&ctx);
        // The default start is 0, where 2x is exactly zero; the ε³
        // substitution kicks the estimate away and the search still lands
        // on a root.
        let result = solve_polynomial(&ctx, &p, &SolveOptions::new());

        let tol = ctx.parse("1e-42").unwrap();
        assert!(result.converged);
        assert!(close(&result.root.abs(), &ctx.from_i64(2), &tol), "root {}", result.root);
    }

    #[test]
    fn test_solve_polynomial_reports_exhaustion() {
        let ctx = NumericContext::new();
        // x² + 1 has no real root; Newton wanders forever.
        let p = Polynomial::new(vec![ctx.one(), ctx.zero(), ctx.one()]);
        let options = SolveOptions::new()
            .with_starting_point(ctx.from_i64(1))
            .with_max_iterations(5);
        let result = solve_polynomial(&ctx, &p, &options);

        assert!(!result.converged);
        assert_eq!(result.iterations, 5);
    }

    #[test]
    fn test_solve_function_near_two() {
        let ctx = NumericContext::new();
        let f = |x: &Decimal| x.powi(2) - ctx.from_i64(4);
        let options = SolveOptions::new().with_starting_point(ctx.from_i64(1));
        let result = solve_function(&ctx, &f, &options);

        // The forward-difference slope keeps the fixed point a hair away
        // from the exact root, so the tolerance is scaled to ε.
        let tol = ctx.parse("1e-6").unwrap();
        assert!(result.converged, "root {}", result.root);
        assert!(close(&result.root, &ctx.from_i64(2), &tol), "root {}", result.root);
    }

    #[test]
    fn test_solve_function_linear() {
        let ctx = NumericContext::new();
        let f = |x: &Decimal| x.mul_int(2) - ctx.from_i64(6);
        let result = solve_function(&ctx, &f, &SolveOptions::new());

        let tol = ctx.parse("1e-6").unwrap();
        assert!(result.converged);
        assert!(close(&result.root, &ctx.from_i64(3), &tol), "root {}", result.root);
    }

    #[test]
    fn test_options_builder() {
        let ctx = NumericContext::new();
        let options = SolveOptions::new()
            .with_starting_point(ctx.from_i64(7))
            .with_max_iterations(42);
        assert_eq!(options.starting_point, Some(ctx.from_i64(7)));
        assert_eq!(options.max_iterations, 42);

        let defaults = SolveOptions::default();
        assert!(defaults.starting_point.is_none());
        assert_eq!(defaults.max_iterations, DEFAULT_MAX_ITERATIONS);
    }
}
