//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::dense::Polynomial;
    use decimus_decimal::Decimal;

    const PRECISION: usize = 50;

    // Strategy for generating small integer coefficients
    fn small_coeff() -> impl Strategy<Value = Decimal> {
        (-100i64..100i64).prop_map(|n| Decimal::from_i64(n, PRECISION))
    }

    // Strategy for generating small polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(Polynomial::new)
    }

    fn close(a: &Decimal, b: &Decimal) -> bool {
        let tol = Decimal::parse("1e-40", PRECISION).unwrap();
        (a - b).abs() < tol
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_add_length_is_max(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).len(), a.len().max(b.len()));
        }

        #[test]
        fn poly_mul_length_is_convolution(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b).len(), a.len() + b.len() - 1);
        }

        // Evaluation is a ring homomorphism on integer inputs.

        #[test]
        fn eval_of_sum_is_sum_of_evals(a in small_poly(), b in small_poly(), x in small_coeff()) {
            let lhs = a.add(&b).eval(&x);
            let rhs = a.eval(&x) + b.eval(&x);
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn eval_of_product_is_product_of_evals(a in small_poly(), b in small_poly(), x in small_coeff()) {
            let lhs = a.mul(&b).eval(&x);
            let rhs = a.eval(&x) * b.eval(&x);
            prop_assert_eq!(lhs, rhs);
        }

        // Calculus round trips

        #[test]
        fn derivative_of_integral_recovers(p in small_poly()) {
            let back = p.integral().derivative();
            prop_assert_eq!(back.len(), p.len());
            for i in 0..p.len() {
                prop_assert!(close(&back.coeff(i), &p.coeff(i)));
            }
        }

        #[test]
        fn integral_of_derivative_zeroes_constant(p in small_poly()) {
            let back = p.derivative().integral();
            prop_assert!(back.coeff(0).is_zero());
            for i in 1..p.len() {
                prop_assert!(close(&back.coeff(i), &p.coeff(i)));
            }
        }
    }
}
