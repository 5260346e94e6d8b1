//! Polynomial coefficient utilities.
//!
//! Polynomials are represented as coefficient slices in descending powers,
//! so `[2.0, 0.0, 1.0]` is `2x^2 + 1`. The constant term is always last,
//! which keeps addition alignment independent of degree.

use crate::numeric::Real;

/// Strip leading (highest-power) zero coefficients.
///
/// An all-zero polynomial trims to the empty slice.
pub fn trim_leading_zeros(coeffs: &[Real]) -> &[Real] {
    let first = coeffs.iter().position(|&c| c != 0.0);
    match first {
        Some(i) => &coeffs[i..],
        None => &[],
    }
}

/// Sum of two polynomials.
pub fn polyadd(a: &[Real], b: &[Real]) -> Vec<Real> {
    let n = a.len().max(b.len());
    let mut out = vec![0.0; n];
    for (i, &c) in a.iter().rev().enumerate() {
        out[n - 1 - i] += c;
    }
    for (i, &c) in b.iter().rev().enumerate() {
        out[n - 1 - i] += c;
    }
    out
}

/// Product of two polynomials (coefficient convolution).
pub fn polymul(a: &[Real], b: &[Real]) -> Vec<Real> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &ca) in a.iter().enumerate() {
        for (j, &cb) in b.iter().enumerate() {
            out[i + j] += ca * cb;
        }
    }
    out
}

/// Evaluate a polynomial at `x` using Horner's scheme.
pub fn polyval(coeffs: &[Real], x: Real) -> Real {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    fn coeffs() -> impl Strategy<Value = Vec<Real>> {
        prop::collection::vec(-100.0..100.0f64, 1..6)
    }

    proptest! {
        #[test]
        fn polyadd_commutes(a in coeffs(), b in coeffs()) {
            prop_assert_eq!(polyadd(&a, &b), polyadd(&b, &a));
        }

        #[test]
        fn polymul_degree_adds(a in coeffs(), b in coeffs()) {
            prop_assert_eq!(polymul(&a, &b).len(), a.len() + b.len() - 1);
        }

        #[test]
        fn polyval_distributes_over_add(a in coeffs(), b in coeffs(), x in -10.0..10.0f64) {
            let lhs = polyval(&polyadd(&a, &b), x);
            let rhs = polyval(&a, x) + polyval(&b, x);
            prop_assert!((lhs - rhs).abs() <= 1e-6 * lhs.abs().max(rhs.abs()).max(1.0));
        }
    }
}
