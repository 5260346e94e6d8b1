//! Controllable-canonical state-space realizations.

use bf_core::Real;
use nalgebra::{DMatrix, DVector};

use crate::tf::TransferFunction;

/// SISO state-space realization `dx = A x + B u`, `y = C x + D u`.
///
/// Built once from a transfer function; the realization is deterministic for
/// identical coefficient input. The companion structure places the negated
/// normalized denominator coefficients on the bottom row of `A`:
///
/// ```text
/// A = | 0    1    0  ...  0   |     B = | 0 |
///     | 0    0    1  ...  0   |         | : |
///     | :    :    :   ⋱   :   |         | 0 |
///     | -a_n -a_(n-1) ... -a_1|         | 1 |
///
/// C = | b_n - a_n b_0  ...  b_1 - a_1 b_0 |     D = b_0
/// ```
///
/// where the denominator is normalized to leading coefficient 1 and the
/// numerator is zero-padded to the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSpace {
    a: DMatrix<Real>,
    b: DVector<Real>,
    c: DVector<Real>,
    d: Real,
}

impl StateSpace {
    /// Realize a transfer function in controllable canonical form.
    ///
    /// A constant denominator yields an order-zero realization (pure gain
    /// through `D`).
    pub fn from_tf(tf: &TransferFunction) -> Self {
        let lead = tf.den()[0];
        let n = tf.den().len() - 1;

        // Normalized denominator [1, a_1, ..., a_n].
        let a_coeffs: Vec<Real> = tf.den().iter().map(|&c| c / lead).collect();
        // Numerator normalized and front-padded to [b_0, b_1, ..., b_n].
        let mut b_coeffs = vec![0.0; n + 1 - tf.num().len()];
        b_coeffs.extend(tf.num().iter().map(|&c| c / lead));

        let d = b_coeffs[0];
        let a = DMatrix::from_fn(n, n, |i, j| {
            if i + 1 < n {
                if j == i + 1 { 1.0 } else { 0.0 }
            } else {
                -a_coeffs[n - j]
            }
        });
        let mut b = DVector::zeros(n);
        if n > 0 {
            b[n - 1] = 1.0;
        }
        let c = DVector::from_fn(n, |j, _| b_coeffs[n - j] - a_coeffs[n - j] * d);

        Self { a, b, c, d }
    }

    /// State dimension.
    pub fn order(&self) -> usize {
        self.a.nrows()
    }

    /// A fresh all-zero state vector of the right dimension.
    pub fn zero_state(&self) -> DVector<Real> {
        DVector::zeros(self.order())
    }

    /// Output equation `y = C x + D u`.
    pub fn output(&self, x: &DVector<Real>, u: Real) -> Real {
        self.c.dot(x) + self.d * u
    }

    /// State equation `dx = A x + B u`.
    pub fn derivative(&self, x: &DVector<Real>, u: Real) -> DVector<Real> {
        &self.a * x + &self.b * u
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tf::TransferFunction;

    #[test]
    fn first_order_realization() {
        // K / (tau s + 1) with K = 3, tau = 2
        let g = TransferFunction::new(&[3.0], &[2.0, 1.0]).unwrap();
        let ss = g.to_ss();
        assert_eq!(ss.order(), 1);

        // dx = -x/tau + u, y = (K/tau) x
        let x = DVector::from_element(1, 4.0);
        assert!((ss.derivative(&x, 1.0)[0] - (-2.0 + 1.0)).abs() < 1e-12);
        assert!((ss.output(&x, 0.0) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn second_order_companion_structure() {
        // (s + 2) / (s^2 + 3s + 4)
        let g = TransferFunction::new(&[1.0, 2.0], &[1.0, 3.0, 4.0]).unwrap();
        let ss = g.to_ss();
        assert_eq!(ss.order(), 2);

        let x = DVector::from_vec(vec![1.0, 0.5]);
        // A = [[0, 1], [-4, -3]], B = [0, 1], C = [2, 1], D = 0
        let dx = ss.derivative(&x, 2.0);
        assert!((dx[0] - 0.5).abs() < 1e-12);
        assert!((dx[1] - (-4.0 - 1.5 + 2.0)).abs() < 1e-12);
        assert!((ss.output(&x, 7.0) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn pure_gain_realization() {
        let g = TransferFunction::from_gain(5.0).unwrap();
        let ss = g.to_ss();
        assert_eq!(ss.order(), 0);
        assert_eq!(ss.output(&ss.zero_state(), 2.0), 10.0);
        assert_eq!(ss.derivative(&ss.zero_state(), 2.0).len(), 0);
    }

    #[test]
    fn biproper_feedthrough() {
        // (s + 1) / (s + 2): D = 1, C = [1 - 2] = [-1]
        let g = TransferFunction::new(&[1.0, 1.0], &[1.0, 2.0]).unwrap();
        let ss = g.to_ss();
        let x = DVector::from_element(1, 3.0);
        assert!((ss.output(&x, 4.0) - (-3.0 + 4.0)).abs() < 1e-12);
    }

    #[test]
    fn steady_state_matches_dc_gain() {
        // At equilibrium x* = -A^{-1} B u, output equals G(0) u.
        let g = TransferFunction::new(&[2.0, 5.0], &[1.0, 4.0, 3.0]).unwrap();
        let ss = g.to_ss();
        let u = 2.0;
        // Solve A x = -B u for the equilibrium state.
        let a = DMatrix::from_fn(2, 2, |i, j| ss.derivative(&unit(2, j), 0.0)[i]);
        let rhs = -ss.derivative(&DVector::zeros(2), u);
        let x_eq = a.lu().solve(&rhs).unwrap();
        assert!((ss.output(&x_eq, u) - g.dc_gain() * u).abs() < 1e-9);
    }

    fn unit(n: usize, j: usize) -> DVector<f64> {
        let mut v = DVector::zeros(n);
        v[j] = 1.0;
        v
    }
}
