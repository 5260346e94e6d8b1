//! Rational transfer functions.
//!
//! Coefficients are stored in descending powers of s, the same convention as
//! the polynomial utilities in bf-core: `num = [1.0, 2.0]`, `den = [1.0, 3.0,
//! 2.0]` is `(s + 2) / (s^2 + 3s + 2)`.

use bf_core::{ensure_all_finite, polyadd, polymul, polyval, trim_leading_zeros, Real};
use serde::{Deserialize, Serialize};

use crate::error::{LtiError, LtiResult};
use crate::ss::StateSpace;

/// A proper rational transfer function in the Laplace domain.
///
/// Leading zero coefficients are trimmed at construction, so two transfer
/// functions describing the same system compare equal regardless of how the
/// caller padded them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferFunction {
    num: Vec<Real>,
    den: Vec<Real>,
}

impl TransferFunction {
    /// Create a transfer function from numerator and denominator
    /// coefficients in descending powers of s.
    ///
    /// # Errors
    ///
    /// Rejects empty or non-finite coefficient sequences, denominators with
    /// no nonzero coefficient, and improper functions (numerator degree
    /// above denominator degree).
    pub fn new(num: &[Real], den: &[Real]) -> LtiResult<Self> {
        if num.is_empty() {
            return Err(LtiError::EmptyCoefficients { what: "numerator" });
        }
        if den.is_empty() {
            return Err(LtiError::EmptyCoefficients { what: "denominator" });
        }
        ensure_all_finite(num, "numerator")
            .map_err(|_| LtiError::NonFinite { what: "numerator" })?;
        ensure_all_finite(den, "denominator")
            .map_err(|_| LtiError::NonFinite { what: "denominator" })?;

        let den = trim_leading_zeros(den);
        if den.is_empty() {
            return Err(LtiError::ZeroDenominator);
        }
        let num = trim_leading_zeros(num);
        // An all-zero numerator is the zero system, kept as a single term.
        let num = if num.is_empty() { &[0.0][..] } else { num };

        if num.len() > den.len() {
            return Err(LtiError::Improper {
                num_degree: num.len() - 1,
                den_degree: den.len() - 1,
            });
        }

        Ok(Self {
            num: num.to_vec(),
            den: den.to_vec(),
        })
    }

    /// A pure gain `k` (order-zero system).
    pub fn from_gain(k: Real) -> LtiResult<Self> {
        Self::new(&[k], &[1.0])
    }

    /// The ideal PI control law `Kc (tau_i s + 1) / (tau_i s)`.
    pub fn pi(kc: Real, tau_i: Real) -> LtiResult<Self> {
        if tau_i <= 0.0 {
            return Err(LtiError::NonPositive {
                what: "tau_i",
                value: tau_i,
            });
        }
        Self::new(&[kc * tau_i, kc], &[tau_i, 0.0])
    }

    /// Numerator coefficients, descending powers, leading zeros trimmed.
    pub fn num(&self) -> &[Real] {
        &self.num
    }

    /// Denominator coefficients, descending powers, leading coefficient
    /// nonzero.
    pub fn den(&self) -> &[Real] {
        &self.den
    }

    /// System order (denominator degree).
    pub fn order(&self) -> usize {
        self.den.len() - 1
    }

    /// Steady-state gain, `G(0)`.
    ///
    /// Infinite for systems with a pole at the origin (integrators).
    pub fn dc_gain(&self) -> Real {
        polyval(&self.num, 0.0) / polyval(&self.den, 0.0)
    }

    /// Series combination `self * other`.
    pub fn series(&self, other: &TransferFunction) -> LtiResult<TransferFunction> {
        TransferFunction::new(
            &polymul(&self.num, &other.num),
            &polymul(&self.den, &other.den),
        )
    }

    /// Closed-loop transfer function of this block in the forward path with
    /// `backward` in the (negative) feedback path:
    ///
    /// ```text
    ///      +     ┌────────┐
    ///   ────>o──>│ self   ├────┬──>
    ///       -↑   └────────┘    │
    ///        │   ┌────────┐    │
    ///        └───┤backward│<───┘
    ///            └────────┘
    /// ```
    ///
    /// Equals `G_f / (1 + G_f G_b)` expressed over a common denominator.
    pub fn feedback(&self, backward: &TransferFunction) -> LtiResult<TransferFunction> {
        let num = polymul(&self.num, &backward.den);
        let den = polyadd(
            &polymul(&self.den, &backward.den),
            &polymul(&self.num, &backward.num),
        );
        TransferFunction::new(&num, &den)
    }

    /// Controllable-canonical state-space realization.
    pub fn to_ss(&self) -> StateSpace {
        StateSpace::from_tf(self)
    }
}
