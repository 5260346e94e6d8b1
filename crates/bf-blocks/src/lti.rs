//! Continuous LTI block with optional embedded dead time.

use bf_core::Real;
use bf_lti::{StateSpace, TransferFunction};
use nalgebra::DVector;

use crate::deadtime::Deadtime;
use crate::error::BlockResult;

/// A continuous linear time-invariant element.
///
/// The transfer function is realized once at construction; stepping is the
/// diagram's job. The block only evaluates its output equation and exposes
/// the state derivative — it never integrates itself.
#[derive(Debug, Clone)]
pub struct Lti {
    ss: StateSpace,
    x: DVector<Real>,
    deadtime: Option<Deadtime>,
    output: Real,
}

impl Lti {
    /// Build from a transfer function and an optional fixed delay
    /// (`delay == 0` means none).
    pub fn new(tf: &TransferFunction, delay: Real) -> BlockResult<Self> {
        let ss = tf.to_ss();
        let deadtime = Some(Deadtime::new(delay)?).filter(|d| d.delay() > 0.0);
        let x = ss.zero_state();
        Ok(Self {
            ss,
            x,
            deadtime,
            output: 0.0,
        })
    }

    /// An ideal PI control element `Kc (tau_i s + 1) / (tau_i s)`.
    pub fn pi(kc: Real, tau_i: Real) -> BlockResult<Self> {
        Self::new(&TransferFunction::pi(kc, tau_i)?, 0.0)
    }

    /// State dimension of the realization.
    pub fn order(&self) -> usize {
        self.ss.order()
    }

    /// Last computed output.
    pub fn output(&self) -> Real {
        self.output
    }

    /// Zero the state, the output, and any embedded delay history.
    pub fn reset(&mut self) {
        self.x = self.ss.zero_state();
        self.output = 0.0;
        if let Some(deadtime) = &mut self.deadtime {
            deadtime.reset();
        }
    }

    /// Evaluate `y = C x + D u`, routed through the embedded dead time when
    /// one is configured.
    pub fn change_input(&mut self, t: Real, u: Real) -> Real {
        let mut y = self.ss.output(&self.x, u);
        if let Some(deadtime) = &mut self.deadtime {
            y = deadtime.change_input(t, y);
        }
        self.output = y;
        y
    }

    /// State derivative `A x + B u` at the current state.
    pub fn derivative(&self, u: Real) -> DVector<Real> {
        self.ss.derivative(&self.x, u)
    }

    /// Current state vector.
    pub fn state(&self) -> &DVector<Real> {
        &self.x
    }

    /// Replace the state; dimension is fixed at the realization order.
    pub fn change_state(&mut self, x: DVector<Real>) {
        debug_assert_eq!(x.len(), self.ss.order());
        self.x = x;
    }
}
