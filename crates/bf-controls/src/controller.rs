//! Controller implementations.
//!
//! All controllers act on the loop error fed to `change_input` and carry an
//! output bias (the actuator value at zero error). The PI and PID laws are
//! realized as state-space systems so the caller integrates them exactly
//! like any other continuous element:
//!
//! ```text
//! y = controller.change_input(t, e);
//! let x = controller.state() + controller.derivative(e) * dt;
//! controller.change_state(x);
//! ```

use bf_core::{ensure_finite, Real};
use bf_lti::{StateSpace, TransferFunction};
use nalgebra::DVector;

use crate::error::{ControlError, ControlResult};

/// Default derivative filter factor for [`PidController`].
pub const DEFAULT_FILTER_FACTOR: Real = 0.1;

/// Clamp a signal between actuator limits.
pub fn limit(signal: Real, lower: Real, upper: Real) -> Real {
    if signal > upper {
        return upper;
    }
    if signal < lower {
        return lower;
    }
    signal
}

/// Proportional controller `y = Kc e + bias`.
#[derive(Debug, Clone)]
pub struct PController {
    gain: Real,
    bias: Real,
    output: Real,
}

impl PController {
    /// Create a P controller.
    pub fn new(gain: Real, bias: Real) -> ControlResult<Self> {
        ensure_finite(gain, "gain").map_err(|_| ControlError::InvalidArg {
            what: "gain must be finite",
        })?;
        ensure_finite(bias, "bias").map_err(|_| ControlError::InvalidArg {
            what: "bias must be finite",
        })?;
        Ok(Self {
            gain,
            bias,
            output: bias,
        })
    }

    /// Last computed output.
    pub fn output(&self) -> Real {
        self.output
    }

    /// Return the output to the bias.
    pub fn reset(&mut self) {
        self.output = self.bias;
    }

    /// Pure proportional action.
    pub fn change_input(&mut self, _t: Real, e: Real) -> Real {
        self.output = self.gain * e + self.bias;
        self.output
    }
}

/// Proportional-integral controller `Kc (1 + 1/(tau_i s))` with bias.
#[derive(Debug, Clone)]
pub struct PiController {
    ss: StateSpace,
    x: DVector<Real>,
    bias: Real,
    output: Real,
}

impl PiController {
    /// Create a PI controller with gain `kc` and integral time `tau_i`.
    ///
    /// # Errors
    ///
    /// Rejects a non-positive integral time.
    pub fn new(kc: Real, tau_i: Real, bias: Real) -> ControlResult<Self> {
        let ss = TransferFunction::pi(kc, tau_i)?.to_ss();
        let x = ss.zero_state();
        Ok(Self {
            ss,
            x,
            bias,
            output: bias,
        })
    }

    /// Last computed output.
    pub fn output(&self) -> Real {
        self.output
    }

    /// Zero the integral state, return the output to the bias.
    pub fn reset(&mut self) {
        self.x = self.ss.zero_state();
        self.output = self.bias;
    }

    /// Evaluate the control law for error `e`.
    pub fn change_input(&mut self, _t: Real, e: Real) -> Real {
        self.output = self.ss.output(&self.x, e) + self.bias;
        self.output
    }

    /// Integral-state derivative for error `e`.
    pub fn derivative(&self, e: Real) -> DVector<Real> {
        self.ss.derivative(&self.x, e)
    }

    /// Current integral state.
    pub fn state(&self) -> &DVector<Real> {
        &self.x
    }

    /// Replace the integral state.
    pub fn change_state(&mut self, x: DVector<Real>) {
        self.x = x;
    }
}

/// Proportional-integral-derivative controller with filtered derivative.
///
/// Realizes `Kc (1 + 1/(tau_i s) + tau_d s / (alpha_f tau_d s + 1))` as a
/// state-space system; the filter factor `alpha_f` keeps the law proper.
#[derive(Debug, Clone)]
pub struct PidController {
    ss: StateSpace,
    x: DVector<Real>,
    bias: Real,
    output: Real,
}

impl PidController {
    /// Create a PID controller with the default derivative filter factor.
    pub fn new(kc: Real, tau_i: Real, tau_d: Real, bias: Real) -> ControlResult<Self> {
        Self::with_filter_factor(kc, tau_i, tau_d, bias, DEFAULT_FILTER_FACTOR)
    }

    /// Create a PID controller with an explicit filter factor.
    ///
    /// # Errors
    ///
    /// Rejects non-positive `tau_i` or `alpha_f`, or negative `tau_d`.
    pub fn with_filter_factor(
        kc: Real,
        tau_i: Real,
        tau_d: Real,
        bias: Real,
        alpha_f: Real,
    ) -> ControlResult<Self> {
        if tau_i <= 0.0 {
            return Err(ControlError::InvalidArg {
                what: "tau_i must be positive",
            });
        }
        if tau_d < 0.0 {
            return Err(ControlError::InvalidArg {
                what: "tau_d must be non-negative",
            });
        }
        if alpha_f <= 0.0 {
            return Err(ControlError::InvalidArg {
                what: "alpha_f must be positive",
            });
        }

        let num = [
            kc * alpha_f * tau_d * tau_i + kc * tau_d * tau_i,
            kc * alpha_f * tau_d + kc * tau_i,
            kc,
        ];
        let den = [alpha_f * tau_d * tau_i, tau_i, 0.0];
        // With tau_d == 0 the leading coefficients vanish and the
        // realization collapses to the PI law.
        let ss = TransferFunction::new(&num, &den)?.to_ss();
        let x = ss.zero_state();
        Ok(Self {
            ss,
            x,
            bias,
            output: bias,
        })
    }

    /// Last computed output.
    pub fn output(&self) -> Real {
        self.output
    }

    /// Zero the controller state, return the output to the bias.
    pub fn reset(&mut self) {
        self.x = self.ss.zero_state();
        self.output = self.bias;
    }

    /// Evaluate the control law for error `e`.
    pub fn change_input(&mut self, _t: Real, e: Real) -> Real {
        self.output = self.ss.output(&self.x, e) + self.bias;
        self.output
    }

    /// Controller-state derivative for error `e`.
    pub fn derivative(&self, e: Real) -> DVector<Real> {
        self.ss.derivative(&self.x, e)
    }

    /// Current controller state.
    pub fn state(&self) -> &DVector<Real> {
        &self.x
    }

    /// Replace the controller state.
    pub fn change_state(&mut self, x: DVector<Real>) {
        self.x = x;
    }
}
