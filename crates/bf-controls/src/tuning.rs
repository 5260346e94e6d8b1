//! ITAE tuning rules for FOPDT processes.
//!
//! Controller settings minimizing the integral of time-weighted absolute
//! error, per Table 11.3 of Seborg, Edgar, Mellichamp and Lewin (itself
//! based on Smith and Corripio, 1997). Each setting comes from one of four
//! design relations parameterized by published `(A, B)` constants:
//!
//! ```text
//! f1: Y = A (theta/tau)^B,   Kc    = Y / K
//! f2: Y = A (theta/tau)^B,   tau_i = tau / Y
//! f3: Y = A (theta/tau)^B,   tau_d = Y tau
//! f4: Y = A + B (theta/tau), tau_i = tau / Y
//! ```

use bf_core::Real;
use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};

/// Which loop input the tuning targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    /// Load rejection.
    Disturbance,
    /// Setpoint tracking.
    Setpoint,
}

/// Which controller structure the settings are for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerKind {
    Pi,
    Pid,
}

/// Controller settings produced by the ITAE relations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItaeSettings {
    /// Controller gain.
    pub kc: Real,
    /// Integral time.
    pub tau_i: Real,
    /// Derivative time; `None` for PI settings.
    pub tau_d: Option<Real>,
}

fn f1(k: Real, tau: Real, theta: Real, a: Real, b: Real) -> Real {
    a * (theta / tau).powf(b) / k
}

fn f2(tau: Real, theta: Real, a: Real, b: Real) -> Real {
    tau / (a * (theta / tau).powf(b))
}

fn f3(tau: Real, theta: Real, a: Real, b: Real) -> Real {
    a * (theta / tau).powf(b) * tau
}

fn f4(tau: Real, theta: Real, a: Real, b: Real) -> Real {
    tau / (a + b * (theta / tau))
}

/// Look up ITAE settings for a FOPDT process `K e^(-theta s) / (tau s + 1)`.
///
/// # Errors
///
/// Rejects zero gain and non-positive `tau` or `theta` (the power-law
/// relations are undefined there).
pub fn itae_parameters(
    k: Real,
    tau: Real,
    theta: Real,
    input: InputKind,
    controller: ControllerKind,
) -> ControlResult<ItaeSettings> {
    if k == 0.0 || !k.is_finite() {
        return Err(ControlError::InvalidArg {
            what: "process gain must be nonzero and finite",
        });
    }
    if tau <= 0.0 || !tau.is_finite() {
        return Err(ControlError::InvalidArg {
            what: "tau must be positive and finite",
        });
    }
    if theta <= 0.0 || !theta.is_finite() {
        return Err(ControlError::InvalidArg {
            what: "theta must be positive and finite",
        });
    }

    let settings = match (input, controller) {
        (InputKind::Disturbance, ControllerKind::Pi) => ItaeSettings {
            kc: f1(k, tau, theta, 0.859, -0.977),
            tau_i: f2(tau, theta, 0.674, -0.68),
            tau_d: None,
        },
        (InputKind::Disturbance, ControllerKind::Pid) => ItaeSettings {
            kc: f1(k, tau, theta, 1.357, -0.947),
            tau_i: f2(tau, theta, 0.842, -0.738),
            tau_d: Some(f3(tau, theta, 0.381, 0.995)),
        },
        (InputKind::Setpoint, ControllerKind::Pi) => ItaeSettings {
            kc: f1(k, tau, theta, 0.586, -0.916),
            tau_i: f4(tau, theta, 1.03, -0.165),
            tau_d: None,
        },
        (InputKind::Setpoint, ControllerKind::Pid) => ItaeSettings {
            kc: f1(k, tau, theta, 0.965, -0.85),
            tau_i: f4(tau, theta, 0.796, -0.1465),
            tau_d: Some(f3(tau, theta, 0.308, 0.929)),
        },
    };
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Real, b: Real) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn disturbance_pi_unit_process() {
        // With theta/tau = 1 the power laws collapse to their A constants.
        let s = itae_parameters(1.0, 1.0, 1.0, InputKind::Disturbance, ControllerKind::Pi)
            .unwrap();
        assert!(close(s.kc, 0.859));
        assert!(close(s.tau_i, 1.0 / 0.674));
        assert!(s.tau_d.is_none());
    }

    #[test]
    fn disturbance_pid_unit_process() {
        let s = itae_parameters(2.0, 1.0, 1.0, InputKind::Disturbance, ControllerKind::Pid)
            .unwrap();
        assert!(close(s.kc, 1.357 / 2.0));
        assert!(close(s.tau_i, 1.0 / 0.842));
        assert!(close(s.tau_d.unwrap(), 0.381));
    }

    #[test]
    fn setpoint_pi_uses_linear_integral_relation() {
        let s = itae_parameters(1.0, 2.0, 1.0, InputKind::Setpoint, ControllerKind::Pi)
            .unwrap();
        // f4 with theta/tau = 0.5: tau_i = 2 / (1.03 - 0.165 * 0.5)
        assert!(close(s.tau_i, 2.0 / (1.03 - 0.165 * 0.5)));
    }

    #[test]
    fn setpoint_pid_scales_gain_by_process_gain() {
        let s1 = itae_parameters(1.0, 1.0, 0.5, InputKind::Setpoint, ControllerKind::Pid)
            .unwrap();
        let s4 = itae_parameters(4.0, 1.0, 0.5, InputKind::Setpoint, ControllerKind::Pid)
            .unwrap();
        assert!(close(s1.kc, 4.0 * s4.kc));
        assert!(close(s1.tau_i, s4.tau_i));
    }

    #[test]
    fn slower_process_gets_gentler_gain() {
        // Larger dead-time ratio means a smaller controller gain.
        let fast = itae_parameters(1.0, 10.0, 1.0, InputKind::Disturbance, ControllerKind::Pi)
            .unwrap();
        let slow = itae_parameters(1.0, 2.0, 1.0, InputKind::Disturbance, ControllerKind::Pi)
            .unwrap();
        assert!(fast.kc > slow.kc);
    }

    #[test]
    fn rejects_degenerate_processes() {
        assert!(itae_parameters(0.0, 1.0, 1.0, InputKind::Setpoint, ControllerKind::Pi).is_err());
        assert!(itae_parameters(1.0, 0.0, 1.0, InputKind::Setpoint, ControllerKind::Pi).is_err());
        assert!(itae_parameters(1.0, 1.0, 0.0, InputKind::Setpoint, ControllerKind::Pi).is_err());
        assert!(
            itae_parameters(1.0, 1.0, -1.0, InputKind::Disturbance, ControllerKind::Pid).is_err()
        );
    }
}
