//! Closed-form step responses for reduced-order process models.
//!
//! These are the analytic references the simulator is validated against:
//! exact step responses of first and second order plus dead time systems.

use bf_core::{ensure_finite, Real};

use crate::error::{LtiError, LtiResult};

fn check_tau(tau: Real) -> LtiResult<()> {
    ensure_finite(tau, "tau").map_err(|_| LtiError::NonFinite { what: "tau" })?;
    if tau <= 0.0 {
        return Err(LtiError::NonPositive {
            what: "tau",
            value: tau,
        });
    }
    Ok(())
}

/// First Order Plus Dead Time step response with bias.
///
/// Step response of `G(s) = K e^(-theta s) / (tau s + 1)`, evaluated at time
/// `t`, offset by the bias `y0`. Before the dead time elapses the response
/// sits at the bias.
///
/// # Errors
///
/// Rejects a non-positive or non-finite time constant.
pub fn fopdt(t: Real, k: Real, tau: Real, theta: Real, y0: Real) -> LtiResult<Real> {
    check_tau(tau)?;
    Ok(fopdt_at(t, k, tau, theta, y0))
}

/// [`fopdt`] evaluated over a slice of time samples.
pub fn fopdt_series(ts: &[Real], k: Real, tau: Real, theta: Real, y0: Real) -> LtiResult<Vec<Real>> {
    check_tau(tau)?;
    Ok(ts.iter().map(|&t| fopdt_at(t, k, tau, theta, y0)).collect())
}

fn fopdt_at(t: Real, k: Real, tau: Real, theta: Real, y0: Real) -> Real {
    let rise = k.abs() * (1.0 - (-(t - theta) / tau).exp());
    y0 + k.signum() * rise.max(0.0)
}

/// Second Order Plus Dead Time step response with bias.
///
/// Step response of `G(s) = K e^(-theta s) / (tau^2 s^2 + 2 tau zeta s + 1)`
/// with damping coefficient `zeta`; covers the underdamped, critically
/// damped and overdamped branches.
///
/// # Errors
///
/// Rejects a non-positive or non-finite time constant, or a non-finite
/// damping coefficient.
pub fn sopdt(t: Real, k: Real, tau: Real, zeta: Real, theta: Real, y0: Real) -> LtiResult<Real> {
    check_tau(tau)?;
    ensure_finite(zeta, "zeta").map_err(|_| LtiError::NonFinite { what: "zeta" })?;
    Ok(sopdt_at(t, k, tau, zeta, theta, y0))
}

/// [`sopdt`] evaluated over a slice of time samples.
pub fn sopdt_series(
    ts: &[Real],
    k: Real,
    tau: Real,
    zeta: Real,
    theta: Real,
    y0: Real,
) -> LtiResult<Vec<Real>> {
    check_tau(tau)?;
    ensure_finite(zeta, "zeta").map_err(|_| LtiError::NonFinite { what: "zeta" })?;
    Ok(ts
        .iter()
        .map(|&t| sopdt_at(t, k, tau, zeta, theta, y0))
        .collect())
}

fn sopdt_at(t: Real, k: Real, tau: Real, zeta: Real, theta: Real, y0: Real) -> Real {
    // Undelayed time; the response holds at the bias until theta elapses.
    let ttau = (t - theta).max(0.0) / tau;

    if zeta == 1.0 {
        return y0 + k * (1.0 - (1.0 + ttau) * (-ttau).exp());
    }

    if zeta > 1.0 {
        // Overdamped: e^(-zeta x) (cosh(r x) + (zeta/r) sinh(r x)) expanded
        // into plain exponentials; both exponents are negative for a stable
        // system, so nothing overflows at large times.
        let root = (zeta * zeta - 1.0).sqrt();
        let transient = 0.5
            * ((1.0 + zeta / root) * ((root - zeta) * ttau).exp()
                + (1.0 - zeta / root) * (-(root + zeta) * ttau).exp());
        return y0 + k * (1.0 - transient);
    }

    let root = (1.0 - zeta * zeta).sqrt();
    let transient =
        (-zeta * ttau).exp() * ((root * ttau).cos() + zeta / root * (root * ttau).sin());
    y0 + k * (1.0 - transient)
}
