//! Skogestad half-rule model reduction.

use bf_core::{ensure_all_finite, Real};

use crate::error::{LtiError, LtiResult};

/// Approximate a higher-order transfer function with a first or second order
/// plus dead time model using Skogestad's half rule.
///
/// Time constants carry the sign convention of the factored form: a factor
/// `(tau s + 1)` in the denominator contributes `tau`, while a right-half-
/// plane numerator zero `(s - 1/tau)` contributes a *negative* numerator
/// time constant. The largest neglected denominator constant is split half
/// into added dead time and half onto the smallest retained constant; all
/// smaller neglected constants and the negated numerator constants fold into
/// the dead time.
///
/// Returns `(approx_delay, approx_timeconstants)` with the retained
/// constants in descending order.
///
/// # Errors
///
/// - [`LtiError::UnsupportedOrder`] if `order` is not 1 or 2
/// - [`LtiError::OrderExceedsSystem`] if the denominator has fewer than
///   `order` time constants
/// - [`LtiError::UnstableTimeConstant`] if any denominator time constant is
///   zero or negative (the rule assumes a stable system)
pub fn skogestad_half(
    num_timeconstants: &[Real],
    den_timeconstants: &[Real],
    delay: Real,
    order: usize,
) -> LtiResult<(Real, Vec<Real>)> {
    if !(1..=2).contains(&order) {
        return Err(LtiError::UnsupportedOrder { requested: order });
    }
    if den_timeconstants.len() < order {
        return Err(LtiError::OrderExceedsSystem {
            requested: order,
            available: den_timeconstants.len(),
        });
    }
    ensure_all_finite(num_timeconstants, "num_timeconstants")
        .map_err(|_| LtiError::NonFinite { what: "num_timeconstants" })?;
    ensure_all_finite(den_timeconstants, "den_timeconstants")
        .map_err(|_| LtiError::NonFinite { what: "den_timeconstants" })?;
    if let Some(&bad) = den_timeconstants.iter().find(|&&tc| tc <= 0.0) {
        return Err(LtiError::UnstableTimeConstant { value: bad });
    }

    let mut sorted = den_timeconstants.to_vec();
    sorted.sort_by(|a, b| b.partial_cmp(a).expect("time constants are finite"));

    let mut retained = sorted[..order].to_vec();
    let neglected = &sorted[order..];
    let num_sum: Real = num_timeconstants.iter().sum();

    let approx_delay = match neglected.split_first() {
        Some((&largest, rest)) => {
            retained[order - 1] += largest / 2.0;
            delay + largest / 2.0 + rest.iter().sum::<Real>() - num_sum
        }
        // Nothing to neglect: only the numerator constants move into the
        // dead time.
        None => delay - num_sum,
    };

    Ok((approx_delay, retained))
}
