//! Pure time delay via interpolated history.

use bf_core::Real;

use crate::error::{BlockError, BlockResult};

/// A pure dead-time element.
///
/// Every `(t, u)` sample ever seen is appended to an internal history; the
/// delayed output is the linear interpolation of that history at
/// `t - delay`. The history grows without bound — exact delay reproduction
/// needs arbitrarily old samples when the delay is large relative to the
/// elapsed time, and simulations here are teaching scale.
#[derive(Debug, Clone)]
pub struct Deadtime {
    delay: Real,
    ts: Vec<Real>,
    us: Vec<Real>,
    output: Real,
}

impl Deadtime {
    /// Create a delay element.
    ///
    /// A zero delay is a valid pass-through configuration.
    ///
    /// # Errors
    ///
    /// Rejects negative or non-finite delays.
    pub fn new(delay: Real) -> BlockResult<Self> {
        if !delay.is_finite() {
            return Err(BlockError::NonFinite { what: "delay" });
        }
        if delay < 0.0 {
            return Err(BlockError::NegativeDelay { value: delay });
        }
        let mut dt = Self {
            delay,
            ts: Vec::new(),
            us: Vec::new(),
            output: 0.0,
        };
        dt.reset();
        Ok(dt)
    }

    /// Configured delay magnitude.
    pub fn delay(&self) -> Real {
        self.delay
    }

    /// Last computed output.
    pub fn output(&self) -> Real {
        self.output
    }

    /// Clear the history back to the initial zero sample.
    pub fn reset(&mut self) {
        self.ts.clear();
        self.us.clear();
        self.ts.push(0.0);
        self.us.push(0.0);
        self.output = 0.0;
    }

    /// Record `(t, u)` and return the delayed value.
    ///
    /// With `delay == 0` the input passes through unchanged. Sample times
    /// must not decrease between calls.
    pub fn change_input(&mut self, t: Real, u: Real) -> Real {
        self.ts.push(t);
        self.us.push(u);
        self.output = if self.delay > 0.0 {
            interp(t - self.delay, &self.ts, &self.us)
        } else {
            u
        };
        self.output
    }
}

/// Piecewise-linear interpolation over `(ts, us)` with extrapolation past
/// either end (no bounds clamping). Queries landing on a repeated abscissa
/// resolve to the earlier recorded value.
fn interp(x: Real, ts: &[Real], us: &[Real]) -> Real {
    debug_assert_eq!(ts.len(), us.len());
    debug_assert!(!ts.is_empty());
    let n = ts.len();
    if n == 1 {
        return us[0];
    }

    // First index with ts[idx] >= x, clamped to a valid segment.
    let idx = ts.partition_point(|&t| t < x);
    let (i0, i1) = if idx == 0 {
        (0, 1)
    } else if idx == n {
        (n - 2, n - 1)
    } else {
        (idx - 1, idx)
    };

    let (t0, t1) = (ts[i0], ts[i1]);
    if t1 == t0 {
        return us[i0];
    }
    us[i0] + (us[i1] - us[i0]) * (x - t0) / (t1 - t0)
}
