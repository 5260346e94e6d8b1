//! Stateless algebraic element.

use std::fmt;

use bf_core::Real;

use crate::deadtime::Deadtime;
use crate::error::BlockResult;

/// A stateless element computing `y = f(t, u)` each step, optionally routed
/// through an embedded dead time.
///
/// The closure is the whole behavior; the only persistent value is the
/// cached output.
pub struct Algebraic {
    f: Box<dyn Fn(Real, Real) -> Real>,
    deadtime: Option<Deadtime>,
    output: Real,
}

impl Algebraic {
    /// Wrap a function of `(t, u)`.
    pub fn new(f: impl Fn(Real, Real) -> Real + 'static) -> Self {
        Self {
            f: Box::new(f),
            deadtime: None,
            output: 0.0,
        }
    }

    /// Wrap a function of `(t, u)` with a fixed output delay.
    pub fn with_delay(f: impl Fn(Real, Real) -> Real + 'static, delay: Real) -> BlockResult<Self> {
        let deadtime = Some(Deadtime::new(delay)?).filter(|d| d.delay() > 0.0);
        Ok(Self {
            f: Box::new(f),
            deadtime,
            output: 0.0,
        })
    }

    /// Last computed output.
    pub fn output(&self) -> Real {
        self.output
    }

    /// Zero the cached output and any embedded delay history.
    pub fn reset(&mut self) {
        self.output = 0.0;
        if let Some(deadtime) = &mut self.deadtime {
            deadtime.reset();
        }
    }

    /// Evaluate the closure (and delay, if configured).
    pub fn change_input(&mut self, t: Real, u: Real) -> Real {
        let mut y = (self.f)(t, u);
        if let Some(deadtime) = &mut self.deadtime {
            y = deadtime.change_input(t, y);
        }
        self.output = y;
        y
    }
}

impl fmt::Debug for Algebraic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algebraic")
            .field("deadtime", &self.deadtime)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_closure() {
        let mut ae = Algebraic::new(|_t, u| u * u);
        assert_eq!(ae.change_input(0.0, 3.0), 9.0);
        assert_eq!(ae.output(), 9.0);
    }

    #[test]
    fn closure_sees_time() {
        let mut ae = Algebraic::new(|t, u| t + u);
        assert_eq!(ae.change_input(2.0, 1.0), 3.0);
    }

    #[test]
    fn delayed_closure_output() {
        let mut ae = Algebraic::with_delay(|_t, u| 2.0 * u, 0.5).unwrap();
        assert_eq!(ae.change_input(0.0, 1.0), 0.0);
        let late = ae.change_input(1.0, 1.0);
        assert!((late - 2.0).abs() < 1e-9);
    }

    #[test]
    fn reset_zeroes_output() {
        let mut ae = Algebraic::new(|_t, u| u + 1.0);
        ae.change_input(0.0, 5.0);
        ae.reset();
        assert_eq!(ae.output(), 0.0);
    }
}
