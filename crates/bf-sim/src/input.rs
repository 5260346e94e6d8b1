//! Input-signal function factories.

use bf_core::Real;

/// A step that starts at `initial` and jumps by `size` at `start_time`.
pub fn step(initial: Real, start_time: Real, size: Real) -> impl Fn(Real) -> Real {
    move |t| if t < start_time { initial } else { initial + size }
}

/// A constant input, typically a fixed setpoint.
pub fn constant(value: Real) -> impl Fn(Real) -> Real {
    move |_t| value
}
