use crate::CoreError;

/// Floating point type used throughout the workspace.
pub type Real = f64;

/// One tolerance pair for everything.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Check every element of a coefficient slice is finite.
pub fn ensure_all_finite(values: &[Real], what: &'static str) -> Result<(), CoreError> {
    for &v in values {
        ensure_finite(v, what)?;
    }
    Ok(())
}
