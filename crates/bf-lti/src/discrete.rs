//! Discrete transfer-function coefficient conversion.
//!
//! A discrete transfer function can be written in negative powers of z
//! (`b_0 + b_1 z^-1 + ...`) or positive powers (`b_0 z^k + b_1 z^(k-1) +
//! ...`). Converting between the two is pure zero padding: to a common
//! length `k = max(len(num), len(den))`, on the trailing side for
//! negative-to-positive and the leading side for positive-to-negative.

use bf_core::Real;

/// Convert coefficients from negative to positive powers of z.
///
/// Both sequences are padded with trailing zeros to the longer length.
pub fn discrete_coeffs_neg_to_pos(num: &[Real], den: &[Real]) -> (Vec<Real>, Vec<Real>) {
    let k = num.len().max(den.len());
    let pad = |coeffs: &[Real]| {
        let mut out = coeffs.to_vec();
        out.resize(k, 0.0);
        out
    };
    (pad(num), pad(den))
}

/// Convert coefficients from positive to negative powers of z.
///
/// Both sequences are padded with leading zeros to the longer length.
pub fn discrete_coeffs_pos_to_neg(num: &[Real], den: &[Real]) -> (Vec<Real>, Vec<Real>) {
    let k = num.len().max(den.len());
    let pad = |coeffs: &[Real]| {
        let mut out = vec![0.0; k - coeffs.len()];
        out.extend_from_slice(coeffs);
        out
    };
    (pad(num), pad(den))
}
