//! Linear time-invariant system backbone for blockflow.
//!
//! Provides:
//! - rational transfer functions (descending-power coefficients) with
//!   series/feedback algebra
//! - controllable-canonical state-space realization
//! - Skogestad half-rule model reduction
//! - discrete coefficient conversion between powers of z
//! - FOPDT/SOPDT closed-form step responses for validation

pub mod discrete;
pub mod error;
pub mod reduce;
pub mod response;
pub mod ss;
pub mod tf;

pub use discrete::{discrete_coeffs_neg_to_pos, discrete_coeffs_pos_to_neg};
pub use error::{LtiError, LtiResult};
pub use reduce::skogestad_half;
pub use response::{fopdt, fopdt_series, sopdt, sopdt_series};
pub use ss::StateSpace;
pub use tf::TransferFunction;
