//! Signal block variants for blockflow diagrams.
//!
//! A block owns exactly one named input signal, one named output signal, and
//! its own update rule:
//! - **Lti**: continuous state-space dynamics, integrated by the diagram
//! - **DiscreteTf**: sampled recurrence with zero-order hold between samples
//! - **Deadtime**: pure delay via interpolated history
//! - **Algebraic**: stateless closure of `(t, u)`
//! - **Zero**: constant-zero structural placeholder
//!
//! All variants sit behind the flat [`Block`] wrapper; there is no deeper
//! hierarchy.

pub mod algebraic;
pub mod block;
pub mod deadtime;
pub mod discrete;
pub mod error;
pub mod lti;

pub use algebraic::Algebraic;
pub use block::{Block, BlockKind, Zero};
pub use deadtime::Deadtime;
pub use discrete::DiscreteTf;
pub use error::{BlockError, BlockResult};
pub use lti::Lti;
