//! bf-core: stable foundation for blockflow.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - poly (polynomial coefficient utilities, descending powers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod poly;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use poly::*;
