//! Standalone feedback controllers and tuning rules.
//!
//! Provides the classic P / PI / PID controllers as single-signal elements
//! sharing the block state-update pattern (`change_input`, `derivative`,
//! `change_state`), so a caller-owned loop can integrate them alongside
//! process models, plus ITAE tuning-rule lookup for FOPDT processes.

pub mod controller;
pub mod error;
pub mod tuning;

pub use controller::{limit, PController, PiController, PidController};
pub use error::{ControlError, ControlResult};
pub use tuning::{itae_parameters, ControllerKind, InputKind, ItaeSettings};
