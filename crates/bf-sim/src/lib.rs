//! Fixed-step block-diagram simulation engine.
//!
//! A [`Diagram`] wires named blocks together through a shared signal
//! registry: external inputs drive named signals, summing junctions combine
//! them with signs, and each block reads one signal and writes another. One
//! `step` resolves the registry in a fixed order (inputs, sums, blocks) and
//! advances every block's internal state with explicit Euler;
//! [`Diagram::simulate`] repeats that over equally spaced time samples and
//! collects every signal's history.
//!
//! The engine is single-threaded and synchronous by design; a `Diagram` is
//! exclusively owned by its calling thread for the duration of a
//! simulation.

pub mod diagram;
pub mod error;
pub mod historian;
pub mod input;

pub use diagram::{Diagram, Input, Operand, Sign, SimProgress, Sum};
pub use error::{SimError, SimResult};
pub use historian::Historian;
