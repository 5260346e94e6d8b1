//! Diagram construction and the step/simulate loop.

use std::collections::BTreeMap;
use std::fmt;

use bf_blocks::Block;
use bf_core::Real;
use tracing::{debug, trace};

use crate::error::{SimError, SimResult};
use crate::historian::Historian;

/// Sign of a summing-junction operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

/// One signed signal reference inside a summing junction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    sign: Sign,
    signal: String,
}

impl Operand {
    /// Parse an operand of the form `"+name"` or `"-name"`.
    pub fn parse(operand: &str) -> SimResult<Self> {
        let malformed = || SimError::MalformedOperand {
            operand: operand.to_string(),
        };
        let (sign, signal) = operand.split_at_checked(1).ok_or_else(malformed)?;
        let sign = match sign {
            "+" => Sign::Plus,
            "-" => Sign::Minus,
            _ => return Err(malformed()),
        };
        if signal.is_empty() {
            return Err(malformed());
        }
        Ok(Self {
            sign,
            signal: signal.to_string(),
        })
    }

    /// The referenced signal name.
    pub fn signal(&self) -> &str {
        &self.signal
    }

    /// The operand's sign.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    fn apply(&self, value: Real) -> Real {
        match self.sign {
            Sign::Plus => value,
            Sign::Minus => -value,
        }
    }
}

/// A summing junction writing the signed sum of its operands to one output
/// signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sum {
    output: String,
    operands: Vec<Operand>,
}

impl Sum {
    /// Build a junction from signed operand strings, e.g.
    /// `Sum::new("error", &["+setpoint", "-measurement"])`.
    pub fn new(output: impl Into<String>, operands: &[&str]) -> SimResult<Self> {
        let operands = operands
            .iter()
            .map(|s| Operand::parse(s))
            .collect::<SimResult<Vec<_>>>()?;
        Ok(Self {
            output: output.into(),
            operands,
        })
    }

    /// The signal this junction writes.
    pub fn output_name(&self) -> &str {
        &self.output
    }

    /// The signed references this junction reads.
    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }
}

/// An external input: a named signal driven by a function of time.
pub struct Input {
    signal: String,
    f: Box<dyn Fn(Real) -> Real>,
}

impl Input {
    /// Drive `signal` with `f(t)` each step.
    pub fn new(signal: impl Into<String>, f: impl Fn(Real) -> Real + 'static) -> Self {
        Self {
            signal: signal.into(),
            f: Box::new(f),
        }
    }

    /// The driven signal name.
    pub fn signal(&self) -> &str {
        &self.signal
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("signal", &self.signal)
            .finish_non_exhaustive()
    }
}

/// Per-step progress reported to a `simulate_with_progress` observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimProgress {
    /// Steps completed so far (1-based).
    pub step: usize,
    /// Total number of time samples.
    pub total: usize,
    /// Simulation time of the completed step.
    pub time: Real,
}

/// A wired block diagram plus its signal registry.
///
/// Construction validates the wiring eagerly: every signal a block or sum
/// reads must be produced by exactly one input, sum, or block output.
/// Each `Diagram` owns an independent registry, so multiple simulations can
/// coexist safely; a single `Diagram` must not be stepped re-entrantly.
#[derive(Debug)]
pub struct Diagram {
    blocks: Vec<Block>,
    sums: Vec<Sum>,
    inputs: Vec<Input>,
    signals: BTreeMap<String, Real>,
}

impl Diagram {
    /// Assemble a diagram from blocks (evaluated in the given order), sums
    /// (evaluated in the given order), and external inputs.
    ///
    /// # Errors
    ///
    /// - [`SimError::DuplicateProducer`] if two producers write one signal
    /// - [`SimError::UnknownSignal`] if a block input or sum operand names a
    ///   signal nothing produces (placeholder `Zero` blocks are exempt —
    ///   they never read their input)
    pub fn new(blocks: Vec<Block>, sums: Vec<Sum>, inputs: Vec<Input>) -> SimResult<Self> {
        {
            let mut producers: BTreeMap<&str, usize> = BTreeMap::new();
            for input in &inputs {
                *producers.entry(input.signal()).or_insert(0) += 1;
            }
            for sum in &sums {
                *producers.entry(sum.output_name()).or_insert(0) += 1;
            }
            for block in &blocks {
                *producers.entry(block.output_name()).or_insert(0) += 1;
            }

            if let Some((&signal, _)) = producers.iter().find(|&(_, &count)| count > 1) {
                return Err(SimError::DuplicateProducer {
                    signal: signal.to_string(),
                });
            }

            for block in &blocks {
                if !block.ignores_input() && !producers.contains_key(block.input_name()) {
                    return Err(SimError::UnknownSignal {
                        signal: block.input_name().to_string(),
                        referenced_by: format!("block '{}'", block.name()),
                    });
                }
            }
            for sum in &sums {
                for operand in sum.operands() {
                    if !producers.contains_key(operand.signal()) {
                        return Err(SimError::UnknownSignal {
                            signal: operand.signal().to_string(),
                            referenced_by: format!("sum '{}'", sum.output_name()),
                        });
                    }
                }
            }
        }

        // The registry's key set is fixed here for the diagram's lifetime.
        let mut signals = BTreeMap::new();
        for input in &inputs {
            signals.insert(input.signal().to_string(), 0.0);
        }
        for sum in &sums {
            signals.insert(sum.output_name().to_string(), 0.0);
            for operand in sum.operands() {
                signals.insert(operand.signal().to_string(), 0.0);
            }
        }
        for block in &blocks {
            signals.insert(block.input_name().to_string(), 0.0);
            signals.insert(block.output_name().to_string(), 0.0);
        }

        debug!(
            blocks = blocks.len(),
            sums = sums.len(),
            inputs = inputs.len(),
            signals = signals.len(),
            "validated diagram wiring"
        );

        let mut diagram = Self {
            blocks,
            sums,
            inputs,
            signals,
        };
        diagram.reset();
        Ok(diagram)
    }

    /// All signal names in the registry, sorted.
    pub fn signal_names(&self) -> impl Iterator<Item = &str> {
        self.signals.keys().map(String::as_str)
    }

    /// Current value of a signal.
    pub fn signal(&self, name: &str) -> Option<Real> {
        self.signals.get(name).copied()
    }

    /// Re-zero every signal and every block's internal state. Idempotent;
    /// called by `simulate` before each run.
    pub fn reset(&mut self) {
        for value in self.signals.values_mut() {
            *value = 0.0;
        }
        for block in &mut self.blocks {
            block.reset();
        }
    }

    /// Advance the diagram by one step at time `t`.
    ///
    /// Executes, in this exact order: evaluate input functions, evaluate
    /// sums in declaration order from the current registry, then for each
    /// block in declaration order read its input, compute its output, and
    /// immediately advance its state with explicit Euler. Sums are not
    /// re-evaluated after block outputs are written within the same step;
    /// they see input-stage values only, which keeps repeated runs
    /// numerically reproducible.
    ///
    /// Returns the registry snapshot for this step.
    pub fn step(&mut self, t: Real, dt: Real) -> &BTreeMap<String, Real> {
        trace!(t, "diagram step");
        for input in &self.inputs {
            let value = (input.f)(t);
            *self
                .signals
                .get_mut(input.signal())
                .expect("registry is seeded at construction") = value;
        }

        for sum in &self.sums {
            let total: Real = sum
                .operands()
                .iter()
                .map(|operand| operand.apply(self.signals[operand.signal()]))
                .sum();
            *self
                .signals
                .get_mut(sum.output_name())
                .expect("registry is seeded at construction") = total;
        }

        for block in &mut self.blocks {
            let u = self.signals[block.input_name()];
            let y = block.change_input(t, u);
            *self
                .signals
                .get_mut(block.output_name())
                .expect("registry is seeded at construction") = y;
            let x_new = block.state() + block.derivative(u) * dt;
            block.change_state(x_new);
        }

        &self.signals
    }

    /// Run the full simulation over `times` and collect every signal's
    /// history.
    ///
    /// `times` must hold at least two ascending samples; the step size is
    /// derived from the first two and reused throughout. Equal spacing is
    /// assumed, not validated — irregularly spaced samples produce silently
    /// wrong results.
    ///
    /// Resets the diagram first, so repeated calls with identical samples
    /// produce identical output.
    pub fn simulate(&mut self, times: &[Real]) -> SimResult<Historian> {
        self.simulate_with_progress(times, |_| {})
    }

    /// [`Diagram::simulate`] with an observer invoked once per completed
    /// step.
    pub fn simulate_with_progress(
        &mut self,
        times: &[Real],
        mut observer: impl FnMut(SimProgress),
    ) -> SimResult<Historian> {
        if times.len() < 2 {
            return Err(SimError::InvalidArg {
                what: "at least two time samples are required",
            });
        }
        let dt = times[1] - times[0];
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::InvalidArg {
                what: "time samples must be finite and ascending",
            });
        }

        debug!(samples = times.len(), dt, "starting fixed-step simulation");
        self.reset();
        let mut historian = Historian::with_signals(self.signals.keys());
        let total = times.len();
        for (i, &t) in times.iter().enumerate() {
            let snapshot = self.step(t, dt);
            historian.record(snapshot);
            observer(SimProgress {
                step: i + 1,
                total,
                time: t,
            });
        }
        Ok(historian)
    }
}
