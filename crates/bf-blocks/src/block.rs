//! The flat block wrapper tying a variant to its signal wiring.

use bf_core::Real;
use bf_lti::TransferFunction;
use nalgebra::DVector;

use crate::algebraic::Algebraic;
use crate::deadtime::Deadtime;
use crate::discrete::DiscreteTf;
use crate::error::BlockResult;
use crate::lti::Lti;

/// Constant-zero structural placeholder.
///
/// Useful for reserving a signal in a diagram's wiring before the real
/// element exists. Ignores its input; `change_state` is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

/// The closed set of block variants.
#[derive(Debug)]
pub enum BlockKind {
    Lti(Lti),
    Discrete(DiscreteTf),
    Deadtime(Deadtime),
    Algebraic(Algebraic),
    Zero(Zero),
}

/// A named processing element with one input signal and one output signal.
///
/// The name is a label for display; the diagram wires blocks together by
/// their input/output signal names. All variants share one capability
/// surface (`reset`, `change_input`, `derivative`, `state`/`change_state`)
/// dispatched flatly over [`BlockKind`].
#[derive(Debug)]
pub struct Block {
    name: String,
    input_name: String,
    output_name: String,
    kind: BlockKind,
}

impl Block {
    /// Wrap an already-built variant with its wiring.
    pub fn new(
        name: impl Into<String>,
        input_name: impl Into<String>,
        output_name: impl Into<String>,
        kind: BlockKind,
    ) -> Self {
        Self {
            name: name.into(),
            input_name: input_name.into(),
            output_name: output_name.into(),
            kind,
        }
    }

    /// A continuous LTI block from transfer-function coefficients in
    /// descending powers, with optional dead time (`delay == 0` for none).
    pub fn lti(
        name: impl Into<String>,
        input_name: impl Into<String>,
        output_name: impl Into<String>,
        num: &[Real],
        den: &[Real],
        delay: Real,
    ) -> BlockResult<Self> {
        let tf = TransferFunction::new(num, den)?;
        Ok(Self::new(
            name,
            input_name,
            output_name,
            BlockKind::Lti(Lti::new(&tf, delay)?),
        ))
    }

    /// An ideal PI control block with gain `kc` and integral time `tau_i`.
    pub fn pi(
        name: impl Into<String>,
        input_name: impl Into<String>,
        output_name: impl Into<String>,
        kc: Real,
        tau_i: Real,
    ) -> BlockResult<Self> {
        Ok(Self::new(
            name,
            input_name,
            output_name,
            BlockKind::Lti(Lti::pi(kc, tau_i)?),
        ))
    }

    /// A discrete transfer function with sampling period `dt`; coefficients
    /// most-recent-last.
    pub fn discrete_tf(
        name: impl Into<String>,
        input_name: impl Into<String>,
        output_name: impl Into<String>,
        dt: Real,
        num: &[Real],
        den: &[Real],
    ) -> BlockResult<Self> {
        Ok(Self::new(
            name,
            input_name,
            output_name,
            BlockKind::Discrete(DiscreteTf::new(dt, num, den)?),
        ))
    }

    /// A pure dead-time block.
    pub fn deadtime(
        name: impl Into<String>,
        input_name: impl Into<String>,
        output_name: impl Into<String>,
        delay: Real,
    ) -> BlockResult<Self> {
        Ok(Self::new(
            name,
            input_name,
            output_name,
            BlockKind::Deadtime(Deadtime::new(delay)?),
        ))
    }

    /// A stateless algebraic block computing `y = f(t, u)`.
    pub fn algebraic(
        name: impl Into<String>,
        input_name: impl Into<String>,
        output_name: impl Into<String>,
        f: impl Fn(Real, Real) -> Real + 'static,
    ) -> Self {
        Self::new(
            name,
            input_name,
            output_name,
            BlockKind::Algebraic(Algebraic::new(f)),
        )
    }

    /// A constant-zero placeholder block.
    pub fn zero(
        name: impl Into<String>,
        input_name: impl Into<String>,
        output_name: impl Into<String>,
    ) -> Self {
        Self::new(name, input_name, output_name, BlockKind::Zero(Zero))
    }

    /// Display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Signal this block reads each step.
    pub fn input_name(&self) -> &str {
        &self.input_name
    }

    /// Signal this block writes each step.
    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// The wrapped variant.
    pub fn kind(&self) -> &BlockKind {
        &self.kind
    }

    /// True for the structural placeholder variant, whose input wiring is
    /// never read.
    pub fn ignores_input(&self) -> bool {
        matches!(self.kind, BlockKind::Zero(_))
    }

    /// Re-initialize internal state, output, and any embedded delay.
    /// Idempotent.
    pub fn reset(&mut self) {
        match &mut self.kind {
            BlockKind::Lti(b) => b.reset(),
            BlockKind::Discrete(b) => b.reset(),
            BlockKind::Deadtime(b) => b.reset(),
            BlockKind::Algebraic(b) => b.reset(),
            BlockKind::Zero(_) => {}
        }
    }

    /// Compute and cache this step's output from input `u` at time `t`.
    ///
    /// Must be called before the state advance for the same step.
    pub fn change_input(&mut self, t: Real, u: Real) -> Real {
        match &mut self.kind {
            BlockKind::Lti(b) => b.change_input(t, u),
            BlockKind::Discrete(b) => b.change_input(t, u),
            BlockKind::Deadtime(b) => b.change_input(t, u),
            BlockKind::Algebraic(b) => b.change_input(t, u),
            BlockKind::Zero(_) => 0.0,
        }
    }

    /// Last computed output.
    pub fn output(&self) -> Real {
        match &self.kind {
            BlockKind::Lti(b) => b.output(),
            BlockKind::Discrete(b) => b.output(),
            BlockKind::Deadtime(b) => b.output(),
            BlockKind::Algebraic(b) => b.output(),
            BlockKind::Zero(_) => 0.0,
        }
    }

    /// Rate of change of the internal state for input `u`; zero-length for
    /// variants with no differential state. Does not mutate.
    pub fn derivative(&self, u: Real) -> DVector<Real> {
        match &self.kind {
            BlockKind::Lti(b) => b.derivative(u),
            _ => DVector::zeros(0),
        }
    }

    /// Snapshot of the internal state vector; zero-length for variants with
    /// no differential state.
    pub fn state(&self) -> DVector<Real> {
        match &self.kind {
            BlockKind::Lti(b) => b.state().clone(),
            _ => DVector::zeros(0),
        }
    }

    /// Replace the internal state; a no-op for variants with no
    /// differential state.
    pub fn change_state(&mut self, x: DVector<Real>) {
        if let BlockKind::Lti(b) = &mut self.kind {
            b.change_state(x);
        }
    }
}
