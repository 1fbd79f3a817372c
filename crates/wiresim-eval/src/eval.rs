//! Per-gate evaluation logic.
//!
//! Contains the exhaustive [`eval_gate`] function mapping each [`GateOp`]
//! to its 16-bit arithmetic. Operand resolution (literals vs. wires, and
//! the order they resolve in) is the solver's job; this module only
//! combines already-resolved input signals.
//!
//! All arithmetic is modular over the 16-bit signal domain: complement
//! masks to 16 bits and shifts widen to 32 bits before masking, so no
//! input can overflow, panic, or produce a value outside `0..=u16::MAX`.
//! There is no overflow error by design.

use wiresim_core::{GateOp, WireId};

use crate::error::EvalError;

/// A resolved wire signal. The whole domain is fixed-width 16-bit
/// unsigned; every operator wraps to this width.
pub type Signal = u16;

const SIGNAL_BITS: u32 = Signal::BITS;
const SIGNAL_MASK: u32 = Signal::MAX as u32;

/// Combines resolved input signals per the gate's operator.
///
/// `inputs` must hold exactly `op.arity()` signals in operand order; the
/// solver guarantees this for validated definitions, and a shortfall is
/// reported as [`EvalError::MissingOperand`] against `wire`.
pub fn eval_gate(op: &GateOp, inputs: &[Signal], wire: &WireId) -> Result<Signal, EvalError> {
    let input = |index: usize| -> Result<Signal, EvalError> {
        inputs
            .get(index)
            .copied()
            .ok_or_else(|| EvalError::MissingOperand {
                wire: wire.clone(),
                index,
            })
    };

    match op {
        GateOp::Const { value } => Ok(*value),
        GateOp::Direct => input(0),
        GateOp::And => Ok(input(0)? & input(1)?),
        GateOp::Or => Ok(input(0)? | input(1)?),
        GateOp::Not => Ok(!input(0)?),
        GateOp::LShift => Ok(shift_left(input(0)?, input(1)?)),
        GateOp::RShift => Ok(shift_right(input(0)?, input(1)?)),
    }
}

/// Left shift, masked to the signal width. Shifting every bit out yields 0.
fn shift_left(value: Signal, amount: Signal) -> Signal {
    if u32::from(amount) >= SIGNAL_BITS {
        0
    } else {
        ((u32::from(value) << amount) & SIGNAL_MASK) as Signal
    }
}

/// Logical right shift. Shifting every bit out yields 0.
fn shift_right(value: Signal, amount: Signal) -> Signal {
    if u32::from(amount) >= SIGNAL_BITS {
        0
    } else {
        value >> amount
    }
}
