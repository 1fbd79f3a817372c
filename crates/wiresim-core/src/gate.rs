//! Gate definitions: one rule binding a wire to an operation.
//!
//! A [`GateDef`] is the stored form of one input rule. Construction through
//! [`GateDef::new`] validates the operand count against the operator's
//! arity, so a definition that exists is always well-formed -- downstream
//! code never has to handle a `NOT` with two inputs.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::CoreError;
use crate::ident::WireId;
use crate::ops::{GateOp, Operand};

/// Operand storage. Gates never have more than two inputs, so the list
/// lives inline.
pub type Operands = SmallVec<[Operand; 2]>;

/// One rule: the gate feeding a named wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDef {
    /// The wire this rule defines.
    pub target: WireId,
    /// The operation producing the wire's signal.
    pub op: GateOp,
    /// Ordered gate inputs. Length always equals `op.arity()`.
    operands: Operands,
}

impl GateDef {
    /// Creates a definition, validating the operand count.
    pub fn new(
        target: impl Into<WireId>,
        op: GateOp,
        operands: impl IntoIterator<Item = Operand>,
    ) -> Result<Self, CoreError> {
        let operands: Operands = operands.into_iter().collect();
        if operands.len() != op.arity() {
            return Err(CoreError::ArityMismatch {
                op: op.name(),
                expected: op.arity(),
                got: operands.len(),
            });
        }
        Ok(GateDef {
            target: target.into(),
            op,
            operands,
        })
    }

    /// A wire fixed to a literal signal: `123 -> x`.
    pub fn constant(target: impl Into<WireId>, value: u16) -> Self {
        GateDef {
            target: target.into(),
            op: GateOp::Const { value },
            operands: SmallVec::new(),
        }
    }

    /// A pass-through wire: `y -> x`.
    pub fn direct(target: impl Into<WireId>, source: Operand) -> Self {
        GateDef {
            target: target.into(),
            op: GateOp::Direct,
            operands: [source].into_iter().collect(),
        }
    }

    /// A complement gate: `NOT y -> x`.
    pub fn not(target: impl Into<WireId>, input: Operand) -> Self {
        GateDef {
            target: target.into(),
            op: GateOp::Not,
            operands: [input].into_iter().collect(),
        }
    }

    /// A two-input gate: `a AND b -> c`, `p LSHIFT 2 -> q`, ...
    ///
    /// Callers must pass a binary operator; unary and constant operators
    /// go through the dedicated constructors or [`GateDef::new`].
    pub fn binary(
        target: impl Into<WireId>,
        op: GateOp,
        lhs: Operand,
        rhs: Operand,
    ) -> Result<Self, CoreError> {
        GateDef::new(target, op, [lhs, rhs])
    }

    /// The gate's inputs, in order.
    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    /// The wires this gate depends on, in operand order. Literal operands
    /// are skipped; a two-wire gate yields both.
    pub fn input_wires(&self) -> impl Iterator<Item = &WireId> {
        self.operands.iter().filter_map(Operand::as_wire)
    }
}

impl fmt::Display for GateDef {
    /// Renders the definition in rule-text syntax, e.g. `x AND y -> d`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.op, self.operands.as_slice()) {
            (GateOp::Const { value }, _) => write!(f, "{} -> {}", value, self.target),
            (GateOp::Direct, [src]) => write!(f, "{} -> {}", src, self.target),
            (GateOp::Not, [input]) => write!(f, "NOT {} -> {}", input, self.target),
            (op, [lhs, rhs]) => {
                write!(f, "{} {} {} -> {}", lhs, op.name(), rhs, self.target)
            }
            // Unreachable for validated definitions.
            (op, _) => write!(f, "{} ? -> {}", op.name(), self.target),
        }
    }
}
