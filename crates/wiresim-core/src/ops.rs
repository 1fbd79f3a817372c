//! Gate operator vocabulary and operand references.
//!
//! [`GateOp`] is the complete set of operations a wire definition can
//! perform. Every gate has a fixed operand count ([`GateOp::arity`]); the
//! constant gate carries its literal in the variant and takes no operands.
//!
//! [`Operand`] is a reference to a gate input: either a literal signal or
//! another wire by name. Wire operands are logical references -- they name
//! a wire that may be defined anywhere in the input, including after the
//! gate that uses it.

use serde::{Deserialize, Serialize};

use crate::ident::WireId;

/// A single gate input: a literal 16-bit signal or a named wire whose
/// signal must be resolved first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    /// A literal signal used directly.
    Literal(u16),
    /// A reference to another wire's output.
    Wire(WireId),
}

impl Operand {
    /// Returns the referenced wire, if this operand is a wire reference.
    pub fn as_wire(&self) -> Option<&WireId> {
        match self {
            Operand::Literal(_) => None,
            Operand::Wire(id) => Some(id),
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Literal(v) => write!(f, "{}", v),
            Operand::Wire(id) => write!(f, "{}", id),
        }
    }
}

/// The operation a gate performs on its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateOp {
    /// Produces a fixed literal signal. No operands.
    Const { value: u16 },
    /// Pass-through: the signal of the single operand, unchanged.
    Direct,
    /// Bitwise AND of two operands.
    And,
    /// Bitwise OR of two operands.
    Or,
    /// Bitwise complement of one operand, masked to 16 bits.
    Not,
    /// First operand shifted left by the second, masked to 16 bits.
    LShift,
    /// First operand shifted right by the second.
    RShift,
}

impl GateOp {
    /// Number of operands this operation consumes.
    pub fn arity(&self) -> usize {
        match self {
            GateOp::Const { .. } => 0,
            GateOp::Direct | GateOp::Not => 1,
            GateOp::And | GateOp::Or | GateOp::LShift | GateOp::RShift => 2,
        }
    }

    /// The operator's name as it appears in rule text (`CONST` and `DIRECT`
    /// never appear textually; they are spelled by operand position).
    pub fn name(&self) -> &'static str {
        match self {
            GateOp::Const { .. } => "CONST",
            GateOp::Direct => "DIRECT",
            GateOp::And => "AND",
            GateOp::Or => "OR",
            GateOp::Not => "NOT",
            GateOp::LShift => "LSHIFT",
            GateOp::RShift => "RSHIFT",
        }
    }

    /// Returns `true` for the shift operators.
    pub fn is_shift(&self) -> bool {
        matches!(self, GateOp::LShift | GateOp::RShift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_table() {
        assert_eq!(GateOp::Const { value: 0 }.arity(), 0);
        assert_eq!(GateOp::Direct.arity(), 1);
        assert_eq!(GateOp::Not.arity(), 1);
        assert_eq!(GateOp::And.arity(), 2);
        assert_eq!(GateOp::Or.arity(), 2);
        assert_eq!(GateOp::LShift.arity(), 2);
        assert_eq!(GateOp::RShift.arity(), 2);
    }

    #[test]
    fn is_shift_only_for_shifts() {
        assert!(GateOp::LShift.is_shift());
        assert!(GateOp::RShift.is_shift());
        assert!(!GateOp::And.is_shift());
        assert!(!GateOp::Const { value: 1 }.is_shift());
    }

    #[test]
    fn operand_as_wire() {
        assert_eq!(Operand::Literal(7).as_wire(), None);
        let op = Operand::Wire("x".into());
        assert_eq!(op.as_wire(), Some(&WireId::from("x")));
    }

    #[test]
    fn operand_display() {
        assert_eq!(Operand::Literal(123).to_string(), "123");
        assert_eq!(Operand::Wire("lx".into()).to_string(), "lx");
    }

    #[test]
    fn serde_roundtrip_const() {
        let op = GateOp::Const { value: 456 };
        let json = serde_json::to_string(&op).unwrap();
        let back: GateOp = serde_json::from_str(&json).unwrap();
        assert_eq!(op, back);
    }

    #[test]
    fn serde_roundtrip_operand() {
        for op in [Operand::Literal(1), Operand::Wire("ab".into())] {
            let json = serde_json::to_string(&op).unwrap();
            let back: Operand = serde_json::from_str(&json).unwrap();
            assert_eq!(op, back);
        }
    }
}
