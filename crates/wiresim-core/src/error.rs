//! Core error types for wiresim-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! the failure modes of definition construction and circuit analysis.

use thiserror::Error;

use crate::ident::WireId;

/// Core errors produced by the wiresim-core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A gate definition was built with the wrong number of operands.
    #[error("arity mismatch for {op}: expected {expected} operands, got {got}")]
    ArityMismatch {
        op: &'static str,
        expected: usize,
        got: usize,
    },

    /// A wire has no definition in the circuit.
    #[error("wire not found: '{wire}'")]
    WireNotFound { wire: WireId },

    /// The circuit's dependency graph contains a cycle, so no evaluation
    /// order exists.
    #[error("combinational loop through {}", join_wires(.members))]
    CombinationalLoop { members: Vec<WireId> },
}

fn join_wires(wires: &[WireId]) -> String {
    wires
        .iter()
        .map(WireId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings() {
        insta::assert_snapshot!(
            CoreError::ArityMismatch { op: "NOT", expected: 1, got: 2 }.to_string(),
            @"arity mismatch for NOT: expected 1 operands, got 2"
        );
        insta::assert_snapshot!(
            CoreError::WireNotFound { wire: "lx".into() }.to_string(),
            @"wire not found: 'lx'"
        );
        insta::assert_snapshot!(
            CoreError::CombinationalLoop { members: vec!["x".into(), "y".into()] }.to_string(),
            @"combinational loop through x, y"
        );
    }
}
