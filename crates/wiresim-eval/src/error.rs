//! Evaluation error types.
//!
//! Both failure modes are deterministic functions of the circuit's
//! structure: the same circuit state reproduces the same error on every
//! call. Neither is retryable, and the solver never substitutes a default
//! signal for a wire it could not resolve.

use serde::{Deserialize, Serialize};

use wiresim_core::WireId;

/// Errors produced while resolving wire signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum EvalError {
    /// The requested wire, or a wire somewhere in its dependency chain,
    /// has no definition. Expected for incomplete input; callers decide
    /// how to report it.
    #[error("undefined wire '{wire}'")]
    UndefinedWire { wire: WireId },

    /// Resolving the wire requires its own value. `path` lists the wires
    /// on the cycle in discovery order.
    #[error("cycle detected through {}", join_path(.path))]
    CycleDetected { path: Vec<WireId> },

    /// A gate was evaluated with fewer inputs than its operator needs.
    /// Indicates a defect in definition construction, not bad input.
    #[error("missing operand {index} for wire '{wire}'")]
    MissingOperand { wire: WireId, index: usize },

    /// Solver bookkeeping violated its own invariants.
    #[error("internal error: {message}")]
    Internal { message: String },
}

fn join_path(path: &[WireId]) -> String {
    path.iter()
        .map(WireId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings() {
        let err = EvalError::UndefinedWire { wire: "z".into() };
        assert_eq!(err.to_string(), "undefined wire 'z'");

        let err = EvalError::CycleDetected {
            path: vec!["x".into(), "y".into()],
        };
        assert_eq!(err.to_string(), "cycle detected through x -> y");
    }

    #[test]
    fn serde_roundtrip() {
        let err = EvalError::CycleDetected {
            path: vec!["a".into(), "b".into()],
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: EvalError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
