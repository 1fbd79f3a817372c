//! Wire signal resolution for wiresim circuits.
//!
//! Computes the 16-bit signal on any named wire of a
//! [`Circuit`](wiresim_core::Circuit) by recursive dependency resolution
//! with memoization: each wire is computed at most once per pass, rules
//! may reference wires defined later in the input, and circular
//! definitions fail with the offending path instead of looping.
//!
//! # Architecture
//!
//! - [`Solver`] owns one evaluation pass: a borrow of the circuit plus the
//!   signal cache. Dropping it discards the cache, which is how override-
//!   and-reevaluate works -- redefine a wire, build a fresh pass.
//! - [`eval::eval_gate`] combines resolved input signals per operator,
//!   masking everything to 16 bits.
//! - [`EvalError`] is the failure taxonomy: undefined wires and cycles,
//!   both deterministic.
//! - [`TraceEntry`] records each computed wire when tracing is enabled.
//!
//! # Example
//!
//! ```
//! use wiresim_core::{Circuit, GateDef, GateOp, Operand};
//! use wiresim_eval::Solver;
//!
//! let mut circuit = Circuit::new();
//! circuit.define(GateDef::constant("x", 123));
//! circuit.define(GateDef::constant("y", 456));
//! circuit.define(GateDef::binary(
//!     "d",
//!     GateOp::And,
//!     Operand::Wire("x".into()),
//!     Operand::Wire("y".into()),
//! ).unwrap());
//!
//! let mut solver = Solver::new(&circuit);
//! assert_eq!(solver.resolve(&"d".into()).unwrap(), 72);
//! ```

pub mod error;
pub mod eval;
pub mod solver;
pub mod trace;

pub use error::EvalError;
pub use eval::{eval_gate, Signal};
pub use solver::{Solver, SolverConfig};
pub use trace::TraceEntry;
