//! Resolution trace recording.
//!
//! When tracing is enabled via [`SolverConfig`](crate::SolverConfig), the
//! solver records a [`TraceEntry`] each time a wire's signal is computed
//! (cache hits record nothing). Entries appear in completion order, which
//! is dependency order: a gate's inputs always precede it.

use wiresim_core::WireId;

use crate::eval::Signal;

/// One computed wire in a resolution pass.
#[derive(Debug, Clone)]
pub struct TraceEntry {
    /// The wire that was computed.
    pub wire: WireId,
    /// The defining rule, in rule-text syntax.
    pub rule: String,
    /// Resolved input signals, in operand order.
    pub inputs: Vec<Signal>,
    /// The signal stored in the cache.
    pub output: Signal,
}
