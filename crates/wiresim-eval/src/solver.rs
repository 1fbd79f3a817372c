//! The memoizing wire solver.
//!
//! A [`Solver`] is one evaluation pass over a fixed [`Circuit`] state. It
//! borrows the circuit for its whole lifetime, so the compiler rejects any
//! `define` call while a pass is alive: overriding a definition forces the
//! pass (and its cache) to be dropped first, which is exactly the
//! whole-cache invalidation the override workflow needs.
//!
//! Resolution is depth-first over an explicit work stack -- the depth of a
//! dependency chain is bounded by heap, not by the call stack. Per-wire
//! state is tri-state: absent from everything (unresolved), in the
//! visiting set (in progress), or in the cache (resolved). Reaching an
//! in-progress wire again is a cycle, reported with the full path; the
//! visiting set is local to one `resolve` call, so a failed resolution
//! leaves no stale in-progress marks behind.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};

use wiresim_core::{Circuit, Operand, WireId};

use crate::error::EvalError;
use crate::eval::{eval_gate, Signal};
use crate::trace::TraceEntry;

/// Configuration for a resolution pass.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Whether to record a [`TraceEntry`] per computed wire.
    pub trace_enabled: bool,
}

/// One evaluation pass: a memoization cache over a borrowed circuit.
pub struct Solver<'c> {
    /// The circuit being evaluated. Immutable for the pass's lifetime.
    circuit: &'c Circuit,
    /// Signals computed so far. Entries are never recomputed or mutated
    /// within the pass.
    cache: HashMap<WireId, Signal>,
    /// Resolution trace (when enabled).
    trace: Option<Vec<TraceEntry>>,
}

impl<'c> Solver<'c> {
    /// Creates a solver with an empty cache and default configuration.
    pub fn new(circuit: &'c Circuit) -> Self {
        Solver::with_config(circuit, SolverConfig::default())
    }

    /// Creates a solver with the given configuration.
    pub fn with_config(circuit: &'c Circuit, config: SolverConfig) -> Self {
        let trace = if config.trace_enabled {
            Some(Vec::new())
        } else {
            None
        };
        Solver {
            circuit,
            cache: HashMap::new(),
            trace,
        }
    }

    /// The circuit this pass evaluates.
    pub fn circuit(&self) -> &'c Circuit {
        self.circuit
    }

    /// Number of wires resolved so far in this pass.
    pub fn resolved_count(&self) -> usize {
        self.cache.len()
    }

    /// The resolution trace, when tracing is enabled.
    pub fn trace(&self) -> Option<&[TraceEntry]> {
        self.trace.as_deref()
    }

    /// Resolves `wire` to its signal, computing and caching every wire in
    /// its dependency chain at most once per pass.
    ///
    /// # Errors
    ///
    /// - [`EvalError::UndefinedWire`] if `wire` or any transitive input
    ///   has no definition.
    /// - [`EvalError::CycleDetected`] if the dependency chain reaches a
    ///   wire already being resolved.
    pub fn resolve(&mut self, wire: &WireId) -> Result<Signal, EvalError> {
        if let Some(&cached) = self.cache.get(wire) {
            return Ok(cached);
        }

        let mut stack: Vec<WireId> = vec![wire.clone()];
        let mut visiting: IndexSet<WireId> = IndexSet::new();

        while let Some(current) = stack.last().cloned() {
            if self.cache.contains_key(&current) {
                // Resolved while expanding another gate's inputs.
                stack.pop();
                continue;
            }

            let def = self.circuit.lookup(&current).ok_or_else(|| {
                EvalError::UndefinedWire {
                    wire: current.clone(),
                }
            })?;
            visiting.insert(current.clone());

            // Expand the first unresolved input; this gate stays on the
            // stack and is revisited once the input has a value.
            let mut blocked_on = None;
            for input in def.input_wires() {
                if self.cache.contains_key(input) {
                    continue;
                }
                if visiting.contains(input) {
                    let start = visiting.get_index_of(input).unwrap_or(0);
                    let path = visiting.iter().skip(start).cloned().collect();
                    return Err(EvalError::CycleDetected { path });
                }
                blocked_on = Some(input.clone());
                break;
            }
            if let Some(input) = blocked_on {
                stack.push(input);
                continue;
            }

            // Every input is resolved; combine them.
            let mut inputs = Vec::with_capacity(def.operands().len());
            for (index, operand) in def.operands().iter().enumerate() {
                let signal = match operand {
                    Operand::Literal(value) => *value,
                    Operand::Wire(input) => {
                        self.cache.get(input).copied().ok_or_else(|| {
                            EvalError::MissingOperand {
                                wire: current.clone(),
                                index,
                            }
                        })?
                    }
                };
                inputs.push(signal);
            }

            let output = eval_gate(&def.op, &inputs, &current)?;
            if let Some(trace) = self.trace.as_mut() {
                trace.push(TraceEntry {
                    wire: current.clone(),
                    rule: def.to_string(),
                    inputs,
                    output,
                });
            }
            self.cache.insert(current.clone(), output);
            visiting.shift_remove(&current);
            stack.pop();
        }

        self.cache
            .get(wire)
            .copied()
            .ok_or_else(|| EvalError::Internal {
                message: format!("wire '{}' left unresolved after evaluation", wire),
            })
    }

    /// Resolves every defined wire, in definition order.
    pub fn resolve_all(&mut self) -> Result<IndexMap<WireId, Signal>, EvalError> {
        let circuit = self.circuit;
        let mut resolved = IndexMap::with_capacity(circuit.len());
        for wire in circuit.wires() {
            resolved.insert(wire.clone(), self.resolve(wire)?);
        }
        Ok(resolved)
    }
}
