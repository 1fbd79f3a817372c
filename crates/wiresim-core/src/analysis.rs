//! Whole-circuit dependency analysis.
//!
//! The solver detects cycles and undefined wires dynamically, one
//! resolution at a time, failing on the first problem it meets. This
//! module is the static counterpart: it walks the complete circuit up
//! front and reports every finding at once, which is what a lint-style
//! `check` pass wants.
//!
//! The dependency graph has one node per wire that is defined or
//! referenced, and one edge per operand reference, pointing from the
//! input wire to the gate it feeds. A topological order of that graph is
//! a valid evaluation order.

use std::collections::HashMap;

use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::circuit::Circuit;
use crate::error::CoreError;
use crate::ident::WireId;

/// Findings from a full-circuit [`analyze`] pass.
///
/// `undefined` holds one `(gate target, missing input)` pair per dangling
/// reference; `loops` holds each combinational loop as its member wires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitReport {
    /// Gates referencing wires that have no definition.
    pub undefined: Vec<(WireId, WireId)>,
    /// Dependency cycles; each entry lists the wires on one loop.
    pub loops: Vec<Vec<WireId>>,
}

impl CircuitReport {
    /// Returns `true` if the circuit has no findings.
    pub fn is_clean(&self) -> bool {
        self.undefined.is_empty() && self.loops.is_empty()
    }

    /// Total count of findings.
    pub fn total(&self) -> usize {
        self.undefined.len() + self.loops.len()
    }
}

/// Builds the wire dependency graph: an edge `a -> b` means gate `b`
/// reads wire `a`. Referenced-but-undefined wires get nodes too.
pub fn dependency_graph(circuit: &Circuit) -> DiGraph<WireId, ()> {
    let mut graph = DiGraph::new();
    let mut nodes: HashMap<WireId, NodeIndex> = HashMap::new();

    let mut node_for = |graph: &mut DiGraph<WireId, ()>, wire: &WireId| -> NodeIndex {
        *nodes
            .entry(wire.clone())
            .or_insert_with(|| graph.add_node(wire.clone()))
    };

    for def in circuit.defs() {
        let target = node_for(&mut graph, &def.target);
        for input in def.input_wires() {
            let source = node_for(&mut graph, input);
            graph.add_edge(source, target, ());
        }
    }

    graph
}

/// Walks the whole circuit and reports every undefined reference and
/// combinational loop. An empty report means the circuit will evaluate
/// without structural errors.
pub fn analyze(circuit: &Circuit) -> CircuitReport {
    let mut undefined = Vec::new();
    for def in circuit.defs() {
        for input in def.input_wires() {
            if !circuit.contains(input) {
                undefined.push((def.target.clone(), input.clone()));
            }
        }
    }

    let graph = dependency_graph(circuit);
    let mut loops = Vec::new();
    for scc in tarjan_scc(&graph) {
        let is_loop = scc.len() > 1 || graph.contains_edge(scc[0], scc[0]);
        if is_loop {
            loops.push(scc.into_iter().map(|idx| graph[idx].clone()).collect());
        }
    }

    CircuitReport { undefined, loops }
}

/// Returns the defined wires in a valid evaluation order: every wire
/// appears after all the wires its gate reads.
///
/// Fails with [`CoreError::CombinationalLoop`] when no such order exists.
pub fn evaluation_order(circuit: &Circuit) -> Result<Vec<WireId>, CoreError> {
    let graph = dependency_graph(circuit);
    let sorted = toposort(&graph, None).map_err(|cycle| {
        let start = cycle.node_id();
        // toposort names one node on a cycle; tarjan recovers its members.
        let members = tarjan_scc(&graph)
            .into_iter()
            .find(|scc| scc.contains(&start))
            .unwrap_or_else(|| vec![start])
            .into_iter()
            .map(|idx| graph[idx].clone())
            .collect();
        CoreError::CombinationalLoop { members }
    })?;

    Ok(sorted
        .into_iter()
        .map(|idx| graph[idx].clone())
        .filter(|wire| circuit.contains(wire))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::GateDef;
    use crate::ops::{GateOp, Operand};

    fn wire(name: &str) -> Operand {
        Operand::Wire(name.into())
    }

    /// x, y consts; d = x AND y; e = x OR y.
    fn diamond() -> Circuit {
        let mut circuit = Circuit::new();
        circuit.define(GateDef::constant("x", 123));
        circuit.define(GateDef::constant("y", 456));
        circuit.define(GateDef::binary("d", GateOp::And, wire("x"), wire("y")).unwrap());
        circuit.define(GateDef::binary("e", GateOp::Or, wire("x"), wire("y")).unwrap());
        circuit
    }

    #[test]
    fn clean_circuit_has_empty_report() {
        let report = analyze(&diamond());
        assert!(report.is_clean());
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn undefined_references_are_reported() {
        let mut circuit = diamond();
        circuit.define(GateDef::binary("z", GateOp::And, wire("d"), wire("ghost")).unwrap());

        let report = analyze(&circuit);
        assert_eq!(
            report.undefined,
            vec![(WireId::from("z"), WireId::from("ghost"))]
        );
        assert!(report.loops.is_empty());
    }

    #[test]
    fn two_wire_loop_is_reported() {
        let mut circuit = Circuit::new();
        circuit.define(GateDef::direct("x", wire("y")));
        circuit.define(GateDef::direct("y", wire("x")));

        let report = analyze(&circuit);
        assert_eq!(report.loops.len(), 1);
        let mut members = report.loops[0].clone();
        members.sort();
        assert_eq!(members, vec![WireId::from("x"), WireId::from("y")]);
    }

    #[test]
    fn self_loop_is_reported() {
        let mut circuit = Circuit::new();
        circuit.define(GateDef::direct("x", wire("x")));

        let report = analyze(&circuit);
        assert_eq!(report.loops, vec![vec![WireId::from("x")]]);
    }

    #[test]
    fn evaluation_order_respects_dependencies() {
        let circuit = diamond();
        let order = evaluation_order(&circuit).unwrap();
        assert_eq!(order.len(), 4);

        let pos = |name: &str| order.iter().position(|w| w.as_str() == name).unwrap();
        assert!(pos("x") < pos("d"));
        assert!(pos("y") < pos("d"));
        assert!(pos("x") < pos("e"));
        assert!(pos("y") < pos("e"));
    }

    #[test]
    fn evaluation_order_skips_undefined_wires() {
        let mut circuit = Circuit::new();
        circuit.define(GateDef::direct("a", wire("missing")));

        let order = evaluation_order(&circuit).unwrap();
        assert_eq!(order, vec![WireId::from("a")]);
    }

    #[test]
    fn evaluation_order_fails_on_loop() {
        let mut circuit = diamond();
        circuit.define(GateDef::direct("p", wire("q")));
        circuit.define(GateDef::direct("q", wire("p")));

        let err = evaluation_order(&circuit).unwrap_err();
        match err {
            CoreError::CombinationalLoop { mut members } => {
                members.sort();
                assert_eq!(members, vec![WireId::from("p"), WireId::from("q")]);
            }
            other => panic!("expected CombinationalLoop, got {:?}", other),
        }
    }

    #[test]
    fn dependency_graph_counts() {
        let graph = dependency_graph(&diamond());
        // x, y, d, e
        assert_eq!(graph.node_count(), 4);
        // two inputs each for d and e
        assert_eq!(graph.edge_count(), 4);
    }
}
