//! Circuit: the registry of gate definitions.
//!
//! [`Circuit`] owns every [`GateDef`], keyed by target wire. It is the
//! single mutation entry point for the data model: rules enter through
//! [`Circuit::define`] in any order relative to their dependencies --
//! forward references are legal and resolved only at evaluation time.
//!
//! Each wire has at most one active definition. Defining a wire that
//! already has one replaces it (an override) and hands the old definition
//! back to the caller; any evaluation caches built against the previous
//! definition must be discarded before the next pass (the solver's borrow
//! of the circuit makes holding one across a `define` impossible).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::gate::GateDef;
use crate::ident::WireId;

/// All gate definitions of one circuit, in definition order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Circuit {
    gates: IndexMap<WireId, GateDef>,
}

impl Circuit {
    /// Creates an empty circuit.
    pub fn new() -> Self {
        Circuit {
            gates: IndexMap::new(),
        }
    }

    /// Inserts or replaces the definition for `def.target`.
    ///
    /// Always succeeds: operands are not validated against the current
    /// definition set, since they may name wires defined later. Returns
    /// the replaced definition when this call overrides an existing one.
    pub fn define(&mut self, def: GateDef) -> Option<GateDef> {
        self.gates.insert(def.target.clone(), def)
    }

    /// Looks up the definition feeding `wire`.
    pub fn lookup(&self, wire: &WireId) -> Option<&GateDef> {
        self.gates.get(wire)
    }

    /// Like [`lookup`](Self::lookup), but a missing definition is an error.
    pub fn require(&self, wire: &WireId) -> Result<&GateDef, CoreError> {
        self.lookup(wire).ok_or_else(|| CoreError::WireNotFound {
            wire: wire.clone(),
        })
    }

    /// Returns `true` if `wire` has a definition.
    pub fn contains(&self, wire: &WireId) -> bool {
        self.gates.contains_key(wire)
    }

    /// Number of defined wires.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Returns `true` if no wires are defined.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Defined wires, in definition order.
    pub fn wires(&self) -> impl Iterator<Item = &WireId> {
        self.gates.keys()
    }

    /// All definitions, in definition order.
    pub fn defs(&self) -> impl Iterator<Item = &GateDef> {
        self.gates.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Operand;

    #[test]
    fn define_and_lookup() {
        let mut circuit = Circuit::new();
        assert!(circuit.is_empty());

        assert!(circuit.define(GateDef::constant("x", 123)).is_none());
        assert_eq!(circuit.len(), 1);
        assert!(circuit.contains(&"x".into()));

        let def = circuit.lookup(&"x".into()).unwrap();
        assert_eq!(def.to_string(), "123 -> x");
        assert!(circuit.lookup(&"y".into()).is_none());
    }

    #[test]
    fn require_errors_on_missing_wires() {
        let mut circuit = Circuit::new();
        circuit.define(GateDef::constant("x", 1));

        assert!(circuit.require(&"x".into()).is_ok());
        assert_eq!(
            circuit.require(&"y".into()).unwrap_err(),
            crate::CoreError::WireNotFound { wire: "y".into() }
        );
    }

    #[test]
    fn define_replaces_and_returns_prior() {
        let mut circuit = Circuit::new();
        circuit.define(GateDef::constant("b", 1));

        let replaced = circuit.define(GateDef::constant("b", 2)).unwrap();
        assert_eq!(replaced.to_string(), "1 -> b");

        // Still one definition for b, now the new one.
        assert_eq!(circuit.len(), 1);
        assert_eq!(circuit.lookup(&"b".into()).unwrap().to_string(), "2 -> b");
    }

    #[test]
    fn forward_references_are_accepted() {
        let mut circuit = Circuit::new();
        // a references b before b exists.
        circuit.define(GateDef::direct("a", Operand::Wire("b".into())));
        assert!(circuit.contains(&"a".into()));
        assert!(!circuit.contains(&"b".into()));

        circuit.define(GateDef::constant("b", 5));
        assert!(circuit.contains(&"b".into()));
    }

    #[test]
    fn wires_iterate_in_definition_order() {
        let mut circuit = Circuit::new();
        circuit.define(GateDef::constant("y", 456));
        circuit.define(GateDef::constant("x", 123));
        circuit.define(GateDef::constant("a", 0));

        let order: Vec<_> = circuit.wires().map(WireId::as_str).collect();
        assert_eq!(order, vec!["y", "x", "a"]);

        // Overriding keeps the original position.
        circuit.define(GateDef::constant("y", 7));
        let order: Vec<_> = circuit.wires().map(WireId::as_str).collect();
        assert_eq!(order, vec!["y", "x", "a"]);
    }

    #[test]
    fn serde_roundtrip() {
        let mut circuit = Circuit::new();
        circuit.define(GateDef::constant("x", 123));
        circuit.define(GateDef::not("h", Operand::Wire("x".into())));

        let json = serde_json::to_string(&circuit).unwrap();
        let back: Circuit = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), circuit.len());
        assert_eq!(
            back.lookup(&"h".into()).unwrap().to_string(),
            "NOT x -> h"
        );
    }
}
