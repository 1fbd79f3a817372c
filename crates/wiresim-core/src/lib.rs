pub mod analysis;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod ident;
pub mod ops;

// Re-export commonly used types
pub use analysis::{dependency_graph, evaluation_order, CircuitReport};
pub use circuit::Circuit;
pub use error::CoreError;
pub use gate::GateDef;
pub use ident::WireId;
pub use ops::{GateOp, Operand};
