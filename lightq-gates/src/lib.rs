//! Gate families for the LightQ simulator
//!
//! This crate names the gates the state-vector kernels understand and carries
//! their dense matrices and generators:
//! - [`GateKind`]: the 21 recognised families with arity and parameter count
//! - [`matrices`]: row-major matrices in the big-endian local basis
//! - [`Generator`]: Hermitian generator and scaling factor of each
//!   single-parameter family, used by the adjoint Jacobian
//!
//! # Example
//! ```
//! use lightq_gates::{GateKind, Generator};
//!
//! let kind: GateKind = "CRY".parse().unwrap();
//! assert_eq!(kind.num_wires(), 2);
//! assert_eq!(kind.generator(), Some(Generator::ControlledPauliY));
//! assert_eq!(kind.generator().unwrap().scaling_factor::<f64>(), -0.5);
//! ```

pub mod generator;
pub mod matrices;
pub mod standard;

pub use generator::Generator;
pub use standard::GateKind;
