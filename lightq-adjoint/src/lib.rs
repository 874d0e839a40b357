//! Adjoint-method differentiation for LightQ circuits
//!
//! Computes `∂⟨O_i⟩/∂θ_j` for every observable `O_i` and trainable parameter
//! `θ_j` of a circuit with one forward pass and one backward sweep. The cost
//! does not grow with the number of parameters the way finite differences or
//! parameter shifts do, and no computation graph is recorded.
//!
//! - [`OpsData`]: the circuit as parallel lists of gates, parameters, wires
//!   and inverse flags
//! - [`AdjointJacobian`]: the backward sweep, configured by [`AdjointConfig`]
//!
//! # Example
//!
//! ```
//! use lightq_adjoint::{AdjointJacobian, OpsData};
//! use lightq_state::{ObsDatum, StateVectorManaged};
//!
//! let (a, b) = (0.3f64, -0.8f64);
//! let psi = StateVectorManaged::<f64>::new(2).unwrap();
//!
//! let ops = OpsData::from_names(
//!     &["RX", "CNOT", "RY"],
//!     vec![vec![a], vec![], vec![b]],
//!     vec![vec![0], vec![0, 1], vec![1]],
//! )
//! .unwrap();
//! let z1 = ObsDatum::new(&["PauliZ"], vec![], vec![vec![1]]).unwrap();
//!
//! // ⟨Z1⟩ = cos(a)·cos(b)
//! let jac = AdjointJacobian::default().jacobian(psi.data(), &[z1], &ops, &[0, 1]).unwrap();
//! assert!((jac[0] + a.sin() * b.cos()).abs() < 1e-12);
//! assert!((jac[1] + a.cos() * b.sin()).abs() < 1e-12);
//! ```

pub mod adjoint;
pub mod config;
pub mod ops_data;

pub use adjoint::AdjointJacobian;
pub use config::AdjointConfig;
pub use ops_data::OpsData;
