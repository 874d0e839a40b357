//! State-vector engine for the LightQ simulator
//!
//! This crate applies gates and observables to dense amplitude buffers:
//! - [`StateVector`]: a borrowed view over caller-owned memory
//! - [`StateVectorManaged`]: an owned, cache-line aligned buffer that
//!   delegates all gate math to a [`StateVector`] view
//! - [`kernels`]: closed-form gate kernels, the generic matrix kernel and the
//!   generator kernels used by adjoint differentiation
//! - [`ObsDatum`]: tensor-product observables and their expectation values
//!
//! Basis indices are big-endian over wires: wire 0 is the most significant
//! bit of an index.
//!
//! # Example
//!
//! ```
//! use lightq_state::StateVector;
//! use num_complex::Complex64;
//!
//! let mut data = vec![Complex64::new(0.0, 0.0); 8];
//! data[0] = Complex64::new(1.0, 0.0);
//!
//! let mut sv = StateVector::new(&mut data).unwrap();
//! sv.apply_operation("RY", &[2], false, &[std::f64::consts::PI]).unwrap();
//! assert!((data[1].re - 1.0).abs() < 1e-12);
//! ```

pub mod kernels;
pub mod managed;
pub mod observable;
pub mod state_vector;

pub use kernels::GateIndices;
pub use managed::StateVectorManaged;
pub use observable::{ObsDatum, ObsKind, ObsParam};
pub use state_vector::StateVector;
