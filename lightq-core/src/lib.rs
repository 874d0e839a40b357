//! Core types and numerical kernels for the LightQ simulator
//!
//! This crate holds the pieces every other LightQ crate builds on:
//! - [`QuantumError`]: validation and not-implemented failures with source location
//! - [`Real`]: the precision abstraction (`f32` or `f64`)
//! - [`linalg`]: threaded inner products, matrix products and transpose
//! - [`util`]: big-endian bit helpers and range partitioning
//! - [`KernelConfig`]: worker count and parallel threshold for the kernels
//!
//! # Example
//! ```
//! use lightq_core::{linalg, KernelConfig};
//! use num_complex::Complex64;
//!
//! let psi = vec![Complex64::new(0.6, 0.0), Complex64::new(0.0, 0.8)];
//! let norm = linalg::conjugated_inner_product(&psi, &psi, &KernelConfig::default()).unwrap();
//! assert!((norm.re - 1.0).abs() < 1e-12);
//! ```

pub mod config;
pub mod error;
pub mod linalg;
pub mod precision;
pub mod util;

// Re-exports for convenience
pub use config::KernelConfig;
pub use error::{QuantumError, Result};
pub use num_complex::{Complex, Complex32, Complex64};
pub use precision::Real;
