//! Generic dense-matrix kernel
//!
//! Gathers the `2^k` amplitudes of each group, left-multiplies them by the
//! row-major matrix (or its conjugate transpose) and scatters them back.

use super::GateIndices;
use lightq_core::precision::zero;
use lightq_core::{Complex, Real};

/// Apply `matrix`, or its conjugate transpose when `inverse`, to every group
///
/// `matrix` must be `d × d` with `d = indices.internal.len()`.
pub fn apply_matrix<T: Real>(
    data: &mut [Complex<T>],
    matrix: &[Complex<T>],
    indices: &GateIndices,
    inverse: bool,
) {
    let dim = indices.internal.len();
    debug_assert_eq!(matrix.len(), dim * dim);

    let mut gathered = vec![zero::<T>(); dim];
    for &base in &indices.external {
        for (slot, &offset) in gathered.iter_mut().zip(&indices.internal) {
            *slot = data[base + offset];
        }
        for (row, &offset) in indices.internal.iter().enumerate() {
            let mut acc = zero::<T>();
            for (col, &v) in gathered.iter().enumerate() {
                let m = if inverse {
                    matrix[col * dim + row].conj()
                } else {
                    matrix[row * dim + col]
                };
                acc += m * v;
            }
            data[base + offset] = acc;
        }
    }
}
