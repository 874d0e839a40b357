//! Three-qubit gate kernels

use super::{swap_pair, GateIndices};
use lightq_core::{Complex, Real};

/// Toffoli on (control, control, target): swap |110⟩ and |111⟩
pub fn apply_toffoli<T: Real>(data: &mut [Complex<T>], indices: &GateIndices) {
    swap_pair(data, indices, 6, 7);
}

/// CSWAP on (control, a, b): swap |101⟩ and |110⟩
pub fn apply_cswap<T: Real>(data: &mut [Complex<T>], indices: &GateIndices) {
    swap_pair(data, indices, 5, 6);
}
