//! Gate application kernels
//!
//! Every kernel works on the same addressing scheme. For a gate on wires `W`
//! the `2^n` amplitudes split into `2^(n-|W|)` groups; a group is one
//! external base (all bits of `W` cleared) plus each of the `2^|W|` internal
//! offsets. Offsets are ordered big-endian over `W`, so local index `k` of a
//! two-wire gate on `[a, b]` has `bit(a) = k >> 1` and `bit(b) = k & 1`.
//!
//! The kernels assume wires and parameters were validated by the caller
//! ([`StateVector`](crate::StateVector) does this) and never fail.

pub mod generators;
pub mod matrix;
pub mod single_qubit;
pub mod three_qubit;
pub mod two_qubit;

use lightq_core::util::max_decimal_for_qubit;
use lightq_core::{Complex, Real};
use lightq_gates::GateKind;
use smallvec::SmallVec;

pub use generators::apply_generator;
pub use matrix::apply_matrix;

/// Offsets of the amplitudes inside one group, for the given wires
///
/// # Panics
/// Wires are not checked. A wire `>= num_qubits` overflows the bit
/// computation, which panics in debug builds and yields meaningless offsets in
/// release builds. Validate with [`StateVector::check_wires`](crate::StateVector::check_wires)
/// first.
///
/// # Example
/// ```
/// use lightq_state::kernels::generate_bit_patterns;
///
/// // wires [0, 2] of a 3-qubit register: bits 4 and 1
/// assert_eq!(generate_bit_patterns(&[0, 2], 3).as_slice(), &[0, 1, 4, 5]);
/// ```
pub fn generate_bit_patterns(wires: &[usize], num_qubits: usize) -> SmallVec<[usize; 8]> {
    let mut indices: SmallVec<[usize; 8]> = SmallVec::with_capacity(1 << wires.len());
    indices.push(0);
    for &wire in wires.iter().rev() {
        let value = max_decimal_for_qubit(wire, num_qubits);
        for k in 0..indices.len() {
            let shifted = indices[k] + value;
            indices.push(shifted);
        }
    }
    indices
}

/// Wires of the register not listed in `wires`, in ascending order
pub fn indices_after_exclusion(wires: &[usize], num_qubits: usize) -> Vec<usize> {
    (0..num_qubits).filter(|w| !wires.contains(w)).collect()
}

/// Internal offsets and external bases of one gate application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateIndices {
    /// `2^|W|` offsets within a group, big-endian over the gate wires
    pub internal: SmallVec<[usize; 8]>,
    /// `2^(n-|W|)` group bases
    pub external: Vec<usize>,
}

impl GateIndices {
    /// Compute the addressing for a gate on `wires` of an `num_qubits` register
    ///
    /// # Panics
    /// As [`generate_bit_patterns`]: out-of-range wires are not checked.
    pub fn new(wires: &[usize], num_qubits: usize) -> Self {
        let internal = generate_bit_patterns(wires, num_qubits);
        let others = indices_after_exclusion(wires, num_qubits);
        let external = generate_bit_patterns(&others, num_qubits).into_vec();
        Self { internal, external }
    }
}

/// Apply `update` to amplitude pair `(lo, hi)` of every group
#[inline]
pub(crate) fn update_pair<T, F>(
    data: &mut [Complex<T>],
    indices: &GateIndices,
    lo: usize,
    hi: usize,
    mut update: F,
) where
    T: Real,
    F: FnMut(Complex<T>, Complex<T>) -> (Complex<T>, Complex<T>),
{
    let (a, b) = (indices.internal[lo], indices.internal[hi]);
    for &base in &indices.external {
        let (v0, v1) = update(data[base + a], data[base + b]);
        data[base + a] = v0;
        data[base + b] = v1;
    }
}

/// Exchange amplitudes `lo` and `hi` of every group
#[inline]
pub(crate) fn swap_pair<T: Real>(
    data: &mut [Complex<T>],
    indices: &GateIndices,
    lo: usize,
    hi: usize,
) {
    let (a, b) = (indices.internal[lo], indices.internal[hi]);
    for &base in &indices.external {
        data.swap(base + a, base + b);
    }
}

/// Multiply amplitude `k` of every group by `factor`
#[inline]
pub(crate) fn scale_one<T: Real>(
    data: &mut [Complex<T>],
    indices: &GateIndices,
    k: usize,
    factor: Complex<T>,
) {
    let offset = indices.internal[k];
    for &base in &indices.external {
        data[base + offset] *= factor;
    }
}

/// Left-multiply pair `(lo, hi)` of every group by a row-major 2×2 matrix
#[inline]
pub(crate) fn apply_2x2<T: Real>(
    data: &mut [Complex<T>],
    indices: &GateIndices,
    lo: usize,
    hi: usize,
    m: &[Complex<T>],
) {
    let (m00, m01, m10, m11) = (m[0], m[1], m[2], m[3]);
    update_pair(data, indices, lo, hi, |v0, v1| (m00 * v0 + m01 * v1, m10 * v0 + m11 * v1));
}

/// Apply a named gate through its closed-form kernel
///
/// `params` must hold exactly `kind.num_params()` values.
pub fn apply_gate<T: Real>(
    data: &mut [Complex<T>],
    kind: GateKind,
    indices: &GateIndices,
    inverse: bool,
    params: &[T],
) {
    use self::single_qubit as sq;
    use self::three_qubit as tq;
    use self::two_qubit as dq;

    match kind {
        GateKind::PauliX => sq::apply_pauli_x(data, indices),
        GateKind::PauliY => sq::apply_pauli_y(data, indices),
        GateKind::PauliZ => sq::apply_pauli_z(data, indices),
        GateKind::Hadamard => sq::apply_hadamard(data, indices),
        GateKind::S => sq::apply_s(data, indices, inverse),
        GateKind::T => sq::apply_t(data, indices, inverse),
        GateKind::RX => sq::apply_rx(data, indices, inverse, params[0]),
        GateKind::RY => sq::apply_ry(data, indices, inverse, params[0]),
        GateKind::RZ => sq::apply_rz(data, indices, inverse, params[0]),
        GateKind::PhaseShift => sq::apply_phase_shift(data, indices, inverse, params[0]),
        GateKind::Rot => sq::apply_rot(data, indices, inverse, params[0], params[1], params[2]),
        GateKind::CNOT => dq::apply_cnot(data, indices),
        GateKind::SWAP => dq::apply_swap(data, indices),
        GateKind::CZ => dq::apply_cz(data, indices),
        GateKind::CRX => dq::apply_crx(data, indices, inverse, params[0]),
        GateKind::CRY => dq::apply_cry(data, indices, inverse, params[0]),
        GateKind::CRZ => dq::apply_crz(data, indices, inverse, params[0]),
        GateKind::CRot => dq::apply_crot(data, indices, inverse, params[0], params[1], params[2]),
        GateKind::ControlledPhaseShift => {
            dq::apply_controlled_phase_shift(data, indices, inverse, params[0])
        }
        GateKind::Toffoli => tq::apply_toffoli(data, indices),
        GateKind::CSWAP => tq::apply_cswap(data, indices),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_patterns_single_wire() {
        assert_eq!(generate_bit_patterns(&[0], 2).as_slice(), &[0, 2]);
        assert_eq!(generate_bit_patterns(&[1], 2).as_slice(), &[0, 1]);
    }

    #[test]
    fn test_bit_patterns_are_big_endian_over_wires() {
        // [control, target] = [1, 0] on 2 qubits: control bit 1, target bit 2
        assert_eq!(generate_bit_patterns(&[1, 0], 2).as_slice(), &[0, 2, 1, 3]);
        assert_eq!(generate_bit_patterns(&[0, 1, 2], 3).as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_out_of_range_wire_panics_in_debug() {
        generate_bit_patterns(&[3], 2);
    }

    #[test]
    fn test_indices_after_exclusion() {
        assert_eq!(indices_after_exclusion(&[1], 3), vec![0, 2]);
        assert_eq!(indices_after_exclusion(&[0, 1, 2], 3), Vec::<usize>::new());
    }

    #[test]
    fn test_gate_indices_cover_register_once() {
        let indices = GateIndices::new(&[2, 0], 4);
        assert_eq!(indices.internal.len(), 4);
        assert_eq!(indices.external.len(), 4);

        let mut seen = vec![false; 16];
        for &base in &indices.external {
            for &offset in &indices.internal {
                assert!(!seen[base + offset]);
                seen[base + offset] = true;
            }
        }
        assert!(seen.into_iter().all(|s| s));
    }

    #[test]
    fn test_gate_on_all_wires_has_single_group() {
        let indices = GateIndices::new(&[0, 1], 2);
        assert_eq!(indices.external, vec![0]);
    }
}
