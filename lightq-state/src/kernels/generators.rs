//! Generator kernels
//!
//! Apply the Hermitian generator of a parameterised gate in place. The
//! projector forms are not unitary, so these are kept apart from the gate
//! kernels.

use super::single_qubit::{apply_pauli_x, apply_pauli_y, apply_pauli_z, pauli_y_on};
use super::{scale_one, swap_pair, GateIndices};
use lightq_core::precision::zero;
use lightq_core::{Complex, Real};
use lightq_gates::Generator;

/// Apply `generator` to the wires described by `indices`
pub fn apply_generator<T: Real>(
    data: &mut [Complex<T>],
    generator: Generator,
    indices: &GateIndices,
) {
    let minus_one = Complex::new(-T::one(), T::zero());
    match generator {
        Generator::PauliX => apply_pauli_x(data, indices),
        Generator::PauliY => apply_pauli_y(data, indices),
        Generator::PauliZ => apply_pauli_z(data, indices),
        Generator::ProjectorOne => clear(data, indices, &[0]),
        Generator::ControlledPauliX => {
            clear(data, indices, &[0, 1]);
            swap_pair(data, indices, 2, 3);
        }
        Generator::ControlledPauliY => {
            clear(data, indices, &[0, 1]);
            pauli_y_on(data, indices, 2, 3);
        }
        Generator::ControlledPauliZ => {
            clear(data, indices, &[0, 1]);
            scale_one(data, indices, 3, minus_one);
        }
        Generator::ControlledProjectorOne => clear(data, indices, &[0, 1, 2]),
    }
}

/// Zero the listed local amplitudes of every group
fn clear<T: Real>(data: &mut [Complex<T>], indices: &GateIndices, locals: &[usize]) {
    for &base in &indices.external {
        for &k in locals {
            data[base + indices.internal[k]] = zero();
        }
    }
}
