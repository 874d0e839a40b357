//! Two-qubit gate kernels
//!
//! Wires are `(control, target)` for the controlled families, so the
//! control-on sector is local pair `(2, 3)`.

use super::single_qubit::{rot_on, rx_on, ry_on, rz_on};
use super::{scale_one, swap_pair, GateIndices};
use lightq_core::{Complex, Real};

/// CNOT: swap |10⟩ and |11⟩
pub fn apply_cnot<T: Real>(data: &mut [Complex<T>], indices: &GateIndices) {
    swap_pair(data, indices, 2, 3);
}

/// SWAP: swap |01⟩ and |10⟩
pub fn apply_swap<T: Real>(data: &mut [Complex<T>], indices: &GateIndices) {
    swap_pair(data, indices, 1, 2);
}

/// CZ: negate |11⟩
pub fn apply_cz<T: Real>(data: &mut [Complex<T>], indices: &GateIndices) {
    scale_one(data, indices, 3, Complex::new(-T::one(), T::zero()));
}

/// Controlled RX
pub fn apply_crx<T: Real>(data: &mut [Complex<T>], indices: &GateIndices, inverse: bool, angle: T) {
    rx_on(data, indices, 2, 3, inverse, angle);
}

/// Controlled RY
pub fn apply_cry<T: Real>(data: &mut [Complex<T>], indices: &GateIndices, inverse: bool, angle: T) {
    ry_on(data, indices, 2, 3, inverse, angle);
}

/// Controlled RZ
pub fn apply_crz<T: Real>(data: &mut [Complex<T>], indices: &GateIndices, inverse: bool, angle: T) {
    rz_on(data, indices, 2, 3, inverse, angle);
}

/// Controlled Rot
pub fn apply_crot<T: Real>(
    data: &mut [Complex<T>],
    indices: &GateIndices,
    inverse: bool,
    phi: T,
    theta: T,
    omega: T,
) {
    rot_on(data, indices, 2, 3, inverse, phi, theta, omega);
}

/// Controlled PhaseShift: |11⟩ picks up e^(iφ)
pub fn apply_controlled_phase_shift<T: Real>(
    data: &mut [Complex<T>],
    indices: &GateIndices,
    inverse: bool,
    angle: T,
) {
    let angle = if inverse { -angle } else { angle };
    scale_one(data, indices, 3, Complex::cis(angle));
}
