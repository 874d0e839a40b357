//! Single-qubit gate kernels
//!
//! Closed forms over amplitude pair `(0, 1)` of each group. The rotation
//! helpers take the pair explicitly so the controlled kernels can reuse them
//! on pair `(2, 3)`.

use super::{apply_2x2, scale_one, swap_pair, update_pair, GateIndices};
use lightq_core::precision::imag;
use lightq_core::{Complex, Real};
use lightq_gates::matrices;

/// Pauli-X: swap the pair
pub fn apply_pauli_x<T: Real>(data: &mut [Complex<T>], indices: &GateIndices) {
    swap_pair(data, indices, 0, 1);
}

/// Pauli-Y: (v0, v1) → (-i·v1, i·v0)
pub fn apply_pauli_y<T: Real>(data: &mut [Complex<T>], indices: &GateIndices) {
    pauli_y_on(data, indices, 0, 1);
}

/// Pauli-Z: negate v1
pub fn apply_pauli_z<T: Real>(data: &mut [Complex<T>], indices: &GateIndices) {
    scale_one(data, indices, 1, Complex::new(-T::one(), T::zero()));
}

/// Hadamard
pub fn apply_hadamard<T: Real>(data: &mut [Complex<T>], indices: &GateIndices) {
    let r = T::FRAC_1_SQRT_2();
    update_pair(data, indices, 0, 1, |v0, v1| ((v0 + v1) * r, (v0 - v1) * r));
}

/// S, or S† when `inverse`
pub fn apply_s<T: Real>(data: &mut [Complex<T>], indices: &GateIndices, inverse: bool) {
    let factor = if inverse { -imag::<T>() } else { imag() };
    scale_one(data, indices, 1, factor);
}

/// T, or T† when `inverse`
pub fn apply_t<T: Real>(data: &mut [Complex<T>], indices: &GateIndices, inverse: bool) {
    let angle = if inverse { -T::FRAC_PI_4() } else { T::FRAC_PI_4() };
    scale_one(data, indices, 1, Complex::cis(angle));
}

/// RX(θ), or RX(-θ) when `inverse`
pub fn apply_rx<T: Real>(data: &mut [Complex<T>], indices: &GateIndices, inverse: bool, angle: T) {
    rx_on(data, indices, 0, 1, inverse, angle);
}

/// RY(θ), or RY(-θ) when `inverse`
pub fn apply_ry<T: Real>(data: &mut [Complex<T>], indices: &GateIndices, inverse: bool, angle: T) {
    ry_on(data, indices, 0, 1, inverse, angle);
}

/// RZ(θ), or RZ(-θ) when `inverse`
pub fn apply_rz<T: Real>(data: &mut [Complex<T>], indices: &GateIndices, inverse: bool, angle: T) {
    rz_on(data, indices, 0, 1, inverse, angle);
}

/// PhaseShift(φ), or PhaseShift(-φ) when `inverse`
pub fn apply_phase_shift<T: Real>(
    data: &mut [Complex<T>],
    indices: &GateIndices,
    inverse: bool,
    angle: T,
) {
    let angle = if inverse { -angle } else { angle };
    scale_one(data, indices, 1, Complex::cis(angle));
}

/// Rot(φ, θ, ω) = RZ(ω)·RY(θ)·RZ(φ), or its adjoint when `inverse`
pub fn apply_rot<T: Real>(
    data: &mut [Complex<T>],
    indices: &GateIndices,
    inverse: bool,
    phi: T,
    theta: T,
    omega: T,
) {
    rot_on(data, indices, 0, 1, inverse, phi, theta, omega);
}

#[inline]
pub(crate) fn pauli_y_on<T: Real>(
    data: &mut [Complex<T>],
    indices: &GateIndices,
    lo: usize,
    hi: usize,
) {
    let i = imag::<T>();
    update_pair(data, indices, lo, hi, |v0, v1| (-i * v1, i * v0));
}

#[inline]
fn half_angle<T: Real>(inverse: bool, angle: T) -> (T, T) {
    let (s, c) = (angle / T::lit(2.0)).sin_cos();
    (if inverse { -s } else { s }, c)
}

#[inline]
pub(crate) fn rx_on<T: Real>(
    data: &mut [Complex<T>],
    indices: &GateIndices,
    lo: usize,
    hi: usize,
    inverse: bool,
    angle: T,
) {
    let (s, c) = half_angle(inverse, angle);
    let js = Complex::new(T::zero(), -s);
    update_pair(data, indices, lo, hi, |v0, v1| (v0 * c + js * v1, js * v0 + v1 * c));
}

#[inline]
pub(crate) fn ry_on<T: Real>(
    data: &mut [Complex<T>],
    indices: &GateIndices,
    lo: usize,
    hi: usize,
    inverse: bool,
    angle: T,
) {
    let (s, c) = half_angle(inverse, angle);
    update_pair(data, indices, lo, hi, |v0, v1| (v0 * c - v1 * s, v0 * s + v1 * c));
}

#[inline]
pub(crate) fn rz_on<T: Real>(
    data: &mut [Complex<T>],
    indices: &GateIndices,
    lo: usize,
    hi: usize,
    inverse: bool,
    angle: T,
) {
    let half = angle / T::lit(2.0);
    let half = if inverse { -half } else { half };
    let (first, second) = (Complex::cis(-half), Complex::cis(half));
    update_pair(data, indices, lo, hi, |v0, v1| (v0 * first, v1 * second));
}

#[allow(clippy::too_many_arguments)]
#[inline]
pub(crate) fn rot_on<T: Real>(
    data: &mut [Complex<T>],
    indices: &GateIndices,
    lo: usize,
    hi: usize,
    inverse: bool,
    phi: T,
    theta: T,
    omega: T,
) {
    let m = matrices::rot(phi, theta, omega);
    let m = if inverse { matrices::adjoint(&m) } else { m };
    apply_2x2(data, indices, lo, hi, &m);
}
