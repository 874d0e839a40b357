//! Dense gate matrices
//!
//! Every family in [`GateKind`] has a row-major `2^k × 2^k` matrix over the
//! big-endian local basis of its wires: for wires `[a, b]`, row index
//! `2·bit(a) + bit(b)`. The gate kernels use closed forms instead; these
//! matrices back the generic matrix path and let the closed forms be checked.

use crate::standard::GateKind;
use lightq_core::precision::{imag, one, zero};
use lightq_core::{Complex, QuantumError, Real, Result};

/// Hadamard H = 1/√2 [[1, 1], [1, -1]]
pub fn hadamard<T: Real>() -> Vec<Complex<T>> {
    let h = Complex::new(T::FRAC_1_SQRT_2(), T::zero());
    vec![h, h, h, -h]
}

/// Pauli-X
pub fn pauli_x<T: Real>() -> Vec<Complex<T>> {
    vec![zero(), one(), one(), zero()]
}

/// Pauli-Y
pub fn pauli_y<T: Real>() -> Vec<Complex<T>> {
    vec![zero(), -imag::<T>(), imag(), zero()]
}

/// Pauli-Z
pub fn pauli_z<T: Real>() -> Vec<Complex<T>> {
    vec![one(), zero(), zero(), -one::<T>()]
}

/// S = diag(1, i)
pub fn s_gate<T: Real>() -> Vec<Complex<T>> {
    vec![one(), zero(), zero(), imag()]
}

/// T = diag(1, e^(iπ/4))
pub fn t_gate<T: Real>() -> Vec<Complex<T>> {
    vec![one(), zero(), zero(), Complex::cis(T::FRAC_PI_4())]
}

/// RX(θ) = [[cos θ/2, -i sin θ/2], [-i sin θ/2, cos θ/2]]
pub fn rx<T: Real>(theta: T) -> Vec<Complex<T>> {
    let (s, c) = half_angle(theta);
    let c = Complex::new(c, T::zero());
    let js = Complex::new(T::zero(), -s);
    vec![c, js, js, c]
}

/// RY(θ) = [[cos θ/2, -sin θ/2], [sin θ/2, cos θ/2]]
pub fn ry<T: Real>(theta: T) -> Vec<Complex<T>> {
    let (s, c) = half_angle(theta);
    vec![
        Complex::new(c, T::zero()),
        Complex::new(-s, T::zero()),
        Complex::new(s, T::zero()),
        Complex::new(c, T::zero()),
    ]
}

/// RZ(θ) = diag(e^(-iθ/2), e^(iθ/2))
pub fn rz<T: Real>(theta: T) -> Vec<Complex<T>> {
    let half = theta / T::lit(2.0);
    vec![Complex::cis(-half), zero(), zero(), Complex::cis(half)]
}

/// PhaseShift(φ) = diag(1, e^(iφ))
pub fn phase_shift<T: Real>(phi: T) -> Vec<Complex<T>> {
    vec![one(), zero(), zero(), Complex::cis(phi)]
}

/// Rot(φ, θ, ω) = RZ(ω)·RY(θ)·RZ(φ)
pub fn rot<T: Real>(phi: T, theta: T, omega: T) -> Vec<Complex<T>> {
    let (s, c) = half_angle(theta);
    let two = T::lit(2.0);
    let sum = (phi + omega) / two;
    let diff = (phi - omega) / two;
    vec![
        Complex::cis(-sum) * c,
        -Complex::cis(diff) * s,
        Complex::cis(-diff) * s,
        Complex::cis(sum) * c,
    ]
}

/// Embed a 2×2 block as the control-on sector of a 4×4 matrix
pub fn controlled<T: Real>(block: &[Complex<T>]) -> Vec<Complex<T>> {
    debug_assert_eq!(block.len(), 4);
    let mut matrix = identity(4);
    matrix[2 * 4 + 2] = block[0];
    matrix[2 * 4 + 3] = block[1];
    matrix[3 * 4 + 2] = block[2];
    matrix[3 * 4 + 3] = block[3];
    matrix
}

/// Identity of dimension `dim`
pub fn identity<T: Real>(dim: usize) -> Vec<Complex<T>> {
    let mut matrix = vec![zero(); dim * dim];
    for k in 0..dim {
        matrix[k * dim + k] = one();
    }
    matrix
}

/// Identity with basis states `a` and `b` exchanged
fn permutation<T: Real>(dim: usize, a: usize, b: usize) -> Vec<Complex<T>> {
    let mut matrix = identity(dim);
    matrix[a * dim + a] = zero();
    matrix[b * dim + b] = zero();
    matrix[a * dim + b] = one();
    matrix[b * dim + a] = one();
    matrix
}

/// Conjugate transpose of a square row-major matrix
pub fn adjoint<T: Real>(matrix: &[Complex<T>]) -> Vec<Complex<T>> {
    let dim = (matrix.len() as f64).sqrt() as usize;
    let mut out = vec![zero(); matrix.len()];
    for r in 0..dim {
        for c in 0..dim {
            out[c * dim + r] = matrix[r * dim + c].conj();
        }
    }
    out
}

#[inline]
fn half_angle<T: Real>(theta: T) -> (T, T) {
    (theta / T::lit(2.0)).sin_cos()
}

impl GateKind {
    /// Dense matrix of the gate, or of its inverse when `inverse` is set
    ///
    /// # Errors
    /// Validation error if `params` does not match the family's parameter count.
    ///
    /// # Example
    /// ```
    /// use lightq_gates::GateKind;
    /// use num_complex::Complex64;
    ///
    /// let x: Vec<Complex64> = GateKind::PauliX.matrix(&[], false).unwrap();
    /// assert_eq!(x[1], Complex64::new(1.0, 0.0));
    /// ```
    pub fn matrix<T: Real>(self, params: &[T], inverse: bool) -> Result<Vec<Complex<T>>> {
        if params.len() != self.num_params() {
            return Err(QuantumError::validation(format!(
                "gate {} takes {} parameters, {} were given",
                self.name(),
                self.num_params(),
                params.len()
            )));
        }

        let matrix = match self {
            GateKind::PauliX => pauli_x(),
            GateKind::PauliY => pauli_y(),
            GateKind::PauliZ => pauli_z(),
            GateKind::Hadamard => hadamard(),
            GateKind::S => s_gate(),
            GateKind::T => t_gate(),
            GateKind::RX => rx(params[0]),
            GateKind::RY => ry(params[0]),
            GateKind::RZ => rz(params[0]),
            GateKind::PhaseShift => phase_shift(params[0]),
            GateKind::Rot => rot(params[0], params[1], params[2]),
            GateKind::CNOT => permutation(4, 2, 3),
            GateKind::SWAP => permutation(4, 1, 2),
            GateKind::CZ => controlled(&pauli_z()),
            GateKind::CRX => controlled(&rx(params[0])),
            GateKind::CRY => controlled(&ry(params[0])),
            GateKind::CRZ => controlled(&rz(params[0])),
            GateKind::CRot => controlled(&rot(params[0], params[1], params[2])),
            GateKind::ControlledPhaseShift => controlled(&phase_shift(params[0])),
            GateKind::Toffoli => permutation(8, 6, 7),
            GateKind::CSWAP => permutation(8, 5, 6),
        };

        Ok(if inverse { adjoint(&matrix) } else { matrix })
    }
}
