//! Borrowed state-vector view
//!
//! [`StateVector`] wraps an amplitude buffer owned by someone else and applies
//! gates to it in place. It never allocates or frees the buffer; dropping the
//! view leaves the memory untouched.

use crate::kernels::{self, GateIndices};
use lightq_core::util::{dim_size, log2};
use lightq_core::{validate, Complex, Real, Result};
use lightq_gates::{GateKind, Generator};

/// Mutable view over a `2^n` amplitude buffer
///
/// Basis index bits are big-endian over wires: wire 0 is the most significant
/// bit.
///
/// # Example
///
/// ```
/// use lightq_state::StateVector;
/// use num_complex::Complex64;
///
/// let mut data = vec![Complex64::new(0.0, 0.0); 4];
/// data[0] = Complex64::new(1.0, 0.0);
///
/// let mut sv = StateVector::new(&mut data).unwrap();
/// sv.apply_operation("PauliX", &[0], false, &[]).unwrap();
/// assert_eq!(sv.data()[2], Complex64::new(1.0, 0.0));
/// ```
#[derive(Debug)]
pub struct StateVector<'a, T: Real> {
    data: &'a mut [Complex<T>],
    num_qubits: usize,
}

impl<'a, T: Real> StateVector<'a, T> {
    /// Wrap `data` as an `log2(len)`-qubit state
    ///
    /// # Errors
    /// Validation error if the length is not a non-zero power of two.
    pub fn new(data: &'a mut [Complex<T>]) -> Result<Self> {
        validate!(
            data.len().is_power_of_two(),
            "state vector length {} is not a power of two",
            data.len()
        );
        let num_qubits = log2(data.len());
        Ok(Self { data, num_qubits })
    }

    /// Wrap a buffer whose length is already known to be `2^num_qubits`
    pub(crate) fn from_parts(data: &'a mut [Complex<T>], num_qubits: usize) -> Self {
        debug_assert_eq!(data.len(), 1 << num_qubits);
        Self { data, num_qubits }
    }

    /// Number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// Amplitudes
    #[inline]
    pub fn data(&self) -> &[Complex<T>] {
        &*self.data
    }

    /// Mutable amplitudes
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Complex<T>] {
        &mut *self.data
    }

    /// Check that every wire is in range and that no wire repeats
    ///
    /// # Errors
    /// Validation error naming the offending wire.
    pub fn check_wires(&self, wires: &[usize]) -> Result<()> {
        for (k, &wire) in wires.iter().enumerate() {
            validate!(
                wire < self.num_qubits,
                "wire {} is out of range for {} qubits",
                wire,
                self.num_qubits
            );
            validate!(!wires[..k].contains(&wire), "wire {} is given more than once", wire);
        }
        Ok(())
    }

    /// Apply a gate by its boundary name
    ///
    /// # Arguments
    /// * `name` - Gate family name, e.g. "RX" or "CNOT"
    /// * `wires` - Target wires, control wires first
    /// * `inverse` - Apply the conjugate transpose instead
    /// * `params` - Gate parameters, empty for fixed gates
    ///
    /// # Errors
    /// NotImplemented for an unknown name; validation error for a wrong wire
    /// or parameter count, an out-of-range wire or a repeated wire. The buffer
    /// is untouched on error.
    pub fn apply_operation(
        &mut self,
        name: &str,
        wires: &[usize],
        inverse: bool,
        params: &[T],
    ) -> Result<()> {
        let kind: GateKind = name.parse()?;
        self.apply_gate(kind, wires, inverse, params)
    }

    /// Apply a gate from the registry
    ///
    /// # Errors
    /// See [`StateVector::apply_operation`].
    pub fn apply_gate(
        &mut self,
        kind: GateKind,
        wires: &[usize],
        inverse: bool,
        params: &[T],
    ) -> Result<()> {
        kind.check_arity(wires, params)?;
        self.check_wires(wires)?;

        let indices = GateIndices::new(wires, self.num_qubits);
        kernels::apply_gate(self.data, kind, &indices, inverse, params);
        Ok(())
    }

    /// Apply an arbitrary row-major `2^k × 2^k` matrix to `k` wires
    ///
    /// # Errors
    /// Validation error if the matrix is not square with power-of-two side,
    /// if its size does not match the wire count, or if the wires are invalid.
    pub fn apply_matrix(
        &mut self,
        matrix: &[Complex<T>],
        wires: &[usize],
        inverse: bool,
    ) -> Result<()> {
        let matrix_wires = dim_size(matrix.len())?;
        validate!(
            matrix_wires == wires.len(),
            "a {}-wire matrix cannot act on {} wires",
            matrix_wires,
            wires.len()
        );
        self.check_wires(wires)?;

        let indices = GateIndices::new(wires, self.num_qubits);
        kernels::apply_matrix(self.data, matrix, &indices, inverse);
        Ok(())
    }

    /// Apply a sequence of named gates in order
    ///
    /// `params` may be empty, meaning no gate takes parameters. Every entry is
    /// validated before the first gate is applied.
    ///
    /// # Errors
    /// Validation error if the list lengths differ, plus any error of
    /// [`StateVector::apply_operation`].
    pub fn apply_operations<S: AsRef<str>>(
        &mut self,
        names: &[S],
        wires: &[Vec<usize>],
        inverses: &[bool],
        params: &[Vec<T>],
    ) -> Result<()> {
        validate!(
            names.len() == wires.len() && names.len() == inverses.len(),
            "invalid arguments: operations ({}), wires ({}) and inverses ({}) must match",
            names.len(),
            wires.len(),
            inverses.len()
        );
        validate!(
            params.is_empty() || params.len() == names.len(),
            "invalid arguments: number of operations ({}) and parameter lists ({}) must be equal",
            names.len(),
            params.len()
        );

        let no_params: &[T] = &[];
        let mut kinds = Vec::with_capacity(names.len());
        for (k, name) in names.iter().enumerate() {
            let kind: GateKind = name.as_ref().parse()?;
            let p = params.get(k).map_or(no_params, Vec::as_slice);
            kind.check_arity(&wires[k], p)?;
            self.check_wires(&wires[k])?;
            kinds.push(kind);
        }

        for (k, kind) in kinds.into_iter().enumerate() {
            let p = params.get(k).map_or(no_params, Vec::as_slice);
            let indices = GateIndices::new(&wires[k], self.num_qubits);
            kernels::apply_gate(self.data, kind, &indices, inverses[k], p);
        }
        Ok(())
    }

    /// Apply the generator of a parameterised gate family
    ///
    /// # Errors
    /// Validation error for a wrong wire count or invalid wires.
    pub fn apply_generator(&mut self, generator: Generator, wires: &[usize]) -> Result<()> {
        validate!(
            wires.len() == generator.num_wires(),
            "generator {:?} acts on {} wires, {} were given",
            generator,
            generator.num_wires(),
            wires.len()
        );
        self.check_wires(wires)?;

        let indices = GateIndices::new(wires, self.num_qubits);
        kernels::apply_generator(self.data, generator, &indices);
        Ok(())
    }
}
