//! Owned state vector with aligned memory
//!
//! [`StateVectorManaged`] allocates its amplitude buffer and hands out
//! [`StateVector`] views for all gate math, so there is one implementation of
//! every kernel.

use crate::observable::ObsDatum;
use crate::state_vector::StateVector;
use lightq_core::precision::{one, zero};
use lightq_core::{validate, Complex, KernelConfig, QuantumError, Real, Result};
use lightq_gates::GateKind;
use std::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use std::fmt;
use std::ptr::NonNull;
use tracing::debug;

/// Buffer alignment (one cache line, enough for AVX-512 loads)
const ALIGNMENT: usize = 64;

/// Largest register the managed buffer will allocate
pub const MAX_QUBITS: usize = 30;

/// State vector that owns a cache-line aligned amplitude buffer
///
/// # Example
///
/// ```
/// use lightq_state::StateVectorManaged;
///
/// let mut state = StateVectorManaged::<f64>::new(2).unwrap();
/// state.apply_operation("Hadamard", &[0], false, &[]).unwrap();
/// state.apply_operation("CNOT", &[0, 1], false, &[]).unwrap();
/// assert!((state.data()[3].re - 0.5f64.sqrt()).abs() < 1e-12);
/// ```
pub struct StateVectorManaged<T: Real> {
    num_qubits: usize,
    data: NonNull<Complex<T>>,
    layout: Layout,
}

impl<T: Real> StateVectorManaged<T> {
    /// Allocate an `num_qubits` register in |0…0⟩
    ///
    /// # Errors
    /// Validation error if `num_qubits` exceeds [`MAX_QUBITS`] or the buffer
    /// cannot be allocated.
    pub fn new(num_qubits: usize) -> Result<Self> {
        let (data, layout) = allocate::<T>(num_qubits)?;
        let mut state = Self {
            num_qubits,
            data,
            layout,
        };
        state.reset();
        debug!(num_qubits, bytes = layout.size(), "allocated managed state vector");
        Ok(state)
    }

    /// Allocate a register holding a copy of `amplitudes`
    ///
    /// # Errors
    /// Validation error if the length is not a power of two.
    pub fn from_amplitudes(amplitudes: &[Complex<T>]) -> Result<Self> {
        validate!(
            amplitudes.len().is_power_of_two(),
            "state vector length {} is not a power of two",
            amplitudes.len()
        );
        let num_qubits = amplitudes.len().trailing_zeros() as usize;
        let (data, layout) = allocate::<T>(num_qubits)?;
        let mut state = Self {
            num_qubits,
            data,
            layout,
        };
        state.data_mut().copy_from_slice(amplitudes);
        Ok(state)
    }

    /// Number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        1 << self.num_qubits
    }

    /// Amplitudes
    #[inline]
    pub fn data(&self) -> &[Complex<T>] {
        // SAFETY: `data` points to `dimension()` initialised values owned by self
        unsafe { std::slice::from_raw_parts(self.data.as_ptr(), self.dimension()) }
    }

    /// Mutable amplitudes
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Complex<T>] {
        // SAFETY: as in `data`, and `&mut self` guarantees exclusive access
        unsafe { std::slice::from_raw_parts_mut(self.data.as_ptr(), self.dimension()) }
    }

    /// Whether the buffer start is cache-line aligned
    #[inline]
    pub fn is_aligned(&self) -> bool {
        (self.data.as_ptr() as usize) % ALIGNMENT == 0
    }

    /// Borrow the buffer as a [`StateVector`]
    pub fn view(&mut self) -> StateVector<'_, T> {
        let num_qubits = self.num_qubits;
        StateVector::from_parts(self.data_mut(), num_qubits)
    }

    /// Restore |0…0⟩ without reallocating
    pub fn reset(&mut self) {
        let data = self.data_mut();
        data.fill(zero());
        data[0] = one();
    }

    /// Reallocate for `num_qubits` qubits and reset to |0…0⟩
    ///
    /// Any view taken before the call is invalidated (the borrow checker
    /// enforces this).
    ///
    /// # Errors
    /// As [`StateVectorManaged::new`]; the old buffer is kept on error.
    pub fn resize(&mut self, num_qubits: usize) -> Result<()> {
        let (data, layout) = allocate::<T>(num_qubits)?;
        // SAFETY: the old buffer was allocated with `self.layout` and no view
        // can outlive this `&mut self` borrow
        unsafe { dealloc(self.data.as_ptr() as *mut u8, self.layout) };

        let old = self.num_qubits;
        self.num_qubits = num_qubits;
        self.data = data;
        self.layout = layout;
        self.reset();
        debug!(from = old, to = num_qubits, "resized managed state vector");
        Ok(())
    }

    /// Overwrite the amplitudes with `amplitudes` of the same length
    ///
    /// # Errors
    /// Validation error on a length mismatch.
    pub fn update_data(&mut self, amplitudes: &[Complex<T>]) -> Result<()> {
        validate!(
            amplitudes.len() == self.dimension(),
            "new data length {} does not match the state length {}",
            amplitudes.len(),
            self.dimension()
        );
        self.data_mut().copy_from_slice(amplitudes);
        Ok(())
    }

    /// See [`StateVector::apply_operation`]
    pub fn apply_operation(
        &mut self,
        name: &str,
        wires: &[usize],
        inverse: bool,
        params: &[T],
    ) -> Result<()> {
        self.view().apply_operation(name, wires, inverse, params)
    }

    /// See [`StateVector::apply_gate`]
    pub fn apply_gate(
        &mut self,
        kind: GateKind,
        wires: &[usize],
        inverse: bool,
        params: &[T],
    ) -> Result<()> {
        self.view().apply_gate(kind, wires, inverse, params)
    }

    /// See [`StateVector::apply_matrix`]
    pub fn apply_matrix(
        &mut self,
        matrix: &[Complex<T>],
        wires: &[usize],
        inverse: bool,
    ) -> Result<()> {
        self.view().apply_matrix(matrix, wires, inverse)
    }

    /// See [`StateVector::apply_operations`]
    pub fn apply_operations<S: AsRef<str>>(
        &mut self,
        names: &[S],
        wires: &[Vec<usize>],
        inverses: &[bool],
        params: &[Vec<T>],
    ) -> Result<()> {
        self.view().apply_operations(names, wires, inverses, params)
    }

    /// Expectation value of `observable` in this state
    pub fn expectation(&self, observable: &ObsDatum<T>, config: &KernelConfig) -> Result<T> {
        observable.expectation(self.data(), config)
    }
}

fn allocate<T: Real>(num_qubits: usize) -> Result<(NonNull<Complex<T>>, Layout)> {
    validate!(
        num_qubits <= MAX_QUBITS,
        "{} qubits exceeds the managed limit of {}",
        num_qubits,
        MAX_QUBITS
    );
    let size = (1usize << num_qubits) * std::mem::size_of::<Complex<T>>();
    let layout = Layout::from_size_align(size, ALIGNMENT.max(std::mem::align_of::<Complex<T>>()))
        .map_err(|_| QuantumError::validation(format!("invalid layout for {} bytes", size)))?;

    // SAFETY: `layout` has a non-zero size; the buffer is zeroed before use,
    // and all-zero bits are 0.0 for both float types
    unsafe {
        let ptr = alloc(layout) as *mut Complex<T>;
        match NonNull::new(ptr) {
            Some(data) => {
                std::ptr::write_bytes(data.as_ptr(), 0, 1usize << num_qubits);
                Ok((data, layout))
            }
            None => Err(QuantumError::validation(format!("failed to allocate {} bytes", size))),
        }
    }
}

impl<T: Real> Clone for StateVectorManaged<T> {
    fn clone(&self) -> Self {
        match Self::from_amplitudes(self.data()) {
            Ok(state) => state,
            Err(_) => handle_alloc_error(self.layout),
        }
    }
}

impl<T: Real> fmt::Debug for StateVectorManaged<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateVectorManaged")
            .field("num_qubits", &self.num_qubits)
            .field("data", &self.data())
            .finish()
    }
}

impl<T: Real> Drop for StateVectorManaged<T> {
    fn drop(&mut self) {
        // SAFETY: allocated in `allocate` with exactly this layout
        unsafe {
            dealloc(self.data.as_ptr() as *mut u8, self.layout);
        }
    }
}

// SAFETY: the buffer is uniquely owned and only reachable through &self/&mut self
unsafe impl<T: Real> Send for StateVectorManaged<T> {}
unsafe impl<T: Real> Sync for StateVectorManaged<T> {}
