//! Hermitian generators of the parameterised gates
//!
//! A parameterised gate `U(θ)` with generator `G` and scaling factor `s`
//! satisfies `dU/dθ = i·s·G·U(θ)`. Both are fixed per gate family, so they are
//! modelled as an enum rather than looked up by name.

use lightq_core::precision::{one, zero};
use lightq_core::{Complex, Real};

/// Generator of a single-parameter gate family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    /// Pauli-X on the gate's wire (RX)
    PauliX,
    /// Pauli-Y on the gate's wire (RY)
    PauliY,
    /// Pauli-Z on the gate's wire (RZ)
    PauliZ,
    /// |1⟩⟨1| on the gate's wire (PhaseShift)
    ProjectorOne,
    /// |1⟩⟨1| ⊗ X on (control, target) (CRX)
    ControlledPauliX,
    /// |1⟩⟨1| ⊗ Y on (control, target) (CRY)
    ControlledPauliY,
    /// |1⟩⟨1| ⊗ Z on (control, target) (CRZ)
    ControlledPauliZ,
    /// |11⟩⟨11| on (control, target) (ControlledPhaseShift)
    ControlledProjectorOne,
}

impl Generator {
    /// Scaling factor `s` in `dU/dθ = i·s·G·U`
    pub fn scaling_factor<T: Real>(self) -> T {
        match self {
            Generator::PauliX
            | Generator::PauliY
            | Generator::PauliZ
            | Generator::ControlledPauliX
            | Generator::ControlledPauliY
            | Generator::ControlledPauliZ => T::lit(-0.5),
            Generator::ProjectorOne | Generator::ControlledProjectorOne => T::one(),
        }
    }

    /// Number of wires the generator acts on
    pub fn num_wires(self) -> usize {
        match self {
            Generator::PauliX
            | Generator::PauliY
            | Generator::PauliZ
            | Generator::ProjectorOne => 1,
            _ => 2,
        }
    }

    /// Dense row-major generator matrix
    pub fn matrix<T: Real>(self) -> Vec<Complex<T>> {
        let o = one::<T>();
        let z = zero::<T>();
        let i = Complex::new(T::zero(), T::one());

        match self {
            Generator::PauliX => vec![z, o, o, z],
            Generator::PauliY => vec![z, -i, i, z],
            Generator::PauliZ => vec![o, z, z, -o],
            Generator::ProjectorOne => vec![z, z, z, o],
            Generator::ControlledPauliX => controlled_block([z, o, o, z]),
            Generator::ControlledPauliY => controlled_block([z, -i, i, z]),
            Generator::ControlledPauliZ => controlled_block([o, z, z, -o]),
            Generator::ControlledProjectorOne => controlled_block([z, z, z, o]),
        }
    }
}

/// |1⟩⟨1| ⊗ block, as a 4×4 row-major matrix
fn controlled_block<T: Real>(block: [Complex<T>; 4]) -> Vec<Complex<T>> {
    let mut matrix = vec![zero::<T>(); 16];
    matrix[2 * 4 + 2] = block[0];
    matrix[2 * 4 + 3] = block[1];
    matrix[3 * 4 + 2] = block[2];
    matrix[3 * 4 + 3] = block[3];
    matrix
}
