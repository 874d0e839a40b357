//! Registry of the recognised gate families
//!
//! Gate names are plain strings only at the crate boundary. Once parsed into a
//! [`GateKind`], arity, parameter count, matrices and generators are resolved
//! by matching on the variant.

use crate::generator::Generator;
use lightq_core::{QuantumError, Result};
use std::fmt;
use std::str::FromStr;

/// A named gate family
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    // Single-qubit gates
    /// Pauli-X (bit flip)
    PauliX,
    /// Pauli-Y
    PauliY,
    /// Pauli-Z (phase flip)
    PauliZ,
    /// Hadamard
    Hadamard,
    /// S = diag(1, i)
    S,
    /// T = diag(1, e^(iπ/4))
    T,
    /// RX(θ) = exp(-iθX/2)
    RX,
    /// RY(θ) = exp(-iθY/2)
    RY,
    /// RZ(θ) = exp(-iθZ/2)
    RZ,
    /// PhaseShift(φ) = diag(1, e^(iφ))
    PhaseShift,
    /// Rot(φ, θ, ω) = RZ(ω)·RY(θ)·RZ(φ)
    Rot,

    // Two-qubit gates
    /// Controlled-NOT, wires are (control, target)
    CNOT,
    /// SWAP
    SWAP,
    /// Controlled-Z
    CZ,
    /// Controlled RX
    CRX,
    /// Controlled RY
    CRY,
    /// Controlled RZ
    CRZ,
    /// Controlled Rot
    CRot,
    /// Controlled PhaseShift, diag(1, 1, 1, e^(iφ))
    ControlledPhaseShift,

    // Three-qubit gates
    /// Doubly-controlled NOT, wires are (control, control, target)
    Toffoli,
    /// Controlled SWAP (Fredkin), wires are (control, a, b)
    CSWAP,
}

impl GateKind {
    /// Every recognised family, in registry order
    pub const ALL: [GateKind; 21] = [
        GateKind::PauliX,
        GateKind::PauliY,
        GateKind::PauliZ,
        GateKind::Hadamard,
        GateKind::S,
        GateKind::T,
        GateKind::RX,
        GateKind::RY,
        GateKind::RZ,
        GateKind::PhaseShift,
        GateKind::Rot,
        GateKind::CNOT,
        GateKind::SWAP,
        GateKind::CZ,
        GateKind::CRX,
        GateKind::CRY,
        GateKind::CRZ,
        GateKind::CRot,
        GateKind::ControlledPhaseShift,
        GateKind::Toffoli,
        GateKind::CSWAP,
    ];

    /// Boundary name of the family (e.g. "RX", "CNOT")
    pub fn name(self) -> &'static str {
        match self {
            GateKind::PauliX => "PauliX",
            GateKind::PauliY => "PauliY",
            GateKind::PauliZ => "PauliZ",
            GateKind::Hadamard => "Hadamard",
            GateKind::S => "S",
            GateKind::T => "T",
            GateKind::RX => "RX",
            GateKind::RY => "RY",
            GateKind::RZ => "RZ",
            GateKind::PhaseShift => "PhaseShift",
            GateKind::Rot => "Rot",
            GateKind::CNOT => "CNOT",
            GateKind::SWAP => "SWAP",
            GateKind::CZ => "CZ",
            GateKind::CRX => "CRX",
            GateKind::CRY => "CRY",
            GateKind::CRZ => "CRZ",
            GateKind::CRot => "CRot",
            GateKind::ControlledPhaseShift => "ControlledPhaseShift",
            GateKind::Toffoli => "Toffoli",
            GateKind::CSWAP => "CSWAP",
        }
    }

    /// Number of wires the gate acts on
    pub fn num_wires(self) -> usize {
        match self {
            GateKind::PauliX
            | GateKind::PauliY
            | GateKind::PauliZ
            | GateKind::Hadamard
            | GateKind::S
            | GateKind::T
            | GateKind::RX
            | GateKind::RY
            | GateKind::RZ
            | GateKind::PhaseShift
            | GateKind::Rot => 1,
            GateKind::CNOT
            | GateKind::SWAP
            | GateKind::CZ
            | GateKind::CRX
            | GateKind::CRY
            | GateKind::CRZ
            | GateKind::CRot
            | GateKind::ControlledPhaseShift => 2,
            GateKind::Toffoli | GateKind::CSWAP => 3,
        }
    }

    /// Number of real parameters the gate takes
    pub fn num_params(self) -> usize {
        match self {
            GateKind::RX
            | GateKind::RY
            | GateKind::RZ
            | GateKind::PhaseShift
            | GateKind::CRX
            | GateKind::CRY
            | GateKind::CRZ
            | GateKind::ControlledPhaseShift => 1,
            GateKind::Rot | GateKind::CRot => 3,
            _ => 0,
        }
    }

    /// Whether the gate takes parameters
    #[inline]
    pub fn is_parametric(self) -> bool {
        self.num_params() > 0
    }

    /// Generator used to differentiate the gate with respect to its parameter
    ///
    /// Returns `None` for fixed gates and for gates whose parameters have no
    /// single generator (`Rot`, `CRot`).
    pub fn generator(self) -> Option<Generator> {
        match self {
            GateKind::RX => Some(Generator::PauliX),
            GateKind::RY => Some(Generator::PauliY),
            GateKind::RZ => Some(Generator::PauliZ),
            GateKind::PhaseShift => Some(Generator::ProjectorOne),
            GateKind::CRX => Some(Generator::ControlledPauliX),
            GateKind::CRY => Some(Generator::ControlledPauliY),
            GateKind::CRZ => Some(Generator::ControlledPauliZ),
            GateKind::ControlledPhaseShift => Some(Generator::ControlledProjectorOne),
            _ => None,
        }
    }

    /// Check `wires` and `params` against the family's arity
    ///
    /// # Errors
    /// Validation error when either count is wrong.
    pub fn check_arity<P>(self, wires: &[usize], params: &[P]) -> Result<()> {
        if wires.len() != self.num_wires() {
            return Err(QuantumError::validation(format!(
                "gate {} acts on {} wires, {} were given",
                self.name(),
                self.num_wires(),
                wires.len()
            )));
        }
        if params.len() != self.num_params() {
            return Err(QuantumError::validation(format!(
                "gate {} takes {} parameters, {} were given",
                self.name(),
                self.num_params(),
                params.len()
            )));
        }
        Ok(())
    }
}

impl FromStr for GateKind {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<Self> {
        GateKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| QuantumError::not_implemented(format!("gate '{}' is not supported", s)))
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
