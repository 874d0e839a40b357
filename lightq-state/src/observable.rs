//! Observables for expectation values and adjoint bra states
//!
//! An [`ObsDatum`] is a tensor product of named component operators, each on
//! its own wires, with an implicit coefficient of 1. Weighted sums are a
//! collection of data reduced by the caller.
//!
//! Components reuse the gate kernels: Pauli and Hadamard terms go through the
//! closed-form gate paths, `Hermitian` terms through the generic matrix path.
//!
//! # Example
//!
//! ```
//! use lightq_core::KernelConfig;
//! use lightq_state::{ObsDatum, StateVectorManaged};
//!
//! let mut state = StateVectorManaged::<f64>::new(2).unwrap();
//! state.apply_operation("PauliX", &[1], false, &[]).unwrap();
//!
//! // ⟨Z ⊗ Z⟩ on |01⟩
//! let zz = ObsDatum::new(&["PauliZ", "PauliZ"], vec![], vec![vec![0], vec![1]]).unwrap();
//! let value = state.expectation(&zz, &KernelConfig::default()).unwrap();
//! assert!((value + 1.0).abs() < 1e-12);
//! ```

use crate::state_vector::StateVector;
use lightq_core::linalg::conjugated_inner_product;
use lightq_core::util::dim_size;
use lightq_core::{validate, Complex, KernelConfig, QuantumError, Real, Result};
use lightq_gates::GateKind;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Component operator of an observable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObsKind {
    /// Pauli X
    PauliX,
    /// Pauli Y
    PauliY,
    /// Pauli Z
    PauliZ,
    /// Hadamard
    Hadamard,
    /// Identity, leaves the state unchanged
    Identity,
    /// Caller-supplied Hermitian matrix on any number of wires
    Hermitian,
}

impl ObsKind {
    const ALL: [ObsKind; 6] = [
        ObsKind::PauliX,
        ObsKind::PauliY,
        ObsKind::PauliZ,
        ObsKind::Hadamard,
        ObsKind::Identity,
        ObsKind::Hermitian,
    ];

    /// Boundary name
    pub fn name(self) -> &'static str {
        match self {
            ObsKind::PauliX => "PauliX",
            ObsKind::PauliY => "PauliY",
            ObsKind::PauliZ => "PauliZ",
            ObsKind::Hadamard => "Hadamard",
            ObsKind::Identity => "Identity",
            ObsKind::Hermitian => "Hermitian",
        }
    }
}

impl FromStr for ObsKind {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<Self> {
        ObsKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                QuantumError::not_implemented(format!("observable '{}' is not supported", s))
            })
    }
}

impl fmt::Display for ObsKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameter list of one observable component
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ObsParam<T: Real> {
    /// No parameters
    #[default]
    None,
    /// Real parameters (accepted for compatibility, unused by the built-in kinds)
    Real(Vec<T>),
    /// Flattened row-major matrix of a `Hermitian` component
    Matrix(Vec<Complex<T>>),
}

/// One component of a tensor-product observable
#[derive(Debug, Clone, PartialEq)]
struct Term<T: Real> {
    kind: ObsKind,
    wires: Vec<usize>,
    matrix: Option<Vec<Complex<T>>>,
}

/// Tensor product of named operators
#[derive(Debug, Clone, PartialEq)]
pub struct ObsDatum<T: Real> {
    terms: Vec<Term<T>>,
}

impl<T: Real> ObsDatum<T> {
    /// Build an observable from parallel lists of names, parameters and wires
    ///
    /// `params` may be shorter than `names`; missing entries mean no
    /// parameters.
    ///
    /// # Errors
    /// NotImplemented for an unknown name. Validation error if `names` and
    /// `wires` differ in length, if a non-`Hermitian` component does not act on
    /// exactly one wire, or if a `Hermitian` matrix is missing or its size does
    /// not match its wires.
    pub fn new<S: AsRef<str>>(
        names: &[S],
        params: Vec<ObsParam<T>>,
        wires: Vec<Vec<usize>>,
    ) -> Result<Self> {
        validate!(
            names.len() == wires.len(),
            "invalid arguments: number of observables ({}) and wires ({}) must be equal",
            names.len(),
            wires.len()
        );
        validate!(
            params.len() <= names.len(),
            "invalid arguments: {} parameter lists for {} observables",
            params.len(),
            names.len()
        );

        let mut params = params.into_iter();
        let mut terms = Vec::with_capacity(names.len());
        for (name, wires) in names.iter().zip(wires) {
            let kind: ObsKind = name.as_ref().parse()?;
            let param = params.next().unwrap_or_default();

            let matrix = match kind {
                ObsKind::Hermitian => {
                    let ObsParam::Matrix(matrix) = param else {
                        return Err(QuantumError::validation(
                            "a Hermitian observable needs a matrix parameter",
                        ));
                    };
                    let matrix_wires = dim_size(matrix.len())?;
                    validate!(
                        matrix_wires == wires.len(),
                        "a {}-wire Hermitian matrix cannot act on {} wires",
                        matrix_wires,
                        wires.len()
                    );
                    Some(matrix)
                }
                _ => {
                    validate!(
                        wires.len() == 1,
                        "observable {} acts on 1 wire, {} were given",
                        kind,
                        wires.len()
                    );
                    if param != ObsParam::None {
                        warn!(
                            observable = kind.name(),
                            "ignoring parameters of a fixed observable"
                        );
                    }
                    None
                }
            };
            terms.push(Term { kind, wires, matrix });
        }
        Ok(Self { terms })
    }

    /// Number of tensor factors
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the observable has no factors (acts as the identity)
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Component kinds, in order
    pub fn kinds(&self) -> impl Iterator<Item = ObsKind> + '_ {
        self.terms.iter().map(|t| t.kind)
    }

    /// Wires of each component, in order
    pub fn wires(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.terms.iter().map(|t| t.wires.as_slice())
    }

    /// Replace `state` with `O|state⟩`
    ///
    /// # Errors
    /// Validation error if a wire is out of range for `state`. Every term is
    /// checked before the first one is applied, so the state is untouched on
    /// error.
    pub fn apply(&self, state: &mut StateVector<'_, T>) -> Result<()> {
        for term in &self.terms {
            state.check_wires(&term.wires)?;
        }
        for term in &self.terms {
            let wires = term.wires.as_slice();
            match (term.kind, &term.matrix) {
                (ObsKind::PauliX, _) => state.apply_gate(GateKind::PauliX, wires, false, &[])?,
                (ObsKind::PauliY, _) => state.apply_gate(GateKind::PauliY, wires, false, &[])?,
                (ObsKind::PauliZ, _) => state.apply_gate(GateKind::PauliZ, wires, false, &[])?,
                (ObsKind::Hadamard, _) => state.apply_gate(GateKind::Hadamard, wires, false, &[])?,
                (ObsKind::Identity, _) => {}
                (ObsKind::Hermitian, Some(matrix)) => state.apply_matrix(matrix, wires, false)?,
                (ObsKind::Hermitian, None) => {
                    return Err(QuantumError::validation("Hermitian observable without a matrix"))
                }
            }
        }
        Ok(())
    }

    /// ⟨ψ|O|ψ⟩, real part only
    ///
    /// # Errors
    /// Validation error if `psi` is not a power-of-two length or a wire is out
    /// of range.
    pub fn expectation(&self, psi: &[Complex<T>], config: &KernelConfig) -> Result<T> {
        let mut transformed = psi.to_vec();
        let mut view = StateVector::new(&mut transformed)?;
        self.apply(&mut view)?;
        Ok(conjugated_inner_product(psi, &transformed, config)?.re)
    }
}
