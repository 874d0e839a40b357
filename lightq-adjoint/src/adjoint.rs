//! Adjoint-method Jacobian
//!
//! One forward pass and one backward sweep give the derivative of every
//! observable with respect to every trainable parameter:
//!
//! 1. Evolve the initial state through the circuit to |ψ⟩.
//! 2. For each observable `O_i`, form the bra state |λ_i⟩ = O_i|ψ⟩.
//! 3. Walk the operations backwards. Before un-applying operation `U(θ)`,
//!    copy the ket to |μ⟩ and apply the generator: |μ⟩ = G|ψ_p⟩. Then
//!    `∂⟨O_i⟩/∂θ = 2·s·Re⟨λ_i| i·G |ψ_p⟩ = -2·s·Im⟨λ_i|μ⟩`, where `s` is the
//!    generator's scaling factor. Finally un-apply `U` from the ket and from
//!    every bra.
//!
//! Memory is one ket, one scratch vector and one bra per observable, no
//! matter how many parameters the circuit has.

use crate::config::AdjointConfig;
use crate::ops_data::OpsData;
use lightq_core::linalg::conjugated_inner_product;
use lightq_core::{not_implemented, validate, Complex, Real, Result};
use lightq_state::{ObsDatum, StateVector};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Adjoint-method Jacobian calculator
///
/// # Example
///
/// ```
/// use lightq_adjoint::{AdjointJacobian, OpsData};
/// use lightq_state::ObsDatum;
/// use num_complex::Complex64;
///
/// let theta = 0.4f64;
/// let psi = vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
/// let obs = ObsDatum::new(&["PauliZ"], vec![], vec![vec![0]]).unwrap();
/// let ops = OpsData::from_names(&["RX"], vec![vec![theta]], vec![vec![0]]).unwrap();
///
/// let jac = AdjointJacobian::default().jacobian(&psi, &[obs], &ops, &[0]).unwrap();
/// assert!((jac[0] + theta.sin()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdjointJacobian {
    config: AdjointConfig,
}

impl AdjointJacobian {
    /// Create a calculator with the given configuration
    pub fn new(config: AdjointConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &AdjointConfig {
        &self.config
    }

    /// Accumulate the Jacobian of `observables` with respect to the trainable
    /// parameters of `ops` into `jac`
    ///
    /// `jac` is row-major (observable × trainable parameter) and is only ever
    /// added to, so the caller zeroes it. Column `j` belongs to the `j`-th
    /// smallest index of `trainable_params`.
    ///
    /// # Arguments
    /// * `psi` - Initial state, or the final state when `apply_operations` is off
    /// * `jac` - Output buffer of `observables.len() * num_params` entries
    /// * `observables` - One bra state is built per observable
    /// * `ops` - The circuit
    /// * `trainable_params` - Circuit parameter indices to differentiate
    /// * `num_params` - Number of trainable parameters
    ///
    /// # Errors
    /// Validation error for mismatched sizes, out-of-range wires or parameter
    /// indices, or a repeated trainable index. NotImplemented if a trainable
    /// parameter belongs to a gate without a single generator (`Rot`, `CRot`).
    /// Nothing is written to `jac` on error.
    pub fn adjoint_jacobian<T: Real>(
        &self,
        psi: &[Complex<T>],
        jac: &mut [T],
        observables: &[ObsDatum<T>],
        ops: &OpsData<T>,
        trainable_params: &[usize],
        num_params: usize,
    ) -> Result<()> {
        self.config.validate()?;
        validate!(
            trainable_params.len() == num_params,
            "{} trainable parameter indices given for {} parameters",
            trainable_params.len(),
            num_params
        );
        validate!(
            jac.len() == observables.len() * num_params,
            "jacobian length {} does not match {} observables x {} parameters",
            jac.len(),
            observables.len(),
            num_params
        );

        let columns = trainable_columns(ops, trainable_params)?;

        let mut ket = psi.to_vec();
        let mut view = StateVector::new(&mut ket)?;
        let num_qubits = view.num_qubits();
        for wires in ops.wires() {
            view.check_wires(wires)?;
        }

        debug!(
            num_qubits,
            observables = observables.len(),
            operations = ops.len(),
            trainable = num_params,
            "starting adjoint jacobian"
        );

        if self.config.apply_operations {
            for (op, &kind) in ops.kinds().iter().enumerate() {
                view.apply_gate(kind, &ops.wires()[op], ops.inverses()[op], &ops.params()[op])?;
            }
        }

        if num_params == 0 || observables.is_empty() {
            return Ok(());
        }

        let mut bras: Vec<Vec<Complex<T>>> = observables
            .par_iter()
            .map(|obs| -> Result<Vec<Complex<T>>> {
                let mut bra = ket.clone();
                obs.apply(&mut StateVector::new(&mut bra)?)?;
                Ok(bra)
            })
            .collect::<Result<_>>()?;

        let kernel = self.config.kernel;
        for op in (0..ops.len()).rev() {
            let kind = ops.kinds()[op];
            let wires = &ops.wires()[op];
            let params = &ops.params()[op];
            let inverse = ops.inverses()[op];

            let column = match kind.generator() {
                Some(generator) => columns[ops.param_offset(op)].map(|col| (generator, col)),
                None => None,
            };
            let mut mu = column.map(|_| ket.clone());

            StateVector::new(&mut ket)?.apply_gate(kind, wires, !inverse, params)?;

            if let (Some((generator, col)), Some(mu)) = (column, mu.as_mut()) {
                StateVector::new(mu)?.apply_generator(generator, wires)?;

                let scaling: T = generator.scaling_factor();
                let scaling = if inverse { -scaling } else { scaling };
                let factor = T::lit(-2.0) * scaling;
                let mu = &*mu;

                bras.par_iter()
                    .zip(jac.par_chunks_mut(num_params))
                    .try_for_each(|(bra, row)| -> Result<()> {
                        let overlap = conjugated_inner_product(bra, mu, &kernel)?;
                        row[col] += factor * overlap.im;
                        Ok(())
                    })?;
            }

            bras.par_iter_mut().try_for_each(|bra| {
                StateVector::new(bra)?.apply_gate(kind, wires, !inverse, params)
            })?;

            trace!(op, gate = kind.name(), trainable = column.is_some(), "un-applied operation");
        }

        debug!("finished adjoint jacobian");
        Ok(())
    }

    /// Compute the Jacobian into a freshly zeroed buffer
    ///
    /// # Errors
    /// As [`AdjointJacobian::adjoint_jacobian`].
    pub fn jacobian<T: Real>(
        &self,
        psi: &[Complex<T>],
        observables: &[ObsDatum<T>],
        ops: &OpsData<T>,
        trainable_params: &[usize],
    ) -> Result<Vec<T>> {
        let num_params = trainable_params.len();
        let mut jac = vec![T::zero(); observables.len() * num_params];
        self.adjoint_jacobian(psi, &mut jac, observables, ops, trainable_params, num_params)?;
        Ok(jac)
    }
}

/// Map each circuit parameter index to its Jacobian column, if trainable
fn trainable_columns<T: Real>(
    ops: &OpsData<T>,
    trainable_params: &[usize],
) -> Result<Vec<Option<usize>>> {
    let mut sorted = trainable_params.to_vec();
    sorted.sort_unstable();

    let mut columns = vec![None; ops.num_params()];
    for (col, &param) in sorted.iter().enumerate() {
        validate!(
            param < ops.num_params(),
            "trainable parameter {} is out of range for {} circuit parameters",
            param,
            ops.num_params()
        );
        validate!(
            columns[param].is_none(),
            "trainable parameter {} is given more than once",
            param
        );
        columns[param] = Some(col);
    }

    for (op, &kind) in ops.kinds().iter().enumerate() {
        let first = ops.param_offset(op);
        let trainable = (first..first + kind.num_params()).any(|p| columns[p].is_some());
        if trainable && kind.generator().is_none() {
            not_implemented!(
                "the adjoint method does not support differentiating {} (operation {})",
                kind,
                op
            );
        }
    }
    Ok(columns)
}
