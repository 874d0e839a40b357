//! Circuit description for adjoint differentiation

use lightq_core::{validate, Real, Result};
use lightq_gates::GateKind;

/// Ordered list of gates with their parameters, wires and inverse flags
///
/// Parameters are numbered in circuit order, one index per real parameter:
/// `[RX(a), CNOT, Rot(b, c, d)]` numbers `a` as 0 and `b, c, d` as 1, 2, 3.
///
/// # Example
///
/// ```
/// use lightq_adjoint::OpsData;
///
/// let ops = OpsData::from_names(
///     &["RX", "CNOT", "RY"],
///     vec![vec![0.1], vec![], vec![0.2]],
///     vec![vec![0], vec![0, 1], vec![1]],
/// )
/// .unwrap();
/// assert_eq!(ops.len(), 3);
/// assert_eq!(ops.num_params(), 2);
/// assert_eq!(ops.param_offset(2), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OpsData<T: Real> {
    kinds: Vec<GateKind>,
    params: Vec<Vec<T>>,
    wires: Vec<Vec<usize>>,
    inverses: Vec<bool>,
    param_offsets: Vec<usize>,
    num_params: usize,
}

impl<T: Real> OpsData<T> {
    /// Build from parallel lists
    ///
    /// # Errors
    /// Validation error if the lists differ in length or a gate gets the wrong
    /// number of wires or parameters; NotImplemented for an unknown name.
    pub fn new<S: AsRef<str>>(
        names: &[S],
        params: Vec<Vec<T>>,
        wires: Vec<Vec<usize>>,
        inverses: Vec<bool>,
    ) -> Result<Self> {
        validate!(
            names.len() == params.len(),
            "invalid arguments: number of operations ({}) and parameter lists ({}) must be equal",
            names.len(),
            params.len()
        );
        validate!(
            names.len() == wires.len() && names.len() == inverses.len(),
            "invalid arguments: operations ({}), wires ({}) and inverses ({}) must match",
            names.len(),
            wires.len(),
            inverses.len()
        );

        let mut kinds = Vec::with_capacity(names.len());
        let mut param_offsets = Vec::with_capacity(names.len());
        let mut num_params = 0;
        for (k, name) in names.iter().enumerate() {
            let kind: GateKind = name.as_ref().parse()?;
            kind.check_arity(&wires[k], &params[k])?;
            kinds.push(kind);
            param_offsets.push(num_params);
            num_params += params[k].len();
        }

        Ok(Self {
            kinds,
            params,
            wires,
            inverses,
            param_offsets,
            num_params,
        })
    }

    /// Build with no inverted gates
    ///
    /// # Errors
    /// As [`OpsData::new`].
    pub fn from_names<S: AsRef<str>>(
        names: &[S],
        params: Vec<Vec<T>>,
        wires: Vec<Vec<usize>>,
    ) -> Result<Self> {
        let inverses = vec![false; names.len()];
        Self::new(names, params, wires, inverses)
    }

    /// Number of operations
    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether the circuit is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Gate families, in circuit order
    pub fn kinds(&self) -> &[GateKind] {
        &self.kinds
    }

    /// Boundary names, in circuit order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.iter().map(|k| k.name())
    }

    /// Parameters of each operation
    pub fn params(&self) -> &[Vec<T>] {
        &self.params
    }

    /// Wires of each operation
    pub fn wires(&self) -> &[Vec<usize>] {
        &self.wires
    }

    /// Inverse flag of each operation
    pub fn inverses(&self) -> &[bool] {
        &self.inverses
    }

    /// Total number of real parameters in the circuit
    #[inline]
    pub fn num_params(&self) -> usize {
        self.num_params
    }

    /// Index of the first parameter of operation `op`
    #[inline]
    pub fn param_offset(&self, op: usize) -> usize {
        self.param_offsets[op]
    }

    /// Number of operations that take parameters
    pub fn num_par_ops(&self) -> usize {
        self.kinds.iter().filter(|k| k.is_parametric()).count()
    }

    /// Number of operations without parameters
    pub fn num_nonpar_ops(&self) -> usize {
        self.len() - self.num_par_ops()
    }
}
