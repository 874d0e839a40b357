//! End-to-end checks of the adjoint Jacobian against closed forms and
//! central finite differences

use approx::assert_relative_eq;
use lightq_adjoint::{AdjointConfig, AdjointJacobian, OpsData};
use lightq_core::{Complex, KernelConfig};
use lightq_state::{ObsDatum, ObsParam, StateVectorManaged};
use num_complex::Complex64;
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI};

const PARAMS: [f64; 3] = [PI, FRAC_PI_2, PI / 3.0];

fn zero_state(num_qubits: usize) -> Vec<Complex64> {
    StateVectorManaged::<f64>::new(num_qubits).unwrap().data().to_vec()
}

fn obs(name: &str, wire: usize) -> ObsDatum<f64> {
    ObsDatum::new(&[name], vec![], vec![vec![wire]]).unwrap()
}

/// A circuit kept as plain lists so it can be re-run with shifted parameters
struct Circuit {
    names: Vec<&'static str>,
    params: Vec<Vec<f64>>,
    wires: Vec<Vec<usize>>,
    inverses: Vec<bool>,
}

impl Circuit {
    fn ops(&self) -> OpsData<f64> {
        OpsData::new(
            &self.names,
            self.params.clone(),
            self.wires.clone(),
            self.inverses.clone(),
        )
        .unwrap()
    }

    fn expval(&self, num_qubits: usize, params: &[Vec<f64>], observable: &ObsDatum<f64>) -> f64 {
        let mut state = StateVectorManaged::<f64>::new(num_qubits).unwrap();
        state
            .apply_operations(&self.names, &self.wires, &self.inverses, params)
            .unwrap();
        state.expectation(observable, &KernelConfig::default()).unwrap()
    }

    /// Central difference with respect to circuit parameter `index`
    fn finite_difference(
        &self,
        num_qubits: usize,
        index: usize,
        observable: &ObsDatum<f64>,
    ) -> f64 {
        let h = 1e-6;
        let mut seen = 0;
        let mut plus = self.params.clone();
        let mut minus = self.params.clone();
        'outer: for (op, p) in self.params.iter().enumerate() {
            for k in 0..p.len() {
                if seen == index {
                    plus[op][k] += h;
                    minus[op][k] -= h;
                    break 'outer;
                }
                seen += 1;
            }
        }
        let forward = self.expval(num_qubits, &plus, observable);
        let backward = self.expval(num_qubits, &minus, observable);
        (forward - backward) / (2.0 * h)
    }
}

#[test]
fn test_rx_gradient() {
    let adj = AdjointJacobian::default();
    for &p in &PARAMS {
        let ops = OpsData::from_names(&["RX"], vec![vec![p]], vec![vec![0]]).unwrap();
        let mut jacobian = vec![0.0; 1];
        adj.adjoint_jacobian(&zero_state(1), &mut jacobian, &[obs("PauliZ", 0)], &ops, &[0], 1)
            .unwrap();
        assert_relative_eq!(jacobian[0], -p.sin(), epsilon = 1e-7);
    }
}

#[test]
fn test_ry_gradient() {
    let adj = AdjointJacobian::default();
    for &p in &PARAMS {
        let ops = OpsData::from_names(&["RY"], vec![vec![p]], vec![vec![0]]).unwrap();
        let jacobian = adj.jacobian(&zero_state(1), &[obs("PauliX", 0)], &ops, &[0]).unwrap();
        assert_relative_eq!(jacobian[0], p.cos(), epsilon = 1e-7);
    }
}

#[test]
fn test_single_rx_gradient_one_expval_per_wire() {
    let adj = AdjointJacobian::default();
    let observables = [obs("PauliZ", 0), obs("PauliZ", 1), obs("PauliZ", 2)];
    let ops = OpsData::from_names(&["RX"], vec![vec![PARAMS[0]]], vec![vec![0]]).unwrap();

    let jacobian = adj.jacobian(&zero_state(3), &observables, &ops, &[0]).unwrap();
    assert_eq!(jacobian.len(), 3);
    assert_relative_eq!(jacobian[0], -PARAMS[0].sin(), epsilon = 1e-7);
    assert_relative_eq!(jacobian[1], 0.0, epsilon = 1e-12);
    assert_relative_eq!(jacobian[2], 0.0, epsilon = 1e-12);
}

#[test]
fn test_multiple_rx_gradient_is_diagonal() {
    let adj = AdjointJacobian::default();
    let observables = [obs("PauliZ", 0), obs("PauliZ", 1), obs("PauliZ", 2)];
    let ops = OpsData::from_names(
        &["RX", "RX", "RX"],
        PARAMS.iter().map(|&p| vec![p]).collect(),
        vec![vec![0], vec![1], vec![2]],
    )
    .unwrap();

    let jacobian = adj.jacobian(&zero_state(3), &observables, &ops, &[0, 1, 2]).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { -PARAMS[i].sin() } else { 0.0 };
            assert_relative_eq!(jacobian[i * 3 + j], expected, epsilon = 1e-7);
        }
    }
}

#[test]
fn test_multiple_rx_gradient_tensor_expval() {
    let adj = AdjointJacobian::default();
    let zzz = ObsDatum::new(
        &["PauliZ", "PauliZ", "PauliZ"],
        vec![],
        vec![vec![0], vec![1], vec![2]],
    )
    .unwrap();
    let ops = OpsData::from_names(
        &["RX", "RX", "RX"],
        PARAMS.iter().map(|&p| vec![p]).collect(),
        vec![vec![0], vec![1], vec![2]],
    )
    .unwrap();

    let jacobian = adj.jacobian(&zero_state(3), &[zzz], &ops, &[0, 1, 2]).unwrap();
    // ⟨Z⊗Z⊗Z⟩ = Π cos θ_k
    for i in 0..3 {
        let others: f64 = (0..3).filter(|&j| j != i).map(|j| PARAMS[j].cos()).product();
        assert_relative_eq!(jacobian[i], -PARAMS[i].sin() * others, epsilon = 1e-7);
    }
}

#[test]
fn test_untrainable_parameters_are_skipped() {
    let adj = AdjointJacobian::default();
    let observables = [obs("PauliZ", 0), obs("PauliZ", 1)];
    let ops = OpsData::from_names(
        &["RX", "RY"],
        vec![vec![0.3], vec![0.9]],
        vec![vec![0], vec![1]],
    )
    .unwrap();

    let jacobian = adj.jacobian(&zero_state(2), &observables, &ops, &[1]).unwrap();
    assert_eq!(jacobian.len(), 2);
    assert_relative_eq!(jacobian[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(jacobian[1], -(0.9f64).sin(), epsilon = 1e-12);
}

#[test]
fn test_entangled_circuit_matches_finite_differences() {
    let circuit = Circuit {
        names: vec![
            "Hadamard",
            "RX",
            "CNOT",
            "CRY",
            "PhaseShift",
            "CRZ",
            "RZ",
            "ControlledPhaseShift",
            "CRX",
            "RY",
        ],
        params: vec![
            vec![],
            vec![0.41],
            vec![],
            vec![-1.3],
            vec![0.77],
            vec![2.05],
            vec![-0.6],
            vec![1.2],
            vec![0.35],
            vec![-2.4],
        ],
        wires: vec![
            vec![2],
            vec![0],
            vec![0, 1],
            vec![2, 0],
            vec![1],
            vec![1, 2],
            vec![0],
            vec![0, 2],
            vec![2, 1],
            vec![1],
        ],
        inverses: vec![false, false, false, true, false, false, true, false, false, false],
    };
    let observables = vec![
        obs("PauliX", 0),
        ObsDatum::new(&["PauliY", "PauliZ"], vec![], vec![vec![1], vec![2]]).unwrap(),
        obs("Hadamard", 2),
    ];
    let ops = circuit.ops();
    let trainable: Vec<usize> = (0..ops.num_params()).collect();

    let jacobian = AdjointJacobian::default()
        .jacobian(&zero_state(3), &observables, &ops, &trainable)
        .unwrap();

    for (i, observable) in observables.iter().enumerate() {
        for j in 0..trainable.len() {
            let numeric = circuit.finite_difference(3, j, observable);
            assert_relative_eq!(jacobian[i * trainable.len() + j], numeric, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_hermitian_observable() {
    // Z ⊗ X written out as a 4×4 Hermitian matrix
    let c = |re: f64| Complex64::new(re, 0.0);
    #[rustfmt::skip]
    let zx = vec![
        c(0.0), c(1.0), c(0.0), c(0.0),
        c(1.0), c(0.0), c(0.0), c(0.0),
        c(0.0), c(0.0), c(0.0), c(-1.0),
        c(0.0), c(0.0), c(-1.0), c(0.0),
    ];
    let hermitian =
        ObsDatum::new(&["Hermitian"], vec![ObsParam::Matrix(zx)], vec![vec![0, 1]]).unwrap();
    let named = ObsDatum::new(&["PauliZ", "PauliX"], vec![], vec![vec![0], vec![1]]).unwrap();

    let ops = OpsData::from_names(
        &["RX", "RY"],
        vec![vec![0.5], vec![1.1]],
        vec![vec![0], vec![1]],
    )
    .unwrap();
    let jacobian = AdjointJacobian::default()
        .jacobian(&zero_state(2), &[hermitian, named], &ops, &[0, 1])
        .unwrap();

    assert_relative_eq!(jacobian[0], jacobian[2], epsilon = 1e-12);
    assert_relative_eq!(jacobian[1], jacobian[3], epsilon = 1e-12);
    // ⟨Z0 X1⟩ = cos(a)·sin(b)
    assert_relative_eq!(jacobian[0], -(0.5f64).sin() * (1.1f64).sin(), epsilon = 1e-12);
    assert_relative_eq!(jacobian[1], (0.5f64).cos() * (1.1f64).cos(), epsilon = 1e-12);
}

#[test]
fn test_rot_with_fixed_parameters_is_allowed() {
    let ops = OpsData::from_names(
        &["Rot", "RY"],
        vec![vec![0.2, 0.4, -0.1], vec![0.6]],
        vec![vec![0], vec![0]],
    )
    .unwrap();
    let adj = AdjointJacobian::default();

    let jacobian = adj.jacobian(&zero_state(1), &[obs("PauliZ", 0)], &ops, &[3]).unwrap();
    assert_eq!(jacobian.len(), 1);

    let err = adj.jacobian(&zero_state(1), &[obs("PauliZ", 0)], &ops, &[1]).unwrap_err();
    assert!(err.is_not_implemented());
}

#[test]
fn test_threaded_matches_sequential() {
    let num_qubits = 11;
    let names: Vec<&str> = (0..num_qubits)
        .map(|_| "RY")
        .chain((0..num_qubits - 1).map(|_| "CNOT"))
        .collect();
    let params: Vec<Vec<f64>> = (0..num_qubits)
        .map(|k| vec![0.1 + 0.2 * k as f64])
        .chain((0..num_qubits - 1).map(|_| vec![]))
        .collect();
    let wires: Vec<Vec<usize>> = (0..num_qubits)
        .map(|k| vec![k])
        .chain((0..num_qubits - 1).map(|k| vec![k, k + 1]))
        .collect();
    let ops = OpsData::from_names(&names, params, wires).unwrap();
    let observables: Vec<ObsDatum<f64>> = (0..num_qubits).map(|w| obs("PauliZ", w)).collect();
    let trainable: Vec<usize> = (0..num_qubits).collect();

    let threaded_config =
        AdjointConfig::default().with_kernel(KernelConfig::default().with_threads(4));
    let threaded = AdjointJacobian::new(threaded_config)
        .jacobian(&zero_state(num_qubits), &observables, &ops, &trainable)
        .unwrap();
    let sequential_config = AdjointConfig::default().with_kernel(KernelConfig::sequential());
    let sequential = AdjointJacobian::new(sequential_config)
        .jacobian(&zero_state(num_qubits), &observables, &ops, &trainable)
        .unwrap();

    for (a, b) in threaded.iter().zip(&sequential) {
        assert_relative_eq!(a, b, epsilon = 1e-10);
    }
}

#[test]
fn test_single_precision() {
    let psi = vec![Complex::new(1.0f32, 0.0), Complex::new(0.0, 0.0)];
    let z = ObsDatum::new(&["PauliZ"], vec![], vec![vec![0]]).unwrap();
    let ops = OpsData::from_names(&["RX"], vec![vec![0.8f32]], vec![vec![0]]).unwrap();
    let jacobian = AdjointJacobian::default().jacobian(&psi, &[z], &ops, &[0]).unwrap();
    assert_relative_eq!(jacobian[0], -(0.8f32).sin(), epsilon = 1e-5);
}

#[test]
fn test_observable_wire_out_of_range() {
    let ops = OpsData::from_names(&["RX"], vec![vec![0.1]], vec![vec![0]]).unwrap();
    let mut jacobian = vec![0.0];
    let err = AdjointJacobian::default()
        .adjoint_jacobian(&zero_state(1), &mut jacobian, &[obs("PauliZ", 4)], &ops, &[0], 1)
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(jacobian, vec![0.0]);
}

const SINGLE_PARAM_GATES: [&str; 8] = [
    "RX",
    "RY",
    "RZ",
    "PhaseShift",
    "CRX",
    "CRY",
    "CRZ",
    "ControlledPhaseShift",
];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn random_circuits_match_finite_differences(
        gates in prop::collection::vec(
            (0usize..SINGLE_PARAM_GATES.len(), -3.0f64..3.0, any::<bool>()),
            1..6,
        ),
    ) {
        let num_qubits = 2;
        let mut circuit = Circuit {
            names: vec!["Hadamard", "Hadamard"],
            params: vec![vec![], vec![]],
            wires: vec![vec![0], vec![1]],
            inverses: vec![false, false],
        };
        for (k, &(g, theta, inverse)) in gates.iter().enumerate() {
            let name = SINGLE_PARAM_GATES[g];
            let wires = if name.starts_with('C') { vec![k % 2, (k + 1) % 2] } else { vec![k % 2] };
            circuit.names.push(name);
            circuit.params.push(vec![theta]);
            circuit.wires.push(wires);
            circuit.inverses.push(inverse);
        }

        let observables = vec![obs("PauliX", 0), obs("PauliY", 1)];
        let ops = circuit.ops();
        let trainable: Vec<usize> = (0..ops.num_params()).collect();
        let jacobian = AdjointJacobian::default()
            .jacobian(&zero_state(num_qubits), &observables, &ops, &trainable)
            .unwrap();

        for (i, observable) in observables.iter().enumerate() {
            for j in 0..trainable.len() {
                let numeric = circuit.finite_difference(num_qubits, j, observable);
                prop_assert!((jacobian[i * trainable.len() + j] - numeric).abs() < 1e-6);
            }
        }
    }
}
