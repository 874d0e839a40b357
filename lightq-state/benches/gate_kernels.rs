//! Benchmarks for the gate kernels
//!
//! Compares the closed-form fast paths against the generic matrix kernel on
//! the same gate.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lightq_gates::GateKind;
use lightq_state::StateVectorManaged;
use num_complex::Complex64;

fn bench_single_qubit(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit");

    for num_qubits in [10, 15, 20].iter() {
        let size = 1u64 << num_qubits;
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::new("rx_fast", num_qubits), num_qubits, |b, &n| {
            let mut state = StateVectorManaged::<f64>::new(n).unwrap();
            b.iter(|| {
                state
                    .apply_gate(GateKind::RX, black_box(&[n / 2]), false, &[0.3])
                    .unwrap();
            })
        });

        group.bench_with_input(BenchmarkId::new("rx_matrix", num_qubits), num_qubits, |b, &n| {
            let mut state = StateVectorManaged::<f64>::new(n).unwrap();
            let m: Vec<Complex64> = GateKind::RX.matrix(&[0.3], false).unwrap();
            b.iter(|| {
                state.apply_matrix(black_box(&m), &[n / 2], false).unwrap();
            })
        });
    }

    group.finish();
}

fn bench_two_qubit(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_qubit");

    for num_qubits in [10, 15, 20].iter() {
        let size = 1u64 << num_qubits;
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::new("cnot_fast", num_qubits), num_qubits, |b, &n| {
            let mut state = StateVectorManaged::<f64>::new(n).unwrap();
            b.iter(|| {
                state
                    .apply_gate(GateKind::CNOT, black_box(&[0, n - 1]), false, &[])
                    .unwrap();
            })
        });

        group.bench_with_input(BenchmarkId::new("cnot_matrix", num_qubits), num_qubits, |b, &n| {
            let mut state = StateVectorManaged::<f64>::new(n).unwrap();
            let m: Vec<Complex64> = GateKind::CNOT.matrix(&[], false).unwrap();
            b.iter(|| {
                state.apply_matrix(black_box(&m), &[0, n - 1], false).unwrap();
            })
        });
    }

    group.finish();
}

fn bench_precision(c: &mut Criterion) {
    let mut group = c.benchmark_group("precision");
    let n = 18;

    group.bench_function("hadamard_f32", |b| {
        let mut state = StateVectorManaged::<f32>::new(n).unwrap();
        b.iter(|| state.apply_gate(GateKind::Hadamard, black_box(&[3]), false, &[]).unwrap())
    });
    group.bench_function("hadamard_f64", |b| {
        let mut state = StateVectorManaged::<f64>::new(n).unwrap();
        b.iter(|| state.apply_gate(GateKind::Hadamard, black_box(&[3]), false, &[]).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_single_qubit, bench_two_qubit, bench_precision);
criterion_main!(benches);
