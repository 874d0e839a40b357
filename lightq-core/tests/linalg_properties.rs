//! Property tests for the linear-algebra kernels

use approx::assert_relative_eq;
use lightq_core::linalg::{conjugated_inner_product, inner_product, transpose};
use lightq_core::KernelConfig;
use num_complex::Complex64;
use proptest::prelude::*;

fn complex_vec(max_len: usize) -> impl Strategy<Value = Vec<Complex64>> {
    prop::collection::vec((-1.0f64..1.0, -1.0f64..1.0), 1..max_len)
        .prop_map(|pairs| pairs.into_iter().map(|(re, im)| Complex64::new(re, im)).collect())
}

fn threaded(threads: usize) -> KernelConfig {
    KernelConfig::default()
        .with_threads(threads)
        .with_parallel_threshold(1)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn self_inner_product_is_squared_norm(v in complex_vec(300), threads in 1usize..6) {
        let expected: f64 = v.iter().map(|z| z.norm_sqr()).sum();

        let dotc = conjugated_inner_product(&v, &v, &threaded(threads)).unwrap();
        prop_assert!((dotc.re - expected).abs() < 1e-9);
        prop_assert!(dotc.im.abs() < 1e-9);

        let sequential = conjugated_inner_product(&v, &v, &KernelConfig::sequential()).unwrap();
        prop_assert!((sequential.re - dotc.re).abs() < 1e-9);
    }

    #[test]
    fn threaded_inner_product_matches_sequential(
        pair in (1usize..200).prop_flat_map(|len| (
            prop::collection::vec((-1.0f64..1.0, -1.0f64..1.0), len),
            prop::collection::vec((-1.0f64..1.0, -1.0f64..1.0), len),
        )),
        threads in 2usize..8,
    ) {
        let to_complex = |(re, im): (f64, f64)| Complex64::new(re, im);
        let v1: Vec<Complex64> = pair.0.into_iter().map(to_complex).collect();
        let v2: Vec<Complex64> = pair.1.into_iter().map(to_complex).collect();

        let a = inner_product(&v1, &v2, &threaded(threads)).unwrap();
        let b = inner_product(&v1, &v2, &KernelConfig::sequential()).unwrap();
        prop_assert!((a - b).norm() < 1e-9);
    }

    #[test]
    fn double_transpose_is_identity(m in 1usize..50, n in 1usize..50, seed in 0u64..1000) {
        let mat: Vec<Complex64> = (0..m * n)
            .map(|i| Complex64::new((i as u64 ^ seed) as f64, (i as f64) * 0.5))
            .collect();
        let mut once = vec![Complex64::new(0.0, 0.0); m * n];
        let mut twice = vec![Complex64::new(0.0, 0.0); m * n];

        transpose(&mat, &mut once, m, n).unwrap();
        transpose(&once, &mut twice, n, m).unwrap();
        prop_assert_eq!(twice, mat);
    }
}

#[test]
fn test_large_vector_norm() {
    let len = 1 << 14;
    let amp = 1.0 / (len as f64).sqrt();
    let v = vec![Complex64::new(amp, 0.0); len];
    let dotc = conjugated_inner_product(&v, &v, &threaded(4)).unwrap();
    assert_relative_eq!(dotc.re, 1.0, epsilon = 1e-10);
}
