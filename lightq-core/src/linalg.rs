//! Dense complex linear algebra kernels
//!
//! Inner products, matrix-vector and matrix-matrix products, and a
//! cache-oblivious transpose over row-major complex arrays.
//!
//! # Code paths
//!
//! With the `accelerate` feature the products are delegated to `ndarray`,
//! which dispatches single and double precision work to optimised kernels.
//! Without it, a threaded fallback splits the row range (or vector range) into
//! [`KernelConfig::num_threads`] contiguous chunks, the last one absorbing the
//! remainder, and hands one chunk to each rayon worker. All workers are joined
//! before the call returns.
//!
//! Reductions never share an accumulator: each worker produces its own partial
//! sum and the partials are added on the calling thread, in chunk order, once
//! every worker has finished. The result is therefore deterministic for a given
//! thread count.
//!
//! # Accumulation contract
//!
//! The product routines add into their output buffer and never clear it; pass
//! a zeroed buffer to obtain the plain product.

use crate::config::KernelConfig;
use crate::error::Result;
use crate::precision::Real;
use crate::validate;
use num_complex::Complex;

#[cfg(not(feature = "accelerate"))]
use crate::precision::zero;
#[cfg(not(feature = "accelerate"))]
use crate::util::partition;
#[cfg(not(feature = "accelerate"))]
use rayon::prelude::*;

/// Below this many elements per side a transpose block is copied directly
const TRANSPOSE_BLOCK_THRESHOLD: usize = 16;

/// Compute Σ v1[i]·v2[i]
///
/// # Errors
/// Fails with a validation error if the slices differ in length.
///
/// # Example
/// ```
/// use lightq_core::{linalg::inner_product, KernelConfig};
/// use num_complex::Complex64;
///
/// let v = vec![Complex64::new(1.0, 1.0), Complex64::new(2.0, 0.0)];
/// let dot = inner_product(&v, &v, &KernelConfig::default()).unwrap();
/// assert_eq!(dot, Complex64::new(4.0, 2.0));
/// ```
pub fn inner_product<T: Real>(
    v1: &[Complex<T>],
    v2: &[Complex<T>],
    config: &KernelConfig,
) -> Result<Complex<T>> {
    dot(v1, v2, false, config)
}

/// Compute Σ conj(v1[i])·v2[i]
///
/// # Errors
/// Fails with a validation error if the slices differ in length.
pub fn conjugated_inner_product<T: Real>(
    v1: &[Complex<T>],
    v2: &[Complex<T>],
    config: &KernelConfig,
) -> Result<Complex<T>> {
    dot(v1, v2, true, config)
}

fn dot<T: Real>(
    v1: &[Complex<T>],
    v2: &[Complex<T>],
    conjugate: bool,
    config: &KernelConfig,
) -> Result<Complex<T>> {
    validate!(
        v1.len() == v2.len(),
        "inner product operands differ in length: {} vs {}",
        v1.len(),
        v2.len()
    );

    #[cfg(feature = "accelerate")]
    {
        let _ = config;
        Ok(accelerated::dot(v1, v2, conjugate))
    }

    #[cfg(not(feature = "accelerate"))]
    {
        if !config.is_parallel_for(v1.len()) {
            return Ok(dot_range(v1, v2, conjugate));
        }

        let bounds = partition(config.num_threads, v1.len());
        let partials: Vec<Complex<T>> = bounds
            .par_windows(2)
            .map(|w| dot_range(&v1[w[0]..w[1]], &v2[w[0]..w[1]], conjugate))
            .collect();

        Ok(partials.into_iter().fold(zero(), |acc, partial| acc + partial))
    }
}

#[cfg(not(feature = "accelerate"))]
#[inline]
fn dot_range<T: Real>(v1: &[Complex<T>], v2: &[Complex<T>], conjugate: bool) -> Complex<T> {
    if conjugate {
        v1.iter()
            .zip(v2)
            .fold(zero(), |acc, (a, b)| acc + a.conj() * b)
    } else {
        v1.iter().zip(v2).fold(zero(), |acc, (a, b)| acc + a * b)
    }
}

/// Accumulate a matrix-vector product into `v_out`
///
/// Without `transpose`, `mat` is an `m × n` row-major matrix and
/// `v_out += mat · v_in`. With `transpose`, `mat` is stored `n × m` row-major
/// and `v_out += matᵀ · v_in`. In both cases `v_in` has `n` entries and
/// `v_out` has `m`.
///
/// # Errors
/// Fails with a validation error if any buffer length disagrees with `m`, `n`.
pub fn matrix_vector_product<T: Real>(
    mat: &[Complex<T>],
    v_in: &[Complex<T>],
    v_out: &mut [Complex<T>],
    m: usize,
    n: usize,
    transpose: bool,
    config: &KernelConfig,
) -> Result<()> {
    validate!(mat.len() == m * n, "matrix has {} entries, expected {}x{}", mat.len(), m, n);
    validate!(v_in.len() == n, "input vector has {} entries, expected {}", v_in.len(), n);
    validate!(v_out.len() == m, "output vector has {} entries, expected {}", v_out.len(), m);

    #[cfg(feature = "accelerate")]
    {
        let _ = config;
        accelerated::gemv(mat, v_in, v_out, m, n, transpose)
    }

    #[cfg(not(feature = "accelerate"))]
    {
        if !config.is_parallel_for(m) {
            matrix_vector_rows(mat, v_in, v_out, 0, m, n, transpose);
            return Ok(());
        }

        let bounds = partition(config.num_threads, m);
        split_rows(v_out, &bounds, 1)
            .into_par_iter()
            .for_each(|(row_start, out)| {
                matrix_vector_rows(mat, v_in, out, row_start, m, n, transpose);
            });
        Ok(())
    }
}

#[cfg(not(feature = "accelerate"))]
fn matrix_vector_rows<T: Real>(
    mat: &[Complex<T>],
    v_in: &[Complex<T>],
    out: &mut [Complex<T>],
    row_start: usize,
    m: usize,
    n: usize,
    transpose: bool,
) {
    for (offset, out_r) in out.iter_mut().enumerate() {
        let r = row_start + offset;
        let mut acc = zero();
        if transpose {
            for (c, v) in v_in.iter().enumerate() {
                acc += mat[c * m + r] * v;
            }
        } else {
            let row = &mat[r * n..(r + 1) * n];
            for (a, v) in row.iter().zip(v_in) {
                acc += a * v;
            }
        }
        *out_r += acc;
    }
}

/// Accumulate a matrix-matrix product into `m_out`
///
/// `m_left` is `m × k` row-major and `m_out` is `m × n`. Without `transpose`,
/// `m_right` is `k × n` and `m_out += m_left · m_right`. With `transpose`,
/// `m_right` is supplied already transposed as an `n × k` matrix and
/// `m_out += m_left · m_rightᵀ`, which walks both operands along rows.
///
/// # Errors
/// Fails with a validation error if any buffer length disagrees with the shape.
#[allow(clippy::too_many_arguments)]
pub fn matrix_matrix_product<T: Real>(
    m_left: &[Complex<T>],
    m_right: &[Complex<T>],
    m_out: &mut [Complex<T>],
    m: usize,
    n: usize,
    k: usize,
    transpose: bool,
    config: &KernelConfig,
) -> Result<()> {
    validate!(
        m_left.len() == m * k,
        "left matrix has {} entries, expected {}x{}",
        m_left.len(),
        m,
        k
    );
    validate!(
        m_right.len() == k * n,
        "right matrix has {} entries, expected {} entries",
        m_right.len(),
        k * n
    );
    validate!(
        m_out.len() == m * n,
        "output matrix has {} entries, expected {}x{}",
        m_out.len(),
        m,
        n
    );

    #[cfg(feature = "accelerate")]
    {
        let _ = config;
        accelerated::gemm(m_left, m_right, m_out, m, n, k, transpose)
    }

    #[cfg(not(feature = "accelerate"))]
    {
        if !config.is_parallel_for(m) || n == 0 {
            matrix_matrix_rows(m_left, m_right, m_out, 0, n, k, transpose);
            return Ok(());
        }

        let bounds = partition(config.num_threads, m);
        split_rows(m_out, &bounds, n)
            .into_par_iter()
            .for_each(|(row_start, out)| {
                matrix_matrix_rows(m_left, m_right, out, row_start, n, k, transpose);
            });
        Ok(())
    }
}

#[cfg(not(feature = "accelerate"))]
fn matrix_matrix_rows<T: Real>(
    m_left: &[Complex<T>],
    m_right: &[Complex<T>],
    out: &mut [Complex<T>],
    row_start: usize,
    n: usize,
    k: usize,
    transpose: bool,
) {
    if n == 0 {
        return;
    }
    for (offset, out_row) in out.chunks_exact_mut(n).enumerate() {
        let r = row_start + offset;
        let left_row = &m_left[r * k..(r + 1) * k];
        for (c, out_rc) in out_row.iter_mut().enumerate() {
            let mut acc = zero();
            if transpose {
                let right_row = &m_right[c * k..(c + 1) * k];
                for (a, b) in left_row.iter().zip(right_row) {
                    acc += a * b;
                }
            } else {
                for (b, a) in left_row.iter().enumerate() {
                    acc += a * m_right[b * n + c];
                }
            }
            *out_rc += acc;
        }
    }
}

/// Split `data` into one mutable chunk per partition, `stride` elements per row
///
/// Each chunk is paired with the index of its first row.
#[cfg(not(feature = "accelerate"))]
fn split_rows<'a, U>(
    mut data: &'a mut [U],
    bounds: &[usize],
    stride: usize,
) -> Vec<(usize, &'a mut [U])> {
    let mut chunks = Vec::with_capacity(bounds.len().saturating_sub(1));
    for w in bounds.windows(2) {
        let (head, tail) = std::mem::take(&mut data).split_at_mut((w[1] - w[0]) * stride);
        chunks.push((w[0], head));
        data = tail;
    }
    chunks
}

/// Transpose an `m × n` row-major matrix into the `n × m` buffer `mat_out`
///
/// The matrix is halved recursively along its longer side until a block is at
/// most 16 elements on each side, keeping both reads and writes cache-local.
/// The result is identical to the naive double loop.
///
/// # Errors
/// Fails with a validation error if either buffer is not `m * n` long.
///
/// # Example
/// ```
/// use lightq_core::linalg::transpose;
///
/// let mat = [1, 2, 3, 4, 5, 6]; // 2 x 3
/// let mut out = [0; 6];
/// transpose(&mat, &mut out, 2, 3).unwrap();
/// assert_eq!(out, [1, 4, 2, 5, 3, 6]);
/// ```
pub fn transpose<U: Copy>(mat: &[U], mat_out: &mut [U], m: usize, n: usize) -> Result<()> {
    validate!(mat.len() == m * n, "matrix has {} entries, expected {}x{}", mat.len(), m, n);
    validate!(
        mat_out.len() == m * n,
        "output has {} entries, expected {}x{}",
        mat_out.len(),
        n,
        m
    );

    transpose_block(mat, mat_out, m, n, 0, m, 0, n);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn transpose_block<U: Copy>(
    mat: &[U],
    mat_out: &mut [U],
    m: usize,
    n: usize,
    mut row_lo: usize,
    row_hi: usize,
    mut col_lo: usize,
    col_hi: usize,
) {
    loop {
        let rows = row_hi - row_lo;
        let cols = col_hi - col_lo;

        if rows >= cols && rows > TRANSPOSE_BLOCK_THRESHOLD {
            let mid = (row_lo + row_hi) / 2;
            transpose_block(mat, mat_out, m, n, row_lo, mid, col_lo, col_hi);
            row_lo = mid;
        } else if cols > TRANSPOSE_BLOCK_THRESHOLD {
            let mid = (col_lo + col_hi) / 2;
            transpose_block(mat, mat_out, m, n, row_lo, row_hi, col_lo, mid);
            col_lo = mid;
        } else {
            for r in row_lo..row_hi {
                for c in col_lo..col_hi {
                    mat_out[c * m + r] = mat[r * n + c];
                }
            }
            return;
        }
    }
}

#[cfg(feature = "accelerate")]
mod accelerated {
    use crate::error::{QuantumError, Result};
    use crate::precision::Real;
    use ndarray::linalg::{general_mat_mul, general_mat_vec_mul};
    use ndarray::{ArrayView1, ArrayView2, ArrayViewMut1, ArrayViewMut2};
    use num_complex::Complex;

    fn shape_error(err: ndarray::ShapeError) -> QuantumError {
        QuantumError::validation(format!("array shape rejected: {}", err))
    }

    pub(super) fn dot<T: Real>(
        v1: &[Complex<T>],
        v2: &[Complex<T>],
        conjugate: bool,
    ) -> Complex<T> {
        let b = ArrayView1::from(v2);
        if conjugate {
            ArrayView1::from(v1).mapv(|z| z.conj()).dot(&b)
        } else {
            ArrayView1::from(v1).dot(&b)
        }
    }

    pub(super) fn gemv<T: Real>(
        mat: &[Complex<T>],
        v_in: &[Complex<T>],
        v_out: &mut [Complex<T>],
        m: usize,
        n: usize,
        transpose: bool,
    ) -> Result<()> {
        let one = Complex::new(T::one(), T::zero());
        let x = ArrayView1::from(v_in);
        let mut y = ArrayViewMut1::from(v_out);
        if transpose {
            let a = ArrayView2::from_shape((n, m), mat).map_err(shape_error)?;
            general_mat_vec_mul(one, &a.t(), &x, one, &mut y);
        } else {
            let a = ArrayView2::from_shape((m, n), mat).map_err(shape_error)?;
            general_mat_vec_mul(one, &a, &x, one, &mut y);
        }
        Ok(())
    }

    pub(super) fn gemm<T: Real>(
        m_left: &[Complex<T>],
        m_right: &[Complex<T>],
        m_out: &mut [Complex<T>],
        m: usize,
        n: usize,
        k: usize,
        transpose: bool,
    ) -> Result<()> {
        let one = Complex::new(T::one(), T::zero());
        let a = ArrayView2::from_shape((m, k), m_left).map_err(shape_error)?;
        let mut c = ArrayViewMut2::from_shape((m, n), m_out).map_err(shape_error)?;
        if transpose {
            let b = ArrayView2::from_shape((n, k), m_right).map_err(shape_error)?;
            general_mat_mul(one, &a, &b.t(), one, &mut c);
        } else {
            let b = ArrayView2::from_shape((k, n), m_right).map_err(shape_error)?;
            general_mat_mul(one, &a, &b, one, &mut c);
        }
        Ok(())
    }
}
