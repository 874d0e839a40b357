//! Bit and index utilities shared by the kernels
//!
//! Basis indices use a big-endian convention: wire 0 is the most significant
//! bit of an index into a `2^n` amplitude buffer.

use crate::error::Result;
use crate::validate;

/// 2^n
#[inline]
pub fn exp2(n: usize) -> usize {
    1usize << n
}

/// Floor of log2(value); `value` must be non-zero
#[inline]
pub fn log2(value: usize) -> usize {
    value.ilog2() as usize
}

/// Decimal value of the bit that represents `wire` in an `num_qubits` register
///
/// # Example
/// ```
/// use lightq_core::util::max_decimal_for_qubit;
///
/// // wire 0 is the most significant of three bits
/// assert_eq!(max_decimal_for_qubit(0, 3), 4);
/// assert_eq!(max_decimal_for_qubit(2, 3), 1);
/// ```
#[inline]
pub fn max_decimal_for_qubit(wire: usize, num_qubits: usize) -> usize {
    debug_assert!(wire < num_qubits);
    exp2(num_qubits - wire - 1)
}

/// Number of wires acted on by a flattened square matrix of `len` entries
///
/// # Errors
/// Fails with a validation error unless `len` is at least 4, a power of two
/// and a perfect square.
pub fn dim_size(len: usize) -> Result<usize> {
    validate!(len >= 4, "the matrix must be at least 2x2, got {} entries", len);
    validate!(len.is_power_of_two(), "the matrix size {} must be a power of 2", len);

    let side = (len as f64).sqrt().floor() as usize;
    validate!(side * side == len, "the matrix size {} must be a perfect square", len);

    Ok(log2(side))
}

/// Split `0..len` into `n` contiguous chunks
///
/// Returns `n + 1` boundaries; chunk `i` is `bounds[i]..bounds[i + 1]`. Every
/// chunk has `len / n` elements except the last, which absorbs the remainder.
pub fn partition(n: usize, len: usize) -> Vec<usize> {
    let n = n.max(1);
    let step = len / n;

    let mut bounds = Vec::with_capacity(n + 1);
    bounds.push(0);
    for i in 1..n {
        bounds.push(i * step);
    }
    bounds.push(len);
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp2_log2() {
        assert_eq!(exp2(0), 1);
        assert_eq!(exp2(10), 1024);
        assert_eq!(log2(1024), 10);
        assert_eq!(log2(1), 0);
    }

    #[test]
    fn test_max_decimal_big_endian() {
        assert_eq!(max_decimal_for_qubit(0, 1), 1);
        assert_eq!(max_decimal_for_qubit(0, 4), 8);
        assert_eq!(max_decimal_for_qubit(3, 4), 1);
    }

    #[test]
    fn test_dim_size() {
        assert_eq!(dim_size(4).unwrap(), 1);
        assert_eq!(dim_size(16).unwrap(), 2);
        assert_eq!(dim_size(64).unwrap(), 3);
    }

    #[test]
    fn test_dim_size_rejects_bad_shapes() {
        assert!(dim_size(0).unwrap_err().is_validation());
        assert!(dim_size(2).is_err());
        assert!(dim_size(12).is_err());
        // power of two but not a perfect square
        assert!(dim_size(8).is_err());
        assert!(dim_size(32).is_err());
    }

    #[test]
    fn test_partition_even() {
        assert_eq!(partition(4, 16), vec![0, 4, 8, 12, 16]);
    }

    #[test]
    fn test_partition_remainder_goes_last() {
        assert_eq!(partition(3, 10), vec![0, 3, 6, 10]);
        assert_eq!(partition(1, 7), vec![0, 7]);
    }

    #[test]
    fn test_partition_more_chunks_than_items() {
        let bounds = partition(4, 2);
        assert_eq!(bounds, vec![0, 0, 0, 0, 2]);
    }
}
