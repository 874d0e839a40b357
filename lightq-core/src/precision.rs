//! Floating-point precision abstraction
//!
//! State vectors, gate matrices and kernels are generic over the real scalar
//! type so the same code serves single and double precision simulations.

use num_complex::Complex;
use num_traits::{Float, FloatConst, NumAssign};
use std::fmt::{Debug, Display};

/// Real scalar type usable as the component type of amplitudes
///
/// Implemented for `f32` and `f64`.
pub trait Real:
    Float + FloatConst + NumAssign + Default + Debug + Display + Send + Sync + 'static
{
    /// Convert a double-precision literal into this precision
    fn lit(value: f64) -> Self;
}

impl Real for f32 {
    #[inline]
    fn lit(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    #[inline]
    fn lit(value: f64) -> Self {
        value
    }
}

/// Complex 0 + 0i
#[inline]
pub fn zero<T: Real>() -> Complex<T> {
    Complex::new(T::zero(), T::zero())
}

/// Complex 1 + 0i
#[inline]
pub fn one<T: Real>() -> Complex<T> {
    Complex::new(T::one(), T::zero())
}

/// Complex 0 + 1i
#[inline]
pub fn imag<T: Real>() -> Complex<T> {
    Complex::new(T::zero(), T::one())
}
