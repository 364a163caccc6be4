//! Complex numbers carried by the `_complex64` and `_complex128` tags.

use std::fmt;

use crate::grammar::complex::{format_complex128, format_complex64};

/// A complex number with real and imaginary parts of the same float width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

/// Complex number with `f32` components.
pub type Complex64 = Complex<f32>;

/// Complex number with `f64` components.
pub type Complex128 = Complex<f64>;

impl From<Complex64> for Complex128 {
    fn from(c: Complex64) -> Self {
        Complex::new(c.re as f64, c.im as f64)
    }
}

impl fmt::Display for Complex64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_complex64(*self))
    }
}

impl fmt::Display for Complex128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_complex128(*self))
    }
}
