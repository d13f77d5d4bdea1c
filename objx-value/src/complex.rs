//! Complex number pairs

use serde::{Deserialize, Serialize};

/// A complex number stored as a real and imaginary part
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex<T> {
    /// Real part
    pub re: T,
    /// Imaginary part
    pub im: T,
}

/// 64-bit complex number (two `f32` parts)
pub type Complex64 = Complex<f32>;

/// 128-bit complex number (two `f64` parts)
pub type Complex128 = Complex<f64>;

impl<T> Complex<T> {
    /// Create a complex number from its parts
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: std::fmt::Display + PartialOrd + Default> std::fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The imaginary sign is always written, e.g. (1+2i) or (1-2i)
        if self.im < T::default() {
            write!(f, "({}{}i)", self.re, self.im)
        } else {
            write!(f, "({}+{}i)", self.re, self.im)
        }
    }
}
