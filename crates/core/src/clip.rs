use ndarray::{Array, ArrayBase, Data, Dimension};
use num_complex::Complex64;
use thiserror::Error;

/// The bound applied to the real and imaginary parts of stored grid values.
///
/// A `ClipBound` is always finite and non-negative. Clipping confines each
/// component independently to `[-bound, bound]`, so a clipped value can have a
/// magnitude of up to `bound * sqrt(2)`.
///
/// # Examples
///
/// ```
/// use mandel_core::ClipBound;
/// use num_complex::Complex64;
///
/// let bound = ClipBound::new(2.0).unwrap();
/// assert_eq!(bound.clip(Complex64::new(3.0, -5.0)), Complex64::new(2.0, -2.0));
///
/// assert!(ClipBound::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ClipBound(f64);

/// Errors that can occur when constructing a [`ClipBound`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ClipBoundError {
    #[error("clip bound must be finite, got {0}")]
    NotFinite(f64),

    #[error("clip bound must be non-negative, got {0}")]
    Negative(f64),
}

impl ClipBound {
    /// The bound used when none is given.
    pub const DEFAULT: Self = Self(4.0);

    /// Creates a bound from a finite, non-negative value.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is NaN, infinite, or negative.
    pub fn new(value: f64) -> Result<Self, ClipBoundError> {
        if !value.is_finite() {
            return Err(ClipBoundError::NotFinite(value));
        }
        if value < 0.0 {
            return Err(ClipBoundError::Negative(value));
        }
        Ok(Self(value))
    }

    /// Returns the bound as a plain float.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Clips the real and imaginary parts of `z` independently.
    ///
    /// NaN components are left as NaN.
    #[must_use]
    pub fn clip(self, z: Complex64) -> Complex64 {
        Complex64::new(z.re.clamp(-self.0, self.0), z.im.clamp(-self.0, self.0))
    }

    /// Returns an owned copy of `values` with every element clipped.
    #[must_use]
    pub fn clip_array<S, D>(self, values: &ArrayBase<S, D>) -> Array<Complex64, D>
    where
        S: Data<Elem = Complex64>,
        D: Dimension,
    {
        values.mapv(|z| self.clip(z))
    }

    /// Returns `true` if both components of `z` lie within the bound.
    #[must_use]
    pub fn contains(self, z: Complex64) -> bool {
        (-self.0..=self.0).contains(&z.re) && (-self.0..=self.0).contains(&z.im)
    }
}

impl Default for ClipBound {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for ClipBound {
    type Error = ClipBoundError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
