use ndarray::{Array1, Array2};
use num_complex::Complex64;
use thiserror::Error;

/// A rectangular region of the complex plane sampled on a regular grid.
///
/// The real axis spans `x` and the imaginary axis spans `y`, both inclusive
/// of their end points. Grids produced by a `Plane` are indexed `[row, col]`
/// where rows follow the imaginary axis (row 0 at `y[0]`) and columns follow
/// the real axis.
///
/// # Examples
///
/// ```
/// use mandel_core::Plane;
/// use num_complex::Complex64;
///
/// let plane = Plane::new([-2.0, 1.0], [-1.0, 1.0], [4, 3]).unwrap();
/// let c = plane.offsets();
///
/// assert_eq!(c.dim(), (3, 4));
/// assert_eq!(c[[0, 0]], Complex64::new(-2.0, -1.0));
/// assert_eq!(c[[2, 3]], Complex64::new(1.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    x: [f64; 2],
    y: [f64; 2],
    resolution: [usize; 2],
}

/// Errors that can occur when constructing a [`Plane`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PlaneError {
    #[error("plane extent must be finite")]
    NotFinite,

    #[error("plane resolution must be non-zero on both axes, got {0:?}")]
    EmptyResolution([usize; 2]),
}

impl Default for Plane {
    /// The classic full view of the Mandelbrot set at 1000 x 1000 samples.
    fn default() -> Self {
        Self {
            x: [-2.1, 0.6],
            y: [-1.13, 1.13],
            resolution: [1000, 1000],
        }
    }
}

impl Plane {
    /// Creates a plane from its real extent, imaginary extent, and the number
    /// of samples along each axis as `[nx, ny]`.
    ///
    /// # Errors
    ///
    /// Returns an error if any extent bound is not finite or if either axis
    /// has zero samples.
    pub fn new(x: [f64; 2], y: [f64; 2], resolution: [usize; 2]) -> Result<Self, PlaneError> {
        if x.iter().chain(&y).any(|v| !v.is_finite()) {
            return Err(PlaneError::NotFinite);
        }
        if resolution.contains(&0) {
            return Err(PlaneError::EmptyResolution(resolution));
        }
        Ok(Self { x, y, resolution })
    }

    /// Returns the real extent as `[x_min, x_max]`.
    #[must_use]
    pub fn x(&self) -> [f64; 2] {
        self.x
    }

    /// Returns the imaginary extent as `[y_min, y_max]`.
    #[must_use]
    pub fn y(&self) -> [f64; 2] {
        self.y
    }

    /// Returns the number of samples as `[nx, ny]`.
    #[must_use]
    pub fn resolution(&self) -> [usize; 2] {
        self.resolution
    }

    /// Returns the sampled real coordinates.
    #[must_use]
    pub fn real_axis(&self) -> Array1<f64> {
        Array1::linspace(self.x[0], self.x[1], self.resolution[0])
    }

    /// Returns the sampled imaginary coordinates.
    #[must_use]
    pub fn imag_axis(&self) -> Array1<f64> {
        Array1::linspace(self.y[0], self.y[1], self.resolution[1])
    }

    /// Returns the offset-parameter grid `c[[row, col]] = x[col] + i * y[row]`.
    #[must_use]
    pub fn offsets(&self) -> Array2<Complex64> {
        let xs = self.real_axis();
        let ys = self.imag_axis();
        Array2::from_shape_fn((ys.len(), xs.len()), |(row, col)| {
            Complex64::new(xs[col], ys[row])
        })
    }

    /// Returns a grid of zeros with the same shape as [`Plane::offsets`].
    #[must_use]
    pub fn origins(&self) -> Array2<Complex64> {
        Array2::zeros((self.resolution[1], self.resolution[0]))
    }
}
