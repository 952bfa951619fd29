use mandel_core::ClipBound;
use ndarray::{Array, ArrayBase, ArrayView, Data, Dimension, Ix2};
use num_complex::Complex64;

use crate::{
    error::{Error, Unset},
    map,
};

/// The quadratic map `f(z) = z² + c` applied elementwise over complex grids.
///
/// The engine owns two optional grids: the starting points `z0` and the offset
/// parameters `c`. Every value stored in either grid has its real and
/// imaginary parts clipped to `[-bound, bound]` by the engine's [`ClipBound`].
/// Grids are only ever assigned through [`set_z0`](Self::set_z0),
/// [`set_c`](Self::set_c), or [`new`](Self::new), which all clip.
///
/// `D` is the grid dimensionality and defaults to two-dimensional grids.
///
/// # Examples
///
/// ```
/// use mandel_core::ClipBound;
/// use mandel_dynamics::MandelbrotDynamics;
/// use ndarray::Array1;
/// use num_complex::Complex64;
///
/// let c = Array1::linspace(-1.0, 1.0, 5).mapv(|x| Complex64::new(x, 0.0));
/// let z0 = Array1::<Complex64>::zeros(5);
///
/// let dynamics = MandelbrotDynamics::new(Some(z0), Some(c.clone()), ClipBound::default());
/// let z1 = dynamics.step(None, None).unwrap();
///
/// assert_eq!(z1, c);
/// ```
#[derive(Debug, Clone)]
pub struct MandelbrotDynamics<D: Dimension = Ix2> {
    z0: Option<Array<Complex64, D>>,
    c: Option<Array<Complex64, D>>,
    clip: ClipBound,
}

impl<D: Dimension> Default for MandelbrotDynamics<D> {
    fn default() -> Self {
        Self::new(None, None, ClipBound::default())
    }
}

impl<D: Dimension> MandelbrotDynamics<D> {
    /// Creates an engine from optional starting points and offset parameters.
    ///
    /// Provided grids are clipped before they are stored.
    #[must_use]
    pub fn new(
        z0: Option<Array<Complex64, D>>,
        c: Option<Array<Complex64, D>>,
        clip: ClipBound,
    ) -> Self {
        let clip_owned = |mut grid: Array<Complex64, D>| {
            grid.mapv_inplace(|z| clip.clip(z));
            grid
        };
        Self {
            z0: z0.map(clip_owned),
            c: c.map(clip_owned),
            clip,
        }
    }

    /// Returns the bound applied to stored grid values.
    #[must_use]
    pub fn clip_bound(&self) -> ClipBound {
        self.clip
    }

    /// Returns the stored starting points, if set.
    #[must_use]
    pub fn z0(&self) -> Option<&Array<Complex64, D>> {
        self.z0.as_ref()
    }

    /// Returns the stored offset parameters, if set.
    #[must_use]
    pub fn c(&self) -> Option<&Array<Complex64, D>> {
        self.c.as_ref()
    }

    /// Clips and stores the starting points, replacing any previous grid.
    pub fn set_z0<S>(&mut self, values: &ArrayBase<S, D>)
    where
        S: Data<Elem = Complex64>,
    {
        self.z0 = Some(self.clip.clip_array(values));
    }

    /// Clips and stores the offset parameters, replacing any previous grid.
    pub fn set_c<S>(&mut self, values: &ArrayBase<S, D>)
    where
        S: Data<Elem = Complex64>,
    {
        self.c = Some(self.clip.clip_array(values));
    }

    /// Unsets the starting points.
    pub fn reset_z0(&mut self) {
        self.z0 = None;
    }

    /// Unsets the offset parameters.
    pub fn reset_c(&mut self) {
        self.c = None;
    }

    /// Checks that both stored grids are set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParamsNotSet`] naming the unset grid(s).
    pub fn check_params(&self) -> Result<(), Error> {
        self.params().map(|_| ())
    }

    /// Returns views of the stored `z0` and `c`, or the error for whichever is unset.
    pub(crate) fn params(
        &self,
    ) -> Result<(ArrayView<'_, Complex64, D>, ArrayView<'_, Complex64, D>), Error> {
        match (&self.z0, &self.c) {
            (Some(z0), Some(c)) => Ok((z0.view(), c.view())),
            (None, Some(_)) => Err(Error::ParamsNotSet {
                missing: Unset::StartingPoint,
            }),
            (Some(_), None) => Err(Error::ParamsNotSet {
                missing: Unset::Offset,
            }),
            (None, None) => Err(Error::ParamsNotSet {
                missing: Unset::Both,
            }),
        }
    }

    /// Applies the map once and returns `z² + c`.
    ///
    /// Either argument overrides the corresponding stored grid. If either is
    /// `None`, both stored grids must be set, even if only one of them ends up
    /// being used. Passing both overrides bypasses the stored state entirely.
    /// Overrides are used as given and are not clipped.
    ///
    /// Overflow is not an error: squaring a very large value saturates to
    /// infinity (see [`saturating_square`](crate::saturating_square)).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParamsNotSet`] if an argument is omitted while a stored
    /// grid is unset, or [`Error::Shape`] if `z` and `c` cannot be broadcast.
    pub fn step<'a>(
        &'a self,
        z0: Option<ArrayView<'a, Complex64, D>>,
        c: Option<ArrayView<'a, Complex64, D>>,
    ) -> Result<Array<Complex64, D>, Error> {
        let (z, c) = match (z0, c) {
            (Some(z), Some(c)) => (z, c),
            (z, c) => {
                let (stored_z, stored_c) = self.params()?;
                (z.unwrap_or(stored_z), c.unwrap_or(stored_c))
            }
        };
        Ok(map::quadratic(z, c)?)
    }
}
