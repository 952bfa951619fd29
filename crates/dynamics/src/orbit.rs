//! Repeated application of the map from the stored starting points.
//!
//! Only `z` evolves between steps; the stored `c` is reused at every step:
//!
//! ```text
//! z_{k+1} = z_k² + c
//! ```
//!
//! The stored `z0` is never modified.

mod event;
mod solution;

pub use event::Event;
pub use solution::Solution;

use mandel_core::Observer;
use ndarray::{Array, Dimension};
use num_complex::Complex64;
use tracing::{debug, trace};

use crate::{Action, Error, MandelbrotDynamics, Status, map};

impl<D: Dimension> MandelbrotDynamics<D> {
    /// Applies the map `n` times starting from the stored `z0`.
    ///
    /// The observer receives an [`Event`] after each step and may return
    /// [`Action::StopEarly`] to end the run with the grid reached so far.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParamsNotSet`] if either stored grid is unset (even
    /// when `n` is zero), or [`Error::Shape`] if they cannot be broadcast.
    pub fn n_steps_observed<Obs>(&self, n: usize, mut observer: Obs) -> Result<Solution<D>, Error>
    where
        Obs: for<'a> Observer<Event<'a, D>, Action>,
    {
        let (z0, c) = self.params()?;
        let mut z = z0.to_owned();

        for step in 1..=n {
            z = map::quadratic(z.view(), c.view())?;
            trace!(step, "applied map");

            let event = Event { step, z: &z };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                debug!(step, n, "orbit stopped by observer");
                return Ok(Solution {
                    status: Status::StoppedByObserver,
                    z,
                    steps: step,
                });
            }
        }

        Ok(Solution {
            status: Status::Complete,
            z,
            steps: n,
        })
    }

    /// Applies the map `n` times starting from the stored `z0` and returns the
    /// final grid.
    ///
    /// This is a convenience wrapper around
    /// [`n_steps_observed`](Self::n_steps_observed) with a no-op observer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParamsNotSet`] if either stored grid is unset, or
    /// [`Error::Shape`] if they cannot be broadcast.
    pub fn n_steps(&self, n: usize) -> Result<Array<Complex64, D>, Error> {
        self.n_steps_observed(n, ()).map(|solution| solution.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use mandel_core::ClipBound;
    use ndarray::{Array1, ArrayD, Ix1, IxDyn};

    use crate::Unset;

    fn real(values: &[f64]) -> Array1<Complex64> {
        values.iter().map(|&x| Complex64::new(x, 0.0)).collect()
    }

    fn line() -> MandelbrotDynamics<Ix1> {
        MandelbrotDynamics::new(
            Some(Array1::zeros(5)),
            Some(real(&[-1.0, -0.5, 0.0, 0.5, 1.0])),
            ClipBound::default(),
        )
    }

    #[test]
    fn four_steps_along_real_line() {
        let z4 = line().n_steps(4).unwrap();

        let expected = [0.0, -0.308_593_75, 0.0, 1.628_906_25, 26.0];
        for (z, expected) in z4.iter().zip(expected) {
            assert_relative_eq!(z.re, expected);
            assert_relative_eq!(z.im, 0.0);
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let dynamics = line();

        let first = dynamics.n_steps(4).unwrap();
        let second = dynamics.n_steps(4).unwrap();

        assert_eq!(first, second);
        assert_eq!(dynamics.z0().unwrap(), &Array1::<Complex64>::zeros(5));
    }

    #[test]
    fn one_step_matches_single_application() {
        let dynamics = line();
        assert_eq!(
            dynamics.n_steps(1).unwrap(),
            dynamics.step(None, None).unwrap()
        );
    }

    #[test]
    fn dynamic_rank_grids() {
        let offsets = real(&[-1.0, -0.5, 0.0, 0.5, 1.0]);
        let c = offsets.into_shape_with_order((1, 5)).unwrap();
        let dynamics = MandelbrotDynamics::new(
            Some(ArrayD::zeros(IxDyn(&[1, 5]))),
            Some(c.into_dyn()),
            ClipBound::default(),
        );

        let z4 = dynamics.n_steps(4).unwrap();

        assert_eq!(z4.shape(), &[1, 5]);
        assert_relative_eq!(z4[IxDyn(&[0, 3])].re, 1.628_906_25);
        assert_relative_eq!(z4[IxDyn(&[0, 4])].re, 26.0);
    }

    #[test]
    fn zero_steps_returns_starting_points() {
        let solution = line().n_steps_observed(0, ()).unwrap();

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.z, Array1::<Complex64>::zeros(5));
    }

    #[test]
    fn zero_steps_still_requires_params() {
        let mut dynamics = line();
        dynamics.reset_c();

        let err = dynamics.n_steps(0).unwrap_err();
        assert!(matches!(
            err,
            Error::ParamsNotSet {
                missing: Unset::Offset
            }
        ));
    }

    #[test]
    fn step_numbers_start_at_one() {
        let mut steps = Vec::new();
        line()
            .n_steps_observed(3, |event: &Event<'_, Ix1>| {
                steps.push(event.step);
                None
            })
            .unwrap();

        assert_eq!(steps, vec![1, 2, 3]);
    }

    #[test]
    fn observer_can_stop_early() {
        let observer = |event: &Event<'_, Ix1>| {
            // Stop once the c = 1 orbit passes 4.
            (event.z[4].norm() > 4.0).then_some(Action::StopEarly)
        };

        let solution = line().n_steps_observed(100, observer).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 3);
        assert_relative_eq!(solution.z[4].re, 5.0);
    }

    #[test]
    fn divergent_orbits_saturate_without_nan() {
        let z = line().n_steps(50).unwrap();

        assert!(z[4].re.is_infinite());
        assert!(z.iter().all(|z| !z.is_nan()));
    }
}
