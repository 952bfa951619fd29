//! Escape-time maps of the stored grids.
//!
//! # Algorithm
//!
//! Starting from the stored `z0`, each iteration applies the map once with the
//! stored `c` and adds 1 to a per-point counter for every point whose magnitude
//! is above the threshold. After `max_iters` iterations the map reports
//! `max_iters - counter`:
//!
//! - a point that never exceeds the threshold reports exactly `max_iters`
//! - a point that escapes early is counted at every later iteration too, so it
//!   reports a low value
//!
//! The above-threshold mask is recomputed at every iteration rather than
//! latched at the first crossing. A point whose magnitude falls back under the
//! threshold stops being counted. With saturating squares an overflowed orbit
//! stays infinite, so in practice this only affects thresholds small enough
//! for a bounded orbit to cross them repeatedly.

mod event;
mod solution;

pub use event::Event;
pub use solution::Solution;

use mandel_core::Observer;
use ndarray::{Array, Dimension, Zip};
use tracing::{debug, debug_span, trace};

use crate::{Action, Config, Error, MandelbrotDynamics, Status, map};

impl<D: Dimension> MandelbrotDynamics<D> {
    /// Computes the escape-time map of the stored grids.
    ///
    /// The observer receives an [`Event`] after each iteration and may return
    /// [`Action::StopEarly`]. A stopped run reports values relative to the
    /// iterations it completed, so they lie in `[0, solution.iters]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParamsNotSet`] if either stored grid is unset (even
    /// when `max_iters` is zero), or [`Error::Shape`] if they cannot be
    /// broadcast.
    pub fn divergence_iters_observed<Obs>(
        &self,
        config: &Config,
        mut observer: Obs,
    ) -> Result<Solution<D>, Error>
    where
        Obs: for<'a> Observer<Event<'a, D>, Action>,
    {
        let (z0, c) = self.params()?;
        let threshold = config.threshold();
        let max_iters = config.max_iters();

        let _span = debug_span!("divergence_iters", threshold, max_iters).entered();

        let shape = map::co_broadcast(&z0.raw_dim(), &c.raw_dim())?;
        let mut counter = Array::<i16, D>::zeros(shape);
        let mut z = z0.to_owned();

        for iter in 1..=max_iters {
            z = map::quadratic(z.view(), c.view())?;

            let mut escaped = 0;
            Zip::from(&mut counter).and(&z).for_each(|count, z| {
                if z.norm() > threshold {
                    *count += 1;
                    escaped += 1;
                }
            });
            trace!(iter, escaped, "counted escaped points");

            let event = Event {
                iter,
                z: &z,
                escaped,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                debug!(iter, "escape-time run stopped by observer");
                return Ok(finish(counter, iter, Status::StoppedByObserver));
            }
        }

        debug!(points = counter.len(), "escape-time run complete");
        Ok(finish(counter, max_iters, Status::Complete))
    }

    /// Computes the escape-time map of the stored grids.
    ///
    /// This is a convenience wrapper around
    /// [`divergence_iters_observed`](Self::divergence_iters_observed) with a
    /// no-op observer. The result has values in `[0, config.max_iters()]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParamsNotSet`] if either stored grid is unset, or
    /// [`Error::Shape`] if they cannot be broadcast.
    pub fn divergence_iters(&self, config: &Config) -> Result<Array<i16, D>, Error> {
        self.divergence_iters_observed(config, ())
            .map(|solution| solution.map)
    }
}

/// Converts per-point escape counts into the reported map.
///
/// `iters` never exceeds `Config::max_iters`, which fits in `i16`.
fn finish<D: Dimension>(counter: Array<i16, D>, iters: usize, status: Status) -> Solution<D> {
    let total = i16::try_from(iters).unwrap_or(i16::MAX);
    Solution {
        status,
        map: counter.mapv_into(|count| total - count),
        iters,
    }
}
