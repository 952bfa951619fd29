use ndarray::{Array, Dimension};

use crate::Status;

/// The result of an escape-time run.
#[derive(Debug, Clone)]
pub struct Solution<D: Dimension> {
    /// How the run terminated.
    pub status: Status,

    /// Per-point escape-time values in `[0, iters]`.
    ///
    /// Each value is `iters` minus the number of iterations at which the point
    /// was above the threshold.
    pub map: Array<i16, D>,

    /// Number of iterations completed.
    pub iters: usize,
}
