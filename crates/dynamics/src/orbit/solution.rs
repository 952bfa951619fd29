use ndarray::{Array, Dimension};
use num_complex::Complex64;

use crate::Status;

/// The result of an orbit run.
#[derive(Debug, Clone)]
pub struct Solution<D: Dimension> {
    /// How the run terminated.
    pub status: Status,

    /// The grid after the last completed step.
    pub z: Array<Complex64, D>,

    /// Number of steps completed.
    pub steps: usize,
}
