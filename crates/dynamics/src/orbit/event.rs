use ndarray::{Array, Dimension};
use num_complex::Complex64;

/// Event emitted after each application of the map in an orbit run.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a, D: Dimension> {
    /// The step number, starting at 1 for the first application.
    pub step: usize,

    /// The grid after this step.
    pub z: &'a Array<Complex64, D>,
}
