use ndarray::{Array, Dimension};
use num_complex::Complex64;

/// Event emitted after each iteration of an escape-time run.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a, D: Dimension> {
    /// The iteration number, starting at 1.
    pub iter: usize,

    /// The grid after this iteration.
    pub z: &'a Array<Complex64, D>,

    /// Number of points whose magnitude exceeds the threshold at this iteration.
    pub escaped: usize,
}
