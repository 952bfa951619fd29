//! Elementwise application of the quadratic map `z ↦ z² + c`.

use ndarray::{Array, ArrayView, Dimension, ErrorKind, ShapeError, Zip};
use num_complex::Complex64;

/// The value a divergent orbit saturates to once its square overflows.
const SATURATED: Complex64 = Complex64::new(f64::INFINITY, 0.0);

/// Squares `z`, saturating to positive real infinity on overflow.
///
/// Plain complex multiplication turns an overflowed orbit into NaN within a
/// step or two (`inf * 0` or `inf - inf`), after which magnitude comparisons
/// are always false. Saturating keeps escaped points escaped. NaN inputs are
/// returned unchanged.
#[must_use]
pub fn saturating_square(z: Complex64) -> Complex64 {
    if z.is_nan() {
        return z;
    }
    if z.is_infinite() {
        return SATURATED;
    }
    let squared = z * z;
    if squared.is_nan() { SATURATED } else { squared }
}

/// Applies `z² + c` elementwise, broadcasting `z` and `c` against each other.
///
/// # Errors
///
/// Returns an `IncompatibleShape` error if the shapes cannot be broadcast.
pub fn quadratic<D: Dimension>(
    z: ArrayView<'_, Complex64, D>,
    c: ArrayView<'_, Complex64, D>,
) -> Result<Array<Complex64, D>, ShapeError> {
    let shape = co_broadcast(&z.raw_dim(), &c.raw_dim())?;
    let z = z.broadcast(shape.clone()).ok_or_else(incompatible)?;
    let c = c.broadcast(shape).ok_or_else(incompatible)?;

    Ok(Zip::from(&z)
        .and(&c)
        .map_collect(|&z, &c| saturating_square(z) + c))
}

/// Returns the shape that both `a` and `b` broadcast to.
///
/// Axes are matched one to one; each pair must be equal or contain a 1.
///
/// # Errors
///
/// Returns an `IncompatibleShape` error if the shapes differ in rank or have
/// an axis pair with different lengths, neither of which is 1.
pub fn co_broadcast<D: Dimension>(a: &D, b: &D) -> Result<D, ShapeError> {
    if a.ndim() != b.ndim() {
        return Err(incompatible());
    }

    let mut shape = a.clone();
    for (axis, (&len_a, &len_b)) in a.slice().iter().zip(b.slice()).enumerate() {
        shape[axis] = match (len_a, len_b) {
            _ if len_a == len_b => len_a,
            (1, _) => len_b,
            (_, 1) => len_a,
            _ => return Err(incompatible()),
        };
    }
    Ok(shape)
}

fn incompatible() -> ShapeError {
    ShapeError::from_kind(ErrorKind::IncompatibleShape)
}
