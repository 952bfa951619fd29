use std::fmt;

use ndarray::ShapeError;
use thiserror::Error;

/// Errors that can occur while stepping the dynamics.
#[derive(Debug, Error)]
pub enum Error {
    #[error("parameters not set: {missing} must be assigned before stepping")]
    ParamsNotSet { missing: Unset },

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Identifies which stored grid was unset when a step needed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unset {
    /// The starting-point grid `z0`.
    StartingPoint,
    /// The offset-parameter grid `c`.
    Offset,
    /// Both grids.
    Both,
}

impl fmt::Display for Unset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartingPoint => f.write_str("starting point z0"),
            Self::Offset => f.write_str("offset parameter c"),
            Self::Both => f.write_str("starting point z0 and offset parameter c"),
        }
    }
}
