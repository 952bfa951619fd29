//! Core types for iterating complex quadratic dynamics over grids.
//!
//! This crate defines the shared vocabulary that the dynamics engine and its
//! callers build on:
//!
//! - [`Observer`] — receives iteration events and optionally returns control actions
//! - [`ClipBound`] — the per-component bound applied to every stored grid value
//! - [`Plane`] — a rectangular region of the complex plane sampled as a grid

mod clip;
mod observer;
mod plane;

pub use clip::{ClipBound, ClipBoundError};
pub use observer::Observer;
pub use plane::{Plane, PlaneError};
