//! Escape-time dynamics of the quadratic map `f(z) = z² + c`.
//!
//! [`MandelbrotDynamics`] owns a grid of starting points `z0` and a grid of
//! offset parameters `c`, both clipped on assignment, and iterates the map
//! elementwise over them:
//!
//! - [`MandelbrotDynamics::step`] — one application, with optional overrides
//! - [`MandelbrotDynamics::n_steps`] — `n` applications from the stored `z0`
//! - [`MandelbrotDynamics::divergence_iters`] — the escape-time map
//!
//! The multi-step drivers have `_observed` variants that emit an event per
//! iteration to an [`Observer`](mandel_core::Observer), which may stop the run
//! early.
//!
//! # Example
//!
//! ```
//! use mandel_core::{ClipBound, Plane};
//! use mandel_dynamics::{Config, MandelbrotDynamics};
//!
//! let plane = Plane::new([-2.1, 0.6], [-1.13, 1.13], [64, 48]).unwrap();
//! let dynamics = MandelbrotDynamics::new(
//!     Some(plane.origins()),
//!     Some(plane.offsets()),
//!     ClipBound::default(),
//! );
//!
//! let map = dynamics.divergence_iters(&Config::default()).unwrap();
//! assert_eq!(map.dim(), (48, 64));
//! assert!(map.iter().all(|&v| (0..=20).contains(&v)));
//! ```

mod action;
mod config;
mod dynamics;
mod error;
mod map;

pub mod escape;
pub mod orbit;

pub use action::{Action, Status};
pub use config::{Config, ConfigError};
pub use dynamics::MandelbrotDynamics;
pub use error::{Error, Unset};
pub use map::saturating_square;
