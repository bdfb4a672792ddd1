//! Piecewise interpolation and extrapolation of one dimensional sampled data.
//! Between knots the function is either linear or cubic, past the first and last knot it
//! is continued by the nearest value, a line or a parabola up to a configured distance.
//!
//! # Example
//! ```
//! use piecewise_interp::{ExtrapolationMode, InterpolationMode, Interpolator};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let interpolator = Interpolator::new(
//!     vec![0.0, 1.0, 2.0, 3.0],
//!     vec![0.0, 1.0, 0.0, 1.0],
//!     InterpolationMode::Cubic,
//!     ExtrapolationMode::Quadratic,
//!     2.0,
//! ).unwrap();
//!
//! assert_approx_eq!(0.296875, interpolator.evaluate(0.25).unwrap(), 1e-12);
//! assert_approx_eq!(-1.5, interpolator.evaluate(-1.0).unwrap(), 1e-12);
//! assert!(interpolator.evaluate(5.5).is_err());
//! ```

mod config;
mod cubic;
mod error;
mod extrapolate;
mod gradient;
mod interpolator;
mod knot;
mod linear;
mod locate;
mod polynomial;


pub use config::InterpolatorConfig;
pub use error::{InterpolationError, Result};
pub use extrapolate::ExtrapolationMode;
pub use gradient::CubicScheme;
pub use interpolator::{InterpolationMode, Interpolator};
pub use knot::KnotSet;
