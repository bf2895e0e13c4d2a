// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)]
// Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![allow(clippy::too_many_arguments)]
#![deny(missing_docs)] // Documentation is a must for release

//! # BasicSignals
//!
//! A small discrete-time signal toolkit: sample canonical test signals (sine, unit step),
//! move them along the time axis (shift, scale) and hand the results to a plotting sink.
//!
//! Every operation is a pure function over [`ndarray::Array1`] inputs that returns freshly
//! allocated arrays. Inputs are never mutated and no state is kept between calls.
//!
//! ## Features
//!
//! - `plotting` (default): PNG rendering of signal bundles through the `plotters` crate
//! - `serialization`: `serde` support for the waveform parameter types
//!
//! ## Error Handling
//!
//! All fallible operations return [`SignalResult`]:
//!
//! ```rust
//! use basic_signals::{SignalError, time_base};
//!
//! match time_base::<f64>(1.0, 0.0) {
//!     Ok(_) => unreachable!(),
//!     Err(SignalError::InvalidParameter(msg)) => eprintln!("Invalid parameter: {msg}"),
//!     Err(other) => eprintln!("Other error: {other}"),
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use basic_signals::{generate_sine, generate_unit_step, time_scale, time_shift};
//!
//! # fn main() -> basic_signals::SignalResult<()> {
//! let fs = 1000.0;
//! let (t, sine) = generate_sine(5.0, 1.0, 0.0, 1.0, fs)?;
//! let (_, delayed) = time_shift(&t, &sine, 0.1, fs)?;
//! let (_, compressed) = time_scale(&t, &sine, 2.0)?;
//! assert_eq!(delayed.len(), sine.len());
//! assert_eq!(compressed.len(), sine.len());
//!
//! let (_, step) = generate_unit_step(1.0, fs, 0.2)?;
//! assert_eq!(step[200], 1.0);
//! # Ok(())
//! # }
//! ```

mod error;

pub mod operations;
pub mod utils;

use std::fmt::Debug;

pub use crate::error::{SignalError, SignalResult};
#[cfg(feature = "plotting")]
pub use crate::operations::plotting::{PlotOptions, PlottersSink, plot_signals};
pub use crate::operations::{
    SignalBundle, SineParams, StepParams, VisualizationSink, shift_samples, shift_to_samples,
    time_scale, time_shift,
};
pub use crate::utils::{
    generation::{generate_sine, generate_sine_with, generate_unit_step, generate_unit_step_with},
    interpolation::interp,
    time_base::{num_samples, time_base},
};

use num_traits::{Float, FloatConst, NumCast};

/// Marker trait for real floating-point types (f32, f64)
pub trait RealFloat: Float + FloatConst + NumCast + Debug + Send + Sync + 'static {}

impl RealFloat for f32 {}
impl RealFloat for f64 {}

/// Casts a numeric value into the target floating-point type `F`.
///
/// Generic code in this crate is written once over `F: RealFloat` and uses this
/// helper instead of `as` conversions so that both `f32` and `f64` precision are served
/// by the same implementation.
///
/// # Errors
/// Returns [`SignalError::InvalidParameter`] if `value` is not representable in `F`.
///
/// # Examples
/// ```
/// use basic_signals::to_precision;
///
/// let x: f32 = to_precision(3usize).unwrap();
/// assert_eq!(x, 3.0);
/// ```
pub fn to_precision<F, T>(value: T) -> SignalResult<F>
where
    F: RealFloat,
    T: NumCast + Copy + Debug,
{
    <F as NumCast>::from(value).ok_or_else(|| {
        SignalError::InvalidParameter(format!(
            "{value:?} cannot be represented as a floating-point sample value"
        ))
    })
}
