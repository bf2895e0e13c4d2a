//! Signal transformations and visualization.
//!
//! ## Module Organization
//!
//! - [`shift`] - Integer-sample time shifting with zero fill
//! - [`scale`] - Time scaling through linear interpolation
//! - [`traits`] - The [`VisualizationSink`] consumer trait
//! - [`types`] - Waveform parameters and the ordered [`SignalBundle`]
//! - `plotting` - PNG rendering through plotters (feature `plotting`)
//!
//! ## Quick Start
//!
//! ```rust
//! use basic_signals::{SignalBundle, generate_sine, operations::*};
//!
//! # fn main() -> basic_signals::SignalResult<()> {
//! let fs = 1000.0;
//! let (t, sine) = generate_sine(5.0, 1.0, 0.0, 1.0, fs)?;
//! let (_, shifted) = time_shift(&t, &sine, 0.1, fs)?;
//!
//! let bundle = SignalBundle::new()
//!     .with("sine", sine)
//!     .with("sine shifted", shifted);
//! assert!(bundle.check_lengths(t.len()).is_ok());
//! # Ok(())
//! # }
//! ```

pub mod scale;
pub mod shift;
pub mod traits;
pub mod types;

#[cfg(feature = "plotting")]
pub mod plotting;

pub use scale::time_scale;
pub use shift::{shift_samples, shift_to_samples, time_shift};
pub use traits::VisualizationSink;
pub use types::{SignalBundle, SineParams, StepParams};
