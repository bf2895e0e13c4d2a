//! Utility functions underpinning the signal operations.
//!
//! # Modules
//!
//! - [`time_base`] - Uniform sample instants for a duration and sampling rate
//! - [`generation`] - Sampled sine and unit step generators
//! - [`interpolation`] - Piecewise-linear interpolation with constant fill

pub mod generation;
pub mod interpolation;
pub mod time_base;
