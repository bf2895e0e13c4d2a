//! Test signal generation utilities.
//!
//! This module provides functions for sampling canonical waveforms over a
//! [`time_base`](crate::time_base). Every generator returns the time base together with the
//! samples so that the pair can be passed straight on to a transform or a sink.

use ndarray::Array1;
use num_traits::FloatConst;

use crate::operations::{SineParams, StepParams};
use crate::{RealFloat, SignalResult, time_base, to_precision};

/// Generates a sine wave with the specified parameters.
///
/// # Arguments
/// * `frequency` - Frequency of the sine wave in Hz
/// * `amplitude` - Peak amplitude
/// * `phase` - Phase offset in radians
/// * `duration` - Duration of the signal in seconds
/// * `fs` - Sampling frequency in Hz
///
/// # Returns
/// The time base and the samples `amplitude * sin(2π * frequency * t + phase)`.
///
/// # Errors
/// Returns [`SignalError::InvalidParameter`](crate::SignalError::InvalidParameter) if
/// `duration` or `fs` is not positive and finite.
///
/// # Examples
/// ```
/// use basic_signals::generate_sine;
///
/// let (t, x) = generate_sine(5.0_f64, 1.0, 0.0, 1.0, 1000.0).unwrap();
/// assert_eq!(t.len(), 1000);
/// assert_eq!(x[0], 0.0);
/// ```
pub fn generate_sine<F: RealFloat>(
    frequency: F,
    amplitude: F,
    phase: F,
    duration: F,
    fs: F,
) -> SignalResult<(Array1<F>, Array1<F>)> {
    generate_sine_with(SineParams::new(frequency, amplitude, phase), duration, fs)
}

/// Generates a sine wave from a [`SineParams`] value.
///
/// # Errors
/// Returns [`SignalError::InvalidParameter`](crate::SignalError::InvalidParameter) if
/// `duration` or `fs` is not positive and finite.
pub fn generate_sine_with<F: RealFloat>(
    params: SineParams<F>,
    duration: F,
    fs: F,
) -> SignalResult<(Array1<F>, Array1<F>)> {
    let t = time_base(duration, fs)?;

    let two_pi_freq = to_precision::<F, _>(2.0)? * <F as FloatConst>::PI() * params.frequency;
    let x = t.mapv(|ti| params.amplitude * (two_pi_freq * ti + params.phase).sin());

    tracing::debug!(
        samples = x.len(),
        frequency = ?params.frequency,
        "generated sine wave"
    );
    Ok((t, x))
}

/// Generates a unit step `u(t - step_time)`.
///
/// A sample is `1` when its instant is at or after `step_time` and `0` before it, so a
/// `step_time` that falls exactly on a grid point switches that sample on. A `step_time`
/// outside `[0, duration)` is valid and yields an all-one or all-zero signal.
///
/// # Errors
/// Returns [`SignalError::InvalidParameter`](crate::SignalError::InvalidParameter) if
/// `duration` or `fs` is not positive and finite.
///
/// # Examples
/// ```
/// use basic_signals::generate_unit_step;
///
/// let (_, u) = generate_unit_step(1.0_f64, 1000.0, 0.2).unwrap();
/// assert_eq!(u[199], 0.0);
/// assert_eq!(u[200], 1.0);
/// ```
pub fn generate_unit_step<F: RealFloat>(
    duration: F,
    fs: F,
    step_time: F,
) -> SignalResult<(Array1<F>, Array1<F>)> {
    generate_unit_step_with(StepParams::new(step_time), duration, fs)
}

/// Generates a unit step from a [`StepParams`] value. `StepParams::default()` steps at `t = 0`.
///
/// # Errors
/// Returns [`SignalError::InvalidParameter`](crate::SignalError::InvalidParameter) if
/// `duration` or `fs` is not positive and finite.
pub fn generate_unit_step_with<F: RealFloat>(
    params: StepParams<F>,
    duration: F,
    fs: F,
) -> SignalResult<(Array1<F>, Array1<F>)> {
    let t = time_base(duration, fs)?;
    let u = t.mapv(|ti| {
        if ti >= params.step_time {
            F::one()
        } else {
            F::zero()
        }
    });

    tracing::debug!(
        samples = u.len(),
        step_time = ?params.step_time,
        "generated unit step"
    );
    Ok((t, u))
}
