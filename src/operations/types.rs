//! Supporting types for signal generation and visualization.
//!
//! This module contains the waveform parameter structures used by the generators and the
//! ordered signal bundle handed to a visualization sink.

use ndarray::Array1;

use crate::{RealFloat, SignalError, SignalResult};

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Parameters of a sampled sine wave `amplitude * sin(2π * frequency * t + phase)`.
///
/// Negative frequencies or amplitudes are accepted and simply flip the waveform.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SineParams<F> {
    /// Frequency in Hz.
    pub frequency: F,
    /// Peak amplitude.
    pub amplitude: F,
    /// Phase offset in radians.
    pub phase: F,
}

impl<F: RealFloat> SineParams<F> {
    /// Creates sine parameters from frequency, amplitude and phase.
    pub const fn new(frequency: F, amplitude: F, phase: F) -> Self {
        Self {
            frequency,
            amplitude,
            phase,
        }
    }
}

impl<F: RealFloat> Default for SineParams<F> {
    /// A 1 Hz sine of unit amplitude and zero phase.
    fn default() -> Self {
        Self::new(F::one(), F::one(), F::zero())
    }
}

/// Parameters of a sampled unit step `u(t - step_time)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct StepParams<F> {
    /// Instant in seconds at which the step switches on. Defaults to `0`.
    pub step_time: F,
}

impl<F: RealFloat> StepParams<F> {
    /// Creates step parameters with the onset at `step_time` seconds.
    pub const fn new(step_time: F) -> Self {
        Self { step_time }
    }
}

impl<F: RealFloat> Default for StepParams<F> {
    fn default() -> Self {
        Self::new(F::zero())
    }
}

/// An ordered mapping from label to sampled signal.
///
/// Labels keep their insertion order, which is also the order a sink draws them in.
/// Inserting an existing label replaces its signal without moving it.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalBundle<F> {
    entries: Vec<(String, Array1<F>)>,
}

impl<F> Default for SignalBundle<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<F: RealFloat> SignalBundle<F> {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `signal` under `label`, returning the bundle for chaining.
    pub fn with(mut self, label: impl Into<String>, signal: Array1<F>) -> Self {
        self.insert(label, signal);
        self
    }

    /// Adds `signal` under `label`, returning the signal previously stored under that label.
    pub fn insert(&mut self, label: impl Into<String>, signal: Array1<F>) -> Option<Array1<F>> {
        let label = label.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, slot)) => Some(std::mem::replace(slot, signal)),
            None => {
                self.entries.push((label, signal));
                None
            }
        }
    }

    /// Returns the signal stored under `label`.
    pub fn get(&self, label: &str) -> Option<&Array1<F>> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, signal)| signal)
    }

    /// Number of labelled signals.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the bundle holds no signals.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    /// `(label, signal)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Array1<F>)> {
        self.entries
            .iter()
            .map(|(label, signal)| (label.as_str(), signal))
    }

    /// Checks that every signal has exactly `len` samples.
    ///
    /// # Errors
    /// Returns [`SignalError::LengthMismatch`] for the first signal of a different length.
    pub fn check_lengths(&self, len: usize) -> SignalResult<()> {
        self.entries
            .iter()
            .try_for_each(|(_, signal)| SignalError::check_length(len, signal.len()))
    }
}

impl<F: RealFloat, L: Into<String>> FromIterator<(L, Array1<F>)> for SignalBundle<F> {
    fn from_iter<I: IntoIterator<Item = (L, Array1<F>)>>(iter: I) -> Self {
        let mut bundle = Self::new();
        for (label, signal) in iter {
            bundle.insert(label, signal);
        }
        bundle
    }
}
