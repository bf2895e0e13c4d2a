//! Core trait definitions for signal consumers.

use std::path::Path;

use ndarray::Array1;

use super::types::SignalBundle;
use crate::{RealFloat, SignalResult};

/// A destination for labelled signals that share one time base.
///
/// The driving code decides what to show; a sink decides how it is rendered and where the
/// artifact is persisted. Implementors should reject bundles whose signals do not match the
/// time base length with [`SignalError::LengthMismatch`](crate::SignalError::LengthMismatch)
/// (see [`SignalBundle::check_lengths`]).
pub trait VisualizationSink<F: RealFloat> {
    /// Renders `signals` against the time axis `t` under `title` and stores the result at `path`.
    ///
    /// # Errors
    /// Returns an error if the signals do not match the time base or if rendering fails.
    fn render(
        &self,
        t: &Array1<F>,
        signals: &SignalBundle<F>,
        title: &str,
        path: &Path,
    ) -> SignalResult<()>;
}
