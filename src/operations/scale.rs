//! Time scaling of sampled signals.
//!
//! `y(t) = x(scale * t)` is evaluated on the original grid by reading the linear
//! interpolant of the input samples at the rescaled instants `scale * t[i]`. Instants that
//! land outside the sampled span `[t[0], t[N-1]]` read as zero.
//!
//! The control points stay on the original grid and only the read positions are rescaled,
//! so `scale > 1` compresses the signal. Interpolating through `(scale * t[j], x[j])` and
//! reading at `t[i]` would give `x(t / scale)` instead, a stretch.

use ndarray::Array1;

use crate::{RealFloat, SignalError, SignalResult, interp};

/// Applies the time scaling `y(t) = x(scale * t)` on the time base `t`.
///
/// A `scale` above one compresses the waveform (its features arrive earlier and its apparent
/// frequency rises), a `scale` between zero and one stretches it, and a negative `scale`
/// mirrors it about `t = 0`. Because the interpolation control points are the original
/// samples `(t[j], x[j])`, they are increasing for every sign of `scale` and only the query
/// instants move. The time base is returned unchanged.
///
/// # Errors
/// - [`SignalError::LengthMismatch`] if `t` and `x` differ in length.
/// - [`SignalError::InvalidParameter`] if `scale` is zero or not finite, or if `t` is not
///   increasing.
///
/// # Examples
/// ```
/// use basic_signals::time_scale;
/// use ndarray::array;
///
/// let t = array![0.0, 1.0, 2.0, 3.0];
/// let x = array![0.0, 1.0, 2.0, 3.0];
/// let (_, y) = time_scale(&t, &x, 2.0).unwrap();
/// assert_eq!(y, array![0.0, 2.0, 0.0, 0.0]);
/// ```
pub fn time_scale<F: RealFloat>(
    t: &Array1<F>,
    x: &Array1<F>,
    scale: F,
) -> SignalResult<(Array1<F>, Array1<F>)> {
    SignalError::check_length(t.len(), x.len())?;
    if !scale.is_finite() || scale == F::zero() {
        return Err(SignalError::invalid_parameter(
            "scale",
            format!("must be finite and non-zero, got {scale:?}"),
        ));
    }

    let query = t.mapv(|ti| scale * ti);
    let y = interp(&query, t, x, F::zero(), F::zero())?;

    tracing::debug!(scale = ?scale, len = y.len(), "applied time scaling");
    Ok((t.to_owned(), y))
}
