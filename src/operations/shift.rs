//! Time shifting of sampled signals.
//!
//! A shift of `shift` seconds is realized as a whole number of samples
//! `k = trunc(shift * fs)`. The signal content moves `k` samples later (or `|k|` samples
//! earlier for negative `k`) on its original grid; the exposed edge is zero-filled and
//! whatever moves past the opposite edge is discarded.

use ndarray::{Array1, s};

use crate::{RealFloat, SignalError, SignalResult};

/// Converts a shift in seconds to a whole number of samples, truncating toward zero.
///
/// `0.0015 s` at `1000 Hz` is one sample and `-0.0015 s` is minus one sample; the value is
/// never rounded.
///
/// # Errors
/// Returns [`SignalError::InvalidParameter`] if `fs` is not positive and finite, if `shift`
/// is not finite, or if the sample count does not fit in an `i64`.
pub fn shift_to_samples<F: RealFloat>(shift: F, fs: F) -> SignalResult<i64> {
    if !fs.is_finite() || fs <= F::zero() {
        return Err(SignalError::invalid_parameter(
            "fs",
            format!("must be positive and finite, got {fs:?}"),
        ));
    }
    if !shift.is_finite() {
        return Err(SignalError::invalid_parameter(
            "shift",
            format!("must be finite, got {shift:?}"),
        ));
    }

    // `to_i64` truncates toward zero.
    (shift * fs).to_i64().ok_or_else(|| {
        SignalError::invalid_parameter(
            "shift * fs",
            format!("must fit in a sample count, got {:?}", shift * fs),
        )
    })
}

/// Moves `x` by `k` whole samples, zero-filling the exposed edge.
///
/// * `k > 0` delays: `y[i] = x[i - k]` for `i >= k`, zero before.
/// * `k < 0` advances: `y[i] = x[i + |k|]` for `i < len - |k|`, zero after.
/// * `k == 0` returns an independent copy of `x`.
///
/// The output always has the length of `x`; a shift of at least `x.len()` samples in either
/// direction yields all zeros.
pub fn shift_samples<F: RealFloat>(x: &Array1<F>, k: i64) -> Array1<F> {
    let n = x.len();
    let magnitude = usize::try_from(k.unsigned_abs()).unwrap_or(usize::MAX);
    if magnitude >= n {
        return Array1::zeros(n);
    }

    let mut y = Array1::zeros(n);
    if k > 0 {
        y.slice_mut(s![magnitude..]).assign(&x.slice(s![..n - magnitude]));
    } else if k < 0 {
        y.slice_mut(s![..n - magnitude]).assign(&x.slice(s![magnitude..]));
    } else {
        y.assign(x);
    }
    y
}

/// Applies the time shift `y(t) = x(t - shift)` on the time base `t`.
///
/// Positive `shift` delays the signal, negative `shift` advances it. The shift is converted
/// to samples with [`shift_to_samples`] (truncation toward zero) and applied with
/// [`shift_samples`]. The time base is returned unchanged; only the amplitudes move.
///
/// # Errors
/// - [`SignalError::LengthMismatch`] if `t` and `x` differ in length.
/// - [`SignalError::InvalidParameter`] for a non-positive `fs` or a non-finite `shift`.
///
/// # Examples
/// ```
/// use basic_signals::time_shift;
/// use ndarray::array;
///
/// let t = array![0.0, 0.25, 0.5, 0.75];
/// let x = array![1.0, 2.0, 3.0, 4.0];
/// let (_, delayed) = time_shift(&t, &x, 0.5, 4.0).unwrap();
/// assert_eq!(delayed, array![0.0, 0.0, 1.0, 2.0]);
/// ```
pub fn time_shift<F: RealFloat>(
    t: &Array1<F>,
    x: &Array1<F>,
    shift: F,
    fs: F,
) -> SignalResult<(Array1<F>, Array1<F>)> {
    SignalError::check_length(t.len(), x.len())?;
    let k = shift_to_samples(shift, fs)?;

    tracing::debug!(shift = ?shift, samples = k, len = x.len(), "applying time shift");
    Ok((t.to_owned(), shift_samples(x, k)))
}
