//! Uniform sample instants shared by every signal in this crate.

use ndarray::Array1;

use crate::{RealFloat, SignalError, SignalResult, to_precision};

/// Distance from an integer, in ULPs of that integer, under which `duration * fs` snaps to it.
const SNAP_ULPS: f64 = 4.0;

fn validate_rate_and_duration<F: RealFloat>(duration: F, fs: F) -> SignalResult<()> {
    if !duration.is_finite() || duration <= F::zero() {
        return Err(SignalError::invalid_parameter(
            "duration",
            format!("must be positive and finite, got {duration:?}"),
        ));
    }
    if !fs.is_finite() || fs <= F::zero() {
        return Err(SignalError::invalid_parameter(
            "fs",
            format!("must be positive and finite, got {fs:?}"),
        ));
    }
    Ok(())
}

/// Number of samples in the half-open interval `[0, duration)` at `fs` samples per second.
///
/// The count is `floor(duration * fs)`. Products within a few ULPs of an integer are snapped
/// to it, so `0.3 s` at `1000 Hz` gives 300 samples even though neither operand is exactly
/// representable. A genuine fractional sample is always dropped.
///
/// # Errors
/// Returns [`SignalError::InvalidParameter`] if `duration` or `fs` is not positive and finite,
/// or if the sample count does not fit in `usize`.
pub fn num_samples<F: RealFloat>(duration: F, fs: F) -> SignalResult<usize> {
    validate_rate_and_duration(duration, fs)?;

    let product = duration * fs;
    let nearest = product.round();
    let tolerance = F::epsilon() * to_precision::<F, _>(SNAP_ULPS)? * nearest.max(F::one());
    let count = if (product - nearest).abs() <= tolerance {
        nearest
    } else {
        product.floor()
    };

    count.to_usize().ok_or_else(|| {
        SignalError::invalid_parameter(
            "duration * fs",
            format!("must fit in a sample count, got {product:?}"),
        )
    })
}

/// Builds the time base `t_i = i / fs` for `i` in `0..num_samples(duration, fs)`.
///
/// Instants are computed from their index rather than by accumulating `1/fs`, so the
/// spacing stays uniform and the endpoint `duration` is never produced.
///
/// # Errors
/// Returns [`SignalError::InvalidParameter`] if `duration` or `fs` is not positive and finite.
///
/// # Examples
/// ```
/// use basic_signals::time_base;
///
/// let t = time_base(1.0_f64, 4.0).unwrap();
/// assert_eq!(t.to_vec(), vec![0.0, 0.25, 0.5, 0.75]);
/// ```
pub fn time_base<F: RealFloat>(duration: F, fs: F) -> SignalResult<Array1<F>> {
    let n = num_samples(duration, fs)?;
    let instants = (0..n)
        .map(|i| to_precision::<F, _>(i).map(|i| i / fs))
        .collect::<SignalResult<Vec<F>>>()?;

    tracing::trace!(samples = n, "built time base");
    Ok(Array1::from_vec(instants))
}
