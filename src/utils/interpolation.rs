//! Piecewise-linear interpolation over sampled control points.

use ndarray::Array1;

use crate::{RealFloat, SignalError, SignalResult};

/// Evaluates the piecewise-linear interpolant through `(xp[j], fp[j])` at every query point.
///
/// * Queries below `xp[0]` evaluate to `left`, queries above the last control point to `right`.
/// * A query equal to a control coordinate returns that control value exactly.
/// * Repeated coordinates are allowed; the interpolant jumps to the later value.
/// * NaN queries evaluate to NaN.
///
/// # Errors
/// - [`SignalError::LengthMismatch`] if `xp` and `fp` differ in length.
/// - [`SignalError::InvalidParameter`] if `xp` is not non-decreasing or contains NaN.
///
/// # Examples
/// ```
/// use basic_signals::interp;
/// use ndarray::array;
///
/// let y = interp(&array![-1.0, 0.5, 3.0], &array![0.0, 1.0], &array![10.0, 20.0], 0.0, 0.0).unwrap();
/// assert_eq!(y, array![0.0, 15.0, 0.0]);
/// ```
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn interp<F: RealFloat>(
    query: &Array1<F>,
    xp: &Array1<F>,
    fp: &Array1<F>,
    left: F,
    right: F,
) -> SignalResult<Array1<F>> {
    SignalError::check_length(xp.len(), fp.len())?;

    // `!(a <= b)` also catches NaN coordinates.
    if xp.windows(2).into_iter().any(|pair| !(pair[0] <= pair[1])) {
        return Err(SignalError::invalid_parameter(
            "xp",
            "must be non-decreasing and free of NaN",
        ));
    }

    let n = xp.len();
    if n == 0 {
        return Ok(Array1::from_elem(query.len(), left));
    }

    let coords = xp.to_vec();
    let values = fp.to_vec();
    let evaluate = |q: F| -> F {
        if q.is_nan() {
            return q;
        }
        if q < coords[0] {
            return left;
        }
        if q > coords[n - 1] {
            return right;
        }
        if q == coords[n - 1] {
            return values[n - 1];
        }
        // First index with a coordinate strictly greater than `q`, always in 1..n here.
        let upper = coords.partition_point(|&x| x <= q);
        let lower = upper - 1;
        let (x0, x1) = (coords[lower], coords[upper]);
        let (y0, y1) = (values[lower], values[upper]);
        if q == x0 {
            return y0;
        }
        y0 + (q - x0) * (y1 - y0) / (x1 - x0)
    };

    Ok(query.mapv(evaluate))
}
