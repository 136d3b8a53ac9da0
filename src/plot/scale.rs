use crate::data::model::AttributeRange;

use super::error::ScaleError;

/// Length of every axis in scene units; scaled values land in `0..=AXIS_SPAN`.
pub const AXIS_SPAN: f64 = 100.0;

/// Logarithmic interpolation of `value` within `range` onto `0..=AXIS_SPAN`.
///
/// Equal ratios of the input give equal steps of the output:
/// `ln(minimum)` maps to 0 and `ln(maximum)` to [`AXIS_SPAN`].
pub fn scale(range: AttributeRange, value: f64) -> Result<f64, ScaleError> {
    let AttributeRange { minimum, maximum } = range;
    if !(minimum.is_finite() && maximum.is_finite() && value.is_finite()) {
        return Err(ScaleError::NonFinite);
    }
    if minimum <= 0.0 || maximum <= 0.0 {
        return Err(ScaleError::NonPositiveBound { minimum, maximum });
    }
    if minimum == maximum {
        return Err(ScaleError::DegenerateRange(minimum));
    }
    if value <= 0.0 {
        return Err(ScaleError::NonPositiveValue(value));
    }

    let rmin = minimum.ln();
    let rmax = maximum.ln();
    let factor = (rmax - rmin) / AXIS_SPAN;
    Ok((value.ln() - rmin) / factor)
}

/// Dual-mode placement: values above `threshold` are log-scaled, the rest pass through.
pub fn place(range: AttributeRange, value: f64, threshold: f64) -> Result<f64, ScaleError> {
    if value > threshold {
        scale(range, value)
    } else {
        Ok(value)
    }
}
