use thiserror::Error;

/// Why a value could not be placed on a log-scaled axis.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScaleError {
    #[error("range bounds must be positive (minimum {minimum}, maximum {maximum})")]
    NonPositiveBound { minimum: f64, maximum: f64 },
    #[error("range minimum equals maximum ({0}), the axis has no extent")]
    DegenerateRange(f64),
    #[error("value {0} is not positive and has no logarithm")]
    NonPositiveValue(f64),
    #[error("non-finite input")]
    NonFinite,
}

/// Why a single record produced no marker.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PointError {
    #[error("'{0}' is missing")]
    Missing(String),
    #[error("'{0}' has no numeric value")]
    NotNumeric(String),
    #[error("'{attribute}' cannot be scaled: {source}")]
    Scale {
        attribute: String,
        #[source]
        source: ScaleError,
    },
}

/// Failures that abort a whole plot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    #[error("select between 1 and 3 axes (got {0})")]
    AxisCount(usize),
    #[error("no {kind} has a numeric value for '{attribute}'")]
    NoRange { kind: String, attribute: String },
    #[error("axis '{attribute}' cannot be drawn: {source}")]
    Axis {
        attribute: String,
        #[source]
        source: ScaleError,
    },
}
