use thiserror::Error;

/// Errors returned while building or evaluating an [Interpolator](crate::Interpolator).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    #[error("x and y must have the same length, got {x_len} and {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("x must be strictly increasing, x[{index}] = {previous} is followed by {next}")]
    NonMonotonicInput { index: usize, previous: f64, next: f64 },

    #[error("at least {required} knots are required, got {actual}")]
    InsufficientKnots { required: usize, actual: usize },

    #[error("{array}[{index}] is not finite ({value})")]
    NonFiniteValue { array: &'static str, index: usize, value: f64 },

    #[error("extrapolation range must be a non-negative number, got {0}")]
    InvalidExtrapolationRange(f64),

    #[error("x = {x} lies outside [{min}, {max}] by more than the extrapolation range {range}")]
    ExtrapolationRangeExceeded { x: f64, min: f64, max: f64, range: f64 },

    #[error("x is NaN")]
    NotANumber,

    #[error("x = {0} is infinite")]
    InfiniteQuery(f64),
}

pub type Result<T> = std::result::Result<T, InterpolationError>;
