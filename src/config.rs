use crate::{extrapolate::ExtrapolationMode, gradient::CubicScheme, interpolator::InterpolationMode};

/// Settings fixed for the lifetime of an [Interpolator](crate::Interpolator).
///
/// The default interpolates linearly, holds the nearest boundary value outside the knots
/// without a distance limit and uses finite difference gradients for cubic segments.
/// # Example
/// ```
/// use piecewise_interp::{ExtrapolationMode, InterpolationMode, InterpolatorConfig};
///
/// let config = InterpolatorConfig::default()
///     .with_interpolation(InterpolationMode::Cubic)
///     .with_extrapolation(ExtrapolationMode::Quadratic)
///     .with_extrapolation_range(2.0);
///
/// assert_eq!(InterpolationMode::Cubic, config.interpolation);
/// assert_eq!(2.0, config.extrapolation_range);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InterpolatorConfig {
    pub interpolation: InterpolationMode,
    pub extrapolation: ExtrapolationMode,
    /// Unbounded when infinite, written as `null` when serialized.
    #[cfg_attr(feature = "serde", serde(with = "unbounded_range"))]
    pub extrapolation_range: f64,
    pub cubic_scheme: CubicScheme,
}

impl Default for InterpolatorConfig {
    fn default() -> Self {
        InterpolatorConfig {
            interpolation: InterpolationMode::default(),
            extrapolation: ExtrapolationMode::default(),
            extrapolation_range: f64::INFINITY,
            cubic_scheme: CubicScheme::default(),
        }
    }
}

impl InterpolatorConfig {
    pub fn with_interpolation(mut self, interpolation: InterpolationMode) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn with_extrapolation(mut self, extrapolation: ExtrapolationMode) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    pub fn with_extrapolation_range(mut self, extrapolation_range: f64) -> Self {
        self.extrapolation_range = extrapolation_range;
        self
    }

    pub fn with_cubic_scheme(mut self, cubic_scheme: CubicScheme) -> Self {
        self.cubic_scheme = cubic_scheme;
        self
    }
}

// JSON has no infinity, an unbounded range goes through `None`.
#[cfg(feature = "serde")]
mod unbounded_range {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(range: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        let range = if *range == f64::INFINITY { None } else { Some(*range) };
        range.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
