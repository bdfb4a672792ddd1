use std::fmt::Display;

use log::debug;

use crate::{
    config::InterpolatorConfig,
    cubic,
    error::{InterpolationError, Result},
    extrapolate::{Boundary, ExtrapolationMode, Extrapolator},
    gradient::{knot_gradients, CubicScheme},
    knot::KnotSet,
    linear,
    locate::{locate, locate_with_hint, Location},
    polynomial::CubicPolynomial,
};

/// Formula used between two neighbouring knots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationMode {
    #[default]
    Linear,
    Cubic,
}

impl InterpolationMode {
    pub fn min_knots(&self) -> usize {
        match self {
            InterpolationMode::Linear => 2,
            InterpolationMode::Cubic => 3,
        }
    }
}

impl Display for InterpolationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterpolationMode::Linear => write!(f, "linear"),
            InterpolationMode::Cubic => write!(f, "cubic"),
        }
    }
}

/// Piecewise function through a [KnotSet], continued past the end knots by an [Extrapolator].
///
/// Everything is computed once in the constructor, evaluation only reads. The interpolator can be
/// shared between threads without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolator {
    knots: KnotSet,
    interpolation: InterpolationMode,
    cubic_scheme: CubicScheme,
    segments: Vec<CubicPolynomial>,
    extrapolator: Extrapolator,
}

impl Interpolator {
    /// # Errors
    /// Fails when the knots are invalid (see [KnotSet::new]), when cubic interpolation is given fewer
    /// than 3 knots or when `extrapolation_range` is negative or NaN.
    pub fn new(
        x: Vec<f64>,
        y: Vec<f64>,
        interpolation: InterpolationMode,
        extrapolation: ExtrapolationMode,
        extrapolation_range: f64,
    ) -> Result<Self> {
        let config = InterpolatorConfig::default()
            .with_interpolation(interpolation)
            .with_extrapolation(extrapolation)
            .with_extrapolation_range(extrapolation_range);
        Interpolator::from_config(x, y, &config)
    }

    pub fn from_config(x: Vec<f64>, y: Vec<f64>, config: &InterpolatorConfig) -> Result<Self> {
        Interpolator::from_knots(KnotSet::new(x, y)?, config)
    }

    pub fn from_knots(knots: KnotSet, config: &InterpolatorConfig) -> Result<Self> {
        let required = config.interpolation.min_knots();
        if knots.len() < required {
            return Err(InterpolationError::InsufficientKnots { required, actual: knots.len() });
        }

        // Linear segments have no use for spline slopes, their extrapolation follows the boundary secants.
        let gradient_scheme = match config.interpolation {
            InterpolationMode::Linear => CubicScheme::FiniteDifference,
            InterpolationMode::Cubic => config.cubic_scheme,
        };
        let gradients = knot_gradients(&knots, gradient_scheme);

        let segments = match config.interpolation {
            InterpolationMode::Linear => Vec::new(),
            InterpolationMode::Cubic => cubic::build_segments(&knots, &gradients),
        };

        let extrapolator = Extrapolator::new(
            &knots,
            &gradients,
            gradient_scheme,
            config.extrapolation,
            config.extrapolation_range,
        )?;

        debug!(
            "built {} interpolator over {} knots on [{}, {}] ({} spacing, {:?}, {:?} extrapolation up to {})",
            config.interpolation,
            knots.len(),
            knots.min_x(),
            knots.max_x(),
            if knots.is_spacing_uniform() { "uniform" } else { "non-uniform" },
            gradient_scheme,
            config.extrapolation,
            config.extrapolation_range,
        );

        Ok(Interpolator {
            knots,
            interpolation: config.interpolation,
            cubic_scheme: config.cubic_scheme,
            segments,
            extrapolator,
        })
    }

    /// Value of the function at `x`.
    /// # Example
    /// ```
    /// use piecewise_interp::{ExtrapolationMode, InterpolationMode, Interpolator};
    ///
    /// let interpolator = Interpolator::new(
    ///     vec![0.0, 1.0, 2.0],
    ///     vec![4.0, 2.0, 6.0],
    ///     InterpolationMode::Linear,
    ///     ExtrapolationMode::Nearest,
    ///     1.0,
    /// ).unwrap();
    ///
    /// assert_eq!(3.0, interpolator.evaluate(0.5).unwrap());
    /// assert_eq!(6.0, interpolator.evaluate(2.5).unwrap());
    /// assert!(interpolator.evaluate(3.5).is_err());
    /// ```
    /// # Errors
    /// [InterpolationError::ExtrapolationRangeExceeded] when `x` is further than the extrapolation range
    /// from the domain, [InterpolationError::NotANumber] when `x` is NaN and
    /// [InterpolationError::InfiniteQuery] when `x` is infinite, whatever the range.
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        let location = locate(&self.knots, x)?;
        self.evaluate_at(location, x)
    }

    /// Evaluates every element of `x_vector`, stopping at the first error.
    /// Consecutive queries falling in the same or the next segment skip the search.
    pub fn evaluate_batch(&self, x_vector: &[f64]) -> Result<Vec<f64>> {
        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;

        for x in x_vector {
            let location = locate_with_hint(&self.knots, index, *x)?;
            if let Location::Interior(found) = location {
                index = found;
            }
            results.push(self.evaluate_at(location, *x)?);
        }
        Ok(results)
    }

    pub fn get_knots(&self) -> &KnotSet {
        &self.knots
    }

    pub fn interpolation_mode(&self) -> InterpolationMode {
        self.interpolation
    }

    pub fn extrapolation_mode(&self) -> ExtrapolationMode {
        self.extrapolator.get_mode()
    }

    pub fn extrapolation_range(&self) -> f64 {
        self.extrapolator.get_range()
    }

    /// Scheme as configured. It only shapes cubic segments: linear interpolation always takes its
    /// extrapolation slopes and curvatures from [CubicScheme::FiniteDifference].
    pub fn cubic_scheme(&self) -> CubicScheme {
        self.cubic_scheme
    }

    /// First and last knot positions.
    pub fn domain(&self) -> (f64, f64) {
        (self.knots.min_x(), self.knots.max_x())
    }

    fn evaluate_at(&self, location: Location, x: f64) -> Result<f64> {
        match location {
            Location::Interior(index) => Ok(self.evaluate_interior(index, x)),
            Location::BelowDomain => self.extrapolator.evaluate(Boundary::Lower, x),
            Location::AboveDomain => self.extrapolator.evaluate(Boundary::Upper, x),
        }
    }

    fn evaluate_interior(&self, index: usize, x: f64) -> f64 {
        // only reachable for the last knot, which closes the last segment
        if x == self.knots.get_x()[index + 1] {
            return self.knots.get_y()[index + 1];
        }

        match self.interpolation {
            InterpolationMode::Linear => linear::evaluate(&self.knots, index, x),
            InterpolationMode::Cubic => cubic::evaluate(&self.knots, &self.segments, index, x),
        }
    }
}
