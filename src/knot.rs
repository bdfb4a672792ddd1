use crate::error::{InterpolationError, Result};

const UNIFORM_SPACING_TOLERANCE: f64 = 1e-12;

/// Ordered table of knots through which the interpolated function passes.
/// - `x` - strictly increasing knot positions,
/// - `y` - function values at the knots,
/// - `is_spacing_uniform` - whether every knot interval matches the mean interval up to a relative tolerance.
///
/// The table is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotSet {
    x: Vec<f64>,
    y: Vec<f64>,
    is_spacing_uniform: bool,
}

impl KnotSet {
    /// Builds the knot table from positions and values.
    /// # Example
    /// ```
    /// use piecewise_interp::KnotSet;
    ///
    /// let knots = KnotSet::new(vec![0.0, 1.0, 2.0], vec![4.0, 2.0, 6.0]).unwrap();
    /// assert_eq!(3, knots.len());
    /// assert!(knots.is_spacing_uniform());
    /// ```
    /// # Errors
    /// Positions are never sorted or deduplicated, equal or decreasing neighbours are rejected.
    /// ```
    /// use piecewise_interp::{InterpolationError, KnotSet};
    ///
    /// let knots = KnotSet::new(vec![0.0, 1.0, 1.0, 2.0], vec![0.0; 4]);
    /// assert!(matches!(knots, Err(InterpolationError::NonMonotonicInput { index: 1, .. })));
    /// ```
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(InterpolationError::LengthMismatch { x_len: x.len(), y_len: y.len() });
        }
        if x.len() < 2 {
            return Err(InterpolationError::InsufficientKnots { required: 2, actual: x.len() });
        }

        check_finite("x", &x)?;
        check_finite("y", &y)?;

        if let Some(index) = x.windows(2).position(|w| w[1] <= w[0]) {
            return Err(InterpolationError::NonMonotonicInput {
                index,
                previous: x[index],
                next: x[index + 1],
            });
        }

        let is_spacing_uniform = is_spacing_uniform(&x);
        Ok(KnotSet { x, y, is_spacing_uniform })
    }

    pub fn get_x(&self) -> &[f64] {
        &self.x
    }

    pub fn get_y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false, a valid table holds at least two knots.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn min_x(&self) -> f64 {
        self.x[0]
    }

    pub fn max_x(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    pub fn is_spacing_uniform(&self) -> bool {
        self.is_spacing_uniform
    }

    /// Number of segments between consecutive knots.
    pub fn segment_count(&self) -> usize {
        self.x.len() - 1
    }

    /// Width `x[i + 1] - x[i]` of segment `i`.
    pub fn spacing(&self, segment: usize) -> f64 {
        self.x[segment + 1] - self.x[segment]
    }

    /// Slope of the straight line joining the two knots of segment `i`.
    pub fn secant(&self, segment: usize) -> f64 {
        (self.y[segment + 1] - self.y[segment]) / self.spacing(segment)
    }
}

fn check_finite(array: &'static str, values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(InterpolationError::NonFiniteValue { array, index, value: values[index] }),
        None => Ok(()),
    }
}

fn is_spacing_uniform(x: &[f64]) -> bool {
    let width = x[x.len() - 1] - x[0];
    let expected = width / (x.len() - 1) as f64;
    x.windows(2)
        .map(|w| w[1] - w[0])
        .all(|spacing| (spacing - expected).abs() <= UNIFORM_SPACING_TOLERANCE * expected)
}
