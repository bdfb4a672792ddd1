use log::trace;

use crate::{
    error::{InterpolationError, Result},
    gradient::CubicScheme,
    knot::KnotSet,
};

/// How the function continues past the first and last knots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtrapolationMode {
    /// Constant value of the nearest boundary knot.
    #[default]
    Nearest,
    /// Straight line with the boundary gradient.
    Linear,
    /// Parabola with the boundary gradient and curvature.
    /// With [CubicScheme::NaturalSpline] the curvature is the end second derivative of the spline,
    /// otherwise it is the change of gradient across the boundary segment.
    Quadratic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Lower,
    Upper,
}

/// Taylor data of the function at one end of the domain.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BoundaryModel {
    x: f64,
    y: f64,
    slope: f64,
    curvature: f64,
}

impl BoundaryModel {
    fn evaluate(&self, mode: ExtrapolationMode, x: f64) -> f64 {
        let dx = x - self.x;
        match mode {
            ExtrapolationMode::Nearest => self.y,
            ExtrapolationMode::Linear => self.y + self.slope * dx,
            ExtrapolationMode::Quadratic => self.y + dx * (self.slope + 0.5 * self.curvature * dx),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Extrapolator {
    mode: ExtrapolationMode,
    range: f64,
    lower: BoundaryModel,
    upper: BoundaryModel,
}

impl Extrapolator {
    /// `gradients` holds the slope estimate at every knot, produced by `scheme`.
    pub fn new(
        knots: &KnotSet,
        gradients: &[f64],
        scheme: CubicScheme,
        mode: ExtrapolationMode,
        range: f64,
    ) -> Result<Self> {
        if range.is_nan() || range < 0.0 {
            return Err(InterpolationError::InvalidExtrapolationRange(range));
        }

        let x = knots.get_x();
        let y = knots.get_y();
        let last = knots.len() - 1;
        let (lower_curvature, upper_curvature) = boundary_curvatures(knots, gradients, scheme);

        let lower = BoundaryModel { x: x[0], y: y[0], slope: gradients[0], curvature: lower_curvature };
        let upper = BoundaryModel { x: x[last], y: y[last], slope: gradients[last], curvature: upper_curvature };

        Ok(Extrapolator { mode, range, lower, upper })
    }

    pub fn get_mode(&self) -> ExtrapolationMode {
        self.mode
    }

    pub fn get_range(&self) -> f64 {
        self.range
    }

    pub fn evaluate(&self, boundary: Boundary, x: f64) -> Result<f64> {
        let model = match boundary {
            Boundary::Lower => &self.lower,
            Boundary::Upper => &self.upper,
        };

        if (x - model.x).abs() > self.range {
            return Err(InterpolationError::ExtrapolationRangeExceeded {
                x,
                min: self.lower.x,
                max: self.upper.x,
                range: self.range,
            });
        }

        let result = model.evaluate(self.mode, x);
        trace!("{:?} extrapolation at {:?} boundary: f({}) = {}", self.mode, boundary, x, result);
        Ok(result)
    }
}

// Finite differences give no second derivative, so the slope change across the end segment
// stands in for it. A natural spline continues with the second derivative of its end segments.
fn boundary_curvatures(knots: &KnotSet, gradients: &[f64], scheme: CubicScheme) -> (f64, f64) {
    let last = knots.len() - 1;
    let lower_spacing = knots.spacing(0);
    let upper_spacing = knots.spacing(last - 1);

    match scheme {
        CubicScheme::FiniteDifference => (
            (gradients[1] - gradients[0]) / lower_spacing,
            (gradients[last] - gradients[last - 1]) / upper_spacing,
        ),
        CubicScheme::NaturalSpline => (
            (6.0 * knots.secant(0) - 4.0 * gradients[0] - 2.0 * gradients[1]) / lower_spacing,
            (-6.0 * knots.secant(last - 1) + 2.0 * gradients[last - 1] + 4.0 * gradients[last]) / upper_spacing,
        ),
    }
}
