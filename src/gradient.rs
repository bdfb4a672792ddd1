use nalgebra::DVector;

use crate::knot::KnotSet;

/// Rule used to estimate the slope of the interpolated function at every knot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CubicScheme {
    /// Local three-point derivative weighted by the spacing on both sides of the knot,
    /// boundary knots take the secant of their segment. Continuous in value and slope.
    #[default]
    FiniteDifference,
    /// Classic spline continuous up to the second derivative, with zero curvature at both ends.
    NaturalSpline,
}

/// Slope estimate at each knot, in the units of `dy/dx`.
pub fn knot_gradients(knots: &KnotSet, scheme: CubicScheme) -> Vec<f64> {
    match scheme {
        CubicScheme::FiniteDifference => finite_difference_gradients(knots),
        CubicScheme::NaturalSpline => natural_spline_gradients(knots),
    }
}

fn finite_difference_gradients(knots: &KnotSet) -> Vec<f64> {
    let size = knots.len();
    let mut gradients = Vec::with_capacity(size);

    gradients.push(knots.secant(0));
    for i in 1..size - 1 {
        let h0 = knots.spacing(i - 1);
        let h1 = knots.spacing(i);
        gradients.push((h0 * knots.secant(i) + h1 * knots.secant(i - 1)) / (h0 + h1));
    }
    gradients.push(knots.secant(size - 2));
    gradients
}

// h[i] m[i-1] + 2 (h[i-1] + h[i]) m[i] + h[i-1] m[i+1] = 3 (h[i] s[i-1] + h[i-1] s[i])
// closed by 2 m[0] + m[1] = 3 s[0] and m[n-2] + 2 m[n-1] = 3 s[n-2].
fn natural_spline_gradients(knots: &KnotSet) -> Vec<f64> {
    let size = knots.len();
    let last = size - 1;

    let mut lower = DVector::<f64>::zeros(size);
    let mut diagonal = DVector::<f64>::zeros(size);
    let mut upper = DVector::<f64>::zeros(size);
    let mut rhs = DVector::<f64>::zeros(size);

    diagonal[0] = 2.0;
    upper[0] = 1.0;
    rhs[0] = 3.0 * knots.secant(0);

    for i in 1..last {
        let h0 = knots.spacing(i - 1);
        let h1 = knots.spacing(i);
        lower[i] = h1;
        diagonal[i] = 2.0 * (h0 + h1);
        upper[i] = h0;
        rhs[i] = 3.0 * (h1 * knots.secant(i - 1) + h0 * knots.secant(i));
    }

    lower[last] = 1.0;
    diagonal[last] = 2.0;
    rhs[last] = 3.0 * knots.secant(last - 1);

    solve_tridiagonal(&lower, &diagonal, &upper, rhs).iter().copied().collect()
}

/// Thomas algorithm. The system must be diagonally dominant, which holds for the spline equations.
fn solve_tridiagonal(
    lower: &DVector<f64>,
    diagonal: &DVector<f64>,
    upper: &DVector<f64>,
    mut rhs: DVector<f64>,
) -> DVector<f64> {
    let size = diagonal.len();
    let mut modified_upper = DVector::<f64>::zeros(size);

    modified_upper[0] = upper[0] / diagonal[0];
    rhs[0] /= diagonal[0];
    for i in 1..size {
        let pivot = diagonal[i] - lower[i] * modified_upper[i - 1];
        modified_upper[i] = upper[i] / pivot;
        rhs[i] = (rhs[i] - lower[i] * rhs[i - 1]) / pivot;
    }

    for i in (0..size - 1).rev() {
        rhs[i] -= modified_upper[i] * rhs[i + 1];
    }
    rhs
}
