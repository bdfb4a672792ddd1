use crate::{knot::KnotSet, polynomial::CubicPolynomial};

/// One Hermite cubic per segment from the knot values and the knot gradients.
/// Gradients are rescaled by the width of each segment so every polynomial works in `t ∈ [0, 1]`
/// and its coefficients share the magnitude of `y`.
pub fn build_segments(knots: &KnotSet, gradients: &[f64]) -> Vec<CubicPolynomial> {
    let y = knots.get_y();
    (0..knots.segment_count())
        .map(|i| {
            let h = knots.spacing(i);
            CubicPolynomial::hermite(y[i], y[i + 1], h * gradients[i], h * gradients[i + 1])
        })
        .collect()
}

/// Evaluates segment `index` at the physical position `x`.
pub fn evaluate(knots: &KnotSet, segments: &[CubicPolynomial], index: usize, x: f64) -> f64 {
    let t = (x - knots.get_x()[index]) / knots.spacing(index);
    segments[index].evaluate(t)
}
