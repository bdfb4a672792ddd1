use crate::knot::KnotSet;

/// Straight line between the two knots of segment `index`.
pub fn evaluate(knots: &KnotSet, index: usize, x: f64) -> f64 {
    let x0 = knots.get_x()[index];
    let y = knots.get_y();
    let t = (x - x0) / knots.spacing(index);
    y[index] + (y[index + 1] - y[index]) * t
}
