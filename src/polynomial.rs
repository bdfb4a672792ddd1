use nalgebra::{Matrix4, Vector4};

/// Cubic `a0 + a1 t + a2 t^2 + a3 t^3` in the segment-normalised coordinate `t`,
/// where `t = 0` and `t = 1` are the left and right knots of the segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicPolynomial {
    coefficients: Vector4<f64>,
}

impl CubicPolynomial {
    pub fn new(coefficients: Vector4<f64>) -> Self {
        CubicPolynomial { coefficients }
    }

    /// Cubic Hermite segment through `y0` at `t = 0` and `y1` at `t = 1` with
    /// slopes `m0` and `m1`, both already scaled to the normalised coordinate.
    pub fn hermite(y0: f64, y1: f64, m0: f64, m1: f64) -> Self {
        #[rustfmt::skip]
        let basis = Matrix4::new(
             1.0,  0.0,  0.0,  0.0,
             0.0,  0.0,  1.0,  0.0,
            -3.0,  3.0, -2.0, -1.0,
             2.0, -2.0,  1.0,  1.0,
        );
        CubicPolynomial::new(basis * Vector4::new(y0, y1, m0, m1))
    }

    #[cfg(test)]
    pub fn get_coefficients(&self) -> &Vector4<f64> {
        &self.coefficients
    }

    pub fn evaluate(&self, t: f64) -> f64 {
        let a = &self.coefficients;
        a[0] + t * (a[1] + t * (a[2] + t * a[3]))
    }

    #[cfg(test)]
    pub fn derivative(&self, t: f64) -> f64 {
        let a = &self.coefficients;
        a[1] + t * (2.0 * a[2] + t * 3.0 * a[3])
    }

    #[cfg(test)]
    pub fn second_derivative(&self, t: f64) -> f64 {
        let a = &self.coefficients;
        2.0 * a[2] + 6.0 * a[3] * t
    }
}
