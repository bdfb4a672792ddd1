extern crate piecewise_interp;

use piecewise_interp::{CubicScheme, InterpolationMode, Interpolator, InterpolatorConfig};

fn main() {

    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let y = vec![1.0, -1.0, 0.0, -1.0, 3.0, 0.5, 1.0];

    let config = InterpolatorConfig::default().with_interpolation(InterpolationMode::Cubic);
    let local = Interpolator::from_config(x.clone(), y.clone(), &config).unwrap();
    let spline = Interpolator::from_config(x, y, &config.with_cubic_scheme(CubicScheme::NaturalSpline)).unwrap();

    let (x_min, x_max) = local.domain();
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;finite_difference;natural_spline");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!("{:.2};{:.4};{:.4}", x, local.evaluate(x).unwrap(), spline.evaluate(x).unwrap());
    }
}
