extern crate piecewise_interp;

use piecewise_interp::{ExtrapolationMode, InterpolationMode, Interpolator};

fn main() {

    let x: Vec<f64> = (0..10).map(|i| i as f64 / 9.0).collect();
    let y: Vec<f64> = x.iter().map(|x| x.sin()).collect();

    let modes = [ExtrapolationMode::Nearest, ExtrapolationMode::Linear, ExtrapolationMode::Quadratic];
    let interpolators: Vec<Interpolator> = modes
        .iter()
        .map(|mode| Interpolator::new(x.clone(), y.clone(), InterpolationMode::Cubic, *mode, 2.0).unwrap())
        .collect();

    let x_min = -2.0;
    let x_max = 3.0;
    let number_of_steps = 50;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;nearest;linear;quadratic");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        let values: Vec<String> = interpolators
            .iter()
            .map(|interpolator| match interpolator.evaluate(x) {
                Ok(y) => format!("{:.4}", y),
                Err(error) => error.to_string(),
            })
            .collect();
        println!("{:.2};{}", x, values.join(";"));
    }
}
