extern crate piecewise_interp;

use piecewise_interp::{ExtrapolationMode, InterpolationMode, Interpolator};

fn main() {

    let x = vec![0.0, 1.0, 2.0, 4.0, 5.0, 6.0];
    let y = vec![1.0, -1.0, 0.0, 3.0, 1.0, 1.0];

    let interpolator = Interpolator::new(x, y, InterpolationMode::Cubic, ExtrapolationMode::Linear, 1.5).unwrap();

    let x_min = -1.0;
    let x_max = 7.0;
    let number_of_steps = 80;
    let step = (x_max - x_min) / number_of_steps as f64;

    let mut x_vector = Vec::new();

    for i in 0..=number_of_steps {
        x_vector.push(x_min + step * i as f64);
    }

    let result = interpolator.evaluate_batch(&x_vector).unwrap();

    println!("x;y");
    for i in 0..=number_of_steps {
        println!("{:.2};{:.2}", x_vector[i], result[i]);
    }
}
