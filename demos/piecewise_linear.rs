extern crate piecewise_interp;

use piecewise_interp::{ExtrapolationMode, InterpolationMode, Interpolator};

fn main() {

    let x = vec![0.0, 0.5, 2.0, 3.0, 5.0];
    let y = vec![4.0, 2.0, 6.0, 5.0, 5.5];

    let interpolator = Interpolator::new(x, y, InterpolationMode::Linear, ExtrapolationMode::Nearest, 1.0).unwrap();

    let x_min = 0.0;
    let x_max = 5.0;
    let number_of_steps = 50;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!("{:.2};{:.2}", x, interpolator.evaluate(x).unwrap());
    }
}
