//! A callable option: the caller hands the algorithm its objective
//! function as a named argument.

use kwargs::{options, slots, Arguments, Cons, Nil};
use log::info;

options! {
    pub objective: Objective = fn(Vec<f64>) -> f64;
    pub max_iterations: MaxIterations = usize;
}

type MinimizeOptions = Cons<Objective, Cons<MaxIterations, Nil>>;

fn rosenbrock(x: Vec<f64>) -> f64 {
    (1.0 - x[0]).powi(2) + 10.0 * (x[1] - x[0] * x[0]).powi(2)
}

fn minimize<A, Is>(start: Vec<f64>, args: A) -> Result<f64, kwargs::Error>
where
    A: Arguments<MinimizeOptions, Is>,
{
    let mut options = slots![Objective::default(), max_iterations(20)]?;
    options.apply(args)?;

    let objective = options.get::<Objective, _>();
    if objective.is_unset() {
        info!("no objective supplied, evaluating nothing");
        return Ok(0.0);
    }

    let iterations = *options.get::<MaxIterations, _>().value();
    let value = objective.call(start);
    info!("objective at start after {} iteration budget: {}", iterations, value);
    Ok(value)
}

fn main() -> Result<(), kwargs::Error> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    minimize(vec![-1.0, -1.0], ())?;
    minimize(vec![-1.0, -1.0], (objective(rosenbrock),))?;
    minimize(
        vec![-1.0, -1.0],
        (max_iterations(5), objective(|x: Vec<f64>| x.iter().sum())),
    )?;

    Ok(())
}
