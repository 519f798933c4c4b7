//! Hypothetical optimization algorithm with optional arguments:
//! precisions, an iteration cap, and omittable bounds.

use kwargs::{options, slots, Arguments, Cons, Nil};
use log::info;

options! {
    /// Hard cap on solver iterations.
    pub max_iterations: MaxIterations = usize;
    pub absolute_precision: AbsolutePrecision = f64;
    pub relative_precision: RelativePrecision = f64;
    pub lower_bound: LowerBound = f64;
    pub upper_bound: UpperBound = f64;
}

type SolverOptions = Cons<
    MaxIterations,
    Cons<
        AbsolutePrecision,
        Cons<RelativePrecision, Cons<Option<LowerBound>, Cons<Option<UpperBound>, Nil>>>,
    >,
>;

fn optimize<A, Is>(x: &mut [f64], args: A) -> Result<(), kwargs::Error>
where
    A: Arguments<SolverOptions, Is>,
{
    let mut options = slots![
        max_iterations(100),
        absolute_precision(1e-10),
        relative_precision(1e-10),
        None::<LowerBound>,
        None::<UpperBound>,
    ]?;
    options.apply(args)?;

    info!("resolved options: {}", options);

    if let Some(bound) = options.get::<Option<LowerBound>, _>() {
        let low = *bound.value();
        for v in x.iter_mut() {
            *v = v.max(low);
        }
    }
    if let Some(bound) = options.get::<Option<UpperBound>, _>() {
        let high = *bound.value();
        for v in x.iter_mut() {
            *v = v.min(high);
        }
    }
    Ok(())
}

fn main() -> Result<(), kwargs::Error> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut x = vec![-2.0, 0.5, 3.0];

    optimize(&mut x, ())?;
    info!("defaults only: {:?}", x);

    optimize(&mut x, (max_iterations(50), lower_bound(-1.0)))?;
    info!("clamped below: {:?}", x);

    optimize(&mut x, (upper_bound(1.0), relative_precision(1e-6)))?;
    info!("clamped above: {:?}", x);

    Ok(())
}
