#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use kwargs::*;

    options! {
        /// Hard cap on solver iterations.
        pub max_iterations: MaxIterations = usize;
        pub absolute_precision: AbsolutePrecision = f64;
        pub relative_precision: RelativePrecision = f64;
        pub lower_bounds: LowerBounds = Vec<i32>;
        pub tolerance: Tolerance = f64 where |v| *v > 0.0;
        pub verbose: Verbose;
        pub trace: Trace;
        pub objective: Objective = fn(Vec<f64>) -> f64;
        pub blend: Blend = fn(f64, f64) -> f64;
    }

    type SolverOptions = Cons<MaxIterations, Cons<AbsolutePrecision, Cons<RelativePrecision, Nil>>>;

    fn solver<A, Is>(args: A) -> Result<(usize, f64, f64), Error>
    where
        A: Arguments<SolverOptions, Is>,
    {
        let mut options = slots![
            max_iterations(100),
            absolute_precision(1e-10),
            relative_precision(1e-10),
        ]?;
        options.apply(args)?;
        Ok((
            *options.get::<MaxIterations, _>().value(),
            *options.get::<AbsolutePrecision, _>().value(),
            *options.get::<RelativePrecision, _>().value(),
        ))
    }

    #[test]
    fn defaults_and_overrides() {
        assert_eq!(solver(()).unwrap(), (100, 1e-10, 1e-10));
        assert_eq!(solver((max_iterations(50),)).unwrap(), (50, 1e-10, 1e-10));
        assert_eq!(
            solver((relative_precision(1e-3), max_iterations(50))).unwrap(),
            (50, 1e-10, 1e-3)
        );
    }

    #[test]
    fn application_order_is_irrelevant() {
        let a = solver((max_iterations(5), absolute_precision(0.5), relative_precision(0.25)))
            .unwrap();
        let b = solver((relative_precision(0.25), max_iterations(5), absolute_precision(0.5)))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn by_reference_slots_update_locals() {
        let mut iterations = max_iterations(100);
        let mut bounds: Option<LowerBounds> = None;

        let mut options = slots![&mut iterations, &mut bounds].unwrap();
        options
            .apply((lower_bounds(vec![1, 2, 3]), max_iterations(7)))
            .unwrap();

        assert_eq!(*iterations.value(), 7);
        assert_eq!(bounds.as_ref().map(|b| b.value().len()), Some(3));
    }

    #[test]
    fn omitted_options_stay_at_their_defaults() {
        let mut iterations = max_iterations(100);
        let mut bounds: Option<LowerBounds> = None;

        let mut options = slots![&mut iterations, &mut bounds].unwrap();
        options.apply(()).unwrap();

        assert_eq!(*iterations.value(), 100);
        assert!(bounds.is_none());
    }

    #[test]
    fn whole_option_arguments_replace_the_slot() {
        let mut bounds: Option<LowerBounds> = Some(lower_bounds(vec![1]));
        {
            let mut options = slots![&mut bounds].unwrap();
            options.apply((None::<LowerBounds>,)).unwrap();
        }
        assert!(bounds.is_none());

        let mut bounds: Option<LowerBounds> = None;
        {
            let mut options = slots![&mut bounds].unwrap();
            options
                .apply((Some(lower_bounds(vec![4, 5])),))
                .unwrap();
        }
        assert_eq!(bounds.unwrap().into_value(), vec![4, 5]);
    }

    #[test]
    fn duplicate_slots_are_rejected() {
        let err = slots![max_iterations(1), max_iterations(2)].unwrap_err();
        assert!(matches!(err, Error::DuplicateSlot { .. }));

        // A bare slot and its Option-wrapped form collide too.
        let err = slots![absolute_precision(1.0), None::<AbsolutePrecision>].unwrap_err();
        assert!(matches!(err, Error::DuplicateSlot { .. }));
    }

    #[test]
    fn duplicate_arguments_are_rejected_before_any_write() {
        let mut options = slots![max_iterations(100), absolute_precision(1e-10)].unwrap();
        let err = options
            .apply((max_iterations(1), max_iterations(2)))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateArgument { .. }));
        assert_eq!(*options.get::<MaxIterations, _>().value(), 100);
    }

    #[test]
    fn renders_in_declaration_order_skipping_absent() {
        let absent: Option<AbsolutePrecision> = None;
        let options = slots![max_iterations(5), absent].unwrap();
        assert_eq!(options.to_string(), "5 ");

        let options = slots![max_iterations(5), Some(absolute_precision(7.0))].unwrap();
        assert_eq!(options.to_string(), "5 7 ");
    }

    #[test]
    fn renders_through_references() {
        let mut precision = absolute_precision(1.0);
        let mut iterations: Option<MaxIterations> = Some(max_iterations(2));
        let options = slots![&mut precision, &mut iterations].unwrap();
        assert_eq!(options.to_string(), "1 2 ");
    }

    static CLONES: AtomicUsize = AtomicUsize::new(0);

    #[derive(Debug, Slot)]
    struct Payload(Vec<u8>);

    impl Clone for Payload {
        fn clone(&self) -> Self {
            CLONES.fetch_add(1, Ordering::SeqCst);
            Payload(self.0.clone())
        }
    }

    #[test]
    fn values_move_without_hidden_clones() {
        CLONES.store(0, Ordering::SeqCst);
        let mut slot = Payload(vec![1, 2, 3]);
        {
            let mut options = slots![&mut slot].unwrap();
            options.apply((Payload(vec![4, 5]),)).unwrap();
        }
        assert_eq!(CLONES.load(Ordering::SeqCst), 0);
        assert_eq!(slot.0, vec![4, 5]);

        // Keeping the original is an explicit clone at the call site.
        let keep = Payload(vec![6]);
        {
            let mut options = slots![&mut slot].unwrap();
            options.apply((keep.clone(),)).unwrap();
        }
        assert_eq!(CLONES.load(Ordering::SeqCst), 1);
        assert_eq!(keep.0, vec![6]);
        assert_eq!(slot.0, vec![6]);
    }

    #[test]
    fn checked_options_enforce_their_predicate() {
        let accepted = tolerance(1e-6).unwrap();
        assert_eq!(*accepted.value(), 1e-6);

        let err = tolerance(-1e-6).unwrap_err();
        assert!(matches!(err, Error::Rejected { .. }));
    }

    #[test]
    fn checked_assignment_revalidates() {
        let mut value = tolerance(0.5).unwrap();
        value.set(0.25).unwrap();
        assert_eq!(*value.value(), 0.25);

        assert!(value.set(-0.25).is_err());
        assert_eq!(*value.value(), 0.25);
    }

    #[test]
    fn checked_options_dispatch_like_any_other() {
        let mut options = slots![max_iterations(10), tolerance(1.0).unwrap()].unwrap();
        options.apply((tolerance(0.125).unwrap(),)).unwrap();
        assert_eq!(*options.get::<Tolerance, _>().value(), 0.125);
    }

    fn rosenbrock(x: Vec<f64>) -> f64 {
        (1.0 - x[0]).powi(2) + 10.0 * (x[1] - x[0] * x[0]).powi(2)
    }

    #[test]
    fn callbacks_accept_functions_closures_and_captures() {
        assert!(Objective::default().is_unset());

        let from_fn = objective(rosenbrock);
        assert!(!from_fn.is_unset());
        assert_eq!(from_fn.call(vec![-1.0, -1.0]), 44.0);

        let from_closure = objective(|x: Vec<f64>| x.iter().sum());
        assert_eq!(from_closure.call(vec![1.0, 2.0]), 3.0);

        let scale = 3.0;
        let capturing = objective(move |x: Vec<f64>| scale * x[0]);
        assert_eq!(capturing.call(vec![2.0]), 6.0);
    }

    #[test]
    fn multi_argument_callbacks_take_a_tuple() {
        let mix = blend(|a, b| a * 0.25 + b * 0.75);
        assert_eq!(mix.call((4.0, 8.0)), 7.0);
    }

    #[test]
    fn callback_slots_dispatch() {
        let mut options = slots![Objective::default(), max_iterations(3)].unwrap();
        options.apply((objective(rosenbrock),)).unwrap();

        let resolved = options.get::<Objective, _>();
        assert!(!resolved.is_unset());
        assert_eq!(resolved.call(vec![0.0, 0.0]), 1.0);
    }

    type FlagSlots = Cons<Option<Verbose>, Cons<Option<Trace>, Nil>>;

    #[test]
    fn flags_are_presence_options() {
        fn run<A, Is>(args: A) -> (bool, bool)
        where
            A: Arguments<FlagSlots, Is>,
        {
            let mut options = slots![None::<Verbose>, None::<Trace>].unwrap();
            options.apply(args).unwrap();
            (
                options.get::<Option<Verbose>, _>().is_some(),
                options.get::<Option<Trace>, _>().is_some(),
            )
        }

        assert_eq!(run(()), (false, false));
        assert_eq!(run((trace(),)), (false, true));
        assert_eq!(run((trace(), verbose())), (true, true));
    }

    #[test]
    fn named_values_convert_from_raw() {
        let iterations: MaxIterations = 50.into();
        assert_eq!(*iterations.value(), 50);
    }

    #[test]
    fn slots_are_readable_and_writable_by_type() {
        let mut options = slots![max_iterations(2), absolute_precision(0.5)].unwrap();
        options.get_mut::<MaxIterations, _>().set(9);
        assert_eq!(*options.get::<MaxIterations, _>().value(), 9);
    }

    #[test]
    fn into_inner_releases_resolved_values() {
        let mut options = slots![max_iterations(1)].unwrap();
        options.apply((max_iterations(64),)).unwrap();
        let Cons(iterations, Nil) = options.into_inner();
        assert_eq!(iterations.into_value(), 64);
    }
}
