//! Value-less options: a flag is supplied or it is not.

use kwargs::{options, slots, Arguments, Cons, Nil};
use log::info;

options! {
    pub dry_run: DryRun;
    pub follow_links: FollowLinks;
}

type ScanOptions = Cons<Option<DryRun>, Cons<Option<FollowLinks>, Nil>>;

fn scan<A, Is>(args: A) -> Result<(), kwargs::Error>
where
    A: Arguments<ScanOptions, Is>,
{
    let mut options = slots![None::<DryRun>, None::<FollowLinks>]?;
    options.apply(args)?;

    info!(
        "dry run: {}, follow links: {}",
        options.get::<Option<DryRun>, _>().is_some(),
        options.get::<Option<FollowLinks>, _>().is_some(),
    );
    Ok(())
}

fn main() -> Result<(), kwargs::Error> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    scan(())?;
    scan((follow_links(),))?;
    scan((follow_links(), dry_run()))?;

    Ok(())
}
