use anyhow::Result;
use argh::FromArgs;
use indicatif::ProgressIterator;
use regret_rs::{rule, trainer::Trainer};
use std::time::Instant;

macro_rules! time {
    ($x:expr) => {{
        let start = Instant::now();
        $x;
        let end = start.elapsed();
        end.as_nanos() as f64 / 1_000_000_000 as f64
    }};
}

#[derive(FromArgs)]
/// Time repeated self-play training runs.
struct Args {
    /// built-in game name (rps, blotto) or path to a JSON game config
    #[argh(positional)]
    game: String,

    /// training iterations per run
    #[argh(option, short = 'n', default = "10_000")]
    iterations: usize,

    /// number of runs
    #[argh(option, default = "10")]
    runs: usize,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    let rule = rule::from_name_or_file(&args.game)?;

    let mut secs: Vec<f64> = Vec::new();
    for run in (0..args.runs).progress() {
        let mut trainer = Trainer::new(&rule, &rule, run as u64)?;
        secs.push(time!({ trainer.train(args.iterations) }));
    }

    let avg = secs.iter().sum::<f64>() / secs.len() as f64;
    let std = (secs
        .iter()
        .map(|t| t - avg)
        .map(|t| t * t)
        .sum::<f64>()
        / secs.len() as f64)
        .sqrt();

    dbg!(avg);
    dbg!(std);
    Ok(())
}
