use anyhow::Result;
use argh::FromArgs;
use regret_rs::{
    game::{self, Game},
    player::Player,
    rule,
    trainer::Trainer,
    visualizer,
};
use std::time::Instant;

#[macro_use]
extern crate log;

#[derive(FromArgs)]
/// Solve a two-player zero-sum game by regret-matching self-play.
struct Args {
    /// built-in game name (rps, blotto) or path to a JSON game config
    #[argh(positional)]
    game: String,

    /// number of training iterations
    #[argh(option, short = 'n', default = "50_000")]
    iterations: usize,

    /// seed of the random source
    #[argh(option, default = "42")]
    seed: u64,
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn main() -> Result<()> {
    init_logger();
    let args: Args = argh::from_env();

    trace!("start: main");

    let rule = rule::from_name_or_file(&args.game)?;
    game::check_zero_sum(&rule)?;
    info!(
        "game: {}, {} actions, seed {}",
        args.game,
        rule.num_actions(),
        args.seed
    );
    if let rule::Rule::Blotto(blotto) = &rule {
        info!(
            "towers: {:?}, troops: {}",
            blotto.tower_values(),
            blotto.troops()
        );
    }

    let mut trainer = Trainer::new(&rule, &rule, args.seed)?;

    let start = Instant::now();
    trainer.train(args.iterations);
    info!(
        "elapsed time: {} [sec]",
        start.elapsed().as_nanos() as f64 / 1_000_000_000 as f64
    );

    visualizer::print_report(&trainer, Player::P1);

    trace!("finish: main");
    Ok(())
}
