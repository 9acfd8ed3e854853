//! Regret-matching self-play.

use super::{
    action::Distribution,
    agent::Agent,
    game::Game,
    player::Player,
    solver,
};
use anyhow::{ensure, Result};
use indicatif::ProgressIterator;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::BTreeMap;

/// Two agents playing each other, with the random source both draw from.
///
/// # Example
/// ```
/// use regret_rs::*;
/// let game = rps::Rps::new();
/// let mut trainer = trainer::Trainer::new(&game, &game, 42).unwrap();
/// trainer.train(1000);
/// let strt = trainer.average_strategy(player::Player::P1);
/// assert_eq!(strt.len(), 3);
/// ```
pub struct Trainer<'g, G: Game + ?Sized> {
    p1: Agent<'g, G>,
    p2: Agent<'g, G>,
    rng: StdRng,
    iterations: usize,
}

impl<'g, G: Game + ?Sized> Trainer<'g, G> {
    pub fn new(p1_game: &'g G, p2_game: &'g G, seed: u64) -> Result<Self> {
        let p1 = Agent::new(p1_game)?;
        let p2 = Agent::new(p2_game)?;
        ensure!(
            p1_game.num_actions() == p2_game.num_actions(),
            "action spaces differ: {} vs {}",
            p1_game.num_actions(),
            p2_game.num_actions()
        );
        Ok(Trainer {
            p1,
            p2,
            rng: StdRng::seed_from_u64(seed),
            iterations: 0,
        })
    }

    /// Run exactly `step` more rounds.
    ///
    /// Each round P1 samples, then P2, then both update regret against the
    /// other's action. The random source is drawn once per sample, so a
    /// seed fixes the whole run.
    pub fn train(&mut self, step: usize) {
        trace!("start: train {} iterations", step);
        let record = log_enabled!(log::Level::Debug);
        let split = 100;
        let mut exploitability: BTreeMap<usize, f64> = BTreeMap::new();

        for t in (1..step + 1).progress() {
            let p1_action = self.p1.get_action(&mut self.rng);
            let p2_action = self.p2.get_action(&mut self.rng);

            self.p1.update_regrets(p1_action, p2_action);
            self.p2.update_regrets(p2_action, p1_action);

            if record
                && ((t as f64).log2() * split as f64 / (step as f64).log2()) as i32
                    != (((t - 1) as f64).log2() * split as f64 / (step as f64).log2()) as i32
            {
                exploitability.insert(self.iterations + t, self.exploitability(Player::P1));
            }
        }
        self.iterations += step;

        if record {
            match serde_json::to_string(&exploitability) {
                Ok(json) => debug!("exploitability: {}", json),
                Err(err) => warn!("failed to serialize exploitability: {}", err),
            }
        }
        trace!("finish: train");
    }

    /// Rounds completed so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn agent(&self, player: Player) -> &Agent<'g, G> {
        match player {
            Player::P1 => &self.p1,
            Player::P2 => &self.p2,
        }
    }

    pub fn average_strategy(&self, player: Player) -> Distribution {
        self.agent(player).average_strategy()
    }

    /// Expected value of `player`'s average strategy against the
    /// opponent's.
    pub fn ev(&self, player: Player) -> f64 {
        solver::compare_strategy(
            self.agent(player).game(),
            &self.average_strategy(player),
            &self.average_strategy(player.opponent()),
        )
    }

    pub fn exploitability(&self, player: Player) -> f64 {
        solver::exploitability(
            self.agent(player).game(),
            &self.average_strategy(player),
            &self.average_strategy(player.opponent()),
        )
    }
}
