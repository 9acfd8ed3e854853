//! Regret-matching state of one side of a self-play run.

use super::{
    action::{self, ActionId, Distribution},
    game::Game,
    sampler,
    strategy,
};
use anyhow::{ensure, Result};
use rand::Rng;

pub struct Agent<'g, G: Game + ?Sized> {
    game: &'g G,
    regret_sum: Vec<f64>,
    strategy_sum: Vec<f64>,
}

impl<'g, G: Game + ?Sized> Agent<'g, G> {
    pub fn new(game: &'g G) -> Result<Self> {
        let num_actions = game.num_actions();
        ensure!(num_actions > 0, "cannot build an agent for a game without actions");
        Ok(Agent {
            game,
            regret_sum: strategy::zeros(num_actions),
            strategy_sum: strategy::zeros(num_actions),
        })
    }

    pub fn game(&self) -> &'g G {
        self.game
    }

    pub fn regret_sum(&self) -> &[f64] {
        &self.regret_sum
    }

    pub fn strategy_sum(&self) -> &[f64] {
        &self.strategy_sum
    }

    /// Strategy proportional to positive regret, uniform while no action
    /// has any.
    pub fn current_strategy(&self) -> Distribution {
        strategy::normalized(strategy::positive_part(&self.regret_sum))
    }

    /// Play one round: fold the current strategy into the running sum and
    /// sample an action from it.
    pub fn get_action<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ActionId {
        let strt = self.current_strategy();
        for (sum, prob) in self.strategy_sum.iter_mut().zip(&strt) {
            *sum += prob;
        }
        sampler::sample(&strt, rng)
    }

    /// Accumulate, for every action, how much better it would have done
    /// than `my_action` against the opponent's realized `opp_action`.
    pub fn update_regrets(&mut self, my_action: ActionId, opp_action: ActionId) {
        let base_ev = self.game.get_ev(my_action, opp_action);
        let num_actions = self.regret_sum.len();
        for (action_id, regret) in action::all(num_actions).zip(&mut self.regret_sum) {
            *regret += self.game.get_ev(action_id, opp_action) - base_ev;
        }
    }

    pub fn average_strategy(&self) -> Distribution {
        strategy::normalized(self.strategy_sum.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rps::{Rps, PAPER, ROCK, SCISSORS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn starts_uniform() {
        let rps = Rps::new();
        let agent = Agent::new(&rps).unwrap();
        assert_eq!(agent.current_strategy(), vec![1.0 / 3.0; 3]);
        assert_eq!(agent.average_strategy(), vec![1.0 / 3.0; 3]);
    }

    #[test]
    fn first_action_accumulates_uniform() {
        let rps = Rps::new();
        let mut agent = Agent::new(&rps).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        agent.get_action(&mut rng);
        assert_eq!(agent.strategy_sum(), &[1.0 / 3.0; 3][..]);
    }

    #[test]
    fn regret_update() {
        let rps = Rps::new();
        let mut agent = Agent::new(&rps).unwrap();
        // played rock into paper: paper ties, scissors wins
        agent.update_regrets(ROCK, PAPER);
        assert_eq!(agent.regret_sum(), &[0.0, 2.0, 3.0][..]);
        assert_eq!(agent.current_strategy(), vec![0.0, 0.4, 0.6]);

        agent.update_regrets(SCISSORS, ROCK);
        assert_eq!(agent.regret_sum(), &[1.0, 5.0, 3.0][..]);
    }

    #[test]
    fn negative_regret_only_gives_uniform() {
        let rps = Rps::new();
        let mut agent = Agent::new(&rps).unwrap();
        // paper into rock is the best possible outcome
        agent.update_regrets(PAPER, ROCK);
        assert!(agent.regret_sum().iter().all(|&r| r <= 0.0));
        assert_eq!(agent.current_strategy(), vec![1.0 / 3.0; 3]);
    }
}
