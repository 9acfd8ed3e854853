//! Rock-paper-scissors where winning with paper pays double.

use super::{action::ActionId, game::Game};

const LABELS: [&str; 3] = ["rock", "paper", "scissors"];

pub const ROCK: ActionId = ActionId::new(0);
pub const PAPER: ActionId = ActionId::new(1);
pub const SCISSORS: ActionId = ActionId::new(2);

// row player's payoff, indexed [mine][theirs]
const PAYOFF: [[f64; 3]; 3] = [
    [0.0, -2.0, 1.0],
    [2.0, 0.0, -1.0],
    [-1.0, 1.0, 0.0],
];

#[derive(Clone, Copy, Default, Debug)]
pub struct Rps;

impl Rps {
    pub fn new() -> Self {
        Rps
    }
}

impl Game for Rps {
    fn num_actions(&self) -> usize {
        LABELS.len()
    }

    fn action_label(&self, action: ActionId) -> String {
        String::from(LABELS[action.index()])
    }

    fn get_ev(&self, a: ActionId, b: ActionId) -> f64 {
        PAYOFF[a.index()][b.index()]
    }
}
