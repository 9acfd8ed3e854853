//! The contract a normal-form game fulfils to be solved.

use super::action::{self, ActionId};
use anyhow::{bail, ensure, Result};

const ZERO_SUM_TOLERANCE: f64 = 1e-9;

/// A two-player, zero-sum, simultaneous-move game.
///
/// Actions are addressed purely by index. `get_ev(a, b)` is the payoff to
/// the player choosing `a` against an opponent choosing `b`, and must
/// satisfy `get_ev(a, b) == -get_ev(b, a)`.
pub trait Game {
    fn num_actions(&self) -> usize;

    fn action_label(&self, action: ActionId) -> String;

    fn get_ev(&self, a: ActionId, b: ActionId) -> f64;
}

/// Check the payoff table of `game` over every pair of actions.
pub fn check_zero_sum<G: Game + ?Sized>(game: &G) -> Result<()> {
    trace!("start: check_zero_sum");
    let n = game.num_actions();
    ensure!(n > 0, "game has no actions");
    for a in action::all(n) {
        let diag = game.get_ev(a, a);
        if diag.abs() > ZERO_SUM_TOLERANCE {
            bail!(
                "{} against itself pays {}, expected 0",
                game.action_label(a),
                diag
            );
        }
        for b in action::all(n).skip(a.index() + 1) {
            let forward = game.get_ev(a, b);
            let backward = game.get_ev(b, a);
            if (forward + backward).abs() > ZERO_SUM_TOLERANCE {
                bail!(
                    "payoffs of {} vs {} are not zero-sum: {} and {}",
                    game.action_label(a),
                    game.action_label(b),
                    forward,
                    backward
                );
            }
        }
    }
    trace!("finish: check_zero_sum");
    Ok(())
}
