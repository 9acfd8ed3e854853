use super::{
    action::{self, ActionId},
    game::Game,
};

/// Expected value of playing `mine` against `theirs`.
pub fn compare_strategy<G: Game + ?Sized>(game: &G, mine: &[f64], theirs: &[f64]) -> f64 {
    let n = game.num_actions();
    let mut ev = 0.0;
    for my_action in action::all(n) {
        for opp_action in action::all(n) {
            ev += game.get_ev(my_action, opp_action)
                * mine[my_action.index()]
                * theirs[opp_action.index()];
        }
    }
    ev
}

fn action_ev<G: Game + ?Sized>(game: &G, action_id: ActionId, theirs: &[f64]) -> f64 {
    action::all(game.num_actions())
        .map(|opp_action| game.get_ev(action_id, opp_action) * theirs[opp_action.index()])
        .sum()
}

// Scans in index order from a floor of 0.0, replacing on ties.
fn best_response<G: Game + ?Sized>(game: &G, theirs: &[f64]) -> (ActionId, f64) {
    let mut best = (ActionId::new(0), 0.0);
    for action_id in action::all(game.num_actions()) {
        let ev = action_ev(game, action_id, theirs);
        if best.1 <= ev {
            best = (action_id, ev);
        }
    }
    trace!("best response: {:?}", best);
    best
}

/// Value a best-responding opponent gets against `theirs`.
///
/// Never below 0.0; in a symmetric zero-sum game the true best-response
/// value is non-negative anyway.
pub fn opponent_best_response_ev<G: Game + ?Sized>(game: &G, theirs: &[f64]) -> f64 {
    best_response(game, theirs).1
}

/// The action behind `opponent_best_response_ev`. The last of equally
/// good actions wins.
pub fn best_response_action<G: Game + ?Sized>(game: &G, theirs: &[f64]) -> ActionId {
    best_response(game, theirs).0
}

/// How much more a best-responding opponent extracts from `strt` than
/// `strt` earns against `opp_strt`.
pub fn exploitability<G: Game + ?Sized>(game: &G, strt: &[f64], opp_strt: &[f64]) -> f64 {
    opponent_best_response_ev(game, strt) - compare_strategy(game, strt, opp_strt)
}
