use super::{
    action::{self, Distribution},
    game::Game,
    player::Player,
    solver,
    strategy,
    trainer::Trainer,
};
use std::cmp::Ordering;

/// Labeled probabilities, most likely first. Equal probabilities keep
/// index order.
pub fn sorted<G: Game + ?Sized>(game: &G, dist: &Distribution) -> Vec<(String, f64)> {
    let mut moves: Vec<(String, f64)> = action::all(dist.len())
        .map(|action_id| (game.action_label(action_id), dist[action_id.index()]))
        .collect();
    moves.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    moves
}

pub fn print_dist<G: Game + ?Sized>(game: &G, dist: &Distribution) {
    println!("{{");
    for (label, prob) in sorted(game, dist) {
        println!("    {}: {:.4}%", label, prob * 100.0);
    }
    print!("}}");
}

pub fn print_report<G: Game + ?Sized>(trainer: &Trainer<G>, player: Player) {
    let game = trainer.agent(player).game();
    let strt = trainer.average_strategy(player);
    print!("{:?} after {} iterations: ", player, trainer.iterations());
    print_dist(game, &strt);
    println!();
    if let Some(action_id) = strategy::mode(&strt) {
        println!("most likely: {}", game.action_label(action_id));
    }
    println!(
        "best response: {}",
        game.action_label(solver::best_response_action(game, &strt))
    );
    println!("ev: {:.8}", trainer.ev(player));
    println!(
        "best response ev: {:.8}",
        solver::opponent_best_response_ev(game, &strt)
    );
    println!("exploitability: {:.8}", trainer.exploitability(player));
}
