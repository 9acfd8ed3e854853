extern crate regret_rs;

#[cfg(test)]
mod tests {
    use approx_eq::assert_approx_eq;
    use regret_rs::*;
    use regret_rs::{action::ActionId, game::Game, player::Player, trainer::Trainer};

    const RPS_NASH: [f64; 3] = [0.25, 0.25, 0.5];

    fn total_exploitability<G: Game + ?Sized>(trainer: &Trainer<G>) -> f64 {
        trainer.exploitability(Player::P1) + trainer.exploitability(Player::P2)
    }

    #[test]
    fn rps() {
        let rule = rule::from_name("rps").unwrap();
        assert!(game::check_zero_sum(&rule).is_ok());
        assert_approx_eq!(solver::exploitability(&rule, &RPS_NASH, &RPS_NASH) + 1.0, 1.0);

        let mut trainer = Trainer::new(&rule, &rule, 42).unwrap();
        trainer.train(50_000);
        for &player in &[Player::P1, Player::P2] {
            let strt = trainer.average_strategy(player);
            assert_approx_eq!(strt.iter().sum::<f64>(), 1.0);
            for (prob, nash) in strt.iter().zip(&RPS_NASH) {
                assert!((prob - nash).abs() < 0.02, "{:?} far from {:?}", strt, RPS_NASH);
            }
            assert!(trainer.exploitability(player) < 0.05);
        }
        assert!(trainer.ev(Player::P1).abs() < 0.05);
    }

    #[test]
    fn rps_exploitability_shrinks() {
        let rps = rps::Rps::new();
        let mut early_total = 0.0;
        let mut late_total = 0.0;
        for seed in 0..5 {
            let mut early = Trainer::new(&rps, &rps, seed).unwrap();
            early.train(10);
            let mut late = Trainer::new(&rps, &rps, seed).unwrap();
            late.train(50_000);
            assert!(
                total_exploitability(&late) < total_exploitability(&early),
                "seed {}: {} vs {}",
                seed,
                total_exploitability(&late),
                total_exploitability(&early)
            );
            early_total += total_exploitability(&early);
            late_total += total_exploitability(&late);
        }
        assert!(
            late_total < early_total / 5.0,
            "{} is not far below {}",
            late_total,
            early_total
        );
    }

    #[test]
    fn blotto() {
        let rule = rule::from_json(r#"{"game": "blotto", "tower_values": [1, 2, 3], "troops": 6}"#)
            .unwrap();
        assert_eq!(rule.num_actions(), 28);
        assert!(game::check_zero_sum(&rule).is_ok());

        let mut trainer = Trainer::new(&rule, &rule, 7).unwrap();
        trainer.train(10);
        let early = total_exploitability(&trainer);
        trainer.train(19_990);
        assert_eq!(trainer.iterations(), 20_000);

        let p1 = trainer.average_strategy(Player::P1);
        let p2 = trainer.average_strategy(Player::P2);
        assert!(solver::compare_strategy(&rule, &p1, &p1).abs() < 1e-9);
        assert!(solver::compare_strategy(&rule, &p1, &p2).abs() < 0.05);
        assert!(total_exploitability(&trainer) < 0.1);
        assert!(total_exploitability(&trainer) < early);
    }

    #[test]
    fn default_blotto_finds_dominant_split() {
        // (0,5) beats every other split of 5 troops over towers worth 1 and 2
        let rule = rule::from_name("blotto").unwrap();
        let mut trainer = Trainer::new(&rule, &rule, 3).unwrap();
        trainer.train(5_000);
        let strt = trainer.average_strategy(Player::P1);
        let best = strategy::mode(&strt).unwrap();
        assert_eq!(rule.action_label(best), "(0,5)");
        assert!(strt[best.index()] > 0.95);
    }

    #[test]
    fn separate_game_instances() {
        let a = blotto::Blotto::new(vec![2, 1, 1], 3).unwrap();
        let b = blotto::Blotto::new(vec![2, 1, 1], 3).unwrap();
        let mut shared = Trainer::new(&a, &a, 9).unwrap();
        let mut split = Trainer::new(&a, &b, 9).unwrap();
        shared.train(1_000);
        split.train(1_000);
        assert_eq!(
            shared.average_strategy(Player::P2),
            split.average_strategy(Player::P2)
        );
    }

    #[test]
    fn best_response_ties_go_to_the_last_action() {
        let rps = rps::Rps::new();
        // every action earns exactly 0 against the equilibrium, so the scan
        // keeps replacing and lands on scissors
        assert_eq!(solver::opponent_best_response_ev(&rps, &RPS_NASH), 0.0);
        assert_eq!(solver::best_response_action(&rps, &RPS_NASH), rps::SCISSORS);
    }

    struct AlwaysLose;

    impl Game for AlwaysLose {
        fn num_actions(&self) -> usize {
            3
        }
        fn action_label(&self, action: ActionId) -> String {
            format!("a{}", action.index())
        }
        fn get_ev(&self, _: ActionId, _: ActionId) -> f64 {
            -1.0
        }
    }

    #[test]
    fn best_response_never_below_zero() {
        let strt = [0.2, 0.3, 0.5];
        // every action earns -1, none reaches the 0.0 floor
        assert_eq!(solver::opponent_best_response_ev(&AlwaysLose, &strt), 0.0);
        assert_eq!(solver::best_response_action(&AlwaysLose, &strt), ActionId::new(0));
        assert_approx_eq!(solver::exploitability(&AlwaysLose, &strt, &strt), 1.0);
    }
}
