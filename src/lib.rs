//! Approximate Nash equilibria of two-player zero-sum matrix games by
//! regret-matching self-play.
//! # Example
//! ```
//! use regret_rs::*;
//! let rule = rule::from_name("blotto").unwrap();
//!
//! let mut trainer = trainer::Trainer::new(&rule, &rule, 42).unwrap();
//! trainer.train(1000);
//! let strt = trainer.average_strategy(player::Player::P1);
//! let exploitability = trainer.exploitability(player::Player::P1);
//! ```
#[macro_use]
extern crate log;

pub mod action;
pub mod game;
pub mod player;
pub mod strategy;

pub mod blotto;
pub mod rps;
pub mod rule;

pub mod agent;
pub mod sampler;
pub mod solver;
pub mod trainer;

pub mod visualizer;
