use super::{action::ActionId, blotto::Blotto, game::Game, rps::Rps};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serialized description of a game.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq, Debug)]
#[serde(tag = "game", rename_all = "snake_case")]
pub enum Config {
    Rps,
    Blotto { tower_values: Vec<u32>, troops: u32 },
}

impl Config {
    pub fn build(self) -> Result<Rule> {
        trace!("start: build {:?}", self);
        let rule = match self {
            Config::Rps => Rule::Rps(Rps::new()),
            Config::Blotto {
                tower_values,
                troops,
            } => Rule::Blotto(Blotto::new(tower_values, troops)?),
        };
        trace!("finish: build");
        Ok(rule)
    }
}

/// Any of the built-in games.
#[derive(Clone, Debug)]
pub enum Rule {
    Rps(Rps),
    Blotto(Blotto),
}

impl Game for Rule {
    fn num_actions(&self) -> usize {
        match self {
            Rule::Rps(game) => game.num_actions(),
            Rule::Blotto(game) => game.num_actions(),
        }
    }

    fn action_label(&self, action: ActionId) -> String {
        match self {
            Rule::Rps(game) => game.action_label(action),
            Rule::Blotto(game) => game.action_label(action),
        }
    }

    fn get_ev(&self, a: ActionId, b: ActionId) -> f64 {
        match self {
            Rule::Rps(game) => game.get_ev(a, b),
            Rule::Blotto(game) => game.get_ev(a, b),
        }
    }
}

pub fn from_json(json: &str) -> Result<Rule> {
    let config: Config = serde_json::from_str(json).context("failed to deserialize game config")?;
    config.build()
}

pub fn from_file(path: &str) -> Result<Rule> {
    let json = fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    from_json(&json)
}

pub fn from_name(rule_name: &str) -> Result<Rule> {
    match rule_name {
        "rps" => Ok(Rule::Rps(Rps::new())),
        "blotto" => Ok(Rule::Blotto(Blotto::default())),
        _ => bail!("invalid rule name: {}", rule_name),
    }
}

/// A path to a JSON config if one exists there, a built-in name otherwise.
pub fn from_name_or_file(arg: &str) -> Result<Rule> {
    if Path::new(arg).is_file() {
        from_file(arg)
    } else {
        from_name(arg)
    }
}
