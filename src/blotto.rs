//! Colonel Blotto: split a fixed number of troops across towers of given
//! value; a tower goes to whoever commits strictly more troops to it.

use super::{action::ActionId, game::Game};
use anyhow::{ensure, Result};
use std::cmp::Ordering;

/// Troops per tower, one entry per tower.
pub type Allocation = Vec<u32>;

#[derive(Clone, Debug)]
pub struct Blotto {
    tower_values: Vec<u32>,
    troops: u32,
    action_space: Vec<Allocation>,
}

impl Blotto {
    pub fn new(tower_values: Vec<u32>, troops: u32) -> Result<Self> {
        ensure!(!tower_values.is_empty(), "blotto needs at least one tower");
        ensure!(
            tower_values.iter().all(|&value| value > 0),
            "tower values must be positive: {:?}",
            tower_values
        );
        let action_space = allocations(tower_values.len(), troops);
        debug!(
            "blotto: {} towers, {} troops, {} actions",
            tower_values.len(),
            troops,
            action_space.len()
        );
        Ok(Blotto {
            tower_values,
            troops,
            action_space,
        })
    }

    pub fn tower_values(&self) -> &[u32] {
        &self.tower_values
    }

    pub fn troops(&self) -> u32 {
        self.troops
    }

    pub fn action_space(&self) -> &[Allocation] {
        &self.action_space
    }

    pub fn allocation(&self, action: ActionId) -> &Allocation {
        &self.action_space[action.index()]
    }
}

impl Default for Blotto {
    fn default() -> Self {
        Blotto {
            tower_values: vec![1, 2],
            troops: 5,
            action_space: allocations(2, 5),
        }
    }
}

/// Every way to split `troops` among `towers`, ordered by ascending choice
/// for the leading towers; the last tower takes the remainder.
fn allocations(towers: usize, troops: u32) -> Vec<Allocation> {
    let mut actions: Vec<Allocation> = Vec::new();
    let mut stack: Vec<Allocation> = vec![Vec::with_capacity(towers)];
    while let Some(prefix) = stack.pop() {
        let remaining = troops - prefix.iter().sum::<u32>();
        if prefix.len() + 1 == towers {
            let mut allocation = prefix;
            allocation.push(remaining);
            actions.push(allocation);
            continue;
        }
        // pushed in reverse so the smallest choice is expanded first
        for i in (0..=remaining).rev() {
            let mut next = prefix.clone();
            next.push(i);
            stack.push(next);
        }
    }
    actions
}

impl Game for Blotto {
    fn num_actions(&self) -> usize {
        self.action_space.len()
    }

    fn action_label(&self, action: ActionId) -> String {
        let troops: Vec<String> = self
            .allocation(action)
            .iter()
            .map(|t| t.to_string())
            .collect();
        format!("({})", troops.join(","))
    }

    fn get_ev(&self, a: ActionId, b: ActionId) -> f64 {
        self.allocation(a)
            .iter()
            .zip(self.allocation(b))
            .zip(&self.tower_values)
            .map(|((mine, theirs), &value)| match mine.cmp(theirs) {
                Ordering::Greater => value as f64,
                Ordering::Less => -(value as f64),
                Ordering::Equal => 0.0,
            })
            .sum()
    }
}
