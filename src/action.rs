use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ActionId(usize);

impl ActionId {
    pub const fn new(id: usize) -> Self {
        ActionId(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Probability per action, indexed by `ActionId::index`.
pub type Distribution = Vec<f64>;

/// Every action id of a space with `num_actions` entries, in index order.
pub fn all(num_actions: usize) -> impl Iterator<Item = ActionId> {
    (0..num_actions).map(ActionId::new)
}
