use super::action::{ActionId, Distribution};
use ord_subset::OrdSubsetIterExt;

pub fn uniform(num_actions: usize) -> Distribution {
    filled_with(num_actions, 1.0 / num_actions as f64)
}

pub fn zeros(num_actions: usize) -> Distribution {
    filled_with(num_actions, 0.0)
}

pub fn filled_with(num_actions: usize, prob: f64) -> Distribution {
    vec![prob; num_actions]
}

pub fn positive_part(v: &[f64]) -> Distribution {
    v.iter().map(|&x| if x < 0.0 { 0.0 } else { x }).collect()
}

/// Scale `v` to sum to one, or uniform if it has no positive mass.
pub fn normalized(v: Distribution) -> Distribution {
    let norm: f64 = v.iter().sum();
    if norm <= 0.0 {
        uniform(v.len())
    } else {
        v.into_iter().map(|x| x / norm).collect()
    }
}

/// Most likely action.
pub fn mode(dist: &[f64]) -> Option<ActionId> {
    dist.iter()
        .enumerate()
        .ord_subset_max_by_key(|&(_, prob)| *prob)
        .map(|(i, _)| ActionId::new(i))
}
