use super::action::ActionId;
use rand::Rng;

/// Draw an action from `dist` by inverse-CDF sampling, using exactly one
/// uniform draw from `rng`.
///
/// Returns the first action whose cumulative probability reaches the draw.
/// Rounding can leave the total just under the draw; the last action is
/// returned then.
pub fn sample<R: Rng + ?Sized>(dist: &[f64], rng: &mut R) -> ActionId {
    let r: f64 = rng.random();
    let mut cum_prob = 0.0;
    for (i, prob) in dist.iter().enumerate() {
        cum_prob += prob;
        if cum_prob >= r {
            return ActionId::new(i);
        }
    }
    ActionId::new(dist.len().saturating_sub(1))
}
