use rand::Rng;

use super::Policy;
use crate::history::History;

/// Random selection policy - selects arms uniformly at random
///
/// Not one of the selectable algorithms; serves as a no-learning baseline
/// when judging the other policies.
#[derive(Clone, Debug, Default)]
pub struct Random;

impl Policy for Random {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select(&self, history: &History, rng: &mut dyn rand::RngCore) -> Option<usize> {
        match history.n_arms() {
            0 => None,
            n_arms => Some(rng.random_range(0..n_arms)),
        }
    }

    fn update(&mut self, _arm: usize, _reward: f64) {
        // Random policy doesn't learn from feedback
    }
}
