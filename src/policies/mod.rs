//! Arm-selection policies for the Bernoulli bandit.
//!
//! Every policy reads the shared [`History`] of pull records and picks the
//! next arm. Policies never see the true arm probabilities. Policies that
//! keep auxiliary state (such as [`ThompsonWithHint`]'s belief matrix)
//! refresh it from the observations passed to [`Policy::update`].

mod epsilon_greedy;
mod kl_ucb;
mod random;
mod thompson;
mod thompson_hint;
mod ucb;

pub use epsilon_greedy::EpsilonGreedy;
pub use kl_ucb::{KL_STABILIZER, KlUcb, SEARCH_TOLERANCE, bernoulli_kl, kl_upper_bound};
pub use random::Random;
pub use thompson::ThompsonSampling;
pub use thompson_hint::ThompsonWithHint;
pub use ucb::Ucb;

use crate::history::History;

/// Core trait for bandit decision policies
///
/// Note: This trait uses `dyn rand::RngCore` instead of a generic parameter
/// to maintain object-safety, so the simulation can hold a `Box<dyn Policy>`
/// chosen at runtime from an algorithm identifier.
pub trait Policy {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Select the next arm given the pull history
    ///
    /// # Returns
    /// The selected arm index, or None if the history has no arms
    fn select(&self, history: &History, rng: &mut dyn rand::RngCore) -> Option<usize>;

    /// Observe the reward of a pull
    ///
    /// Called once per pull, warm-up included, after the history has been
    /// updated.
    fn update(&mut self, arm: usize, reward: f64);
}

/// Index of the largest value, ties going to the lowest index.
///
/// NaN values are never selected. Returns None when no value is comparable.
pub(crate) fn argmax<I>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(usize, f64)> = None;
    for (idx, value) in values.into_iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        if best.is_none_or(|(_, current)| value > current) {
            best = Some((idx, value));
        }
    }
    best.map(|(idx, _)| idx)
}
