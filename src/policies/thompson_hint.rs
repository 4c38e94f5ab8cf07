use faer::Mat;
use tracing::warn;

use super::{Policy, argmax};
use crate::error::{Result, SimulationError};
use crate::history::History;

/// Thompson Sampling with a hint of the true success rates
///
/// The hint is the sorted set of arm probabilities without arm identities.
/// The policy keeps an `n x n` belief matrix whose row `i` is the posterior
/// over which hinted rate belongs to arm `i`, and pulls the arm most likely
/// to own the best hinted rate.
#[derive(Clone, Debug)]
pub struct ThompsonWithHint {
    hint: Vec<f64>,
    /// Column of the largest hinted rate
    best_hint: usize,
    /// Row `arm`, column `j`: P(arm has rate `hint[j]`)
    belief: Mat<f64>,
}

impl ThompsonWithHint {
    /// Creates the policy from the hinted rates, one per arm.
    pub fn new(hint: Vec<f64>) -> Result<Self> {
        if hint.is_empty() {
            return Err(SimulationError::NoArmsAvailable);
        }
        if let Some((index, &value)) = hint
            .iter()
            .enumerate()
            .find(|(_, p)| !(0.0..=1.0).contains(*p))
        {
            return Err(SimulationError::InvalidProbability { index, value });
        }

        let n = hint.len();
        let best_hint = argmax(hint.iter().copied()).unwrap_or(0);
        let belief = Mat::from_fn(n, n, |_, _| 1.0 / n as f64);

        Ok(Self {
            hint,
            best_hint,
            belief,
        })
    }

    /// The hinted rates
    pub fn hint(&self) -> &[f64] {
        &self.hint
    }

    /// Index into the hint of its largest rate
    pub fn best_hint(&self) -> usize {
        self.best_hint
    }

    /// Posterior over hinted rates for one arm
    pub fn belief_row(&self, arm: usize) -> Vec<f64> {
        (0..self.hint.len()).map(|j| self.belief[(arm, j)]).collect()
    }
}

impl Policy for ThompsonWithHint {
    fn name(&self) -> &'static str {
        "thompson-sampling-with-hint"
    }

    fn select(&self, history: &History, _rng: &mut dyn rand::RngCore) -> Option<usize> {
        let n_arms = history.n_arms().min(self.hint.len());
        argmax((0..n_arms).map(|arm| self.belief[(arm, self.best_hint)]))
    }

    /// Bayesian update of the pulled arm's row; other rows are untouched.
    fn update(&mut self, arm: usize, reward: f64) {
        let n = self.hint.len();
        if arm >= n {
            return;
        }

        let posterior: Vec<f64> = (0..n)
            .map(|j| {
                let rate = self.hint[j];
                let likelihood = rate.powf(reward) * (1.0 - rate).powf(1.0 - reward);
                likelihood * self.belief[(arm, j)]
            })
            .collect();
        let normalizer: f64 = posterior.iter().sum();

        if !(normalizer > 0.0 && normalizer.is_finite()) {
            warn!(arm, reward, "observation impossible under every hinted rate, belief kept");
            return;
        }

        for (j, weight) in posterior.into_iter().enumerate() {
            self.belief[(arm, j)] = weight / normalizer;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;

    #[test]
    fn test_belief_starts_uniform() {
        let policy = ThompsonWithHint::new(vec![0.2, 0.5, 0.8]).unwrap();
        assert_eq!(policy.best_hint(), 2);
        for arm in 0..3 {
            for value in policy.belief_row(arm) {
                assert_abs_diff_eq!(value, 1.0 / 3.0);
            }
        }
    }

    #[test]
    fn test_update_matches_bayes_rule() {
        let mut policy = ThompsonWithHint::new(vec![0.2, 0.8]).unwrap();
        policy.update(0, 1.0);

        // prior 1/2 each, likelihoods 0.2 and 0.8
        let row = policy.belief_row(0);
        assert_abs_diff_eq!(row[0], 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(row[1], 0.8, epsilon = 1e-12);

        // other rows are untouched
        assert_eq!(policy.belief_row(1), vec![0.5, 0.5]);

        policy.update(0, 0.0);
        // 0.2 * 0.8 vs 0.8 * 0.2
        let row = policy.belief_row(0);
        assert_abs_diff_eq!(row[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(row[1], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_rows_stay_normalized() {
        let mut policy = ThompsonWithHint::new(vec![0.1, 0.3, 0.6, 0.9]).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        let history = History::new(4);

        for step in 0..500 {
            let arm = policy.select(&history, &mut rng).unwrap();
            let reward = if step % 3 == 0 { 1.0 } else { 0.0 };
            policy.update(arm, reward);

            for row in 0..4 {
                let sum: f64 = policy.belief_row(row).iter().sum();
                assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_select_follows_best_column() {
        let mut policy = ThompsonWithHint::new(vec![0.1, 0.9]).unwrap();
        let history = History::new(2);
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);

        // uniform belief, tie goes to arm 0
        assert_eq!(policy.select(&history, &mut rng), Some(0));

        // a failure on arm 0 makes the 0.9 rate less likely for it
        policy.update(0, 0.0);
        assert_eq!(policy.select(&history, &mut rng), Some(1));
    }

    #[test]
    fn test_impossible_observation_keeps_belief() {
        let mut policy = ThompsonWithHint::new(vec![1.0, 1.0]).unwrap();
        policy.update(1, 0.0);
        assert_eq!(policy.belief_row(1), vec![0.5, 0.5]);
    }

    #[test]
    fn test_certain_rates() {
        let mut policy = ThompsonWithHint::new(vec![0.0, 1.0]).unwrap();
        policy.update(0, 0.0);
        assert_eq!(policy.belief_row(0), vec![1.0, 0.0]);
        policy.update(1, 1.0);
        assert_eq!(policy.belief_row(1), vec![0.0, 1.0]);
    }

    #[test]
    fn test_invalid_hint() {
        assert!(matches!(
            ThompsonWithHint::new(Vec::new()),
            Err(SimulationError::NoArmsAvailable)
        ));
        assert!(matches!(
            ThompsonWithHint::new(vec![0.5, -0.1]),
            Err(SimulationError::InvalidProbability { index: 1, .. })
        ));
    }
}
