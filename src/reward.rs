//! Bernoulli reward source.

use rand::Rng;

/// Draws one Bernoulli outcome: `1.0` with probability `p`, `0.0` otherwise.
///
/// Consumes exactly one uniform draw from `rng`, so a seeded generator makes
/// the whole reward sequence reproducible.
pub fn pull<R: Rng + ?Sized>(p: f64, rng: &mut R) -> f64 {
    if rng.random::<f64>() < p { 1.0 } else { 0.0 }
}
