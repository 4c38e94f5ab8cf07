//! Convergence of the KL-UCB upper-bound search.

use regretsim::policies::{SEARCH_TOLERANCE, bernoulli_kl, kl_upper_bound};

fn means() -> impl Iterator<Item = f64> {
    (0..=100).map(|i| i as f64 / 100.0)
}

#[test]
fn test_bound_stays_within_mean_and_one() {
    for mean in means() {
        for pulls in [1, 5, 100, 10_000] {
            for threshold in [0.01, 0.5, 3.0, 20.0] {
                let q = kl_upper_bound(mean, pulls, threshold);
                assert!(q >= mean, "q={q} below mean={mean}");
                assert!(q <= 1.0, "q={q} above 1");
            }
        }
    }
}

#[test]
fn test_bound_is_tight_within_tolerance() {
    for mean in means() {
        for pulls in [1, 5, 100, 10_000] {
            for threshold in [0.01, 0.5, 3.0, 20.0] {
                let q = kl_upper_bound(mean, pulls, threshold);

                // just below q the constraint holds
                let below = (q - SEARCH_TOLERANCE).max(mean);
                assert!(
                    pulls as f64 * bernoulli_kl(mean, below) <= threshold + 1e-9,
                    "constraint violated below q: mean={mean} pulls={pulls} thres={threshold}"
                );

                // just above q it is violated, unless the search ran into 1
                let above = q + SEARCH_TOLERANCE;
                if above < 1.0 {
                    assert!(
                        pulls as f64 * bernoulli_kl(mean, above) > threshold,
                        "bound not tight: mean={mean} pulls={pulls} thres={threshold} q={q}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_bound_grows_with_threshold() {
    for mean in [0.0, 0.2, 0.5, 0.8] {
        let tight = kl_upper_bound(mean, 20, 0.5);
        let loose = kl_upper_bound(mean, 20, 5.0);
        assert!(loose >= tight);
    }
}

#[test]
fn test_divergence_is_finite_everywhere() {
    for p in means() {
        for q in means() {
            let kl = bernoulli_kl(p, q);
            assert!(kl.is_finite(), "KL({p} || {q}) = {kl}");
            assert!(kl > -1e-6);
        }
    }
}
