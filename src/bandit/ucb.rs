use super::estimates::Estimates;
use super::policy::Policy;
use crate::Arm;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Upper confidence bound selection.
///
/// Scores each arm as Q(a) + c * sqrt(ln(t) / N(a)) with t the 1-indexed step
/// number, then pulls the maximizer. The bonus term shrinks as an arm
/// accumulates pulls, so uncertainty itself drives exploration.
///
/// The formula is undefined while any N(a) = 0, so an unpulled arm takes
/// absolute priority: until every arm has been pulled once, selection is
/// uniform over the unpulled arms. Every arm therefore has N(a) >= 1 after
/// the first num_arms steps and the score is always finite.
#[derive(Debug, Clone, Copy)]
pub struct Ucb {
    c: f64,
}

impl Ucb {
    pub fn new(c: f64) -> Self {
        Self { c }
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    fn score(&self, estimates: &Estimates, arm: Arm, t: f64) -> f64 {
        estimates.value(arm) + self.c * (t.ln() / estimates.count(arm) as f64).sqrt()
    }
}

impl Policy for Ucb {
    fn select(&self, estimates: &Estimates, step: usize, rng: &mut SmallRng) -> Arm {
        let warmup = estimates.unpulled();
        if let Some(&arm) = warmup.choose(rng) {
            return arm;
        }
        let t = (step + 1) as f64;
        let scores = (0..estimates.arms())
            .map(|a| self.score(estimates, a, t))
            .collect::<Vec<_>>();
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        *scores
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == max)
            .map(|(a, _)| a)
            .collect::<Vec<_>>()
            .choose(rng)
            .expect("bandit has at least one arm")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn warmup_covers_every_arm_first() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let policy = Ucb::new(2.);
        let arms = 6;
        let mut estimates = Estimates::new(arms, 0.);
        for step in 0..arms {
            let arm = policy.select(&estimates, step, rng);
            assert!(estimates.count(arm) == 0);
            estimates.update(arm, 1.);
        }
        assert!((0..arms).all(|a| estimates.count(a) >= 1));
    }

    #[test]
    fn scores_stay_finite_after_warmup() {
        let ref mut rng = SmallRng::seed_from_u64(13);
        let policy = Ucb::new(2.);
        let arms = 4;
        let mut estimates = Estimates::new(arms, 0.);
        for step in 0..1000 {
            let arm = policy.select(&estimates, step, rng);
            estimates.update(arm, (arm as f64) * 0.1);
            if step >= arms {
                let t = (step + 1) as f64;
                for a in 0..arms {
                    assert!(policy.score(&estimates, a, t).is_finite());
                }
            }
        }
    }

    #[test]
    fn bonus_prefers_undersampled_arm_over_slight_favorite() {
        let ref mut rng = SmallRng::seed_from_u64(17);
        let policy = Ucb::new(2.);
        let mut estimates = Estimates::new(2, 0.);
        // arm 0 leads narrowly on estimate but is heavily sampled
        for _ in 0..100 {
            estimates.update(0, 0.6);
        }
        estimates.update(1, 0.5);
        assert!(policy.select(&estimates, 101, rng) == 1);
    }
}
