use super::estimates::Estimates;
use crate::Arm;
use crate::Reward;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// An action-selection strategy.
///
/// The three strategies share the same state layout ([`Estimates`]) and the
/// same update rule; they differ only in how estimates are initialized and
/// which arm gets pulled next. Selection takes the RNG explicitly so that a
/// run owns its entire source of randomness and stays reproducible.
pub trait Policy: Sync {
    /// Starting estimate assigned to every arm before the first pull.
    fn initial(&self) -> Reward {
        0.
    }

    /// Choose the arm to pull. `step` is the 0-indexed iteration number.
    fn select(&self, estimates: &Estimates, step: usize, rng: &mut SmallRng) -> Arm;

    /// Greedy choice among all arms tied for the maximum estimate,
    /// ties broken uniformly at random.
    fn exploit(&self, estimates: &Estimates, rng: &mut SmallRng) -> Arm {
        *estimates
            .maxima()
            .choose(rng)
            .expect("bandit has at least one arm")
    }
}
