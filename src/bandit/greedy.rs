use super::error::BanditError;
use super::error::BanditResult;
use super::estimates::Estimates;
use super::policy::Policy;
use crate::Arm;
use crate::Probability;
use rand::Rng;
use rand::rngs::SmallRng;

/// Epsilon-greedy selection.
///
/// With probability epsilon, pull a uniformly random arm (exploration);
/// otherwise pull greedily among the current maximum estimates. Estimates
/// start at zero.
#[derive(Debug, Clone, Copy)]
pub struct EpsilonGreedy {
    epsilon: Probability,
}

impl EpsilonGreedy {
    pub fn new(epsilon: Probability) -> BanditResult<Self> {
        if (0. ..=1.).contains(&epsilon) {
            Ok(Self { epsilon })
        } else {
            Err(BanditError::InvalidProbability(epsilon))
        }
    }

    pub fn epsilon(&self) -> Probability {
        self.epsilon
    }
}

impl Policy for EpsilonGreedy {
    fn select(&self, estimates: &Estimates, _: usize, rng: &mut SmallRng) -> Arm {
        if rng.random::<f64>() < self.epsilon {
            rng.random_range(0..estimates.arms())
        } else {
            self.exploit(estimates, rng)
        }
    }
}
