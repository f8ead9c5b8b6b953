use super::estimates::Estimates;
use super::policy::Policy;
use crate::Arm;
use crate::Reward;
use rand::rngs::SmallRng;

/// Optimistic initialization.
///
/// Estimates start at Q1, chosen above any plausible true mean, and selection
/// is always greedy. Early exploration falls out of disappointment: every pull
/// drags the chosen arm's estimate down below the untouched optimists, so all
/// arms get tried before the estimates settle toward reality.
#[derive(Debug, Clone, Copy)]
pub struct OptimisticGreedy {
    q1: Reward,
}

impl OptimisticGreedy {
    pub fn new(q1: Reward) -> Self {
        Self { q1 }
    }

    pub fn q1(&self) -> Reward {
        self.q1
    }
}

impl Policy for OptimisticGreedy {
    fn initial(&self) -> Reward {
        self.q1
    }

    fn select(&self, estimates: &Estimates, _: usize, rng: &mut SmallRng) -> Arm {
        self.exploit(estimates, rng)
    }
}
