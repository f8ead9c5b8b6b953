use crate::Arm;
use crate::Reward;

/// Per-arm running statistics visible to every selection policy.
///
/// This is the single place the sample-average update lives:
/// NewEstimate <- OldEstimate + (1/n)(Target - OldEstimate),
/// with step size exactly 1/n rather than a fixed learning rate. Every policy
/// shares it, so the estimate of an arm is always the arithmetic mean of the
/// rewards observed there (or the policy's initial value before any pull).
#[derive(Debug, Clone)]
pub struct Estimates {
    values: Vec<Reward>,
    counts: Vec<usize>,
}

impl Estimates {
    pub fn new(arms: usize, initial: Reward) -> Self {
        Self {
            values: vec![initial; arms],
            counts: vec![0; arms],
        }
    }

    pub fn arms(&self) -> usize {
        self.values.len()
    }
    pub fn value(&self, arm: Arm) -> Reward {
        self.values[arm]
    }
    pub fn count(&self, arm: Arm) -> usize {
        self.counts[arm]
    }

    /// Fold one observed reward into the chosen arm's running mean.
    pub fn update(&mut self, arm: Arm, reward: Reward) {
        let n = self.counts[arm] + 1;
        let q = self.values[arm];
        self.counts[arm] = n;
        self.values[arm] = q + (reward - q) / n as Reward;
    }

    /// All arms tied for the maximum estimate. Policies break these ties
    /// uniformly at random rather than by first index, which would bias
    /// early selection toward low arm indices.
    pub fn maxima(&self) -> Vec<Arm> {
        let max = self
            .values
            .iter()
            .cloned()
            .fold(Reward::NEG_INFINITY, Reward::max);
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == max)
            .map(|(a, _)| a)
            .collect()
    }

    /// Arms that have never been pulled.
    pub fn unpulled(&self) -> Vec<Arm> {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n == 0)
            .map(|(a, _)| a)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_tracks_batch_mean() {
        let rewards = [3.0, -1.5, 0.25, 8.0, 2.5];
        let mut estimates = Estimates::new(1, 0.);
        for r in rewards {
            estimates.update(0, r);
        }
        let mean = rewards.iter().sum::<f64>() / rewards.len() as f64;
        assert!((estimates.value(0) - mean).abs() < 1e-12);
        assert!(estimates.count(0) == rewards.len());
    }

    #[test]
    fn counts_track_selections() {
        let mut estimates = Estimates::new(3, 0.);
        estimates.update(1, 1.);
        estimates.update(1, 2.);
        estimates.update(2, 5.);
        assert!(estimates.count(0) == 0);
        assert!(estimates.count(1) == 2);
        assert!(estimates.count(2) == 1);
    }

    #[test]
    fn initial_value_survives_until_first_pull() {
        let mut estimates = Estimates::new(2, 5.);
        estimates.update(0, 1.);
        assert!(estimates.value(0) == 1.);
        assert!(estimates.value(1) == 5.);
    }

    #[test]
    fn maxima_collects_all_ties() {
        let mut estimates = Estimates::new(4, 0.);
        estimates.update(1, 2.);
        estimates.update(3, 2.);
        assert!(estimates.maxima() == vec![1, 3]);
    }

    #[test]
    fn unpulled_shrinks_with_coverage() {
        let mut estimates = Estimates::new(3, 0.);
        assert!(estimates.unpulled() == vec![0, 1, 2]);
        estimates.update(1, 0.);
        assert!(estimates.unpulled() == vec![0, 2]);
    }
}
