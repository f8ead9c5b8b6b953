use thiserror::Error;

pub type BanditResult<T> = Result<T, BanditError>;

/// Precondition violations caught at construction time. None of these are
/// recoverable mid-run; we fail fast rather than divide by zero later.
#[derive(Error, Debug)]
pub enum BanditError {
    #[error("bandit must have at least one arm")]
    InvalidArmCount,

    #[error("simulation must run for at least one iteration")]
    InvalidIterationCount,

    #[error("experiment must average over at least one run")]
    InvalidRunCount,

    #[error("exploration probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("latent mean spread must be finite and non-negative, got {0}")]
    InvalidSpread(f64),
}
