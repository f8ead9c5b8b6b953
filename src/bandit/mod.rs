//! The bandit simulation engine.
//!
//! A run wires three pieces together: a hidden reward model
//! ([`GaussianArms`]), the shared incremental value estimator
//! ([`Estimates`]), and one selection [`Policy`]. [`Simulation`] drives a
//! single trial (pull, observe, update, record) and [`Experiment`] averages
//! many independent trials per parameter value into a [`Sweep`].

mod error;
mod estimates;
mod experiment;
mod gaussian;
mod greedy;
mod optimism;
mod policy;
mod simulation;
mod ucb;

pub use error::*;
pub use estimates::*;
pub use experiment::*;
pub use gaussian::*;
pub use greedy::*;
pub use optimism::*;
pub use policy::*;
pub use simulation::*;
pub use ucb::*;
