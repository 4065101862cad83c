//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait and the
//! [balance::BalanceCorpus] pipeline built on top of it.
pub mod balance;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use balance::BalanceCorpus;
pub use pipeline::Pipeline;
