//! Encoder process infrastructure module

mod runner;

pub use runner::ProcessRunner;
