//! Simulation runner.
//!
//! Drives a `Board` round by round until it reaches the terminal
//! configuration, with a round limit as a backstop for the driver loop.

mod runner;

pub use runner::{Outcome, Simulation, DEFAULT_ROUND_LIMIT};
