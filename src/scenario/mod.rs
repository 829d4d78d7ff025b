//! Comparison scenarios
//!
//! Reads YAML files listing expected/actual pairs and runs each pair
//! through the assertion helpers, printing a diff for every mismatch.

mod config;
mod runner;

pub use config::*;
pub use runner::{load_scenario, run_scenario, ScenarioResult};
