//! linediff - minimum-edit-distance line diffs
//!
//! This library aligns two sequences of lines with a generalized edit
//! distance and renders the differences for humans, plus assertion helpers
//! and a scenario runner built on top of it.

pub mod align;
pub mod check;
pub mod cli;
pub mod commands;
pub mod common;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use align::{align, levenshtein, Alignment, CostModel, ExactCosts, FnCosts, LineCosts};
pub use check::{Checker, Failure};
pub use common::{Config, Error, Result};
pub use report::{
    diff_lines, diff_text, escape, render, Body, DiffKind, DiffLine, Header, LineDiff, Report,
    ReportMode, ReportOptions,
};
pub use scenario::{run_scenario, ScenarioResult};
