//! Scenario runner implementation
//!
//! Loads a scenario file, runs each comparison through a [`Checker`] and
//! prints progress with the diff of every failing case.

use std::path::Path;

use colored::Colorize;

use crate::check::{Checker, Failure};
use crate::common::paths::resolve;
use crate::common::{Error, Result};
use crate::report::ReportOptions;

use super::config::{value_text, Case, Scenario};

/// Result of a scenario run
#[derive(Debug)]
pub struct ScenarioResult {
    pub name: String,
    pub passed: bool,
    pub cases_failed: usize,
    pub cases_total: usize,
    pub failures: Vec<Failure>,
}

/// Load a scenario from a YAML file
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, e))?;

    serde_yaml::from_str(&content).map_err(|e| {
        Error::Scenario(format!(
            "Failed to parse scenario '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Run a scenario from a YAML file
pub fn run_scenario(path: &Path, options: &ReportOptions, verbose: bool) -> Result<ScenarioResult> {
    let scenario = load_scenario(path)?;
    let cases_total = scenario.cases.len();

    tracing::debug!(path = %path.display(), cases = cases_total, "Running scenario");

    println!(
        "\n{} {}",
        "Running Scenario:".blue().bold(),
        scenario.name.white().bold()
    );

    if let Some(desc) = &scenario.description {
        println!("  {}", desc.dimmed());
    }

    // File cases resolve relative to the scenario file
    let base_dir = path.parent().unwrap_or(Path::new("."));
    let mut checker = Checker::with_options(options.clone());
    let mut failed_cases = 0;

    println!("\n{}", "Cases:".cyan());

    for (i, case) in scenario.cases.iter().enumerate() {
        let case_num = i + 1;
        let before = checker.failures().len();

        if execute_case(&mut checker, case, base_dir)? {
            println!(
                "  {} Case {}: {} {}",
                "✓".green(),
                case_num,
                case.name(),
                format!("({})", case.kind()).dimmed()
            );
        } else {
            failed_cases += 1;
            println!(
                "  {} Case {}: {} {}",
                "✗".red(),
                case_num,
                case.name(),
                format!("({})", case.kind()).dimmed()
            );
            for failure in &checker.failures()[before..] {
                print_failure(failure, verbose);
            }
        }
    }

    let failures = checker.failures().to_vec();
    let passed = failures.is_empty();

    if passed {
        println!("\n{} {}\n", "✓".green().bold(), "Scenario Passed".green().bold());
    } else {
        println!(
            "\n{} {}\n",
            "✗".red().bold(),
            format!("Scenario Failed ({} of {} cases)", failed_cases, cases_total)
                .red()
                .bold()
        );
    }

    Ok(ScenarioResult {
        name: scenario.name,
        passed,
        cases_failed: failed_cases,
        cases_total,
        failures,
    })
}

/// Execute a single case
fn execute_case(checker: &mut Checker, case: &Case, base_dir: &Path) -> Result<bool> {
    let ok = match case {
        Case::Text {
            name,
            expected,
            actual,
        } => checker.text_equals(name, actual, expected),
        Case::Lines {
            name,
            expected,
            actual,
        } => checker.lines_equal(name, actual, expected),
        Case::Set {
            name,
            expected,
            actual,
        } => checker.str_set_equals(name, actual, expected),
        Case::Value {
            name,
            expected,
            actual,
        } => checker.string_equals(name, value_text(actual), value_text(expected)),
        Case::Files {
            name,
            expected_file,
            actual_file,
        } => {
            let expected = read_case_file(&resolve(base_dir, expected_file))?;
            let actual = read_case_file(&resolve(base_dir, actual_file))?;
            checker.text_equals(name, &actual, &expected)
        }
    };
    Ok(ok)
}

fn read_case_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::file_read(path, e))
}

fn print_failure(failure: &Failure, verbose: bool) {
    for line in failure.message.lines() {
        println!("      {}", line.red());
    }
    for detail in &failure.details {
        let styled = match detail.chars().next() {
            Some('-') => detail.red(),
            Some('+') => detail.green(),
            Some('<') | Some('>') => detail.yellow(),
            _ => detail.dimmed(),
        };
        println!("      {}", styled);
    }
    if verbose {
        println!("      {}", format!("at {}:{}", failure.file, failure.line).dimmed());
    }
}
