//! CLI command handling
//!
//! Dispatches CLI commands and formats output. Every command returns
//! whether everything it compared was equal.

use std::io::BufRead;
use std::path::Path;

use colored::Colorize;

use crate::commands::{Commands, OutputFormat};
use crate::common::{Config, Error, Result};
use crate::report::{diff_text, escape, text, LineDiff, ReportMode};
use crate::scenario::run_scenario;

/// Dispatch a CLI command
pub fn dispatch(command: Commands, config: &Config, verbose: bool) -> Result<bool> {
    match command {
        Commands::Diff {
            expected,
            actual,
            name,
            full,
            format,
            max_cells,
        } => {
            let mut options = config.report_options();
            if full {
                options.mode = ReportMode::Full;
            }
            if let Some(max_cells) = max_cells {
                options.max_cells = max_cells;
            }

            let expected_text = read_file(&expected)?;
            let actual_text = read_file(&actual)?;
            let name = name.unwrap_or_else(|| actual.display().to_string());

            let diff = diff_text(&expected_text, &actual_text, &options);

            match format {
                OutputFormat::Text => print_diff(&diff, &name),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&diff)?),
            }

            Ok(diff.is_equal())
        }

        Commands::Check { paths, full } => {
            let mut options = config.report_options();
            if full {
                options.mode = ReportMode::Full;
            }

            let mut passed = 0;
            for path in &paths {
                let result = run_scenario(path, &options, verbose)?;
                if result.passed {
                    passed += 1;
                }
            }

            let failed = paths.len() - passed;
            let summary = format!("{} passed, {} failed", passed, failed);
            if failed == 0 {
                println!("{}", summary.green().bold());
            } else {
                println!("{}", summary.red().bold());
            }

            Ok(failed == 0)
        }

        Commands::Escape { text } => {
            match text {
                Some(text) => println!("{}", escape(&text)),
                None => {
                    // Only the newline is a terminator; a preceding '\r' is content
                    let mut stdin = std::io::stdin().lock();
                    let mut line = String::new();
                    while stdin.read_line(&mut line)? > 0 {
                        let content = line.strip_suffix('\n').unwrap_or(&line);
                        println!("{}", escape(content));
                        line.clear();
                    }
                }
            }
            Ok(true)
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::file_read(path, e))
}

fn print_diff(diff: &LineDiff, name: &str) {
    match diff {
        LineDiff::Equal => println!("{}: {}", name, "no difference".green()),
        LineDiff::Different(report) => text::print_colored(report, name),
    }
}
