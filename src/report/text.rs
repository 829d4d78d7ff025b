//! Text rendering of reports
//!
//! Plain lines for logs and assertion failures, colored output for the
//! terminal.

use colored::Colorize;

use super::{Body, DiffKind, DiffLine, Report};

/// Legend printed between the title and the diff lines
pub const LEGEND: &str = "Difference (- removed, + added, < > changed)";

/// Title line naming what was compared
pub fn title(report: &Report, name: &str) -> String {
    format!("Unexpected {}: {}", name, report.header)
}

/// Marker character for a diff line
pub fn marker(line: &DiffLine) -> char {
    match (line.kind, line.changed) {
        (DiffKind::Kept, _) => ' ',
        (DiffKind::Removed, false) => '-',
        (DiffKind::Added, false) => '+',
        (DiffKind::Removed, true) => '<',
        (DiffKind::Added, true) => '>',
    }
}

/// Format a single diff line as `<marker> <index>: <text>`
pub fn format_line(line: &DiffLine) -> String {
    format!("{} {:>3}: {}", marker(line), line.index, line.text)
}

/// Legend and body lines of a report, without the title
pub fn details(report: &Report) -> Vec<String> {
    match &report.body {
        Body::Lines(lines) => std::iter::once(LEGEND.to_string())
            .chain(lines.iter().map(format_line))
            .collect(),
        Body::Omitted { cells } => vec![omitted(*cells)],
    }
}

/// Every line of a report, title first
pub fn to_lines(report: &Report, name: &str) -> Vec<String> {
    let mut out = vec![title(report, name)];
    out.extend(details(report));
    out
}

fn omitted(cells: usize) -> String {
    format!(
        "lines differ ({} cells exceed the alignment limit), no detail",
        cells
    )
}

/// Print a report to stdout with colors
pub fn print_colored(report: &Report, name: &str) {
    println!("{}", title(report, name).bold());

    match &report.body {
        Body::Lines(lines) => {
            println!("{}", LEGEND.dimmed());
            for line in lines {
                let text = format_line(line);
                let styled = match (line.kind, line.changed) {
                    (DiffKind::Kept, _) => text.dimmed(),
                    (_, true) => text.yellow(),
                    (DiffKind::Removed, false) => text.red(),
                    (DiffKind::Added, false) => text.green(),
                };
                println!("{}", styled);
            }
        }
        Body::Omitted { cells } => println!("{}", omitted(*cells).yellow()),
    }
}
