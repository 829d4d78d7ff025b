//! Line difference reports
//!
//! Turns an [`Alignment`] of two line sequences into annotated display
//! lines. Only differences are reported unless [`ReportMode::Full`] is
//! requested, in which case equal aligned lines are kept as well.

pub mod text;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::align::{align, Alignment, LineCosts};

/// Default cap on the size of the alignment table
pub const DEFAULT_MAX_CELLS: usize = 4_000_000;

/// Which aligned lines a report contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// Only removed, added and changed lines
    #[default]
    Differences,
    /// Equal aligned lines too
    Full,
}

/// Options controlling how reports are built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub mode: ReportMode,
    /// Largest `expected.len() * actual.len()` that gets aligned; 0 disables the cap
    pub max_cells: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            mode: ReportMode::Differences,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

/// Kind of a report line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    Kept,
    Removed,
    Added,
}

/// One annotated line of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    pub kind: DiffKind,
    /// 1-based position in the expected sequence (kept/removed) or the actual sequence (added)
    pub index: usize,
    /// Escaped line text
    pub text: String,
    /// Half of a remove+add pair for two aligned but unequal lines
    pub changed: bool,
}

impl DiffLine {
    fn new(kind: DiffKind, position: usize, raw: &str, changed: bool) -> Self {
        Self {
            kind,
            index: position + 1,
            text: escape(raw),
            changed,
        }
    }
}

/// Line counts shown above the diff lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header {
    pub expected_len: usize,
    pub actual_len: usize,
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.expected_len == self.actual_len {
            write!(f, "both {} lines", self.expected_len)
        } else {
            write!(f, "exp {}, act {} lines", self.expected_len, self.actual_len)
        }
    }
}

/// Detail section of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Lines(Vec<DiffLine>),
    /// The inputs were too large to align; only the verdict is available
    Omitted { cells: usize },
}

/// A rendered difference between two line sequences
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub header: Header,
    pub body: Body,
}

impl Report {
    /// Diff lines of the report, empty when detail was omitted
    pub fn lines(&self) -> &[DiffLine] {
        match &self.body {
            Body::Lines(lines) => lines.as_slice(),
            Body::Omitted { .. } => &[],
        }
    }

    /// Number of lines of the given kind
    pub fn count(&self, kind: DiffKind) -> usize {
        self.lines().iter().filter(|line| line.kind == kind).count()
    }
}

/// Verdict of comparing two line sequences
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum LineDiff {
    Equal,
    Different(Report),
}

impl LineDiff {
    pub fn is_equal(&self) -> bool {
        matches!(self, LineDiff::Equal)
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            LineDiff::Equal => None,
            LineDiff::Different(report) => Some(report),
        }
    }
}

/// Escape a line for terminal display
///
/// Control characters 1 through 26 become a caret escape (`\n` is `^J`,
/// `\t` is `^I`) and a `.` is appended so trailing whitespace stays visible.
pub fn escape(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 1);
    for c in line.chars() {
        match c as u32 {
            code @ 1..=26 => {
                out.push('^');
                out.push(char::from(b'A' + (code - 1) as u8));
            }
            _ => out.push(c),
        }
    }
    out.push('.');
    out
}

/// Split text into lines on `'\n'`
///
/// Every separator starts a new line, so `""` is one empty line and
/// `"a\n"` is `["a", ""]`.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Walk an alignment and produce the annotated diff lines
pub fn render<S: AsRef<str>>(
    expected: &[S],
    actual: &[S],
    alignment: &Alignment,
    mode: ReportMode,
) -> Vec<DiffLine> {
    let (n, m) = (expected.len(), actual.len());
    let mut lines = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < n || j < m {
        if j >= m || (i < n && alignment.expected[i].is_none()) {
            lines.push(DiffLine::new(DiffKind::Removed, i, expected[i].as_ref(), false));
            i += 1;
        } else if i >= n || alignment.actual[j].is_none() {
            lines.push(DiffLine::new(DiffKind::Added, j, actual[j].as_ref(), false));
            j += 1;
        } else {
            let (exp, act) = (expected[i].as_ref(), actual[j].as_ref());
            if exp != act {
                lines.push(DiffLine::new(DiffKind::Removed, i, exp, true));
                lines.push(DiffLine::new(DiffKind::Added, j, act, true));
            } else if mode == ReportMode::Full {
                lines.push(DiffLine::new(DiffKind::Kept, i, exp, false));
            }
            i += 1;
            j += 1;
        }
    }

    lines
}

/// Compare two line sequences and report their differences
pub fn diff_lines<S: AsRef<str>>(
    expected: &[S],
    actual: &[S],
    options: &ReportOptions,
) -> LineDiff {
    let equal = expected.len() == actual.len()
        && expected
            .iter()
            .zip(actual)
            .all(|(a, b)| a.as_ref() == b.as_ref());
    if equal {
        return LineDiff::Equal;
    }

    let header = Header {
        expected_len: expected.len(),
        actual_len: actual.len(),
    };

    let cells = expected.len().saturating_mul(actual.len());
    if options.max_cells > 0 && cells > options.max_cells {
        tracing::info!(
            cells,
            max_cells = options.max_cells,
            "Inputs too large to align, omitting diff detail"
        );
        return LineDiff::Different(Report {
            header,
            body: Body::Omitted { cells },
        });
    }

    let alignment = align(expected, actual, &LineCosts);
    tracing::debug!(
        expected = expected.len(),
        actual = actual.len(),
        cost = alignment.cost,
        "Lines differ"
    );

    LineDiff::Different(Report {
        header,
        body: Body::Lines(render(expected, actual, &alignment, options.mode)),
    })
}

/// Compare two blocks of text line by line
pub fn diff_text(expected: &str, actual: &str, options: &ReportOptions) -> LineDiff {
    if expected == actual {
        return LineDiff::Equal;
    }
    diff_lines(&split_lines(expected), &split_lines(actual), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn differences(expected: &[&str], actual: &[&str]) -> Vec<(DiffKind, usize, String)> {
        match diff_lines(expected, actual, &ReportOptions::default()) {
            LineDiff::Equal => Vec::new(),
            LineDiff::Different(report) => report
                .lines()
                .iter()
                .map(|line| (line.kind, line.index, line.text.clone()))
                .collect(),
        }
    }

    fn line(kind: DiffKind, index: usize, text: &str) -> (DiffKind, usize, String) {
        (kind, index, text.to_string())
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a\n\r\u{c}\tb"), "a^J^M^L^Ib.");
        assert_eq!(escape("\u{1}\u{1a}"), "^A^Z.");
    }

    #[test]
    fn test_escape_leaves_safe_text_alone() {
        assert_eq!(escape(""), ".");
        assert_eq!(escape("plain text  "), "plain text  .");
        assert_eq!(escape("\0 and \u{1b}"), "\0 and \u{1b}.");
        assert_eq!(escape("ünïcödé"), "ünïcödé.");
    }

    #[test]
    fn test_equal_lines() {
        let diff = diff_lines(&["abc"], &["abc"], &ReportOptions::default());
        assert!(diff.is_equal());
        assert!(diff.report().is_none());
    }

    #[test]
    fn test_changed_line_is_remove_then_add() {
        assert_eq!(
            differences(&["a", "b", "c"], &["a", "x", "c"]),
            vec![line(DiffKind::Removed, 2, "b."), line(DiffKind::Added, 2, "x.")]
        );
    }

    #[test]
    fn test_empty_expected() {
        assert_eq!(
            differences(&[], &["a", "b"]),
            vec![line(DiffKind::Added, 1, "a."), line(DiffKind::Added, 2, "b.")]
        );
    }

    #[test]
    fn test_empty_actual() {
        assert_eq!(
            differences(&["a", "b"], &[]),
            vec![line(DiffKind::Removed, 1, "a."), line(DiffKind::Removed, 2, "b.")]
        );
    }

    #[test]
    fn test_transposition() {
        assert_eq!(
            differences(&["x", "y"], &["y", "x"]),
            vec![line(DiffKind::Removed, 1, "x."), line(DiffKind::Added, 2, "x.")]
        );

        let options = ReportOptions {
            mode: ReportMode::Full,
            ..ReportOptions::default()
        };
        let diff = diff_lines(&["x", "y"], &["y", "x"], &options);
        let kinds: Vec<_> = diff
            .report()
            .unwrap()
            .lines()
            .iter()
            .map(|l| (l.kind, l.index))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (DiffKind::Removed, 1),
                (DiffKind::Kept, 2),
                (DiffKind::Added, 2)
            ]
        );
    }

    #[test]
    fn test_changed_flag() {
        let diff = diff_lines(
            &["keep", "old"],
            &["keep", "olds", "brand new line"],
            &ReportOptions::default(),
        );
        let lines = diff.report().unwrap().lines().to_vec();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].changed && lines[1].changed);
        assert_eq!(lines[2].kind, DiffKind::Added);
        assert_eq!(lines[2].index, 3);
        assert!(!lines[2].changed);
    }

    #[test]
    fn test_full_mode_accounts_for_every_line() {
        let expected = ["header", "a", "b", "c", "footer"];
        let actual = ["header", "b", "c2", "d", "footer", "tail"];
        let options = ReportOptions {
            mode: ReportMode::Full,
            ..ReportOptions::default()
        };
        let diff = diff_lines(&expected, &actual, &options);
        let report = diff.report().unwrap();
        let kept = report.count(DiffKind::Kept);
        assert_eq!(report.count(DiffKind::Removed) + kept, expected.len());
        assert_eq!(report.count(DiffKind::Added) + kept, actual.len());
    }

    #[test]
    fn test_header() {
        let same = Header {
            expected_len: 3,
            actual_len: 3,
        };
        assert_eq!(same.to_string(), "both 3 lines");
        let other = Header {
            expected_len: 2,
            actual_len: 5,
        };
        assert_eq!(other.to_string(), "exp 2, act 5 lines");
    }

    #[test]
    fn test_size_cap_omits_detail() {
        let expected: Vec<String> = (0..10).map(|i| format!("line {i}")).collect();
        let actual: Vec<String> = (0..10).map(|i| format!("row {i}")).collect();
        let options = ReportOptions {
            max_cells: 50,
            ..ReportOptions::default()
        };
        match diff_lines(&expected, &actual, &options) {
            LineDiff::Different(report) => {
                assert_eq!(report.body, Body::Omitted { cells: 100 });
                assert!(report.lines().is_empty());
            }
            LineDiff::Equal => panic!("Expected a difference"),
        }

        let uncapped = ReportOptions {
            max_cells: 0,
            ..ReportOptions::default()
        };
        let diff = diff_lines(&expected, &actual, &uncapped);
        assert_eq!(diff.report().unwrap().lines().len(), 20);
    }

    #[test]
    fn test_diff_text_splits_on_newlines() {
        let diff = diff_text("a\nb\n", "a\nb", &ReportOptions::default());
        let report = diff.report().unwrap();
        assert_eq!(
            report.header,
            Header {
                expected_len: 3,
                actual_len: 2
            }
        );
        assert_eq!(report.lines()[0].kind, DiffKind::Removed);
        assert_eq!(report.lines()[0].index, 3);
        assert_eq!(report.lines()[0].text, ".");
    }

    #[test]
    fn test_escaped_text_in_report() {
        let diff = diff_lines(&["a\tb"], &["a b"], &ReportOptions::default());
        let texts: Vec<_> = diff
            .report()
            .unwrap()
            .lines()
            .iter()
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(texts, vec!["a^Ib.", "a b."]);
    }

    #[test]
    fn test_serializes_verdict() {
        let json = serde_json::to_value(diff_lines(&["a"], &["b"], &ReportOptions::default()))
            .unwrap();
        assert_eq!(json["verdict"], "different");
        assert_eq!(json["header"]["expected_len"], 1);
        assert_eq!(json["body"]["lines"][0]["kind"], "removed");

        let json = serde_json::to_value(LineDiff::Equal).unwrap();
        assert_eq!(json["verdict"], "equal");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn lines() -> impl Strategy<Value = Vec<String>> {
            prop::collection::vec("[ab\t]{0,3}", 0..7)
        }

        proptest! {
            /// Text without control characters 1..=26 only gains the trailing dot
            #[test]
            fn escape_keeps_safe_text(s in "[^\x01-\x1a]*") {
                prop_assert_eq!(escape(&s), format!("{}.", s));
            }

            /// Escaped text never contains a raw control character 1..=26
            #[test]
            fn escape_removes_control_characters(s in any::<String>()) {
                let escaped = escape(&s);
                prop_assert!(escaped.ends_with('.'));
                prop_assert!(!escaped.chars().any(|c| matches!(c as u32, 1..=26)));
            }

            /// Equal inputs are reported equal, anything else yields a report
            #[test]
            fn verdict_matches_equality(xs in lines(), ys in lines()) {
                let diff = diff_lines(&xs, &ys, &ReportOptions::default());
                prop_assert_eq!(diff.is_equal(), xs == ys);
            }

            /// A full report lists every expected and every actual line once, in order
            #[test]
            fn full_report_is_complete(xs in lines(), ys in lines()) {
                let alignment = align(&xs, &ys, &LineCosts);
                let lines = render(&xs, &ys, &alignment, ReportMode::Full);

                let from_expected: Vec<usize> = lines
                    .iter()
                    .filter(|l| l.kind != DiffKind::Added)
                    .map(|l| l.index)
                    .collect();
                prop_assert_eq!(from_expected, (1..=xs.len()).collect::<Vec<_>>());

                let added: Vec<usize> = lines
                    .iter()
                    .filter(|l| l.kind == DiffKind::Added)
                    .map(|l| l.index)
                    .collect();
                let kept = lines.iter().filter(|l| l.kind == DiffKind::Kept).count();
                prop_assert_eq!(added.len() + kept, ys.len());
                prop_assert!(added.windows(2).all(|w| w[0] < w[1]));

                let deleted = alignment.deleted();
                let changed = lines.iter().filter(|l| l.kind == DiffKind::Removed && l.changed).count();
                prop_assert_eq!(
                    lines.iter().filter(|l| l.kind == DiffKind::Removed).count(),
                    deleted + changed
                );
            }

            /// Differences mode is the full report without the kept lines
            #[test]
            fn differences_drop_only_kept_lines(xs in lines(), ys in lines()) {
                let alignment = align(&xs, &ys, &LineCosts);
                let full = render(&xs, &ys, &alignment, ReportMode::Full);
                let differences = render(&xs, &ys, &alignment, ReportMode::Differences);
                let expected: Vec<DiffLine> = full
                    .into_iter()
                    .filter(|l| l.kind != DiffKind::Kept)
                    .collect();
                prop_assert_eq!(differences, expected);
            }
        }
    }
}
