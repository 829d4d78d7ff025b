//! Assertion helpers built on the line diff
//!
//! A [`Checker`] runs comparisons and collects failures instead of
//! panicking, so one test can report every mismatch at once. Each check
//! returns `true` when it holds. Failures remember the source location of
//! the call that produced them and are logged through `tracing`.
//!
//! ```
//! use linediff::Checker;
//!
//! let mut check = Checker::new();
//! check.equals("answer", &42, &42);
//! check.text_equals("greeting", "hello\nworld", "hello\nworld");
//! assert!(check.finish().is_ok());
//! ```

use std::collections::BTreeSet;
use std::fmt::{self, Display};
use std::panic::Location;
use std::path::Path;

use crate::common::{Error, Result};
use crate::report::{diff_lines, escape, split_lines, text, LineDiff, ReportOptions};

/// Combined length below which string mismatches are shown on one line
const INLINE_LIMIT: usize = 70;

/// A failed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Source file of the failing call
    pub file: &'static str,
    /// Line of the failing call
    pub line: u32,
    pub message: String,
    /// Extra lines, such as a rendered diff
    pub details: Vec<String>,
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = Path::new(self.file)
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_else(|| self.file.into());
        write!(f, "{}:{}: {}", file, self.line, self.message)
    }
}

/// Collects the outcome of a series of checks
#[derive(Debug, Default)]
pub struct Checker {
    options: ReportOptions,
    failures: Vec<Failure>,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checker whose line diffs use the given report options
    pub fn with_options(options: ReportOptions) -> Self {
        Self {
            options,
            failures: Vec::new(),
        }
    }

    /// Failures recorded so far
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Whether every check so far held
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Consume the checker, turning recorded failures into an error
    pub fn finish(self) -> Result<()> {
        match self.failures.len() {
            0 => Ok(()),
            1 => Err(Error::TestAssertion(self.failures[0].to_string())),
            n => Err(Error::TestAssertion(format!(
                "{} checks failed; first: {}",
                n, self.failures[0]
            ))),
        }
    }

    #[track_caller]
    fn fail(&mut self, message: String, details: Vec<String>) -> bool {
        let location = Location::caller();
        tracing::warn!(
            file = location.file(),
            line = location.line(),
            "{}",
            message
        );
        for detail in &details {
            tracing::info!(file = location.file(), line = location.line(), "{}", detail);
        }
        self.failures.push(Failure {
            file: location.file(),
            line: location.line(),
            message,
            details,
        });
        false
    }

    /// `act` must equal `exp`
    #[track_caller]
    pub fn equals<T>(&mut self, name: &str, act: &T, exp: &T) -> bool
    where
        T: PartialEq + Display + ?Sized,
    {
        if act == exp {
            return true;
        }
        self.fail(
            format!(
                "{} is expected to be {}, but got {}",
                name,
                escape(&exp.to_string()),
                escape(&act.to_string())
            ),
            Vec::new(),
        )
    }

    /// `act` must differ from `exp`
    #[track_caller]
    pub fn not_equals<T>(&mut self, name: &str, act: &T, exp: &T) -> bool
    where
        T: PartialEq + Display + ?Sized,
    {
        if act != exp {
            return true;
        }
        self.fail(
            format!(
                "{} is expected not to be {}, but got {}",
                name,
                escape(&exp.to_string()),
                escape(&act.to_string())
            ),
            Vec::new(),
        )
    }

    #[track_caller]
    pub fn is_true(&mut self, name: &str, value: bool) -> bool {
        if value {
            return true;
        }
        self.fail(format!("{} unexpectedly got: {}", name, escape("false")), Vec::new())
    }

    #[track_caller]
    pub fn is_false(&mut self, name: &str, value: bool) -> bool {
        if !value {
            return true;
        }
        self.fail(format!("{} unexpectedly got: {}", name, escape("true")), Vec::new())
    }

    /// The displayed forms of `act` and `exp` must be equal
    #[track_caller]
    pub fn string_equals<A, E>(&mut self, name: &str, act: A, exp: E) -> bool
    where
        A: Display,
        E: Display,
    {
        let (act, exp) = (act.to_string(), exp.to_string());
        if act == exp {
            return true;
        }
        let message = if act.len() + exp.len() < INLINE_LIMIT {
            format!(
                "{} is expected to be {}, but got {}",
                name,
                escape(&exp),
                escape(&act)
            )
        } else {
            format!(
                "{} is expected to be\n{}, but got\n{}",
                name,
                escape(&exp),
                escape(&act)
            )
        };
        self.fail(message, Vec::new())
    }

    /// `act` and `exp` must hold the same strings, in any order
    ///
    /// On mismatch both sets are sorted and compared as lines.
    #[track_caller]
    pub fn str_set_equals<I, J, S, T>(&mut self, name: &str, act: I, exp: J) -> bool
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let act: BTreeSet<String> = act.into_iter().map(|s| s.as_ref().to_string()).collect();
        let exp: BTreeSet<String> = exp.into_iter().map(|s| s.as_ref().to_string()).collect();
        if act == exp {
            return true;
        }
        let act: Vec<String> = act.into_iter().collect();
        let exp: Vec<String> = exp.into_iter().collect();
        self.lines_equal(name, &act, &exp)
    }

    /// `act` and `exp` must be the same lines; a diff is reported otherwise
    #[track_caller]
    pub fn lines_equal<S: AsRef<str>>(&mut self, name: &str, act: &[S], exp: &[S]) -> bool {
        match diff_lines(exp, act, &self.options) {
            LineDiff::Equal => true,
            LineDiff::Different(report) => {
                self.fail(text::title(&report, name), text::details(&report))
            }
        }
    }

    /// Split both texts on newlines and compare them with [`Checker::lines_equal`]
    #[track_caller]
    pub fn text_equals(&mut self, name: &str, act: &str, exp: &str) -> bool {
        if act == exp {
            return true;
        }
        self.lines_equal(name, &split_lines(act), &split_lines(exp))
    }

    /// `result` must be `Ok`
    #[track_caller]
    pub fn no_error<T, E: Display>(&mut self, result: &std::result::Result<T, E>) -> bool {
        match result {
            Ok(_) => true,
            Err(e) => self.fail(e.to_string(), Vec::new()),
        }
    }

    /// Like [`Checker::no_error`], prefixing the message with `context`
    #[track_caller]
    pub fn no_error_with<T, E: Display>(
        &mut self,
        context: &str,
        result: &std::result::Result<T, E>,
    ) -> bool {
        match result {
            Ok(_) => true,
            Err(e) => self.fail(format!("{}: {}", context, e), Vec::new()),
        }
    }

    /// `f` must map every `src[k]` to `dst[k]`
    #[track_caller]
    pub fn maps<S, D, F>(&mut self, name: &str, src: &[S], dst: &[D], f: F) -> bool
    where
        S: Display,
        D: PartialEq + Display,
        F: Fn(&S) -> D,
    {
        if src.len() != dst.len() {
            return self.fail(
                format!(
                    "{} has {} inputs but {} expected outputs",
                    name,
                    src.len(),
                    dst.len()
                ),
                Vec::new(),
            );
        }

        let mut ok = true;
        for (s, exp) in src.iter().zip(dst) {
            let act = f(s);
            if act != *exp {
                ok = self.fail(
                    format!(
                        "{} is expected to be mapped by {} as {}, but got {}",
                        escape(&s.to_string()),
                        name,
                        escape(&exp.to_string()),
                        escape(&act.to_string())
                    ),
                    Vec::new(),
                );
            }
        }
        ok
    }
}
