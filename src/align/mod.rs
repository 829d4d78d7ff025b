//! Minimum-cost alignment of two sequences
//!
//! A dynamic-programming edit distance generalized to arbitrary costs.
//! The substitution, deletion and insertion costs come from a [`CostModel`],
//! so the same engine aligns lines of text, characters, or any other
//! element type.

mod cost;

pub use cost::{levenshtein, CostModel, ExactCosts, FnCosts, LineCosts};

use serde::Serialize;

/// Result of aligning an expected sequence against an actual sequence
///
/// `expected[i]` is the actual index aligned with expected element `i`, or
/// `None` when that element was deleted. `actual[j]` is the symmetric map,
/// `None` meaning the actual element was inserted. Matched pairs never
/// cross: if `i1 < i2` are both matched then `expected[i1] < expected[i2]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alignment {
    /// Minimum total cost of turning `expected` into `actual`
    pub cost: u64,
    pub expected: Vec<Option<usize>>,
    pub actual: Vec<Option<usize>>,
}

impl Alignment {
    /// Alignment of a sequence with itself: every element on the diagonal
    pub fn identity(len: usize) -> Self {
        let map: Vec<Option<usize>> = (0..len).map(Some).collect();
        Self {
            cost: 0,
            expected: map.clone(),
            actual: map,
        }
    }

    /// Iterate over matched `(expected, actual)` index pairs in order
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.expected
            .iter()
            .enumerate()
            .filter_map(|(i, j)| j.map(|j| (i, j)))
    }

    /// Number of expected elements with no counterpart
    pub fn deleted(&self) -> usize {
        self.expected.iter().filter(|j| j.is_none()).count()
    }

    /// Number of actual elements with no counterpart
    pub fn inserted(&self) -> usize {
        self.actual.iter().filter(|i| i.is_none()).count()
    }
}

/// Move that produced a table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Start,
    Diagonal,
    Insert,
    Delete,
}

/// One entry of the cost table
///
/// Besides the cost, each cell counts the zero-cost diagonal moves on its
/// best path, so that among equally cheap paths the one keeping the most
/// identical elements wins.
#[derive(Debug, Clone, Copy)]
struct Cell {
    cost: u64,
    matches: usize,
    step: Step,
}

impl Cell {
    const START: Cell = Cell {
        cost: 0,
        matches: 0,
        step: Step::Start,
    };

    fn then(self, step: Step, cost: u64) -> Self {
        let is_match = step == Step::Diagonal && cost == 0;
        Self {
            cost: self.cost.saturating_add(cost),
            matches: self.matches + usize::from(is_match),
            step,
        }
    }

    fn better_than(&self, other: &Cell) -> bool {
        self.cost < other.cost || (self.cost == other.cost && self.matches > other.matches)
    }
}

/// Compute a minimum-cost alignment of `expected` against `actual`
///
/// Ties are broken in favor of the diagonal move, then insertion, then
/// deletion. Walking back from the last cell this keeps changed pairs
/// together and places removals ahead of additions.
pub fn align<T, C>(expected: &[T], actual: &[T], costs: &C) -> Alignment
where
    C: CostModel<T> + ?Sized,
{
    let (n, m) = (expected.len(), actual.len());
    let width = m + 1;
    let mut table = vec![Cell::START; (n + 1) * width];

    for i in 1..=n {
        table[i * width] =
            table[(i - 1) * width].then(Step::Delete, costs.delete(&expected[i - 1]));
    }
    for j in 1..=m {
        table[j] = table[j - 1].then(Step::Insert, costs.insert(&actual[j - 1]));
    }

    for i in 1..=n {
        let exp = &expected[i - 1];
        let delete = costs.delete(exp);
        for j in 1..=m {
            let act = &actual[j - 1];

            let mut best =
                table[(i - 1) * width + j - 1].then(Step::Diagonal, costs.substitute(exp, act));
            let left = table[i * width + j - 1].then(Step::Insert, costs.insert(act));
            if left.better_than(&best) {
                best = left;
            }
            let up = table[(i - 1) * width + j].then(Step::Delete, delete);
            if up.better_than(&best) {
                best = up;
            }

            table[i * width + j] = best;
        }
    }

    let mut expected_map = vec![None; n];
    let mut actual_map = vec![None; m];
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        match table[i * width + j].step {
            Step::Diagonal => {
                expected_map[i - 1] = Some(j - 1);
                actual_map[j - 1] = Some(i - 1);
                i -= 1;
                j -= 1;
            }
            Step::Insert => j -= 1,
            Step::Delete => i -= 1,
            Step::Start => break,
        }
    }

    let cost = table[n * width + m].cost;
    tracing::trace!(expected = n, actual = m, cost, "aligned sequences");

    Alignment {
        cost,
        expected: expected_map,
        actual: actual_map,
    }
}
