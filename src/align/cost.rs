//! Cost models for the alignment engine

/// Pricing of the three edit operations
///
/// `substitute` must return 0 exactly when the two elements are considered
/// identical. Costs are never negative.
pub trait CostModel<T: ?Sized> {
    /// Cost of aligning `expected` with `actual`
    fn substitute(&self, expected: &T, actual: &T) -> u64;

    /// Cost of dropping an expected element
    fn delete(&self, expected: &T) -> u64;

    /// Cost of introducing an actual element
    fn insert(&self, actual: &T) -> u64;
}

/// Costs used for text lines in reports
///
/// Two different lines cost their character edit distance plus one, and a
/// line inserted or deleted on its own costs its length plus one. A changed
/// line is therefore always cheaper than removing it and adding the new one,
/// and nearly identical lines get paired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCosts;

impl<S: AsRef<str>> CostModel<S> for LineCosts {
    fn substitute(&self, expected: &S, actual: &S) -> u64 {
        let (a, b) = (expected.as_ref(), actual.as_ref());
        if a == b {
            0
        } else {
            levenshtein(a, b) + 1
        }
    }

    fn delete(&self, expected: &S) -> u64 {
        char_len(expected.as_ref()) + 1
    }

    fn insert(&self, actual: &S) -> u64 {
        char_len(actual.as_ref()) + 1
    }
}

/// Equality-only costs: a mismatch is priced as one delete plus one insert
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactCosts;

impl<T: PartialEq + ?Sized> CostModel<T> for ExactCosts {
    fn substitute(&self, expected: &T, actual: &T) -> u64 {
        if expected == actual {
            0
        } else {
            2
        }
    }

    fn delete(&self, _expected: &T) -> u64 {
        1
    }

    fn insert(&self, _actual: &T) -> u64 {
        1
    }
}

/// Cost model assembled from three closures
pub struct FnCosts<S, D, I> {
    substitute: S,
    delete: D,
    insert: I,
}

impl<S, D, I> FnCosts<S, D, I> {
    pub fn new(substitute: S, delete: D, insert: I) -> Self {
        Self {
            substitute,
            delete,
            insert,
        }
    }
}

impl<T, S, D, I> CostModel<T> for FnCosts<S, D, I>
where
    T: ?Sized,
    S: Fn(&T, &T) -> u64,
    D: Fn(&T) -> u64,
    I: Fn(&T) -> u64,
{
    fn substitute(&self, expected: &T, actual: &T) -> u64 {
        (self.substitute)(expected, actual)
    }

    fn delete(&self, expected: &T) -> u64 {
        (self.delete)(expected)
    }

    fn insert(&self, actual: &T) -> u64 {
        (self.insert)(actual)
    }
}

fn char_len(s: &str) -> u64 {
    s.chars().count() as u64
}

/// Unit-cost edit distance between two strings, counted in characters
pub fn levenshtein(a: &str, b: &str) -> u64 {
    if a == b {
        return 0;
    }

    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<u64> = (0..=b.len() as u64).collect();
    let mut cur = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        cur[0] = i as u64 + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = prev[j] + u64::from(ca != cb);
            cur[j + 1] = substitute.min(prev[j + 1] + 1).min(cur[j] + 1);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[b.len()]
}
