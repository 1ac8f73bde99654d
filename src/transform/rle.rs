// Run-length encoding over i64 samples.
//
// The encoder emits maximal runs in scan order: no two adjacent runs carry
// the same value, and expanding the runs reproduces the input exactly.

use std::fmt;

/// `length` consecutive copies of `value`. `length` is at least 1 for every
/// run produced by [`encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub value: i64,
    pub length: usize,
}

impl Run {
    pub const fn new(value: i64, length: usize) -> Self {
        Self { value, length }
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.value, self.length)
    }
}

impl From<(i64, usize)> for Run {
    fn from((value, length): (i64, usize)) -> Self {
        Self { value, length }
    }
}

/// Collapse consecutive equal values into runs.
pub fn encode(values: &[i64]) -> Vec<Run> {
    let Some((&first, rest)) = values.split_first() else {
        return Vec::new();
    };

    let mut runs = Vec::new();
    let mut current = Run::new(first, 1);

    for &v in rest {
        if v == current.value {
            current.length += 1;
        } else {
            runs.push(current);
            current = Run::new(v, 1);
        }
    }

    // The open run is always closed, even when the input is a single run.
    runs.push(current);
    runs
}

/// Expand runs back into the flat value sequence.
pub fn expand(runs: &[Run]) -> Vec<i64> {
    let total: usize = runs.iter().map(|r| r.length).sum();
    let mut out = Vec::with_capacity(total);
    for run in runs {
        out.extend(std::iter::repeat_n(run.value, run.length));
    }
    out
}

/// True when no two adjacent runs share a value and no run is empty.
pub fn is_maximal(runs: &[Run]) -> bool {
    runs.iter().all(|r| r.length > 0) && runs.windows(2).all(|w| w[0].value != w[1].value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(pairs: &[(i64, usize)]) -> Vec<Run> {
        pairs.iter().copied().map(Run::from).collect()
    }

    #[test]
    fn text_scenario_deltas() {
        assert_eq!(
            encode(&[97, 0, 0, 1, 0, 0, 1, 0, 1]),
            runs(&[(97, 1), (0, 2), (1, 1), (0, 2), (1, 1), (0, 1), (1, 1)])
        );
    }

    #[test]
    fn single_run_is_emitted() {
        assert_eq!(encode(&[7, 7, 7, 7]), runs(&[(7, 4)]));
        assert_eq!(encode(&[7]), runs(&[(7, 1)]));
    }

    #[test]
    fn last_run_is_not_dropped() {
        assert_eq!(encode(&[1, 1, 2]), runs(&[(1, 2), (2, 1)]));
        assert_eq!(encode(&[1, 2, 2, 2]), runs(&[(1, 1), (2, 3)]));
    }

    #[test]
    fn long_run() {
        let values = vec![42i64; 1000];
        assert_eq!(encode(&values), runs(&[(42, 1000)]));
        assert_eq!(expand(&encode(&values)), values);
    }

    #[test]
    fn empty_in_empty_out() {
        assert!(encode(&[]).is_empty());
        assert!(expand(&[]).is_empty());
    }

    #[test]
    fn expansion_reproduces_input() {
        let original = vec![5, 5, 5, 5, 8, 8, 8, 2, 9, 9, 9, 9, 9, -1];
        let encoded = encode(&original);
        assert!(is_maximal(&encoded));
        assert_eq!(expand(&encoded), original);
    }

    #[test]
    fn maximality_check() {
        assert!(is_maximal(&runs(&[(1, 1), (2, 1), (1, 1)])));
        assert!(!is_maximal(&runs(&[(1, 1), (1, 1)])));
        assert!(!is_maximal(&runs(&[(1, 0)])));
        assert!(is_maximal(&[]));
    }

    #[test]
    fn display_format() {
        assert_eq!(Run::new(-15, 1).to_string(), "(-15,1)");
        assert_eq!(Run::new(0, 3).to_string(), "(0,3)");
    }
}
