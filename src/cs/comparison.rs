use std::fmt;
use std::time::{Duration, Instant};

use crate::cs::dynamic::solve_exact;
use crate::cs::greedy::{solve_greedy, sorted_descending};
use crate::cs::solution::Solution;
use crate::error::Result;

/// A solver result and the wall-clock time the solver took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timed {
    pub solution: Solution,
    pub elapsed: Duration,
}

impl Timed {
    fn measure<F>(solve: F) -> Result<Self>
    where
        F: FnOnce() -> Result<Solution>,
    {
        let start = Instant::now();
        let solution = solve()?;
        Ok(Self {
            solution,
            elapsed: start.elapsed(),
        })
    }
}

/// Exact and greedy results for the same amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub amount: usize,
    pub denominations: Vec<usize>,
    pub exact: Timed,
    pub greedy: Timed,
}

impl Comparison {
    /// True when greedy found the optimum, or when neither solver could
    /// form the amount.
    pub fn greedy_is_optimal(&self) -> bool {
        self.exact.solution.count() == self.greedy.solution.count()
    }
}

/// Solves `amount` with both solvers and times each call.
///
/// The exact solver receives `denominations` as given. The greedy solver
/// receives a largest-first copy, so the caller's set is never reordered.
///
/// # Examples
///
/// ```
/// use change::compare;
///
/// let comparison = compare(&[1, 3, 4], 6).unwrap();
/// assert_eq!(comparison.exact.solution.count(), Some(2));
/// assert_eq!(comparison.greedy.solution.count(), Some(3));
/// assert!(!comparison.greedy_is_optimal());
/// ```
pub fn compare(denominations: &[usize], amount: usize) -> Result<Comparison> {
    let exact = Timed::measure(|| solve_exact(denominations, amount))?;
    let largest_first = sorted_descending(denominations);
    let greedy = Timed::measure(|| solve_greedy(&largest_first, amount))?;

    Ok(Comparison {
        amount,
        denominations: denominations.to_vec(),
        exact,
        greedy,
    })
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    amount: usize,
    timed: &Timed,
) -> fmt::Result {
    writeln!(f, "{}", title)?;
    match &timed.solution {
        Solution::Reachable(coins) => {
            writeln!(f, "  Minimum coins for {}: {}", amount, coins.len())?;
            writeln!(f, "  Coins used: {:?}", coins)?;
        }
        Solution::Unreachable => {
            writeln!(f, "  Cannot make change for {} with these coins", amount)?;
        }
    }
    writeln!(f, "  Elapsed: {:?}", timed.elapsed)
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available coins: {:?}", self.denominations)?;
        write_section(f, "Dynamic programming", self.amount, &self.exact)?;
        write_section(f, "Greedy", self.amount, &self.greedy)?;
        if !self.greedy_is_optimal() {
            writeln!(f, "Greedy did not find the minimum")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_compare_canonical_agrees() {
        let comparison = compare(&[1, 2, 5, 10, 20, 50, 100, 200], 37).unwrap();
        assert!(comparison.greedy_is_optimal());
        assert_eq!(
            comparison.exact.solution.tally(),
            comparison.greedy.solution.tally()
        );
    }

    #[test]
    fn test_compare_sorts_for_greedy() {
        // Ascending input still gets largest-first greedy.
        let comparison = compare(&[1, 2, 5], 7).unwrap();
        assert_eq!(comparison.greedy.solution.coins(), &[5, 2]);
        assert_eq!(comparison.denominations, vec![1, 2, 5]);
    }

    #[test]
    fn test_compare_greedy_unreachable() {
        let comparison = compare(&[2, 5, 10, 20, 50, 100, 200], 343).unwrap();
        assert!(comparison.exact.solution.is_reachable());
        assert_eq!(comparison.greedy.solution, Solution::Unreachable);
        assert!(!comparison.greedy_is_optimal());
    }

    #[test]
    fn test_compare_both_unreachable_counts_as_optimal() {
        let comparison = compare(&[2, 4], 3).unwrap();
        assert!(comparison.greedy_is_optimal());
    }

    #[test]
    fn test_compare_rejects_malformed_sets() {
        assert_eq!(compare(&[], 3), Err(Error::EmptyDenominations));
    }

    #[test]
    fn test_report_mentions_both_solvers() {
        let report = compare(&[1, 3, 4], 6).unwrap().to_string();
        assert!(report.contains("Available coins: [1, 3, 4]"));
        assert!(report.contains("Dynamic programming"));
        assert!(report.contains("Coins used: [3, 3]"));
        assert!(report.contains("Coins used: [4, 1, 1]"));
        assert!(report.contains("Greedy did not find the minimum"));
    }

    #[test]
    fn test_report_unreachable() {
        let report = compare(&[2, 4], 3).unwrap().to_string();
        assert!(report.contains("Cannot make change for 3 with these coins"));
    }
}
