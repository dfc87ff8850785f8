use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};

/// Outcome of a change-making solver.
///
/// A reachable solution holds the denominations used, one entry per coin, so
/// its length is the coin count and its sum is the target amount. An amount
/// that cannot be formed is reported as `Unreachable` with no composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    Reachable(Vec<usize>),
    Unreachable,
}

impl Solution {
    /// Number of coins used, or `None` when the amount is unreachable.
    pub fn count(&self) -> Option<usize> {
        match self {
            Solution::Reachable(coins) => Some(coins.len()),
            Solution::Unreachable => None,
        }
    }

    /// The composition. Empty for unreachable amounts and for amount zero.
    pub fn coins(&self) -> &[usize] {
        match self {
            Solution::Reachable(coins) => coins,
            Solution::Unreachable => &[],
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Solution::Reachable(_))
    }

    /// Sum of the composition.
    pub fn total(&self) -> usize {
        self.coins().iter().sum()
    }

    /// Multiset view of the composition: denomination -> number of copies.
    ///
    /// # Examples
    ///
    /// ```
    /// use change::Solution;
    ///
    /// let solution = Solution::Reachable(vec![20, 10, 2, 2]);
    /// let tally = solution.tally();
    /// assert_eq!(tally[&2], 2);
    /// assert_eq!(tally[&20], 1);
    /// ```
    pub fn tally(&self) -> BTreeMap<usize, usize> {
        let mut tally = BTreeMap::new();
        for &coin in self.coins() {
            *tally.entry(coin).or_insert(0) += 1;
        }
        tally
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Reachable(coins) => write!(f, "{} coins: {:?}", coins.len(), coins),
            Solution::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Checks the input policy shared by both solvers.
///
/// The set must be non-empty and every denomination must be positive.
/// Duplicates are redundant but accepted.
pub fn validate_denominations(denominations: &[usize]) -> Result<()> {
    if denominations.is_empty() {
        return Err(Error::EmptyDenominations);
    }
    match denominations.iter().position(|&d| d == 0) {
        Some(index) => Err(Error::ZeroDenomination { index }),
        None => Ok(()),
    }
}
