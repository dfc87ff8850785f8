use log::{debug, trace};

use crate::cs::solution::{validate_denominations, Solution};
use crate::error::{Error, Result};

/// Makes change by taking as many coins of each denomination as fit, in the
/// order given.
///
/// Runs in `O(denominations.len())` time regardless of `amount`. Pass the set
/// sorted largest-first (see [`sorted_descending`]) for the usual
/// "largest coin first" strategy; the solver itself never reorders.
///
/// The result is optimal only for canonical sets such as `[200, 100, 50, 20,
/// 10, 5, 2, 1]`. On other sets it may use more coins than necessary, or
/// report `Unreachable` for an amount that can in fact be formed.
///
/// # Errors
///
/// Same input policy as [`solve_exact`](crate::solve_exact), and
/// [`Error::InvalidAmount`](crate::Error::InvalidAmount) when the composition
/// is too long to allocate.
///
/// # Examples
///
/// ```
/// use change::{solve_greedy, Solution};
///
/// let solution = solve_greedy(&[4, 3, 1], 6).unwrap();
/// assert_eq!(solution, Solution::Reachable(vec![4, 1, 1]));
///
/// // 6 = 3 + 3, but taking a 4 first leaves 2.
/// assert_eq!(solve_greedy(&[4, 3], 6).unwrap(), Solution::Unreachable);
/// ```
pub fn solve_greedy(denominations: &[usize], amount: usize) -> Result<Solution> {
    validate_denominations(denominations)?;
    debug!(
        "greedy solver: amount {} over {} denominations",
        amount,
        denominations.len()
    );

    let mut remaining = amount;
    let mut coins = Vec::new();
    for &coin in denominations {
        let copies = remaining / coin;
        if copies == 0 {
            continue;
        }
        trace!("greedy solver: {} x {}", copies, coin);
        coins.try_reserve(copies).map_err(|_| {
            Error::InvalidAmount(format!("{} copies of {} do not fit in memory", copies, coin))
        })?;
        coins.extend(std::iter::repeat(coin).take(copies));
        remaining -= copies * coin;
    }

    let solution = if remaining == 0 {
        Solution::Reachable(coins)
    } else {
        debug!("greedy solver: {} left over", remaining);
        Solution::Unreachable
    };
    debug!("greedy solver: amount {} -> {}", amount, solution);
    Ok(solution)
}

/// Returns a largest-first copy of `denominations` with repeats removed.
///
/// # Examples
///
/// ```
/// use change::greedy::sorted_descending;
///
/// assert_eq!(sorted_descending(&[1, 5, 2, 5]), vec![5, 2, 1]);
/// ```
pub fn sorted_descending(denominations: &[usize]) -> Vec<usize> {
    let mut sorted = denominations.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.dedup();
    sorted
}
