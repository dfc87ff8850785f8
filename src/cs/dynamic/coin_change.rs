use log::debug;

use crate::cs::solution::{validate_denominations, Solution};
use crate::error::{Error, Result};

/// One entry of the bottom-up table: the minimum number of coins for an
/// amount, and the denomination appended last to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    count: usize,
    last: usize,
}

impl Cell {
    const ORIGIN: Cell = Cell { count: 0, last: 0 };
}

/// Smallest block worth handing to rayon. Narrower blocks are filled
/// sequentially, since dispatch costs more than the cells it covers.
#[cfg(feature = "parallel")]
const MIN_PARALLEL_BLOCK: usize = 64;

/// Computes the fewest coins that sum exactly to `amount`, together with the
/// coins themselves.
///
/// This is the unbounded change-making problem: each denomination may be used
/// any number of times. The result is optimal for every denomination set, not
/// only canonical ones. It runs in `O(amount * denominations.len())` time and
/// keeps one back-pointer per amount, so memory is `O(amount)`.
///
/// When several denominations give the same minimal count, the first one in
/// `denominations` order wins. The composition is returned largest-first.
///
/// # Errors
///
/// Returns [`Error::EmptyDenominations`](crate::Error::EmptyDenominations) or
/// [`Error::ZeroDenomination`](crate::Error::ZeroDenomination) for a malformed
/// set, and [`Error::InvalidAmount`](crate::Error::InvalidAmount) when the
/// table for `amount` cannot be allocated. An amount that cannot be formed is
/// `Ok(Solution::Unreachable)`.
///
/// # Examples
///
/// ```
/// use change::{solve_exact, Solution};
///
/// // Greedy would take 4 + 1 + 1; the optimum is 3 + 3.
/// let solution = solve_exact(&[1, 3, 4], 6).unwrap();
/// assert_eq!(solution, Solution::Reachable(vec![3, 3]));
///
/// // Odd amounts cannot be formed from even coins.
/// assert_eq!(solve_exact(&[2, 4], 3).unwrap(), Solution::Unreachable);
/// ```
pub fn solve_exact(denominations: &[usize], amount: usize) -> Result<Solution> {
    validate_denominations(denominations)?;
    debug!(
        "exact solver: amount {} over {} denominations",
        amount,
        denominations.len()
    );

    let table = fill_table(denominations, amount)?;
    let solution = reconstruct(&table, amount);

    debug!("exact solver: amount {} -> {}", amount, solution);
    Ok(solution)
}

/// Computes the minimum number of coins needed to form the target `amount`.
///
/// Returns `Ok(None)` if it's impossible to form the `amount` using the given
/// `coins`. Zero-valued coins are ignored, and an empty set can only form 0.
///
/// # Errors
///
/// [`Error::InvalidAmount`](crate::Error::InvalidAmount) when the table for
/// `amount` cannot be allocated.
///
/// # Examples
///
/// ```
/// use change::min_coins_for_change;
///
/// // Minimum 3 coins: 6 + 6 + 6 = 18
/// let coins = vec![1, 6, 10];
/// assert_eq!(min_coins_for_change(&coins, 18), Ok(Some(3)));
///
/// // Impossible to form 7 from [2,4], so returns None
/// let coins2 = vec![2, 4];
/// assert_eq!(min_coins_for_change(&coins2, 7), Ok(None));
/// ```
pub fn min_coins_for_change(coins: &[usize], amount: usize) -> Result<Option<usize>> {
    let usable: Vec<usize> = coins.iter().copied().filter(|&coin| coin > 0).collect();
    let table = fill_table(&usable, amount)?;
    Ok(table[amount].map(|cell| cell.count))
}

/// Computes the number of distinct ways to form `amount` using the given `coins`.
///
/// Two ways are the same if they use the same multiset of coins, so repeated
/// and zero-valued coins are ignored. Counts saturate at `usize::MAX`.
///
/// # Errors
///
/// [`Error::InvalidAmount`](crate::Error::InvalidAmount) when the table for
/// `amount` cannot be allocated.
///
/// # Examples
///
/// ```
/// use change::count_change_ways;
///
/// // There are 4 ways to make 5 using [1,2,5]:
/// //   1) 1+1+1+1+1
/// //   2) 1+1+1+2
/// //   3) 1+2+2
/// //   4) 5
/// assert_eq!(count_change_ways(&[1, 2, 5], 5), Ok(4));
/// ```
pub fn count_change_ways(coins: &[usize], amount: usize) -> Result<usize> {
    let mut distinct: Vec<usize> = coins.iter().copied().filter(|&coin| coin > 0).collect();
    distinct.sort_unstable();
    distinct.dedup();

    // dp[i] will be the number of ways to form amount i.
    let mut dp = allocate(amount, 0_usize)?;
    dp[0] = 1;

    // Coins in the outer loop so each multiset is counted once.
    for &coin in &distinct {
        for curr_amount in coin..=amount {
            dp[curr_amount] = dp[curr_amount].saturating_add(dp[curr_amount - coin]);
        }
    }

    Ok(dp[amount])
}

/// A table with one slot per amount in `0..=amount`, all set to `fill`.
fn allocate<T: Clone>(amount: usize, fill: T) -> Result<Vec<T>> {
    let too_large = || Error::InvalidAmount(format!("{} is too large to tabulate", amount));
    let len = amount.checked_add(1).ok_or_else(too_large)?;
    let mut table = Vec::new();
    table.try_reserve_exact(len).map_err(|_| too_large())?;
    table.resize(len, fill);
    Ok(table)
}

/// Best cell for `target`, given every cell below it that a coin can reach.
///
/// `solved` must cover `target - coin` for each usable coin.
fn best_cell(solved: &[Option<Cell>], coins: &[usize], target: usize) -> Option<Cell> {
    let mut best: Option<Cell> = None;
    for &coin in coins {
        if coin > target {
            continue;
        }
        if let Some(prev) = solved[target - coin] {
            let count = prev.count + 1;
            if !matches!(best, Some(cell) if cell.count <= count) {
                best = Some(Cell { count, last: coin });
            }
        }
    }
    best
}

/// Fills the table for amounts `0..=amount`. All coins must be positive.
fn fill_table(coins: &[usize], amount: usize) -> Result<Vec<Option<Cell>>> {
    #[cfg(feature = "parallel")]
    {
        if coins.iter().min().is_some_and(|&width| width >= MIN_PARALLEL_BLOCK) {
            return fill_table_blocked(coins, amount);
        }
    }
    fill_table_sequential(coins, amount)
}

fn fill_table_sequential(coins: &[usize], amount: usize) -> Result<Vec<Option<Cell>>> {
    let mut table = allocate(amount, None)?;
    table[0] = Some(Cell::ORIGIN);
    for target in 1..=amount {
        table[target] = best_cell(&table[..target], coins, target);
    }
    Ok(table)
}

/// Fills the table in blocks as wide as the smallest coin. A cell only reads
/// cells at least one smallest-coin below it, so no cell in a block depends on
/// another cell of the same block. Only pays off once the smallest coin
/// reaches [`MIN_PARALLEL_BLOCK`]; sets with small coins such as 1 or 2 would
/// dispatch one rayon job per cell or two.
#[cfg(feature = "parallel")]
fn fill_table_blocked(coins: &[usize], amount: usize) -> Result<Vec<Option<Cell>>> {
    use rayon::prelude::*;

    let mut table = allocate(amount, None)?;
    table[0] = Some(Cell::ORIGIN);
    let Some(&width) = coins.iter().min() else {
        return Ok(table);
    };

    let mut start = 1;
    while start <= amount {
        let end = start.saturating_add(width).min(amount + 1);
        let (solved, block) = table.split_at_mut(start);
        let solved = &*solved;
        block[..end - start]
            .par_iter_mut()
            .enumerate()
            .for_each(|(offset, cell)| *cell = best_cell(solved, coins, start + offset));
        start = end;
    }
    Ok(table)
}

/// Walks the back-pointers from `amount` down to zero.
fn reconstruct(table: &[Option<Cell>], amount: usize) -> Solution {
    let Some(cell) = table[amount] else {
        return Solution::Unreachable;
    };

    let mut coins = Vec::with_capacity(cell.count);
    let mut remaining = amount;
    while let Some(Cell { last, .. }) = table[remaining].filter(|step| step.count > 0) {
        coins.push(last);
        remaining -= last;
    }
    debug_assert_eq!(remaining, 0);

    coins.sort_unstable_by(|a, b| b.cmp(a));
    Solution::Reachable(coins)
}
