pub mod coin_change;

// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::{count_change_ways, min_coins_for_change, solve_exact};
