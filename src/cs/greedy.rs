pub mod coin_change;

pub use coin_change::{solve_greedy, sorted_descending};
