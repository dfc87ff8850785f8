pub mod cs;
pub mod error;

pub use cs::{
    compare, count_change_ways, dynamic, greedy, min_coins_for_change, solve_exact, solve_greedy,
    Comparison, Preset, Solution,
};
pub use error::{Error, Result};
