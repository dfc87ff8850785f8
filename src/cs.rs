pub mod comparison;
pub mod denominations;
pub mod dynamic;
pub mod greedy;
pub mod solution;

pub use comparison::{compare, Comparison, Timed};
pub use denominations::Preset;
pub use dynamic::{count_change_ways, min_coins_for_change, solve_exact};
pub use greedy::{solve_greedy, sorted_descending};
pub use solution::{validate_denominations, Solution};
