use thiserror::Error;

/// Errors reported for malformed solver inputs.
///
/// An amount that cannot be formed is not an error; the solvers report it as
/// [`Solution::Unreachable`](crate::cs::Solution::Unreachable).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("denomination set is empty")]
    EmptyDenominations,
    #[error("denomination at index {index} is zero")]
    ZeroDenomination { index: usize },
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("unknown denomination preset: {0}")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, Error>;
