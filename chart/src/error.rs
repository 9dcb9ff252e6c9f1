use thiserror::Error;

/// Rejected type input. Every variant is an input error: retrying with the
/// same input yields the same result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("Invalid type: {0:?}")]
    InvalidType(String),

    #[error("No defending types given")]
    NoDefenderTypes,

    #[error("Too many defending types: {0} (at most 2)")]
    TooManyDefenderTypes(usize),
}
