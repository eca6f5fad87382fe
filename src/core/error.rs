//! Error types.
//!
//! `ConfigError` says which validation rule a configuration broke.
//! `SolitaireError` is the crate-level error returned by fallible
//! constructors and by the driver.

use super::config::CARD_TOTAL;

/// A configuration text or pile sequence that does not describe a valid board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration has no piles")]
    Empty,

    #[error("token {index} ({token:?}) is not a base-10 integer")]
    MalformedToken { index: usize, token: String },

    #[error("pile {index} has {value} cards, every pile needs at least one")]
    NonPositivePile { index: usize, value: i64 },

    #[error("piles hold {sum} cards in total, expected {expected}")]
    WrongTotal { sum: u64, expected: u32 },
}

impl ConfigError {
    pub(crate) fn wrong_total(sum: u64) -> Self {
        ConfigError::WrongTotal {
            sum,
            expected: CARD_TOTAL,
        }
    }
}

/// Main error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum SolitaireError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience.
pub type Result<T> = std::result::Result<T, SolitaireError>;
