//! Game constants.
//!
//! The card total is not configurable: it is always the triangular number
//! of `FINAL_PILE_COUNT`, which is what guarantees that every starting
//! configuration eventually reaches the terminal one.
//! See <http://en.wikipedia.org/wiki/Bulgarian_solitaire>.

/// Number of piles in the terminal configuration.
pub const FINAL_PILE_COUNT: u32 = 9;

/// Total number of cards in play: `1 + 2 + ... + FINAL_PILE_COUNT`.
pub const CARD_TOTAL: u32 = triangular(FINAL_PILE_COUNT);

/// Upper bound on the number of piles a board can hold (every pile has
/// at least one card).
pub const MAX_PILES: usize = CARD_TOTAL as usize;

/// Closed form of `1 + 2 + ... + n`.
#[must_use]
pub const fn triangular(n: u32) -> u32 {
    n * (n + 1) / 2
}
