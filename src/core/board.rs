//! The Bulgarian Solitaire board.
//!
//! A `Board` is the ordered sequence of current pile sizes, oldest surviving
//! pile first and most recently created pile last.
//!
//! ## Invariants
//!
//! Hold before and after every public operation:
//! - `0 < pile_count() <= CARD_TOTAL`
//! - every pile has at least one card
//! - the piles sum to `CARD_TOTAL`
//!
//! ## Usage
//!
//! ```
//! use bulgarian_solitaire::core::Board;
//!
//! let mut board = Board::from_config("45").unwrap();
//! board.advance();
//! assert_eq!(board.render(), "44 1");
//!
//! while !board.is_terminal() {
//!     board.advance();
//! }
//! assert_eq!(board.pile_count(), 9);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{CARD_TOTAL, FINAL_PILE_COUNT, MAX_PILES};
use super::error::{ConfigError, Result, SolitaireError};
use super::parse::{self, parse_config, validate_piles};
use super::rng::GameRng;

/// Pile storage. Inline capacity covers the worst case of `CARD_TOTAL`
/// single-card piles, so a board never allocates.
type Piles = SmallVec<[u32; MAX_PILES]>;

/// Bulgarian Solitaire board state.
///
/// Serializes as a plain sequence of pile sizes. Deserializing re-validates,
/// so an invalid sequence is rejected rather than producing an invalid board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Board {
    piles: Piles,
}

impl Board {
    /// Create a board from configuration text such as `"20 20 5"`.
    ///
    /// Fails with `SolitaireError::InvalidConfig` when
    /// `is_valid_config_text(text)` would return false.
    pub fn from_config(text: &str) -> Result<Self> {
        let piles = parse_config(text)?;
        Ok(Self::new_unchecked(&piles))
    }

    /// Create a board from pile sizes, in pile order.
    pub fn from_piles(piles: &[u32]) -> Result<Self> {
        validate_piles(piles)?;
        Ok(Self::new_unchecked(piles))
    }

    /// Create a board with a random initial configuration.
    #[must_use]
    pub fn new_random() -> Self {
        Self::random(&mut GameRng::from_entropy())
    }

    /// Create a random board using the given generator.
    ///
    /// Each pile size is drawn uniformly from `1..=remaining`, where
    /// `remaining` is the number of cards not yet placed. This is not a
    /// uniform distribution over partitions; large first piles are favored.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Self {
        let mut piles = Piles::new();
        let mut remaining = CARD_TOTAL;

        while remaining > 0 {
            let size = rng.gen_range(1..=remaining);
            piles.push(size);
            remaining -= size;
        }

        let board = Self { piles };
        log::debug!("random board (seed {}): {}", rng.seed(), board);
        board.debug_check();
        board
    }

    fn new_unchecked(piles: &[u32]) -> Self {
        let board = Self {
            piles: Piles::from_slice(piles),
        };
        board.debug_check();
        board
    }

    /// Returns true iff `text` describes a valid board.
    ///
    /// Same as the free function `core::is_valid_config_text`.
    #[must_use]
    pub fn is_valid_config_text(text: &str) -> bool {
        parse::is_valid_config_text(text)
    }

    /// Current pile sizes, in pile order.
    #[must_use]
    pub fn piles(&self) -> &[u32] {
        &self.piles
    }

    /// Number of non-empty piles.
    #[must_use]
    pub fn pile_count(&self) -> usize {
        self.piles.len()
    }

    /// Play one round.
    ///
    /// Takes one card from every pile and puts them together in a new pile.
    /// Piles left empty are removed; the others keep their relative order,
    /// and the new pile goes at the end.
    pub fn advance(&mut self) {
        let new_pile = self.piles.len() as u32;

        self.piles.retain(|size| {
            *size -= 1;
            *size > 0
        });
        self.piles.push(new_pile);

        log::trace!("advanced to {}", self);
        self.debug_check();
    }

    /// Returns true iff the board holds exactly one pile of each size
    /// `1..=FINAL_PILE_COUNT`, in any order.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        is_terminal_configuration(&self.piles)
    }

    /// Current configuration as space-separated pile sizes.
    ///
    /// The result is always valid configuration text for this board.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn check_invariants(&self) -> std::result::Result<(), ConfigError> {
        validate_piles(&self.piles)
    }

    fn debug_check(&self) {
        debug_assert!(
            self.check_invariants().is_ok(),
            "board invariant broken: {:?}",
            self.piles
        );
    }
}

fn is_terminal_configuration(piles: &[u32]) -> bool {
    if piles.len() != FINAL_PILE_COUNT as usize {
        return false;
    }

    let mut seen = [false; FINAL_PILE_COUNT as usize];
    for &size in piles {
        if size == 0 || size > FINAL_PILE_COUNT {
            return false;
        }
        let slot = &mut seen[size as usize - 1];
        if *slot {
            return false;
        }
        *slot = true;
    }

    // Redundant with the count check given distinct in-range sizes.
    seen.iter().all(|&s| s)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sizes = self.piles.iter();
        if let Some(first) = sizes.next() {
            write!(f, "{first}")?;
            for size in sizes {
                write!(f, " {size}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = SolitaireError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_config(s)
    }
}

impl TryFrom<Vec<u32>> for Board {
    type Error = SolitaireError;

    fn try_from(piles: Vec<u32>) -> Result<Self> {
        Self::from_piles(&piles)
    }
}

impl From<Board> for Vec<u32> {
    fn from(board: Board) -> Self {
        board.piles.into_vec()
    }
}
