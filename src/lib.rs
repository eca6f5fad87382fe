//! # bulgarian-solitaire
//!
//! A board model and simulator for Bulgarian Solitaire.
//!
//! `CARD_TOTAL` cards (the triangular number of `FINAL_PILE_COUNT`) are split
//! into piles. Each round one card is taken from every pile and the taken
//! cards form a new pile at the end. Because the total is triangular, every
//! starting configuration eventually reaches the terminal one: exactly one
//! pile of each size `1..=FINAL_PILE_COUNT`.
//!
//! ## Design Principles
//!
//! 1. **Validated construction**: Boards are only built from configurations
//!    that pass validation. Invalid input is an `InvalidConfig` error, never
//!    an invalid board.
//!
//! 2. **Order is observable**: Surviving piles keep their relative order and
//!    the new pile is appended, so rendered output is part of the contract.
//!
//! 3. **Reproducible randomness**: Random boards draw from a seedable
//!    `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Constants, errors, parsing, RNG and the `Board`
//! - `simulation`: Round-by-round runner with a round limit

pub mod core;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    Board, ConfigError, SolitaireError, Result,
    GameRng,
    is_valid_config_text, parse_config,
    CARD_TOTAL, FINAL_PILE_COUNT,
};

pub use crate::simulation::{Outcome, Simulation, DEFAULT_ROUND_LIMIT};
