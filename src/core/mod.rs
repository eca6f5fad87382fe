//! Core types: constants, errors, configuration parsing, RNG and the board.
//!
//! Everything here is pure and synchronous. The driver (CLI) and the
//! simulation runner are built on top of this module's public contract.

pub mod config;
pub mod error;
pub mod parse;
pub mod rng;
pub mod board;

pub use config::{triangular, CARD_TOTAL, FINAL_PILE_COUNT, MAX_PILES};
pub use error::{ConfigError, Result, SolitaireError};
pub use parse::{is_valid_config_text, parse_config};
pub use rng::GameRng;
pub use board::Board;
