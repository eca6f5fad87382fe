//! Round-by-round simulation of a board.

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::core::Board;

/// Default number of rounds after which a simulation gives up.
///
/// With the fixed triangular card total every start converges in at most
/// `FINAL_PILE_COUNT * (FINAL_PILE_COUNT - 1)` rounds, far below this.
pub const DEFAULT_ROUND_LIMIT: u32 = 1000;

/// How a simulation run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The board reached the terminal configuration after `rounds` rounds.
    Terminal { rounds: u32 },
    /// The round limit was hit before the board became terminal.
    RoundLimit { rounds: u32 },
}

impl Outcome {
    /// Number of rounds played.
    #[must_use]
    pub fn rounds(self) -> u32 {
        match self {
            Outcome::Terminal { rounds } | Outcome::RoundLimit { rounds } => rounds,
        }
    }

    /// Did the board reach the terminal configuration?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Outcome::Terminal { .. })
    }
}

/// A board plus the number of rounds played on it.
///
/// ```
/// use bulgarian_solitaire::core::Board;
/// use bulgarian_solitaire::simulation::{Outcome, Simulation};
///
/// let mut sim = Simulation::new(Board::from_config("1 2 3 4 5 6 7 8 9").unwrap());
/// assert_eq!(sim.run(), Outcome::Terminal { rounds: 0 });
/// ```
#[derive(Clone, Debug)]
pub struct Simulation {
    board: Board,
    rounds: u32,
    round_limit: u32,
}

impl Simulation {
    /// Start a simulation from `board`.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            rounds: 0,
            round_limit: DEFAULT_ROUND_LIMIT,
        }
    }

    /// Set the round limit.
    #[must_use]
    pub fn with_round_limit(mut self, limit: u32) -> Self {
        self.round_limit = limit;
        self
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Rounds played so far.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Is the board in the terminal configuration?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.board.is_terminal()
    }

    /// Play one round unless the board is already terminal.
    ///
    /// Returns the 1-based index of the round just played. The round limit
    /// is not consulted here; see `limit_reached`.
    pub fn step(&mut self) -> Option<u32> {
        if self.board.is_terminal() {
            return None;
        }
        self.board.advance();
        self.rounds += 1;
        Some(self.rounds)
    }

    /// Has the round limit been used up?
    #[must_use]
    pub fn limit_reached(&self) -> bool {
        self.rounds >= self.round_limit
    }

    /// Play until terminal or the round limit, calling `observe` after
    /// every round with the round index and the new board.
    pub fn run_with<F>(&mut self, mut observe: F) -> Outcome
    where
        F: FnMut(u32, &Board),
    {
        let result: Result<Outcome, Infallible> = self.try_run_with(|round, board| {
            observe(round, board);
            Ok(())
        });
        match result {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }

    /// Like `run_with`, but the observer may fail. The first error stops
    /// the run and is returned; the round it was raised for has been played.
    pub fn try_run_with<F, E>(&mut self, mut observe: F) -> Result<Outcome, E>
    where
        F: FnMut(u32, &Board) -> Result<(), E>,
    {
        log::debug!("simulating from {}", self.board);

        while !self.board.is_terminal() {
            if self.limit_reached() {
                log::warn!(
                    "round limit {} reached without terminating: {}",
                    self.round_limit,
                    self.board
                );
                return Ok(Outcome::RoundLimit { rounds: self.rounds });
            }
            if let Some(round) = self.step() {
                observe(round, &self.board)?;
            }
        }

        log::debug!("terminal after {} rounds: {}", self.rounds, self.board);
        Ok(Outcome::Terminal { rounds: self.rounds })
    }

    /// Play until terminal or the round limit.
    pub fn run(&mut self) -> Outcome {
        self.run_with(|_, _| {})
    }

    /// Consume the simulation, returning the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(config: &str) -> Simulation {
        Simulation::new(Board::from_config(config).unwrap())
    }

    #[test]
    fn test_step() {
        let mut s = sim("45");
        assert_eq!(s.step(), Some(1));
        assert_eq!(s.board().piles(), &[44, 1]);
        assert_eq!(s.step(), Some(2));
        assert_eq!(s.rounds(), 2);
    }

    #[test]
    fn test_step_on_terminal() {
        let mut s = sim("9 8 7 6 5 4 3 2 1");
        assert!(s.is_finished());
        assert_eq!(s.step(), None);
        assert_eq!(s.rounds(), 0);
    }

    #[test]
    fn test_run_reaches_terminal() {
        let mut s = sim("45");
        let outcome = s.run();
        assert!(outcome.is_terminal());
        assert!(s.board().is_terminal());
        assert_eq!(outcome.rounds(), s.rounds());
        assert!(outcome.rounds() > 0);
    }

    #[test]
    fn test_run_with_observes_every_round() {
        let mut s = sim("40 5");
        let mut seen = Vec::new();
        let outcome = s.run_with(|round, board| seen.push((round, board.render())));

        assert_eq!(seen.len() as u32, outcome.rounds());
        assert_eq!(seen[0], (1, "39 4 2".to_string()));
        for (i, (round, _)) in seen.iter().enumerate() {
            assert_eq!(*round, i as u32 + 1);
        }
        assert_eq!(seen.last().unwrap().1, s.board().render());
    }

    #[test]
    fn test_round_limit() {
        let mut s = sim("45").with_round_limit(3);
        assert_eq!(s.run(), Outcome::RoundLimit { rounds: 3 });
        assert_eq!(s.board().piles(), &[42, 1, 2]);
        assert!(s.limit_reached());
        assert_eq!(s.step(), Some(4));
    }

    #[test]
    fn test_try_run_with_stops_on_error() {
        let mut s = sim("45");
        let result = s.try_run_with(|round, _| if round == 3 { Err(round) } else { Ok(()) });
        assert_eq!(result, Err(3));
        assert_eq!(s.rounds(), 3);
        assert_eq!(s.board().piles(), &[42, 1, 2]);
    }

    #[test]
    fn test_try_run_with_respects_limit() {
        let mut s = sim("45").with_round_limit(2);
        let result: Result<Outcome, ()> = s.try_run_with(|_, _| Ok(()));
        assert_eq!(result, Ok(Outcome::RoundLimit { rounds: 2 }));
    }

    #[test]
    fn test_round_limit_zero_on_terminal() {
        let mut s = sim("1 2 3 4 5 6 7 8 9").with_round_limit(0);
        assert_eq!(s.run(), Outcome::Terminal { rounds: 0 });
    }
}
