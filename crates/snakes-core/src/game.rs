//! Turn orchestration.
//!
//! This module contains the `Game` struct: the roster, the board, the
//! injected die source, and the single-step `take_turn` transition.

use crate::actions::{Action, Turn};
use crate::board::Board;
use crate::die::{DieSource, FairDie};
use crate::player::{Player, PlayerColor};
use thiserror::Error;

/// Errors detected while constructing a game.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("a game needs at least one player")]
    NoPlayers,
}

/// A game in progress: fixed roster, board, die, and whose turn it is.
///
/// The engine has no game-over state. `take_turn` is a single-step
/// transition; the caller stops invoking it once a [`Action::Win`] is
/// observed. Construction fixes the roster; only player positions and
/// the rotation index mutate afterwards.
pub struct Game {
    players: Vec<Player>,
    current_player: usize,
    board: Board,
    die: Box<dyn DieSource>,
}

impl Game {
    /// Create a game on the standard board with a fair die.
    pub fn new(players: Vec<Player>) -> Result<Self, GameError> {
        Self::with_die(players, Board::standard(), Box::new(FairDie))
    }

    /// Create a game on a custom board with a fair die.
    pub fn with_board(players: Vec<Player>, board: Board) -> Result<Self, GameError> {
        Self::with_die(players, board, Box::new(FairDie))
    }

    /// Create a game with every dependency supplied by the caller.
    pub fn with_die(
        players: Vec<Player>,
        board: Board,
        die: Box<dyn DieSource>,
    ) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }

        Ok(Self {
            players,
            current_player: 0,
            board,
            die,
        })
    }

    /// Convenience: a standard game with `count` players, colored in
    /// seating order.
    pub fn with_player_count(count: usize) -> Result<Self, GameError> {
        let players = (0..count)
            .map(|i| Player::new(PlayerColor::for_player(i)))
            .collect();
        Self::new(players)
    }

    /// The roster, in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Index of the player who acts next.
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// The board in play.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play one turn for the current player.
    ///
    /// Rolls the die exactly once, resolves the landing on the board,
    /// and applies the outcome: `MoveTo` updates the player's square,
    /// `Win` records the player on the final square, `InvalidMove`
    /// leaves them in place. The rotation advances unconditionally,
    /// whatever the outcome.
    pub fn take_turn(&mut self) -> Turn<'_> {
        let acting = self.current_player;

        let roll = self.die.roll();
        let candidate = self.players[acting].square + roll;
        let action = self.board.land(candidate);

        match action {
            Action::MoveTo(target) => self.players[acting].square = target,
            // The winner's recorded position is the final square, so a
            // finished game reads back consistently.
            Action::Win => self.players[acting].square = self.board.size(),
            Action::InvalidMove => {}
        }

        self.current_player = (self.current_player + 1) % self.players.len();

        Turn {
            player: &self.players[acting],
            action,
        }
    }
}
