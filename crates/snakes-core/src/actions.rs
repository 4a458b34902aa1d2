//! Outcomes of a turn.
//!
//! This module defines the result vocabulary shared by the board and
//! the game: the `Action` produced by landing resolution and the
//! `Turn` record returned to the caller after each turn.

use crate::board::Square;
use crate::player::Player;
use serde::{Deserialize, Serialize};

/// The outcome of resolving a landing on the board.
///
/// A closed three-way variant with structural equality. Exactly one
/// variant holds per resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// The resolved square is off the board; the token does not move.
    InvalidMove,
    /// The token moves to this square (after at most one portal hop).
    MoveTo(Square),
    /// The resolved square is exactly the final square.
    Win,
}

impl Action {
    /// The destination square, if this action moves the token.
    pub fn destination(&self) -> Option<Square> {
        match self {
            Action::MoveTo(square) => Some(*square),
            _ => None,
        }
    }

    /// Whether this action ends the game for the acting player.
    pub fn is_win(&self) -> bool {
        matches!(self, Action::Win)
    }
}

/// One completed turn: the acting player and what their roll produced.
///
/// Borrowed from the game for the duration of the caller's inspection;
/// the engine does not retain it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Turn<'a> {
    /// The player who acted this turn.
    pub player: &'a Player,
    /// The resolved outcome of their roll.
    pub action: Action,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        assert_eq!(Action::MoveTo(38), Action::MoveTo(38));
        assert_ne!(Action::MoveTo(38), Action::MoveTo(39));
        assert_ne!(Action::MoveTo(100), Action::Win);
        assert_eq!(Action::Win, Action::Win);
        assert_eq!(Action::InvalidMove, Action::InvalidMove);
    }

    #[test]
    fn test_action_accessors() {
        assert_eq!(Action::MoveTo(7).destination(), Some(7));
        assert_eq!(Action::Win.destination(), None);
        assert_eq!(Action::InvalidMove.destination(), None);
        assert!(Action::Win.is_win());
        assert!(!Action::MoveTo(7).is_win());
    }
}
