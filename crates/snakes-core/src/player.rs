//! Player identity and position.

use crate::board::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Square every token starts on.
pub const START_SQUARE: Square = 1;

/// Player token color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerColor {
    Green,
    Blue,
    Red,
    Yellow,
}

impl PlayerColor {
    /// All colors, in seating order.
    pub const ALL: [PlayerColor; 4] = [
        PlayerColor::Green,
        PlayerColor::Blue,
        PlayerColor::Red,
        PlayerColor::Yellow,
    ];

    /// Color for a seat index, cycling through the fixed set.
    pub fn for_player(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Display name for this color.
    pub fn name(&self) -> &'static str {
        match self {
            PlayerColor::Green => "green",
            PlayerColor::Blue => "blue",
            PlayerColor::Red => "red",
            PlayerColor::Yellow => "yellow",
        }
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single participant: immutable color, mutable position.
///
/// The position starts on square 1 and is updated only by the game
/// after a successful move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Token color, fixed at creation.
    pub color: PlayerColor,
    /// Current square.
    pub square: Square,
}

impl Player {
    /// Create a player on the start square.
    pub fn new(color: PlayerColor) -> Self {
        Self {
            color,
            square: START_SQUARE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_on_square_one() {
        let player = Player::new(PlayerColor::Blue);
        assert_eq!(player.square, 1);
        assert_eq!(player.color, PlayerColor::Blue);
    }

    #[test]
    fn test_color_for_player_cycles() {
        assert_eq!(PlayerColor::for_player(0), PlayerColor::Green);
        assert_eq!(PlayerColor::for_player(3), PlayerColor::Yellow);
        assert_eq!(PlayerColor::for_player(4), PlayerColor::Green);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(PlayerColor::Red.to_string(), "red");
    }
}
