//! Game board representation and landing resolution.
//!
//! This module contains:
//! - Square numbering and the portal (snake/ladder) table
//! - Board construction with fail-fast validation
//! - The pure `land` resolution from candidate square to [`Action`]

use crate::actions::Action;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Square number on the board (1 is the start square).
///
/// Unsigned by choice: positions never go below the start, so the
/// lower-bound half of the landing check is unreachable.
pub type Square = u32;

/// Winning square of the standard board.
pub const STANDARD_SIZE: Square = 100;

/// A board effect attached to a square, redirecting a landing token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Portal {
    /// Slides the token back down to the target square.
    Snake(Square),
    /// Carries the token up to the target square.
    Ladder(Square),
}

impl Portal {
    /// The destination square of this portal.
    pub fn target(&self) -> Square {
        match self {
            Portal::Snake(target) | Portal::Ladder(target) => *target,
        }
    }
}

/// Errors detected while constructing a board.
///
/// A misconfigured board must never reach play, so these surface at
/// construction time rather than during landing resolution.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardError {
    #[error("board size must be at least 1")]
    ZeroSize,

    #[error("portal origin {0} is outside the board")]
    OriginOutOfRange(Square),

    #[error("portal on square {0} targets itself")]
    SelfTargeting(Square),

    #[error("portal on square {origin} targets {target}, beyond the final square {size}")]
    TargetOutOfRange {
        origin: Square,
        target: Square,
        size: Square,
    },
}

/// Plain configuration shape for a board, as found in config files.
///
/// Deserializing a [`Board`] goes through this struct and the same
/// validation as [`Board::new`], so a bad config file fails fast too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Winning square number.
    pub size: Square,
    /// Origin square to portal effect.
    pub portals: HashMap<Square, Portal>,
}

/// The board: a linear track of squares with a portal table.
///
/// Immutable after construction; fields stay private so the validation
/// in [`Board::new`] holds for the board's whole lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardConfig", into = "BoardConfig")]
pub struct Board {
    size: Square,
    portals: HashMap<Square, Portal>,
}

impl Board {
    /// Create a board, validating the portal table.
    ///
    /// Every portal origin must lie in `[1, size]`, no square may map
    /// to itself, and every target must lie in `[0, size]`.
    pub fn new(size: Square, portals: HashMap<Square, Portal>) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }

        for (&origin, portal) in &portals {
            if origin == 0 || origin > size {
                return Err(BoardError::OriginOutOfRange(origin));
            }
            let target = portal.target();
            if target == origin {
                return Err(BoardError::SelfTargeting(origin));
            }
            if target > size {
                return Err(BoardError::TargetOutOfRange {
                    origin,
                    target,
                    size,
                });
            }
        }

        Ok(Self { size, portals })
    }

    /// The standard 100-square board with the classic portal table.
    pub fn standard() -> Self {
        let portals = HashMap::from([
            (2, Portal::Ladder(38)),
            (4, Portal::Ladder(14)),
            (8, Portal::Ladder(31)),
            (21, Portal::Ladder(42)),
            (28, Portal::Ladder(84)),
            (36, Portal::Ladder(44)),
            (47, Portal::Snake(26)),
            (49, Portal::Snake(11)),
            (51, Portal::Ladder(67)),
            (56, Portal::Snake(53)),
            (62, Portal::Snake(18)),
            (64, Portal::Snake(60)),
            (71, Portal::Ladder(91)),
            (80, Portal::Ladder(100)),
            (87, Portal::Snake(24)),
            (93, Portal::Snake(73)),
            (95, Portal::Snake(75)),
            (98, Portal::Snake(78)),
        ]);

        // The standard table is known good; validation cannot fail here.
        Self::new(STANDARD_SIZE, portals).expect("standard portal table is valid")
    }

    /// Winning square number.
    pub fn size(&self) -> Square {
        self.size
    }

    /// The portal on a square, if any.
    pub fn portal_at(&self, square: Square) -> Option<Portal> {
        self.portals.get(&square).copied()
    }

    /// Number of portals on the board.
    pub fn portal_count(&self) -> usize {
        self.portals.len()
    }

    /// Resolve a landing on `square` into an [`Action`].
    ///
    /// Applies at most one portal hop, then classifies the final
    /// square. Pure function of the board and the input: no state is
    /// touched and no error can escape.
    pub fn land(&self, square: Square) -> Action {
        let final_square = match self.portals.get(&square) {
            Some(portal) => portal.target(),
            None => square,
        };

        // Square is unsigned, so the lower branch of the out-of-range
        // check (final_square < 0) is vacuous; the upper bound is the
        // only reachable one. Kept in this shape to mirror the
        // resolution policy: off the board either way is invalid.
        if final_square > self.size {
            Action::InvalidMove
        } else if final_square == self.size {
            Action::Win
        } else {
            Action::MoveTo(final_square)
        }
    }
}

impl TryFrom<BoardConfig> for Board {
    type Error = BoardError;

    fn try_from(config: BoardConfig) -> Result<Self, Self::Error> {
        Board::new(config.size, config.portals)
    }
}

impl From<Board> for BoardConfig {
    fn from(board: Board) -> Self {
        BoardConfig {
            size: board.size,
            portals: board.portals,
        }
    }
}
