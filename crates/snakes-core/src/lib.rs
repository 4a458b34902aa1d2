//! Rules engine for Snakes and Ladders.
//!
//! This crate provides the core game logic, including:
//! - Board topology with the snake/ladder portal table
//! - Pure landing resolution into a tagged `Action`
//! - Player identity and position
//! - Turn orchestration with round-robin rotation
//!
//! # Architecture
//!
//! The engine is a single-step state-transition component: [`Game::take_turn`]
//! plays exactly one turn and returns a [`Turn`] for the caller to
//! interpret. There is no internal run loop and no game-over state;
//! the caller stops requesting turns once it observes [`Action::Win`].
//! The die is an injected [`DieSource`] capability so scripted and
//! deterministic games need no changes to the engine.
//!
//! # Modules
//!
//! - [`board`]: Square numbering, portals, and landing resolution
//! - [`actions`]: The `Action` outcome and per-turn `Turn` record
//! - [`player`]: Player colors and positions
//! - [`die`]: Die-source capability and its implementations
//! - [`game`]: Turn sequencing over a fixed roster

pub mod actions;
pub mod board;
pub mod die;
pub mod game;
pub mod player;

// Re-export commonly used types
pub use actions::{Action, Turn};
pub use board::{Board, BoardConfig, BoardError, Portal, Square, STANDARD_SIZE};
pub use die::{DieSource, FairDie, RiggedDie, ScriptedDie, DIE_SIDES};
pub use game::{Game, GameError};
pub use player::{Player, PlayerColor, START_SQUARE};
