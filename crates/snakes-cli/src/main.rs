//! Console driver for the Snakes and Ladders engine.
//!
//! Plays one full game, printing each turn's outcome, and stops once a
//! player wins. Configured through environment variables:
//!
//! - `PLAYERS`: roster size (default 2)
//! - `BOARD_FILE`: path to a JSON board configuration (default: the
//!   standard 100-square board)

use snakes_core::{Action, Board, Game, Player, PlayerColor};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let player_count: usize = std::env::var("PLAYERS")
        .unwrap_or_else(|_| "2".into())
        .parse()?;

    let board = match std::env::var("BOARD_FILE") {
        Ok(path) => {
            info!(path = %path, "loading board configuration");
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str::<Board>(&contents)?
        }
        Err(_) => Board::standard(),
    };

    info!(player_count, size = board.size(), "starting game");

    let mut game = Game::with_board(
        (0..player_count)
            .map(|i| Player::new(PlayerColor::for_player(i)))
            .collect(),
        board,
    )?;

    let mut turn_number = 0u32;
    loop {
        turn_number += 1;
        let turn = game.take_turn();
        debug!(turn_number, player = %turn.player.color, action = ?turn.action, "turn taken");

        match turn.action {
            Action::Win => {
                println!("{} is the winner", turn.player.color);
                break;
            }
            Action::InvalidMove => {
                println!("{} made an invalid move", turn.player.color);
            }
            Action::MoveTo(target) => {
                println!("{} moved to square {}", turn.player.color, target);
            }
        }
    }

    info!(turn_number, "game over");
    Ok(())
}
