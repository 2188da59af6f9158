#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! A game state engine for single player grid snake.
//!
//! The board is a fixed grid with a ring of wall cells around it. The snake moves
//! one cell at a time, grows when it eats one of the pellets on the board, and
//! the round ends when it runs into a wall, into itself, or fills every cell.
//!
//! [game::Game] drives the title / playing / end screens and is what a frontend
//! talks to: it feeds one [game::Input] per tick to [game::Game::update] and reads
//! the snake, the food and the sub-cell offset back for drawing.
//! ```
//! use grid_snake::game::{ClassicGame, Input, RoundState};
//! use grid_snake::types::Direction;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut game = ClassicGame::classic(SmallRng::seed_from_u64(7)).unwrap();
//! game.update(Some(Input::Start), 1);
//! let result = game.update(Some(Input::Turn(Direction::North)), 1);
//! assert_eq!(result.state, RoundState::Playing);
//! ```
//!
//! Everything random goes through the `rand::Rng` handed to the game, so a seeded
//! generator replays a game move for move.

pub mod board;
pub mod config;
pub mod engine;
pub mod food;
pub mod game;
pub mod snake;
pub mod types;
pub mod wire_representation;
