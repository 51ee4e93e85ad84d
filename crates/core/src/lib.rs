//! Core game logic - pure, deterministic, and testable
//!
//! Everything the three bowling games need that does not touch a terminal:
//! frame scoring, the ball physics loop, the pin rack, seeded randomness and the
//! game state machines themselves. Same seed and same inputs always give the same
//! game.
//!
//! # Module Structure
//!
//! - [`scoring`]: ten-pin scorecard over a flat throw sequence, with bonus lookahead
//! - [`physics`]: ball integration, wall bounces and pin contacts
//! - [`rack`]: the ten-pin triangle
//! - [`rng`]: PCG32-backed randomness for pin falls and collision kicks
//! - [`config`]: startup configuration (TOML, validated)
//! - [`tick`]: per-tick player input and the shared play phases
//! - [`text_game`], [`lane_game`], [`pin_game`]: the three games
//! - [`snapshot`]: plain copies of game state for rendering
//! - [`scoreboard`]: the text scoreboard printed by the console game
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::{GameConfig, LaneGame, TickInput};
//!
//! let mut game = LaneGame::new(GameConfig::default(), 12345);
//!
//! // Hold power up for a while, then let go of the ball.
//! for _ in 0..30 {
//!     game.tick(&TickInput { power: 1, ..TickInput::default() });
//! }
//! game.tick(&TickInput { throw: true, ..TickInput::default() });
//! assert!(game.ball().phase.is_moving());
//! ```
//!
//! # Timing
//!
//! The visual games advance in fixed ticks (16ms by default). One tick moves the
//! ball by its velocity once; pauses between balls are counted in ticks derived
//! from the configured milliseconds.

pub mod config;
pub mod lane_game;
pub mod physics;
pub mod pin_game;
pub mod rack;
pub mod rng;
pub mod scoreboard;
pub mod scoring;
pub mod snapshot;
pub mod text_game;
pub mod tick;

pub use tui_bowling_types as types;

pub use config::{ConfigError, GameConfig};
pub use lane_game::{start_spot, LaneGame};
pub use physics::{circles_overlap, resolve_collisions, Ball};
pub use pin_game::PinGame;
pub use rack::{Pin, Rack};
pub use rng::GameRng;
pub use scoring::{Mark, ScoreError, ScoreSummary, Scorecard, ThrowReport};
pub use snapshot::{
    BallSnapshot, CardSnapshot, LaneSnapshot, PinGameSnapshot, PinSnapshot, TableSnapshot,
};
pub use text_game::{Prompt, TextGame, TextPhase};
pub use tick::{PlayPhase, TickInput};
