//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (scoring, physics, terminal rendering, input mapping).
//!
//! # Game Dimensions
//!
//! Ten-pin bowling rules:
//!
//! - **Frames**: 10 per game (indexed 0-9)
//! - **Pins**: 10 per rack, in a 4-row triangle
//! - **Throws**: at most 21 per game (9 frames x 2, plus 3 in the tenth)
//!
//! # Default Tuning
//!
//! The physics defaults below seed `GameConfig` in the core crate. Distances are
//! in arena units (the arena defaults to 800x600) and speeds in units per tick.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `FRICTION` | 0.98 | Velocity multiplier applied every tick |
//! | `WALL_RESTITUTION` | 0.8 | Speed kept when bouncing off an arena edge |
//! | `STOP_SPEED` | 0.1 | Per-axis speed below which the ball stops |
//! | `POWER_MAX` | 50 | Upper bound of the power meter |
//! | `POWER_DIVISOR` | 5.0 | Release speed is `power / POWER_DIVISOR` |
//! | `AIM_STEP` | 0.05 | Radians per tick while aiming |
//!
//! # Examples
//!
//! ```
//! use tui_bowling_types::{BallPhase, GameAction, FRAME_COUNT, PINS_PER_RACK};
//!
//! assert!(GameAction::PowerUp.is_continuous());
//! assert!(!GameAction::Throw.is_continuous());
//!
//! assert!(BallPhase::Aiming.is_aiming());
//! assert_eq!(FRAME_COUNT, 10);
//! assert_eq!(PINS_PER_RACK, 10);
//! ```

/// Frames in a game
pub const FRAME_COUNT: usize = 10;

/// Pins in a full rack
pub const PINS_PER_RACK: u8 = 10;

/// Rows in the triangular rack (1 + 2 + 3 + 4 = 10 pins)
pub const RACK_ROWS: usize = 4;

/// Longest possible throw sequence: nine two-throw frames plus a three-throw tenth
pub const MAX_THROWS: usize = 21;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Velocity multiplier applied once per tick
pub const FRICTION: f32 = 0.98;

/// Fraction of speed kept after an edge bounce
pub const WALL_RESTITUTION: f32 = 0.8;

/// Per-axis speed below which a moving ball comes to rest
pub const STOP_SPEED: f32 = 0.1;

/// Power meter upper bound
pub const POWER_MAX: u8 = 50;

/// Power meter lower bound for the bowling lane
pub const POWER_MIN: u8 = 0;

/// Power meter lower bound for the free-play pin game
pub const PIN_GAME_POWER_MIN: u8 = 5;

/// Power the pin game resets the meter to
pub const PIN_GAME_START_POWER: u8 = 20;

/// Release speed divisor (speed = power / divisor)
pub const POWER_DIVISOR: f32 = 5.0;

/// Aim adjustment per tick, in radians
pub const AIM_STEP: f32 = 0.05;

/// Aim pointing straight up the lane (screen y grows downward)
pub const AIM_STRAIGHT: f32 = -std::f32::consts::FRAC_PI_2;

/// Lifecycle of a ball within one delivery
///
/// - **Aiming**: power and angle can be adjusted, the ball is at rest
/// - **Moving**: the physics loop integrates position every tick
/// - **Stopped**: the ball has come to rest; the hosting game decides what happens next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BallPhase {
    #[default]
    Aiming,
    Moving,
    Stopped,
}

impl BallPhase {
    pub fn is_aiming(&self) -> bool {
        matches!(self, BallPhase::Aiming)
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, BallPhase::Moving)
    }
}

/// Continuous controls that act every tick while held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    PowerUp,
    PowerDown,
    AimLeft,
    AimRight,
}

impl Control {
    /// All controls, in a fixed order (useful for per-control state arrays).
    pub const ALL: [Control; 4] = [
        Control::PowerUp,
        Control::PowerDown,
        Control::AimLeft,
        Control::AimRight,
    ];

    pub fn index(&self) -> usize {
        match self {
            Control::PowerUp => 0,
            Control::PowerDown => 1,
            Control::AimLeft => 2,
            Control::AimRight => 3,
        }
    }

    /// The action this control produces on each tick it is held
    pub fn action(&self) -> GameAction {
        match self {
            Control::PowerUp => GameAction::PowerUp,
            Control::PowerDown => GameAction::PowerDown,
            Control::AimLeft => GameAction::AimLeft,
            Control::AimRight => GameAction::AimRight,
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Each action maps to a specific game mechanic. The first four are
/// continuous (applied once per tick while held), the rest are discrete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Raise the power meter by one step
    PowerUp,
    /// Lower the power meter by one step
    PowerDown,
    /// Rotate the aim counter-clockwise (towards the left edge)
    AimLeft,
    /// Rotate the aim clockwise (towards the right edge)
    AimRight,
    /// Release the ball
    Throw,
    /// Start over (lane game: only after game over; pin game: any time)
    Restart,
}

impl GameAction {
    /// Continuous actions repeat every tick while their key is held.
    pub fn is_continuous(&self) -> bool {
        matches!(
            self,
            GameAction::PowerUp | GameAction::PowerDown | GameAction::AimLeft | GameAction::AimRight
        )
    }
}
