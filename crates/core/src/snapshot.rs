//! Render-facing copies of game state.
//!
//! Views never borrow a live game; they draw from these plain values. Snapshots
//! are fixed-size so a render loop can refill one in place every frame.

use arrayvec::{ArrayString, ArrayVec};
use glam::Vec2;

use crate::physics::Ball;
use crate::rack::{Pin, Rack};
use crate::scoring::{Scorecard, ThrowReport};
use crate::tick::PlayPhase;
use crate::types::{BallPhase, FRAME_COUNT, PINS_PER_RACK};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSnapshot {
    pub pos: Vec2,
    pub radius: f32,
    pub power: u8,
    pub angle: f32,
    pub phase: BallPhase,
}

impl From<&Ball> for BallSnapshot {
    fn from(ball: &Ball) -> Self {
        Self {
            pos: ball.pos,
            radius: ball.radius,
            power: ball.power,
            angle: ball.angle,
            phase: ball.phase,
        }
    }
}

impl BallSnapshot {
    pub fn aim_direction(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinSnapshot {
    pub pos: Vec2,
    pub radius: f32,
    pub knocked: bool,
}

impl From<&Pin> for PinSnapshot {
    fn from(pin: &Pin) -> Self {
        Self {
            pos: pin.pos,
            radius: pin.radius,
            knocked: pin.knocked,
        }
    }
}

/// The play area as drawn: extents, ball and pins.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot {
    pub width: f32,
    pub height: f32,
    pub ball: BallSnapshot,
    pub pins: ArrayVec<PinSnapshot, { PINS_PER_RACK as usize }>,
}

impl TableSnapshot {
    pub(crate) fn capture(width: f32, height: f32, ball: &Ball, rack: &Rack) -> Self {
        Self {
            width,
            height,
            ball: BallSnapshot::from(ball),
            pins: rack.pins().iter().map(PinSnapshot::from).collect(),
        }
    }

    pub fn standing(&self) -> usize {
        self.pins.iter().filter(|p| !p.knocked).count()
    }
}

/// Scoreboard columns: marks and running totals per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardSnapshot {
    pub marks: [ArrayString<3>; FRAME_COUNT],
    pub running: [Option<u32>; FRAME_COUNT],
    pub total: u32,
    /// Zero-based frame in play, `None` once the game is complete
    pub frame: Option<usize>,
    /// 1-based ball within the current frame
    pub ball_in_frame: usize,
}

impl From<&Scorecard> for CardSnapshot {
    fn from(card: &Scorecard) -> Self {
        let frame = card.current_frame();
        Self {
            marks: std::array::from_fn(|f| card.frame_marks(f)),
            running: card.running_totals(),
            total: card.total_score(),
            frame,
            ball_in_frame: frame.map_or(0, |f| card.throws_in_frame(f).len() + 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaneSnapshot {
    pub table: TableSnapshot,
    pub card: CardSnapshot,
    pub last: Option<ThrowReport>,
    pub phase: PlayPhase,
    pub episode_id: u32,
    pub seed: u64,
}

impl LaneSnapshot {
    pub fn game_over(&self) -> bool {
        self.phase == PlayPhase::GameOver
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PinGameSnapshot {
    pub table: TableSnapshot,
    pub score: u32,
    pub throws: u32,
    pub phase: PlayPhase,
}
