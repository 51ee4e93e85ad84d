//! Rack module - the triangular pin formation
//!
//! Pins are laid out in four rows below the apex:
//!
//! ```text
//!        o            row 0 (head pin)
//!       o o           row 1
//!      o o o          row 2
//!     o o o o         row 3
//! ```
//!
//! A knocked pin never stands up again; only building a new rack brings pins back.

use arrayvec::ArrayVec;
use glam::Vec2;

use crate::config::RackConfig;
use crate::types::{PINS_PER_RACK, RACK_ROWS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pin {
    pub pos: Vec2,
    pub radius: f32,
    pub knocked: bool,
    /// Only used by knocked pins that fly off (pin game).
    pub vel: Vec2,
}

impl Pin {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            knocked: false,
            vel: Vec2::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rack {
    pins: ArrayVec<Pin, { PINS_PER_RACK as usize }>,
}

impl Rack {
    /// Full ten-pin triangle.
    pub fn standard(cfg: &RackConfig) -> Self {
        let mut pins = ArrayVec::new();
        for row in 0..RACK_ROWS {
            for col in 0..=row {
                let x = cfg.apex_x + (col as f32 - row as f32 / 2.0) * cfg.spacing;
                let y = cfg.apex_y + row as f32 * cfg.spacing;
                pins.push(Pin::new(Vec2::new(x, y), cfg.pin_radius));
            }
        }
        Self { pins }
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub(crate) fn pins_mut(&mut self) -> &mut [Pin] {
        &mut self.pins
    }

    pub fn standing(&self) -> usize {
        self.pins.iter().filter(|p| !p.knocked).count()
    }

    pub fn knocked(&self) -> usize {
        self.pins.iter().filter(|p| p.knocked).count()
    }

    /// True when no pin is left standing (including an empty rack).
    pub fn all_down(&self) -> bool {
        self.pins.iter().all(|p| p.knocked)
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Advance flying pins under gravity and drop those that fell below `floor`.
    pub fn step_falling(&mut self, gravity: f32, floor: f32) {
        for pin in self.pins.iter_mut().filter(|p| p.knocked) {
            pin.pos += pin.vel;
            pin.vel.y += gravity;
        }
        self.pins.retain(|p| !p.knocked || p.pos.y <= floor + p.radius);
    }
}
