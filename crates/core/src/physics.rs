//! Physics module - ball integration, edge bounces and pin contacts
//!
//! One call to [`Ball::step`] is one tick of the physics loop:
//!
//! 1. `pos += vel`
//! 2. `vel *= friction`
//! 3. per axis, clamp into the arena and reflect the velocity component with damping
//! 4. when both velocity components are below the stop speed, zero them and stop
//!
//! Pin contacts are deliberately not momentum conserving: the ball gets a random
//! kick and the pin is simply marked down.

use glam::Vec2;

use crate::config::{ArenaConfig, CollisionConfig, PhysicsConfig};
use crate::rack::Rack;
use crate::rng::GameRng;
use crate::types::{BallPhase, AIM_STRAIGHT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub power: u8,
    /// Aim in radians; `-π/2` points straight up the lane.
    pub angle: f32,
    pub phase: BallPhase,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, power: u8) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            power,
            angle: AIM_STRAIGHT,
            phase: BallPhase::Aiming,
        }
    }

    /// Put the ball back on a spot, at rest and aiming straight ahead.
    pub fn reset_at(&mut self, pos: Vec2, power: u8) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.power = power;
        self.angle = AIM_STRAIGHT;
        self.phase = BallPhase::Aiming;
    }

    /// Go back to aiming from wherever the ball came to rest.
    pub fn rearm(&mut self) {
        if self.phase == BallPhase::Stopped {
            self.vel = Vec2::ZERO;
            self.phase = BallPhase::Aiming;
        }
    }

    pub fn adjust_power(&mut self, delta: i16, min: u8, max: u8) {
        if !self.phase.is_aiming() {
            return;
        }
        let next = (self.power as i16 + delta).clamp(min as i16, max as i16);
        self.power = next as u8;
    }

    pub fn adjust_angle(&mut self, delta: f32, min: f32, max: f32) {
        if !self.phase.is_aiming() {
            return;
        }
        self.angle = (self.angle + delta).clamp(min, max);
    }

    /// Unit vector the ball will travel along on release.
    pub fn aim_direction(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    /// Release the ball. Returns false (and does nothing) unless aiming.
    pub fn release(&mut self, physics: &PhysicsConfig) -> bool {
        if !self.phase.is_aiming() {
            return false;
        }
        self.vel = self.aim_direction() * (self.power as f32 / physics.power_divisor);
        self.phase = BallPhase::Moving;
        log::debug!(
            "ball released: power={} angle={:.2} vel=({:.2}, {:.2})",
            self.power,
            self.angle,
            self.vel.x,
            self.vel.y
        );
        true
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Advance one tick. Only a moving ball changes.
    pub fn step(&mut self, physics: &PhysicsConfig, arena: &ArenaConfig) -> BallPhase {
        if !self.phase.is_moving() {
            return self.phase;
        }

        self.pos += self.vel;
        self.vel *= physics.friction;

        let (x, vx) = bounce(
            self.pos.x,
            self.vel.x,
            self.radius,
            arena.width - self.radius,
            physics.restitution,
        );
        let (y, vy) = bounce(
            self.pos.y,
            self.vel.y,
            self.radius,
            arena.height - self.radius,
            physics.restitution,
        );
        self.pos = Vec2::new(x, y);
        self.vel = Vec2::new(vx, vy);

        if self.vel.x.abs() < physics.stop_speed && self.vel.y.abs() < physics.stop_speed {
            self.vel = Vec2::ZERO;
            self.phase = BallPhase::Stopped;
        }
        self.phase
    }
}

/// Clamp one axis into `[lo, hi]`, reflecting and damping the velocity on contact.
fn bounce(pos: f32, vel: f32, lo: f32, hi: f32, restitution: f32) -> (f32, f32) {
    if pos < lo {
        (lo, -vel * restitution)
    } else if pos > hi {
        (hi, -vel * restitution)
    } else {
        (pos, vel)
    }
}

/// Strict overlap test: touching circles do not collide.
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Knock down every standing pin the ball overlaps.
///
/// Each contact adds a random kick to the ball. With `kick_pins`, knocked pins are
/// also sent flying away from the ball at `pin_kick`. Returns the number of pins
/// knocked down by this call.
pub fn resolve_collisions(
    ball: &mut Ball,
    rack: &mut Rack,
    rng: &mut GameRng,
    cfg: &CollisionConfig,
    kick_pins: bool,
) -> u8 {
    let mut knocked = 0;
    for pin in rack.pins_mut().iter_mut().filter(|p| !p.knocked) {
        if !circles_overlap(ball.pos, ball.radius, pin.pos, pin.radius) {
            continue;
        }
        pin.knocked = true;
        if kick_pins {
            pin.vel = (pin.pos - ball.pos).normalize_or_zero() * cfg.pin_kick;
        }
        ball.vel += rng.impulse(cfg.impulse_min, cfg.impulse_max);
        knocked += 1;
        log::debug!("pin at ({:.0}, {:.0}) knocked down", pin.pos.x, pin.pos.y);
    }
    knocked
}
