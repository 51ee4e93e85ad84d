//! Pin game - free play against a single rack.
//!
//! There are no frames here. Every pin knocked down is worth one point, the ball
//! can be re-aimed from wherever it comes to rest, and knocked pins fly off the
//! table under gravity. Once the whole rack is down (and the ball has stopped) the
//! game waits `timing.clear_pause_ms`, then sets up a fresh rack.

use crate::config::GameConfig;
use crate::lane_game::start_spot;
use crate::physics::{resolve_collisions, Ball};
use crate::rack::Rack;
use crate::rng::GameRng;
use crate::snapshot::{PinGameSnapshot, TableSnapshot};
use crate::tick::{steer, PlayPhase, TickInput};
use crate::types::BallPhase;

#[derive(Debug, Clone)]
pub struct PinGame {
    config: GameConfig,
    rng: GameRng,
    ball: Ball,
    rack: Rack,
    phase: PlayPhase,
    score: u32,
    /// Balls released since the game started.
    throws: u32,
    racks_cleared: u32,
}

impl PinGame {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            ball: Ball::new(
                start_spot(&config),
                config.ball.radius,
                config.ball.pin_game_start_power,
            ),
            rack: Rack::standard(&config.rack),
            phase: PlayPhase::Playing,
            score: 0,
            throws: 0,
            racks_cleared: 0,
            config,
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn phase(&self) -> PlayPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn throws(&self) -> u32 {
        self.throws
    }

    pub fn racks_cleared(&self) -> u32 {
        self.racks_cleared
    }

    pub fn tick(&mut self, input: &TickInput) {
        if input.restart {
            log::info!("rack reset by player (score {})", self.score);
            self.reset_rack();
            return;
        }

        if let PlayPhase::Settling { remaining_ticks } = self.phase {
            self.fall();
            if remaining_ticks > 1 {
                self.phase = PlayPhase::Settling {
                    remaining_ticks: remaining_ticks - 1,
                };
            } else {
                self.reset_rack();
            }
            return;
        }

        if self.ball.phase.is_aiming() {
            steer(
                &mut self.ball,
                input,
                &self.config.ball,
                self.config.ball.pin_game_power_min,
            );
            if input.throw && self.ball.release(&self.config.physics) {
                self.throws += 1;
            }
        }

        if self.ball.step(&self.config.physics, &self.config.arena) == BallPhase::Moving {
            let knocked = resolve_collisions(
                &mut self.ball,
                &mut self.rack,
                &mut self.rng,
                &self.config.collision,
                true,
            );
            self.score += knocked as u32;
        }
        self.fall();

        if self.ball.phase == BallPhase::Stopped {
            if self.rack.all_down() {
                self.rack_cleared();
            } else {
                self.ball.rearm();
            }
        }
    }

    fn fall(&mut self) {
        self.rack
            .step_falling(self.config.collision.gravity, self.config.arena.height);
    }

    fn rack_cleared(&mut self) {
        self.racks_cleared += 1;
        log::info!(
            "rack cleared after {} throws, score {}",
            self.throws,
            self.score
        );
        let ticks = self.config.ticks_for_ms(self.config.timing.clear_pause_ms);
        if ticks == 0 {
            self.reset_rack();
        } else {
            self.phase = PlayPhase::Settling {
                remaining_ticks: ticks,
            };
        }
    }

    /// Fresh rack and ball at the start spot. Score and throw count carry over.
    pub fn reset_rack(&mut self) {
        self.rack = Rack::standard(&self.config.rack);
        self.ball.reset_at(
            start_spot(&self.config),
            self.config.ball.pin_game_start_power,
        );
        self.phase = PlayPhase::Playing;
    }

    pub fn snapshot(&self) -> PinGameSnapshot {
        PinGameSnapshot {
            table: TableSnapshot::capture(
                self.config.arena.width,
                self.config.arena.height,
                &self.ball,
                &self.rack,
            ),
            score: self.score,
            throws: self.throws,
            phase: self.phase,
        }
    }
}
