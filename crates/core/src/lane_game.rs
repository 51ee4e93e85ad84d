//! Lane game - a full ten-frame game bowled with the physics ball.
//!
//! Each delivery runs until the ball stops. The pins it knocked down are recorded
//! on the [`Scorecard`], the game pauses for `timing.settle_ms`, then the ball goes
//! back to the start spot. The rack is rebuilt whenever the scorecard expects a
//! fresh set of ten pins, so the pins on the table always match
//! [`Scorecard::pins_standing`] between deliveries.

use glam::Vec2;

use crate::config::GameConfig;
use crate::physics::{resolve_collisions, Ball};
use crate::rack::Rack;
use crate::rng::GameRng;
use crate::scoring::{Scorecard, ThrowReport};
use crate::snapshot::{CardSnapshot, LaneSnapshot, TableSnapshot};
use crate::tick::{steer, PlayPhase, TickInput};
use crate::types::{BallPhase, PINS_PER_RACK};

#[derive(Debug, Clone)]
pub struct LaneGame {
    config: GameConfig,
    rng: GameRng,
    ball: Ball,
    rack: Rack,
    card: Scorecard,
    phase: PlayPhase,
    /// Pins knocked by the ball currently rolling.
    knocked: u8,
    last: Option<ThrowReport>,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl LaneGame {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let ball = Ball::new(
            start_spot(&config),
            config.ball.radius,
            config.ball.power_min,
        );
        Self {
            rng: GameRng::new(seed),
            ball,
            rack: Rack::standard(&config.rack),
            card: Scorecard::new(),
            phase: PlayPhase::Playing,
            knocked: 0,
            last: None,
            episode_id: 0,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn scorecard(&self) -> &Scorecard {
        &self.card
    }

    pub fn phase(&self) -> PlayPhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == PlayPhase::GameOver
    }

    pub fn last_throw(&self) -> Option<ThrowReport> {
        self.last
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Advance one fixed tick.
    pub fn tick(&mut self, input: &TickInput) {
        if input.restart && self.game_over() {
            self.restart();
            return;
        }

        match self.phase {
            PlayPhase::GameOver => {}
            PlayPhase::Settling { remaining_ticks } => {
                if remaining_ticks > 1 {
                    self.phase = PlayPhase::Settling {
                        remaining_ticks: remaining_ticks - 1,
                    };
                } else {
                    self.next_ball();
                }
            }
            PlayPhase::Playing => self.play(input),
        }
    }

    fn play(&mut self, input: &TickInput) {
        if self.ball.phase.is_aiming() {
            steer(&mut self.ball, input, &self.config.ball, self.config.ball.power_min);
            if input.throw {
                self.ball.release(&self.config.physics);
                self.knocked = 0;
            }
        }

        if self.ball.step(&self.config.physics, &self.config.arena) == BallPhase::Moving {
            self.knocked += resolve_collisions(
                &mut self.ball,
                &mut self.rack,
                &mut self.rng,
                &self.config.collision,
                false,
            );
        }

        if self.ball.phase == BallPhase::Stopped {
            self.finish_delivery();
        }
    }

    fn finish_delivery(&mut self) {
        let pins = self.knocked.min(self.card.pins_standing());
        self.knocked = 0;

        match self.card.record_delivery(pins) {
            Ok(report) => {
                log::info!(
                    "frame {} ball {}: {} pins ({:?}), total {}",
                    report.frame + 1,
                    report.index + 1,
                    report.pins,
                    report.mark,
                    self.card.total_score()
                );
                self.last = Some(report);
            }
            Err(err) => log::warn!("delivery not recorded: {err}"),
        }

        let ticks = self.config.ticks_for_ms(self.config.timing.settle_ms);
        if ticks == 0 {
            self.next_ball();
        } else {
            self.phase = PlayPhase::Settling {
                remaining_ticks: ticks,
            };
        }
    }

    fn next_ball(&mut self) {
        if self.card.is_complete() {
            self.phase = PlayPhase::GameOver;
            log::info!("game over: final score {}", self.card.total_score());
            return;
        }

        if self.card.pins_standing() == PINS_PER_RACK {
            self.rack = Rack::standard(&self.config.rack);
        }
        self.ball
            .reset_at(start_spot(&self.config), self.config.ball.power_min);
        self.phase = PlayPhase::Playing;
    }

    /// Start a new game with a seed derived from the current one.
    pub fn restart(&mut self) {
        let seed = self.rng.next_seed();
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::new(self.config, seed);
        self.episode_id = next_episode;
        log::info!("new game (episode {next_episode}, seed {seed})");
    }

    pub fn snapshot_into(&self, out: &mut LaneSnapshot) {
        *out = self.snapshot();
    }

    pub fn snapshot(&self) -> LaneSnapshot {
        LaneSnapshot {
            table: TableSnapshot::capture(
                self.config.arena.width,
                self.config.arena.height,
                &self.ball,
                &self.rack,
            ),
            card: CardSnapshot::from(&self.card),
            last: self.last,
            phase: self.phase,
            episode_id: self.episode_id,
            seed: self.rng.seed(),
        }
    }
}

/// Where the ball waits before each delivery: centred, `start_offset` above the bottom.
pub fn start_spot(config: &GameConfig) -> Vec2 {
    Vec2::new(
        config.arena.width / 2.0,
        config.arena.height - config.ball.start_offset,
    )
}
