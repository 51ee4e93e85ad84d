//! Per-tick input and the phase machine shared by the visual games.

use crate::config::BallConfig;
use crate::physics::Ball;
use crate::types::GameAction;

/// Everything a visual game reads from the player in one tick.
///
/// `power` and `aim` are directions (-1, 0 or +1): a held control keeps moving the
/// value every tick. `throw` and `restart` are edge-triggered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub power: i8,
    pub aim: i8,
    pub throw: bool,
    pub restart: bool,
}

impl TickInput {
    pub fn from_actions(actions: &[GameAction]) -> Self {
        let mut input = Self::default();
        for &action in actions {
            input.apply(action);
        }
        input
    }

    pub fn apply(&mut self, action: GameAction) {
        match action {
            GameAction::PowerUp => self.power = (self.power + 1).min(1),
            GameAction::PowerDown => self.power = (self.power - 1).max(-1),
            GameAction::AimRight => self.aim = (self.aim + 1).min(1),
            GameAction::AimLeft => self.aim = (self.aim - 1).max(-1),
            GameAction::Throw => self.throw = true,
            GameAction::Restart => self.restart = true,
        }
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayPhase {
    /// Player aims or the ball is rolling
    Playing,
    /// Fixed pause before the next ball is set up
    Settling { remaining_ticks: u32 },
    GameOver,
}

/// Apply held power/aim controls to an aiming ball.
pub(crate) fn steer(ball: &mut Ball, input: &TickInput, cfg: &BallConfig, power_min: u8) {
    if input.power != 0 {
        let delta = input.power as i16 * cfg.power_step as i16;
        ball.adjust_power(delta, power_min, cfg.power_max);
    }
    if input.aim != 0 {
        ball.adjust_angle(input.aim as f32 * cfg.aim_step, cfg.aim_min, cfg.aim_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AIM_STRAIGHT;
    use glam::Vec2;

    #[test]
    fn opposing_actions_cancel() {
        let input = TickInput::from_actions(&[GameAction::PowerUp, GameAction::PowerDown]);
        assert_eq!(input.power, 0);
        assert!(input.is_idle());
    }

    #[test]
    fn repeated_actions_saturate() {
        let input = TickInput::from_actions(&[
            GameAction::AimLeft,
            GameAction::AimLeft,
            GameAction::Throw,
        ]);
        assert_eq!(input.aim, -1);
        assert!(input.throw);
        assert!(!input.restart);
    }

    #[test]
    fn steer_moves_power_and_angle() {
        let cfg = BallConfig::default();
        let mut ball = Ball::new(Vec2::ZERO, cfg.radius, 10);
        let input = TickInput {
            power: 1,
            aim: -1,
            ..TickInput::default()
        };
        steer(&mut ball, &input, &cfg, cfg.power_min);
        assert_eq!(ball.power, 11);
        assert!((ball.angle - (AIM_STRAIGHT - cfg.aim_step)).abs() < 1e-6);
    }

    #[test]
    fn steer_respects_power_floor() {
        let cfg = BallConfig::default();
        let mut ball = Ball::new(Vec2::ZERO, cfg.radius, 5);
        let input = TickInput {
            power: -1,
            ..TickInput::default()
        };
        steer(&mut ball, &input, &cfg, cfg.pin_game_power_min);
        assert_eq!(ball.power, 5);
    }
}
