//! Startup configuration.
//!
//! Every tunable that the games read lives in [`GameConfig`]. The struct is built
//! once at startup (defaults, or a TOML file) and handed to each game by value.
//! Missing keys fall back to the defaults in `tui_bowling_types`.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::types::{
    AIM_STEP, FRICTION, PIN_GAME_POWER_MIN, PIN_GAME_START_POWER, POWER_DIVISOR, POWER_MAX,
    POWER_MIN, STOP_SPEED, TICK_MS, WALL_RESTITUTION,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Play area extents; the ball bounces off all four edges.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Distance of the start spot above the bottom edge.
    pub start_offset: f32,
    pub power_min: u8,
    pub power_max: u8,
    pub power_step: u8,
    pub pin_game_power_min: u8,
    pub pin_game_start_power: u8,
    /// Radians per tick while an aim control is held.
    pub aim_step: f32,
    pub aim_min: f32,
    pub aim_max: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 20.0,
            start_offset: 50.0,
            power_min: POWER_MIN,
            power_max: POWER_MAX,
            power_step: 1,
            pin_game_power_min: PIN_GAME_POWER_MIN,
            pin_game_start_power: PIN_GAME_START_POWER,
            aim_step: AIM_STEP,
            aim_min: -std::f32::consts::PI,
            aim_max: 0.0,
        }
    }
}

/// Rack geometry. The head pin sits at the apex; each row is `spacing` further down.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RackConfig {
    pub apex_x: f32,
    pub apex_y: f32,
    pub spacing: f32,
    pub pin_radius: f32,
}

impl Default for RackConfig {
    fn default() -> Self {
        Self {
            apex_x: 400.0,
            apex_y: 100.0,
            spacing: 40.0,
            pin_radius: 15.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub friction: f32,
    pub restitution: f32,
    pub stop_speed: f32,
    pub power_divisor: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            friction: FRICTION,
            restitution: WALL_RESTITUTION,
            stop_speed: STOP_SPEED,
            power_divisor: POWER_DIVISOR,
        }
    }
}

/// Pin contact response. The ball receives a random kick in
/// `[impulse_min, impulse_max)`; knocked pins get `pin_kick` along the contact normal.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    pub impulse_min: f32,
    pub impulse_max: f32,
    pub pin_kick: f32,
    pub gravity: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            impulse_min: 0.5,
            impulse_max: 2.0,
            pin_kick: 5.0,
            gravity: 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub tick_ms: u32,
    /// Pause after each delivery in the lane game.
    pub settle_ms: u32,
    /// Pause after the pin game's rack is cleared.
    pub clear_pause_ms: u32,
    /// Pause after each frame in the text game.
    pub frame_pause_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            settle_ms: 600,
            clear_pause_ms: 1000,
            frame_pause_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// How long a repeating control stays held without a fresh key event.
    pub hold_timeout_ms: u32,
    /// How long a freshly pressed control stays held before the first repeat.
    pub repeat_delay_ms: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            hold_timeout_ms: 120,
            repeat_delay_ms: 500,
        }
    }
}

/// Complete startup configuration.
///
/// ```
/// use tui_bowling_core::GameConfig;
///
/// let cfg = GameConfig::from_toml_str("[physics]\nfriction = 0.95\n").unwrap();
/// assert_eq!(cfg.physics.friction, 0.95);
/// assert_eq!(cfg.arena.width, 800.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena: ArenaConfig,
    pub ball: BallConfig,
    pub rack: RackConfig,
    pub physics: PhysicsConfig,
    pub collision: CollisionConfig,
    pub timing: TimingConfig,
    pub input: InputConfig,
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let cfg = Self::from_toml_str(&text)?;
        log::info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        let p = &self.physics;
        if !(p.friction > 0.0 && p.friction < 1.0) {
            return invalid("physics.friction", "must be in (0, 1)");
        }
        if !(p.restitution >= 0.0 && p.restitution <= 1.0) {
            return invalid("physics.restitution", "must be in [0, 1]");
        }
        if p.stop_speed <= 0.0 {
            return invalid("physics.stop_speed", "must be positive");
        }
        if p.power_divisor <= 0.0 {
            return invalid("physics.power_divisor", "must be positive");
        }

        let b = &self.ball;
        if b.radius <= 0.0 {
            return invalid("ball.radius", "must be positive");
        }
        if b.power_min > b.power_max {
            return invalid("ball.power_min", "must not exceed ball.power_max");
        }
        if b.pin_game_power_min > b.power_max {
            return invalid("ball.pin_game_power_min", "must not exceed ball.power_max");
        }
        if b.aim_min > b.aim_max {
            return invalid("ball.aim_min", "must not exceed ball.aim_max");
        }

        if self.rack.pin_radius <= 0.0 {
            return invalid("rack.pin_radius", "must be positive");
        }
        if self.rack.spacing <= 0.0 {
            return invalid("rack.spacing", "must be positive");
        }

        let c = &self.collision;
        if c.impulse_min < 0.0 || c.impulse_min > c.impulse_max {
            return invalid("collision.impulse_min", "must be in [0, collision.impulse_max]");
        }

        let a = &self.arena;
        if a.width <= 2.0 * b.radius || a.height <= 2.0 * b.radius {
            return invalid("arena", "must be larger than the ball");
        }
        if b.start_offset < b.radius || b.start_offset > a.height - b.radius {
            return invalid("ball.start_offset", "start spot must lie inside the arena");
        }

        if self.timing.tick_ms == 0 {
            return invalid("timing.tick_ms", "must be positive");
        }
        Ok(())
    }

    /// Ticks needed to cover `ms` at the configured tick rate (rounded up).
    pub fn ticks_for_ms(&self, ms: u32) -> u32 {
        ms.div_ceil(self.timing.tick_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn defaults_match_shared_constants() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.physics.friction, FRICTION);
        assert_eq!(cfg.ball.power_max, POWER_MAX);
        assert_eq!(cfg.timing.tick_ms, TICK_MS);
        assert_eq!(cfg.rack.apex_x, cfg.arena.width / 2.0);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = GameConfig::from_toml_str(
            r#"
            [arena]
            width = 1000.0

            [timing]
            settle_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.arena.width, 1000.0);
        assert_eq!(cfg.arena.height, 600.0);
        assert_eq!(cfg.timing.settle_ms, 0);
        assert_eq!(cfg.timing.tick_ms, TICK_MS);
    }

    #[test]
    fn input_section_sets_hold_timings() {
        let cfg = GameConfig::from_toml_str("[input]\nrepeat_delay_ms = 300\n").unwrap();
        assert_eq!(cfg.input.repeat_delay_ms, 300);
        assert_eq!(cfg.input.hold_timeout_ms, 120);
        assert!(GameConfig::default().input.repeat_delay_ms > cfg.input.hold_timeout_ms);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
    }

    #[test]
    fn rejects_friction_outside_unit_interval() {
        let err = GameConfig::from_toml_str("[physics]\nfriction = 1.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "physics.friction",
                ..
            }
        ));
    }

    #[test]
    fn rejects_inverted_power_range() {
        let err =
            GameConfig::from_toml_str("[ball]\npower_min = 40\npower_max = 10\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "ball.power_min", .. }));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = GameConfig::from_toml_str("[physics\nfriction = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = GameConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }

    #[test]
    fn ticks_round_up() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.ticks_for_ms(0), 0);
        assert_eq!(cfg.ticks_for_ms(16), 1);
        assert_eq!(cfg.ticks_for_ms(17), 2);
        assert_eq!(cfg.ticks_for_ms(1000), 63);
    }
}
