//! Command-line options and process setup shared by the binaries.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Args;

use crate::core::GameConfig;

/// Options every binary accepts.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Seed for the random number generator (default: system clock)
    #[arg(long)]
    pub seed: Option<u64>,
    /// TOML file overriding the built-in game settings
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Write log output to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl CommonArgs {
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }

    pub fn load_config(&self) -> Result<GameConfig> {
        match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading config {}", path.display())),
            None => Ok(GameConfig::default()),
        }
    }
}

pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

/// Set up `env_logger`. `RUST_LOG` wins over `default_filter`.
///
/// With a `log_file` all output goes there, which keeps full-screen games readable.
pub fn init_logging(log_file: Option<&Path>, default_filter: &str) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init().context("initialising logger")?;
    Ok(())
}

/// Logging for a binary that takes over the terminal: silent unless a log file is given.
pub fn init_fullscreen_logging(args: &CommonArgs) -> Result<()> {
    match &args.log_file {
        Some(path) => init_logging(Some(path), "info"),
        None => init_logging(None, "off"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        common: CommonArgs,
    }

    #[test]
    fn parses_common_flags() {
        let cli = TestCli::parse_from(["bin", "--seed", "42", "--config", "game.toml"]);
        assert_eq!(cli.common.seed(), 42);
        assert_eq!(cli.common.config.as_deref(), Some(Path::new("game.toml")));
        assert!(cli.common.log_file.is_none());
    }

    #[test]
    fn missing_config_uses_defaults() {
        let args = CommonArgs::default();
        assert_eq!(args.load_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn bad_config_path_is_reported() {
        let args = CommonArgs {
            config: Some(PathBuf::from("/no/such/bowling.toml")),
            ..CommonArgs::default()
        };
        let err = args.load_config().unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/bowling.toml"));
    }
}
