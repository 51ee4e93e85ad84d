//! Terminal bowling lane (default binary).
//!
//! Ten frames on a physics lane: hold the arrow keys to set power and aim,
//! press space to throw. Scoring follows standard ten-pin rules.

use anyhow::Result;
use clap::Parser;

use tui_bowling::app::{self, LaneScreen};
use tui_bowling::cli::{init_fullscreen_logging, CommonArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Ten-frame bowling on a physics lane")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_fullscreen_logging(&args.common)?;
    let config = args.common.load_config()?;
    let seed = args.common.seed();
    log::info!("lane game starting with seed {seed}");

    let mut screen = LaneScreen::new(config, seed);
    app::run(&mut screen, &config)?;

    let card = screen.game().scorecard();
    log::info!(
        "lane game ended after {} balls with {} points",
        card.throws().len(),
        card.total_score()
    );
    Ok(())
}
