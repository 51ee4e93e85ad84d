//! Pin free-play: knock the rack down as often as you like.
//!
//! No frames and no game over. The ball comes back wherever it stops, every
//! pin is worth a point, and a cleared rack is set up again after a short pause.

use anyhow::Result;
use clap::Parser;

use tui_bowling::app::{self, PinScreen};
use tui_bowling::cli::{init_fullscreen_logging, CommonArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Endless pin knocking with a bouncing ball")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_fullscreen_logging(&args.common)?;
    let config = args.common.load_config()?;
    let seed = args.common.seed();
    log::info!("pin game starting with seed {seed}");

    let mut screen = PinScreen::new(config, seed);
    app::run(&mut screen, &config)?;

    let game = screen.game();
    log::info!(
        "pin game ended: {} points from {} throws, {} racks cleared",
        game.score(),
        game.throws(),
        game.racks_cleared()
    );
    Ok(())
}
