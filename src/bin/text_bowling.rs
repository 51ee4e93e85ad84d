//! Console bowling: press Enter for each ball and watch the scoreboard fill in.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use tui_bowling::cli::{init_logging, CommonArgs};
use tui_bowling::core::{TextGame, TextPhase};

#[derive(Parser, Debug)]
#[command(author, version, about = "Ten frames of console bowling with random pin falls")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
    /// Bowl every ball without waiting for Enter (and without pauses)
    #[arg(long)]
    auto: bool,
    /// Print the final scorecard as JSON after the game
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.common.log_file.as_deref(), "warn")?;
    let config = args.common.load_config()?;
    let mut game = TextGame::new(config, args.common.seed());
    log::info!("text game starting with seed {}", game.seed());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut input = stdin.lock();
    let mut auto = args.auto;
    let frame_pause = Duration::from_millis(u64::from(config.timing.frame_pause_ms));

    println!("Welcome to Terminal Bowling!");
    println!("Press Enter to begin...");
    if !auto {
        auto = !wait_for_enter(&mut input)?;
    }

    while let TextPhase::AwaitingThrow(prompt) = game.phase() {
        clear_screen(&mut stdout, auto)?;
        print!("{}", game.scoreboard());
        if let Some(frame) = game.frame_number() {
            println!("\nFrame {frame}");
        }
        println!("{}", prompt.text());
        stdout.flush()?;

        if !auto {
            auto = !wait_for_enter(&mut input)?;
        }
        let Some(report) = game.throw_ball() else {
            break;
        };

        println!("You knocked down {} pins!", report.pins);
        if let Some(callout) = report.mark.callout() {
            println!("{callout}");
        }
        if report.frame_complete && !auto {
            thread::sleep(frame_pause);
        }
    }

    clear_screen(&mut stdout, auto)?;
    print!("{}", game.scoreboard());
    println!("\nGame Over!");
    println!("Your final score is: {}", game.scorecard().total_score());
    println!("{}", game.verdict());

    if args.json {
        let summary = game.scorecard().summary();
        let json = serde_json::to_string_pretty(&summary).context("encoding scorecard")?;
        println!("{json}");
    }
    Ok(())
}

/// Block until a line arrives. Returns false once stdin is closed.
fn wait_for_enter(input: &mut impl BufRead) -> Result<bool> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading stdin")?;
    if read == 0 {
        log::warn!("stdin closed; bowling the remaining balls automatically");
        return Ok(false);
    }
    Ok(true)
}

/// Auto mode keeps output scrollable so it can be piped.
fn clear_screen(out: &mut impl Write, auto: bool) -> Result<()> {
    if auto {
        println!();
        return Ok(());
    }
    execute!(out, Clear(ClearType::All), MoveTo(0, 0)).context("clearing screen")?;
    Ok(())
}
