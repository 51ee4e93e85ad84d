//! Text game - ten frames of random pin falls, one prompt per ball.
//!
//! The game never blocks. The driver asks for the current [`TextPhase`], shows the
//! prompt, waits for the player however it likes, then calls
//! [`TextGame::throw_ball`].

use crate::config::GameConfig;
use crate::rng::GameRng;
use crate::scoreboard;
use crate::scoring::{Scorecard, ThrowReport};
use crate::types::{FRAME_COUNT, PINS_PER_RACK};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    FirstThrow,
    SecondThrow,
    /// Tenth frame, first ball after a strike or spare
    BonusThrow,
    /// Tenth frame, third ball after an opening strike
    FinalBonusThrow,
}

impl Prompt {
    pub fn text(&self) -> &'static str {
        match self {
            Prompt::FirstThrow => "Press Enter to throw the ball...",
            Prompt::SecondThrow => "Press Enter for your second throw...",
            Prompt::BonusThrow => "Bonus throw! Press Enter...",
            Prompt::FinalBonusThrow => "Final bonus throw! Press Enter...",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPhase {
    AwaitingThrow(Prompt),
    GameOver,
}

#[derive(Debug, Clone)]
pub struct TextGame {
    config: GameConfig,
    rng: GameRng,
    card: Scorecard,
}

impl TextGame {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: GameRng::new(seed),
            card: Scorecard::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scorecard(&self) -> &Scorecard {
        &self.card
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn game_over(&self) -> bool {
        self.card.is_complete()
    }

    /// 1-based frame number for display, `None` once the game is over.
    pub fn frame_number(&self) -> Option<usize> {
        self.card.current_frame().map(|f| f + 1)
    }

    pub fn phase(&self) -> TextPhase {
        let Some(frame) = self.card.current_frame() else {
            return TextPhase::GameOver;
        };
        let bowled = self.card.throws_in_frame(frame);
        let prompt = match (frame == FRAME_COUNT - 1, bowled) {
            (_, []) => Prompt::FirstThrow,
            (true, [PINS_PER_RACK]) => Prompt::BonusThrow,
            (_, [_]) => Prompt::SecondThrow,
            (true, [PINS_PER_RACK, _]) => Prompt::FinalBonusThrow,
            _ => Prompt::BonusThrow,
        };
        TextPhase::AwaitingThrow(prompt)
    }

    /// Bowl one ball: a uniformly random number of the standing pins fall.
    pub fn throw_ball(&mut self) -> Option<ThrowReport> {
        if self.game_over() {
            return None;
        }
        let standing = self.card.pins_standing();
        let pins = self.rng.pins(standing);
        match self.card.record_delivery(pins) {
            Ok(report) => {
                log::debug!(
                    "frame {} ball {}: {pins} of {standing} pins",
                    report.frame + 1,
                    report.index + 1
                );
                if report.frame_complete {
                    log::info!(
                        "frame {} complete, total {}",
                        report.frame + 1,
                        self.card.total_score()
                    );
                }
                Some(report)
            }
            Err(err) => {
                log::warn!("throw not recorded: {err}");
                None
            }
        }
    }

    pub fn scoreboard(&self) -> String {
        scoreboard::render(&self.card)
    }

    pub fn verdict(&self) -> &'static str {
        scoreboard::verdict(self.card.total_score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(throws: &[u8]) -> TextGame {
        let mut game = TextGame::new(GameConfig::default(), 1);
        game.card = Scorecard::from_throws(throws).unwrap();
        game
    }

    #[test]
    fn prompts_follow_the_frame() {
        assert_eq!(
            game_with(&[]).phase(),
            TextPhase::AwaitingThrow(Prompt::FirstThrow)
        );
        assert_eq!(
            game_with(&[4]).phase(),
            TextPhase::AwaitingThrow(Prompt::SecondThrow)
        );
        assert_eq!(
            game_with(&[10]).phase(),
            TextPhase::AwaitingThrow(Prompt::FirstThrow)
        );
    }

    #[test]
    fn tenth_frame_bonus_prompts() {
        let nine_open = [0u8; 18];

        let mut throws = nine_open.to_vec();
        throws.push(10);
        assert_eq!(
            game_with(&throws).phase(),
            TextPhase::AwaitingThrow(Prompt::BonusThrow)
        );
        throws.push(3);
        assert_eq!(
            game_with(&throws).phase(),
            TextPhase::AwaitingThrow(Prompt::FinalBonusThrow)
        );

        let mut throws = nine_open.to_vec();
        throws.extend([6, 4]);
        assert_eq!(
            game_with(&throws).phase(),
            TextPhase::AwaitingThrow(Prompt::BonusThrow)
        );

        let mut throws = nine_open.to_vec();
        throws.push(6);
        assert_eq!(
            game_with(&throws).phase(),
            TextPhase::AwaitingThrow(Prompt::SecondThrow)
        );
        throws.push(3);
        assert_eq!(game_with(&throws).phase(), TextPhase::GameOver);
    }

    #[test]
    fn full_game_terminates_within_limits() {
        for seed in 0..50 {
            let mut game = TextGame::new(GameConfig::default(), seed);
            let mut balls = 0;
            while let Some(report) = game.throw_ball() {
                assert!(report.pins <= 10);
                balls += 1;
            }
            assert!(game.game_over());
            assert!((11..=21).contains(&balls), "seed {seed}: {balls} balls");
            assert!(game.scorecard().total_score() <= 300);
            assert_eq!(game.phase(), TextPhase::GameOver);
        }
    }

    #[test]
    fn same_seed_same_game() {
        let play = |seed| {
            let mut game = TextGame::new(GameConfig::default(), seed);
            while game.throw_ball().is_some() {}
            game.scorecard().throws().to_vec()
        };
        assert_eq!(play(77), play(77));
    }

    #[test]
    fn throw_after_game_over_is_none() {
        let mut game = game_with(&[0; 20]);
        assert!(game.game_over());
        assert_eq!(game.throw_ball(), None);
        assert_eq!(game.frame_number(), None);
        assert_eq!(game.verdict(), "Nice try! Better luck next time!");
    }

    #[test]
    fn scoreboard_shows_total() {
        let game = game_with(&[10; 12]);
        assert!(game.scoreboard().contains("Total Score: 300"));
        assert_eq!(game.verdict(), "Amazing game! You're a bowling pro!");
    }
}
