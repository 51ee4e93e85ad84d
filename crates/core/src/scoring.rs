//! Scoring module - ten-pin bowling frame scoring
//!
//! A [`Scorecard`] stores nothing but the chronological throw sequence. Every
//! frame property is re-derived from that sequence when asked for:
//!
//! - a frame's first throw is found by walking the earlier frames from the start,
//!   counting one throw per strike frame and two per any other frame;
//! - strike: 10 + the next two throws;
//! - spare: 10 + the next throw;
//! - open frame: the sum of its two throws.
//!
//! Lookahead throws that have not been bowled yet simply do not count, so a frame
//! reports a partial score until it is resolved. Nothing is cached; every query
//! walks the sequence again.
//!
//! # Tenth frame
//!
//! A strike or spare in the tenth frame earns bonus throws, bowled at a fresh rack.
//! After a strike the rack is reset before the first bonus throw, and reset again
//! if that bonus throw is itself a strike.

use arrayvec::{ArrayString, ArrayVec};
use serde::Serialize;
use thiserror::Error;

use crate::types::{FRAME_COUNT, MAX_THROWS, PINS_PER_RACK};

const LAST_FRAME: usize = FRAME_COUNT - 1;
const ALL: u8 = PINS_PER_RACK;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("game is complete; no more throws can be recorded")]
    GameComplete,
    #[error("{pins} pins knocked down but only {standing} standing")]
    TooManyPins { pins: u8, standing: u8 },
}

/// How a single delivery finished its rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Every pin of a fresh rack on one ball
    Strike,
    /// The pins left by the previous ball, all cleared
    Spare,
    Open,
}

impl Mark {
    /// Classify a delivery from the pins standing before it and the pins it knocked down.
    pub fn classify(standing_before: u8, pins: u8) -> Self {
        if pins == standing_before && pins > 0 {
            if standing_before == ALL {
                Mark::Strike
            } else {
                Mark::Spare
            }
        } else {
            Mark::Open
        }
    }

    pub fn callout(&self) -> Option<&'static str> {
        match self {
            Mark::Strike => Some("STRIKE!"),
            Mark::Spare => Some("SPARE!"),
            Mark::Open => None,
        }
    }
}

/// Result of recording one delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrowReport {
    /// Index in the throw sequence
    pub index: usize,
    /// Zero-based frame the delivery belongs to
    pub frame: usize,
    pub pins: u8,
    pub mark: Mark,
    /// The delivery finished its frame
    pub frame_complete: bool,
}

/// Serializable end-of-game (or mid-game) summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub throws: Vec<u8>,
    pub frame_scores: [u32; FRAME_COUNT],
    pub total: u32,
    pub complete: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scorecard {
    throws: ArrayVec<u8, MAX_THROWS>,
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scorecard by recording every throw in order.
    pub fn from_throws(throws: &[u8]) -> Result<Self, ScoreError> {
        let mut card = Self::new();
        for &pins in throws {
            card.record_throw(pins)?;
        }
        Ok(card)
    }

    pub fn throws(&self) -> &[u8] {
        &self.throws
    }

    fn throw_at(&self, index: usize) -> Option<u32> {
        self.throws.get(index).map(|&p| p as u32)
    }

    /// Append a delivery and return its index in the throw sequence.
    pub fn record_throw(&mut self, pins: u8) -> Result<usize, ScoreError> {
        if self.is_complete() {
            return Err(ScoreError::GameComplete);
        }
        let standing = self.pins_standing();
        if pins > standing {
            return Err(ScoreError::TooManyPins { pins, standing });
        }
        self.throws
            .try_push(pins)
            .map_err(|_| ScoreError::GameComplete)?;
        Ok(self.throws.len() - 1)
    }

    /// Record a delivery and describe what it did.
    pub fn record_delivery(&mut self, pins: u8) -> Result<ThrowReport, ScoreError> {
        let frame = self.current_frame().ok_or(ScoreError::GameComplete)?;
        let standing_before = self.pins_standing();
        let index = self.record_throw(pins)?;
        Ok(ThrowReport {
            index,
            frame,
            pins,
            mark: Mark::classify(standing_before, pins),
            frame_complete: self.current_frame() != Some(frame),
        })
    }

    /// Index of the frame's first throw in the sequence.
    ///
    /// The index may point past the end of the sequence for frames not yet started.
    pub fn frame_start(&self, frame: usize) -> usize {
        let mut index = 0;
        for _ in 0..frame.min(FRAME_COUNT) {
            index += if self.throws.get(index) == Some(&ALL) {
                1
            } else {
                2
            };
        }
        index
    }

    pub fn is_strike(&self, frame: usize) -> bool {
        frame < FRAME_COUNT && self.throw_at(self.frame_start(frame)) == Some(ALL as u32)
    }

    pub fn is_spare(&self, frame: usize) -> bool {
        if frame >= FRAME_COUNT {
            return false;
        }
        let start = self.frame_start(frame);
        match (self.throw_at(start), self.throw_at(start + 1)) {
            (Some(first), Some(second)) => first != ALL as u32 && first + second == ALL as u32,
            _ => false,
        }
    }

    /// Score of a single frame, partial while lookahead throws are missing.
    pub fn frame_score(&self, frame: usize) -> u32 {
        if frame >= FRAME_COUNT {
            return 0;
        }
        let start = self.frame_start(frame);
        let at = |i: usize| self.throw_at(i).unwrap_or(0);

        if self.is_strike(frame) {
            ALL as u32 + at(start + 1) + at(start + 2)
        } else if self.is_spare(frame) {
            ALL as u32 + at(start + 2)
        } else {
            at(start) + at(start + 1)
        }
    }

    /// Whether every throw this frame's score depends on has been bowled.
    pub fn frame_resolved(&self, frame: usize) -> bool {
        if frame >= FRAME_COUNT {
            return false;
        }
        let start = self.frame_start(frame);
        let needed = if self.is_strike(frame) || self.is_spare(frame) {
            start + 2
        } else {
            start + 1
        };
        needed < self.throws.len()
    }

    /// Sum of all ten frame scores, recomputed from scratch.
    pub fn total_score(&self) -> u32 {
        (0..FRAME_COUNT).map(|f| self.frame_score(f)).sum()
    }

    /// Cumulative score through each frame, `None` from the first unresolved frame on.
    pub fn running_totals(&self) -> [Option<u32>; FRAME_COUNT] {
        let mut out = [None; FRAME_COUNT];
        let mut total = 0u32;
        for (frame, slot) in out.iter_mut().enumerate() {
            if !self.frame_resolved(frame) {
                break;
            }
            total += self.frame_score(frame);
            *slot = Some(total);
        }
        out
    }

    /// Throws that can belong to a frame at most (tenth frame: three after a strike/spare).
    fn frame_capacity(&self, frame: usize) -> usize {
        if frame < LAST_FRAME {
            if self.is_strike(frame) {
                1
            } else {
                2
            }
        } else if self.is_strike(frame) || self.is_spare(frame) {
            3
        } else {
            2
        }
    }

    /// Throws already bowled in a frame.
    pub fn throws_in_frame(&self, frame: usize) -> &[u8] {
        if frame >= FRAME_COUNT {
            return &[];
        }
        let len = self.throws.len();
        let start = self.frame_start(frame).min(len);
        let end = (start + self.frame_capacity(frame)).min(len);
        &self.throws[start..end]
    }

    fn frame_finished(&self, frame: usize) -> bool {
        self.throws_in_frame(frame).len() == self.frame_capacity(frame)
    }

    /// Zero-based frame that receives the next throw, `None` once the game is over.
    pub fn current_frame(&self) -> Option<usize> {
        (0..FRAME_COUNT).find(|&f| !self.frame_finished(f))
    }

    pub fn is_complete(&self) -> bool {
        self.current_frame().is_none()
    }

    /// Pins standing for the next delivery (0 once the game is over).
    pub fn pins_standing(&self) -> u8 {
        let Some(frame) = self.current_frame() else {
            return 0;
        };
        let bowled = self.throws_in_frame(frame);
        if frame < LAST_FRAME {
            return match bowled {
                [] => ALL,
                [first] => ALL - first,
                _ => 0,
            };
        }
        match *bowled {
            [] | [ALL] | [ALL, ALL] => ALL,
            [first] => ALL - first,
            [ALL, second] => ALL - second,
            [first, second] if first + second == ALL => ALL,
            _ => 0,
        }
    }

    /// Standard notation for a frame: `X` strike, `/` spare, `-` miss, digits otherwise.
    ///
    /// ```
    /// use tui_bowling_core::Scorecard;
    ///
    /// let card = Scorecard::from_throws(&[10, 7, 3, 9, 0]).unwrap();
    /// assert_eq!(card.frame_marks(0).as_str(), "X");
    /// assert_eq!(card.frame_marks(1).as_str(), "7/");
    /// assert_eq!(card.frame_marks(2).as_str(), "9-");
    /// assert_eq!(card.frame_marks(3).as_str(), "");
    /// ```
    pub fn frame_marks(&self, frame: usize) -> ArrayString<3> {
        let mut out = ArrayString::new();
        let mut rack_first: Option<u8> = None;
        for &pins in self.throws_in_frame(frame) {
            match rack_first {
                None if pins == ALL => out.push('X'),
                None => {
                    out.push(digit_mark(pins));
                    rack_first = Some(pins);
                }
                Some(first) => {
                    out.push(if first + pins == ALL {
                        '/'
                    } else {
                        digit_mark(pins)
                    });
                    rack_first = None;
                }
            }
        }
        out
    }

    pub fn summary(&self) -> ScoreSummary {
        let mut frame_scores = [0u32; FRAME_COUNT];
        for (frame, score) in frame_scores.iter_mut().enumerate() {
            *score = self.frame_score(frame);
        }
        ScoreSummary {
            throws: self.throws.to_vec(),
            frame_scores,
            total: self.total_score(),
            complete: self.is_complete(),
        }
    }
}

fn digit_mark(pins: u8) -> char {
    if pins == 0 {
        '-'
    } else {
        char::from_digit(pins as u32, 10).unwrap_or('?')
    }
}
