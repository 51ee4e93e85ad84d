//! Held-control tracker for terminal environments.
//!
//! Power and aim act on every tick while their key is held. Many terminals never
//! send key release events, so a control also lets go on its own once no press or
//! repeat event has refreshed it for a while. Until the first repeat event arrives
//! that window is `repeat_delay_ms`, which covers the OS delay before auto-repeat
//! starts; after that it shrinks to `key_release_timeout_ms`. As soon as one real
//! release event arrives the timeouts are no longer needed and are switched off.

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::map::control_for;
use crate::types::{Control, GameAction, TICK_MS};

const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 120;
const DEFAULT_REPEAT_DELAY_MS: u32 = 500;

#[derive(Debug, Clone, Copy)]
struct Hold {
    /// Milliseconds since the last press or repeat.
    age_ms: u32,
    repeating: bool,
}

impl Hold {
    const PRESSED: Hold = Hold {
        age_ms: 0,
        repeating: false,
    };
}

#[derive(Debug, Clone)]
pub struct InputHandler {
    held: [Option<Hold>; 4],
    key_release_timeout_ms: u32,
    repeat_delay_ms: u32,
    release_events_seen: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: [None; 4],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            repeat_delay_ms: DEFAULT_REPEAT_DELAY_MS,
            release_events_seen: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms.max(TICK_MS);
        self
    }

    pub fn with_repeat_delay_ms(mut self, delay_ms: u32) -> Self {
        self.repeat_delay_ms = delay_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn repeat_delay_ms(&self) -> u32 {
        self.repeat_delay_ms
    }

    /// Returns the control that became held, if the key is a steering key that was not already held.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Control> {
        let control = control_for(code)?;
        let slot = &mut self.held[control.index()];
        let fresh = slot.is_none();
        *slot = Some(Hold::PRESSED);
        fresh.then_some(control)
    }

    /// Terminal auto-repeat keeps a control held.
    pub fn handle_key_repeat(&mut self, code: KeyCode) {
        if let Some(control) = control_for(code) {
            self.held[control.index()] = Some(Hold {
                age_ms: 0,
                repeating: true,
            });
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        self.release_events_seen = true;
        if let Some(control) = control_for(code) {
            self.held[control.index()] = None;
        }
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held[control.index()].is_some()
    }

    /// Age held controls by `elapsed_ms` and return one action per control still held.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 4> {
        let mut actions = ArrayVec::new();
        for control in Control::ALL {
            let slot = &mut self.held[control.index()];
            let Some(hold) = slot.as_mut() else {
                continue;
            };
            hold.age_ms = hold.age_ms.saturating_add(elapsed_ms);
            let limit = if hold.repeating {
                self.key_release_timeout_ms
            } else {
                self.repeat_delay_ms.max(self.key_release_timeout_ms)
            };
            if !self.release_events_seen && hold.age_ms > limit {
                *slot = None;
                continue;
            }
            actions.push(control.action());
        }
        actions
    }

    pub fn reset(&mut self) {
        self.held = [None; 4];
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_control_acts_every_tick() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key_press(KeyCode::Up), Some(Control::PowerUp));

        assert_eq!(ih.update(16).as_slice(), &[GameAction::PowerUp]);
        assert_eq!(ih.update(16).as_slice(), &[GameAction::PowerUp]);
    }

    #[test]
    fn test_second_press_is_not_fresh() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key_press(KeyCode::Left), Some(Control::AimLeft));
        assert_eq!(ih.handle_key_press(KeyCode::Left), None);
        assert_eq!(ih.handle_key_press(KeyCode::Char(' ')), None);
    }

    #[test]
    fn test_auto_release_after_timeout_without_release_events() {
        let mut ih = InputHandler::new()
            .with_key_release_timeout_ms(50)
            .with_repeat_delay_ms(0);
        ih.handle_key_press(KeyCode::Left);

        assert_eq!(ih.update(48).as_slice(), &[GameAction::AimLeft]);
        // 51ms since the press: let go.
        assert!(ih.update(3).is_empty());
        assert!(!ih.is_held(Control::AimLeft));
    }

    #[test]
    fn test_repeat_events_keep_control_held() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Right);
        for _ in 0..10 {
            assert_eq!(ih.update(40).as_slice(), &[GameAction::AimRight]);
            ih.handle_key_repeat(KeyCode::Right);
        }
        assert!(ih.is_held(Control::AimRight));
    }

    #[test]
    fn test_press_outlasts_os_repeat_delay() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Up);
        // No repeat yet: ~400ms of ticks still act.
        for _ in 0..25 {
            assert_eq!(ih.update(16).as_slice(), &[GameAction::PowerUp]);
        }
        ih.handle_key_repeat(KeyCode::Up);
        assert_eq!(ih.update(16).as_slice(), &[GameAction::PowerUp]);
    }

    #[test]
    fn test_repeating_key_releases_after_short_timeout() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Left);
        ih.handle_key_repeat(KeyCode::Left);
        assert_eq!(ih.update(48).as_slice(), &[GameAction::AimLeft]);
        assert!(ih.update(16).is_empty());
    }

    #[test]
    fn test_unrepeated_press_releases_after_repeat_delay() {
        let mut ih = InputHandler::new()
            .with_key_release_timeout_ms(50)
            .with_repeat_delay_ms(200);
        ih.handle_key_press(KeyCode::Down);
        assert_eq!(ih.update(200).as_slice(), &[GameAction::PowerDown]);
        assert!(ih.update(1).is_empty());
    }

    #[test]
    fn test_release_event_disables_timeout() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Up);
        ih.handle_key_release(KeyCode::Up);
        assert!(ih.update(16).is_empty());

        ih.handle_key_press(KeyCode::Down);
        assert_eq!(ih.update(500).as_slice(), &[GameAction::PowerDown]);
        assert_eq!(ih.update(500).as_slice(), &[GameAction::PowerDown]);
        ih.handle_key_release(KeyCode::Down);
        assert!(ih.update(16).is_empty());
    }

    #[test]
    fn test_controls_combine_in_fixed_order() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Right);
        ih.handle_key_press(KeyCode::Up);
        assert_eq!(
            ih.update(16).as_slice(),
            &[GameAction::PowerUp, GameAction::AimRight]
        );
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(10_000);
        ih.handle_key_press(KeyCode::Up);
        ih.reset();
        assert!(ih.update(16).is_empty());
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        let ih = InputHandler::new();
        assert!(ih.key_release_timeout_ms() > 0);
    }
}
